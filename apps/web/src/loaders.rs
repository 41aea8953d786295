//! Fetch-and-store loaders. Failures are logged, never surfaced; state is
//! only touched when the server reports success.

use tracing::warn;

use crate::client::ApiClient;
use crate::state::ClientState;

/// Loads the caller's applications into `state.applied_jobs`.
pub async fn load_applied_jobs(client: &ApiClient, state: &mut ClientState) {
    match client.get_applied_jobs().await {
        Ok(applications) => state.applied_jobs = applications,
        Err(e) => warn!("Failed to fetch applied jobs: {e}"),
    }
}

/// Loads a company by id into `state.company`, once per distinct id.
#[derive(Debug, Default)]
pub struct CompanyLoader {
    last_requested: Option<String>,
}

impl CompanyLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, client: &ApiClient, state: &mut ClientState, company_id: &str) {
        if company_id.is_empty() || self.last_requested.as_deref() == Some(company_id) {
            return;
        }
        self.last_requested = Some(company_id.to_string());

        match client.get_company(company_id).await {
            Ok(company) => state.company = Some(company),
            Err(e) => warn!("Failed to fetch company {company_id}: {e}"),
        }
    }
}
