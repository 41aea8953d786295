use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::Caller;
use crate::errors::AppError;
use crate::models::application::AppliedJob;
use crate::response::Envelope;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ApplicationsPayload {
    pub applications: Vec<AppliedJob>,
}

/// GET /api/v1/application/get
///
/// The caller's applications, newest first, each with its job and company.
pub async fn handle_get_applied_jobs(
    State(state): State<AppState>,
    Caller(caller_id): Caller,
) -> Result<Json<Envelope<ApplicationsPayload>>, AppError> {
    let applications = state
        .store
        .applications_by_applicant(caller_id)
        .await
        .map_err(AppError::internal("Error fetching applications"))?;

    Ok(Json(Envelope::ok(ApplicationsPayload { applications })))
}
