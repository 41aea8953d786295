use crate::models::{AppliedJob, Company, User};

/// Everything the pages render from. Owned by the caller and updated
/// explicitly by loaders and dialogs.
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    /// The signed-in user, if any.
    pub user: Option<User>,
    pub applied_jobs: Vec<AppliedJob>,
    /// The company most recently loaded by id.
    pub company: Option<Company>,
}
