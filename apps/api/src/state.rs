use std::sync::Arc;

use crate::config::Config;
use crate::store::JobBoardStore;
use crate::upload::MediaHost;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend. Production: `PgStore`.
    pub store: Arc<dyn JobBoardStore>,
    /// Where uploaded avatars and resumes end up. Production: `S3MediaHost`.
    pub media: Arc<dyn MediaHost>,
    pub config: Config,
}
