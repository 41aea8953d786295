pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::companies::handlers as companies;
use crate::jobs::handlers as jobs;
use crate::state::AppState;
use crate::users::handlers as users;

/// Largest accepted request body; uploads travel inline.
pub const BODY_LIMIT: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs
        .route(
            "/api/v1/job",
            get(jobs::handle_get_all_jobs).post(jobs::handle_post_job),
        )
        .route("/api/v1/job/admin", get(jobs::handle_get_admin_jobs))
        .route("/api/v1/job/:id", get(jobs::handle_get_job_by_id))
        // Users
        .route("/api/v1/user/register", post(users::handle_register))
        .route("/api/v1/user/login", post(users::handle_login))
        .route(
            "/api/v1/user/logout",
            post(users::handle_logout).get(users::handle_logout),
        )
        .route(
            "/api/v1/user/profile/update",
            post(users::handle_update_profile),
        )
        // Applications
        .route(
            "/api/v1/application/get",
            get(applications::handle_get_applied_jobs),
        )
        // Companies
        .route(
            "/api/v1/company/get/:id",
            get(companies::handle_get_company_by_id),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}
