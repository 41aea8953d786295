//! Axum route handlers for the Job API.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::RecruiterCaller;
use crate::errors::AppError;
use crate::jobs::validation::PostJobRequest;
use crate::models::job::{JobDetail, JobListing, JobRow};
use crate::response::Envelope;
use crate::state::AppState;
use crate::store::StoreError;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobPayload<T> {
    pub job: T,
}

#[derive(Debug, Serialize)]
pub struct JobsPayload {
    pub jobs: Vec<JobListing>,
}

/// POST /api/v1/job
///
/// Creates a job owned by the calling recruiter. All fields are required.
pub async fn handle_post_job(
    State(state): State<AppState>,
    RecruiterCaller(caller_id): RecruiterCaller,
    payload: Result<Json<PostJobRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<JobPayload<JobRow>>>), AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let new_job = request.validate(caller_id)?;

    let job = state
        .store
        .create_job(new_job)
        .await
        .map_err(|e| match e {
            StoreError::UnknownCompany => AppError::Validation("Company not found.".to_string()),
            other => AppError::internal("Error creating job")(other),
        })?;

    info!("Job {} created by {}", job.id, caller_id);

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok_with_message(
            "New job created successfully.",
            JobPayload { job },
        )),
    ))
}

/// GET /api/v1/job?keyword=
///
/// Case-insensitive substring search over title and description, newest first.
pub async fn handle_get_all_jobs(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Envelope<JobsPayload>>, AppError> {
    let keyword = params.keyword.unwrap_or_default();
    let jobs = state
        .store
        .search_jobs(&keyword)
        .await
        .map_err(AppError::internal("Error fetching jobs"))?;

    Ok(Json(Envelope::ok(JobsPayload { jobs })))
}

/// GET /api/v1/job/:id
///
/// A malformed id is reported the same way as an unknown one.
pub async fn handle_get_job_by_id(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Envelope<JobPayload<JobDetail>>>, AppError> {
    let not_found = || AppError::NotFound("Job not found.".to_string());
    let job_id = Uuid::parse_str(&job_id).map_err(|_| not_found())?;

    let job = state
        .store
        .find_job(job_id)
        .await
        .map_err(AppError::internal("Error fetching job details"))?
        .ok_or_else(not_found)?;

    Ok(Json(Envelope::ok(JobPayload { job })))
}

/// GET /api/v1/job/admin
///
/// Jobs posted by the calling recruiter, newest first.
pub async fn handle_get_admin_jobs(
    State(state): State<AppState>,
    RecruiterCaller(caller_id): RecruiterCaller,
) -> Result<Json<Envelope<JobsPayload>>, AppError> {
    let jobs = state
        .store
        .jobs_created_by(caller_id)
        .await
        .map_err(AppError::internal("Error fetching admin jobs"))?;

    Ok(Json(Envelope::ok(JobsPayload { jobs })))
}
