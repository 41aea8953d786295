//! Persistence for users, companies, jobs and applications.
//!
//! Handlers only talk to `JobBoardStore`; `AppState` carries an
//! `Arc<dyn JobBoardStore>` so the backend is swapped at startup (Postgres) or
//! in tests (in-memory).

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::application::AppliedJob;
use crate::models::company::CompanyRow;
use crate::models::job::{JobDetail, JobListing, JobRow, NewJob};
use crate::models::user::{NewUser, UserRow};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

/// Postgres' default name for the `jobs.company_id` foreign key.
const JOB_COMPANY_FKEY: &str = "jobs_company_id_fkey";

#[derive(Debug, Error)]
pub enum StoreError {
    /// The `users.email` unique constraint rejected a write.
    #[error("email is already registered")]
    DuplicateEmail,

    /// A job referenced a company that does not exist.
    #[error("company does not exist")]
    UnknownCompany,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                return StoreError::DuplicateEmail;
            }
            if db.is_foreign_key_violation() && db.constraint() == Some(JOB_COMPANY_FKEY) {
                return StoreError::UnknownCompany;
            }
        }
        StoreError::Other(err.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait JobBoardStore: Send + Sync {
    async fn create_job(&self, job: NewJob) -> StoreResult<JobRow>;

    /// Jobs whose title or description contains `keyword` (case-insensitive),
    /// newest first. An empty keyword matches every job.
    async fn search_jobs(&self, keyword: &str) -> StoreResult<Vec<JobListing>>;

    async fn find_job(&self, job_id: Uuid) -> StoreResult<Option<JobDetail>>;

    /// Jobs posted by `user_id`, newest first.
    async fn jobs_created_by(&self, user_id: Uuid) -> StoreResult<Vec<JobListing>>;

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserRow>>;

    async fn find_user_by_id(&self, user_id: Uuid) -> StoreResult<Option<UserRow>>;

    async fn create_user(&self, user: NewUser) -> StoreResult<UserRow>;

    /// Persists every mutable user column in one write.
    async fn update_user(&self, user: &UserRow) -> StoreResult<UserRow>;

    /// Applications made by `user_id`, newest first.
    async fn applications_by_applicant(&self, user_id: Uuid) -> StoreResult<Vec<AppliedJob>>;

    async fn find_company(&self, company_id: Uuid) -> StoreResult<Option<CompanyRow>>;
}
