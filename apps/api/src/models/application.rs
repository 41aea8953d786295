use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::job::JobListing;
use crate::models::user::{Applicant, UserRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub applicant_id: Uuid,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

/// An application as listed on its job, with the applicant attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: Uuid,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub applicant: Applicant,
}

/// An application as listed for its applicant, with the job attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedJob {
    pub id: Uuid,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub job: JobListing,
}

/// `applications JOIN users`, application columns aliased.
#[derive(Debug, FromRow)]
pub struct ApplicantApplicationRow {
    pub application_id: Uuid,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub applicant: UserRow,
}

impl From<ApplicantApplicationRow> for JobApplication {
    fn from(row: ApplicantApplicationRow) -> Self {
        Self {
            id: row.application_id,
            status: row.status,
            created_at: row.applied_at,
            applicant: row.applicant.applicant(),
        }
    }
}

/// `applications JOIN jobs JOIN companies`, application columns aliased.
#[derive(Debug, FromRow)]
pub struct AppliedJobRow {
    pub application_id: Uuid,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub job: JobListing,
}

impl From<AppliedJobRow> for AppliedJob {
    fn from(row: AppliedJobRow) -> Self {
        Self {
            id: row.application_id,
            status: row.status,
            created_at: row.applied_at,
            job: row.job,
        }
    }
}
