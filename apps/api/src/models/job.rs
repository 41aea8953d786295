use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::application::JobApplication;
use crate::models::company::CompanySummary;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub salary: f64,
    pub location: String,
    pub job_type: String,
    pub experience_level: String,
    pub position: i32,
    pub company_id: Uuid,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated job ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub salary: f64,
    pub location: String,
    pub job_type: String,
    pub experience_level: String,
    pub position: i32,
    pub company_id: Uuid,
    pub created_by: Uuid,
}

/// A job with its company's public fields attached.
///
/// Loaded from `jobs JOIN companies` with the company columns aliased as
/// `company_name`, `company_logo`, `company_location` and `company_website`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub job: JobRow,
    #[sqlx(flatten)]
    pub company: CompanySummary,
}

/// A single job with company and applications attached.
#[derive(Debug, Clone, Serialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub listing: JobListing,
    pub applications: Vec<JobApplication>,
}
