use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub logo: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The company fields attached to job listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CompanySummary {
    #[sqlx(rename = "company_id")]
    pub id: Uuid,
    #[sqlx(rename = "company_name")]
    pub name: String,
    #[sqlx(rename = "company_logo")]
    pub logo: Option<String>,
    #[sqlx(rename = "company_location")]
    pub location: Option<String>,
    #[sqlx(rename = "company_website")]
    pub website: Option<String>,
}

impl From<&CompanyRow> for CompanySummary {
    fn from(company: &CompanyRow) -> Self {
        Self {
            id: company.id,
            name: company.name.clone(),
            logo: company.logo.clone(),
            location: company.location.clone(),
            website: company.website.clone(),
        }
    }
}
