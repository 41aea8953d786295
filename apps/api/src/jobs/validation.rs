use serde::{Deserialize, Deserializer};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::NewJob;

pub const MISSING_FIELDS: &str = "Something is missing.";

/// Body of `POST /api/v1/job`. Every field is optional at the wire level so
/// that absence is reported as a validation error, not a JSON rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Comma-separated list.
    pub requirements: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub salary: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub experience: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub position: Option<String>,
    pub company_id: Option<String>,
}

/// Form clients send numbers as strings; JSON clients send numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Splits a comma-separated requirements string on commas only. Entries are
/// kept verbatim and in order.
pub fn split_requirements(raw: &str) -> Vec<String> {
    raw.split(',').map(String::from).collect()
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl PostJobRequest {
    /// Checks every required field and builds the job owned by `created_by`.
    pub fn validate(self, created_by: Uuid) -> Result<NewJob, AppError> {
        let (
            Some(title),
            Some(description),
            Some(requirements),
            Some(salary),
            Some(location),
            Some(job_type),
            Some(experience),
            Some(position),
            Some(company_id),
        ) = (
            present(self.title),
            present(self.description),
            present(self.requirements),
            present(self.salary),
            present(self.location),
            present(self.job_type),
            present(self.experience),
            present(self.position),
            present(self.company_id),
        )
        else {
            return Err(AppError::Validation(MISSING_FIELDS.to_string()));
        };

        let salary = salary
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|s| s.is_finite())
            .ok_or_else(|| AppError::Validation("Salary must be a number.".to_string()))?;
        let position = position
            .trim()
            .parse::<i32>()
            .map_err(|_| AppError::Validation("Position must be a whole number.".to_string()))?;
        let company_id = Uuid::parse_str(company_id.trim())
            .map_err(|_| AppError::Validation("Invalid company id.".to_string()))?;

        Ok(NewJob {
            title,
            description,
            requirements: split_requirements(&requirements),
            salary,
            location,
            job_type,
            experience_level: experience,
            position,
            company_id,
            created_by,
        })
    }
}
