use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::Caller;
use crate::errors::AppError;
use crate::models::company::CompanyRow;
use crate::response::Envelope;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CompanyPayload {
    pub company: CompanyRow,
}

/// GET /api/v1/company/get/:id
pub async fn handle_get_company_by_id(
    State(state): State<AppState>,
    Caller(_): Caller,
    Path(company_id): Path<String>,
) -> Result<Json<Envelope<CompanyPayload>>, AppError> {
    let not_found = || AppError::NotFound("Company not found.".to_string());
    let company_id = Uuid::parse_str(&company_id).map_err(|_| not_found())?;

    let company = state
        .store
        .find_company(company_id)
        .await
        .map_err(AppError::internal("Error fetching company"))?
        .ok_or_else(not_found)?;

    Ok(Json(Envelope::ok(CompanyPayload { company })))
}
