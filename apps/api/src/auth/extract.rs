use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::auth::session::{verify_token, TOKEN_COOKIE};
use crate::errors::{AppError, SERVER_ERROR};
use crate::models::user::Role;
use crate::state::AppState;

/// The authenticated caller, resolved from the session cookie.
/// Rejects with 401 when the cookie is absent or its token is invalid.
#[derive(Debug, Clone, Copy)]
pub struct Caller(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(TOKEN_COOKIE)
            .map(|c| c.value())
            .filter(|v| !v.is_empty())
            .ok_or(AppError::Unauthenticated)?;

        match verify_token(token, &state.config.secret_key) {
            Some(user_id) => Ok(Caller(user_id)),
            None => {
                tracing::warn!("invalid session token, authentication denied");
                Err(AppError::Unauthenticated)
            }
        }
    }
}

/// An authenticated caller whose account has the recruiter role.
/// Rejects with 401 when the account no longer exists and 403 for any other role.
#[derive(Debug, Clone, Copy)]
pub struct RecruiterCaller(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for RecruiterCaller {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Caller(user_id) = Caller::from_request_parts(parts, state).await?;

        let user = state
            .store
            .find_user_by_id(user_id)
            .await
            .map_err(AppError::internal(SERVER_ERROR))?
            .ok_or(AppError::Unauthenticated)?;

        if user.role != Role::Recruiter {
            tracing::warn!("user {} is not a recruiter, access denied", user_id);
            return Err(AppError::Forbidden);
        }

        Ok(RecruiterCaller(user_id))
    }
}
