use anyhow::{Context, Result};
use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name of the cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Sessions last one day.
pub const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub exp: i64,
}

pub fn issue_token(user_id: Uuid, secret: &str) -> Result<String> {
    let claims = Claims {
        user_id,
        exp: Utc::now().timestamp() + SESSION_TTL_SECS,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("failed to sign session token")
}

/// Returns the user id bound to a valid, unexpired token.
pub fn verify_token(token: &str, secret: &str) -> Option<Uuid> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims.user_id)
    .ok()
}

pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .max_age(time::Duration::seconds(SESSION_TTL_SECS))
        .build()
}

/// An expired, empty session cookie. Added to the jar unconditionally so the
/// browser drops its token even when the request carried none.
pub fn cleared_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::build((TOKEN_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .build();
    cookie.make_removal();
    cookie
}
