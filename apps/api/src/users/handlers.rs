//! Axum route handlers for the User API.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{cleared_cookie, issue_token, session_cookie};
use crate::auth::Caller;
use crate::errors::{AppError, SERVER_ERROR};
use crate::models::user::{NewUser, Role, UserProjection};
use crate::response::{Empty, Envelope};
use crate::state::AppState;
use crate::store::StoreError;
use crate::upload::{DataUri, MultipartForm, UploadKind};
use crate::users::profile::{apply_upload, ProfileUpdate};

const MISSING_FIELDS: &str = "Something is missing";
const DUPLICATE_EMAIL: &str = "User already exist with this email.";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserPayload {
    pub user: UserProjection,
}

fn duplicate_email() -> AppError {
    AppError::Conflict(DUPLICATE_EMAIL.to_string())
}

/// POST /api/v1/user/register (multipart)
///
/// An optional `file` part becomes the avatar.
pub async fn handle_register(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Envelope<Empty>>), AppError> {
    let form = MultipartForm::read(multipart).await?;

    let (Some(fullname), Some(email), Some(phone_number), Some(password), Some(role)) = (
        form.text("fullname"),
        form.text("email"),
        form.text("phoneNumber"),
        form.text("password"),
        form.text("role"),
    ) else {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    };
    let role: Role = role
        .parse()
        .map_err(|_| AppError::Validation("Invalid role.".to_string()))?;

    let avatar_source = form
        .file
        .as_ref()
        .map(|file| {
            DataUri::from_upload(file)
                .ok_or_else(|| AppError::Validation("Invalid file uploaded".to_string()))
        })
        .transpose()?;

    // Checked before uploading so a duplicate does not leave an orphaned file.
    if state
        .store
        .find_user_by_email(email)
        .await
        .map_err(AppError::internal(SERVER_ERROR))?
        .is_some()
    {
        return Err(duplicate_email());
    }

    let avatar = match avatar_source {
        Some(data_uri) => Some(
            state
                .media
                .upload(&data_uri)
                .await
                .map_err(AppError::internal(SERVER_ERROR))?,
        ),
        None => None,
    };

    let password_hash = hash_password(password)
        .await
        .map_err(AppError::internal(SERVER_ERROR))?;

    let user = state
        .store
        .create_user(NewUser {
            fullname: fullname.to_string(),
            email: email.to_string(),
            phone_number: phone_number.to_string(),
            password_hash,
            role,
            avatar,
        })
        .await
        .map_err(|e| match e {
            StoreError::DuplicateEmail => duplicate_email(),
            other => AppError::internal(SERVER_ERROR)(other),
        })?;

    info!("Registered user {} ({:?})", user.id, user.role);

    Ok((
        StatusCode::CREATED,
        Json(Envelope::message("Account created successfully.")),
    ))
}

/// POST /api/v1/user/login
///
/// Unknown email, wrong password and wrong role are indistinguishable to the client.
pub async fn handle_login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<Envelope<UserPayload>>), AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let present = |v: Option<String>| v.filter(|s| !s.is_empty());
    let (Some(email), Some(password), Some(role)) = (
        present(request.email),
        present(request.password),
        present(request.role),
    ) else {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    };

    let user = state
        .store
        .find_user_by_email(&email)
        .await
        .map_err(AppError::internal(SERVER_ERROR))?
        .ok_or(AppError::InvalidCredentials)?;

    let password_matches = verify_password(&password, &user.password_hash)
        .await
        .map_err(AppError::internal(SERVER_ERROR))?;
    if !password_matches {
        return Err(AppError::InvalidCredentials);
    }

    if role.parse::<Role>().ok() != Some(user.role) {
        return Err(AppError::InvalidCredentials);
    }

    let token = issue_token(user.id, &state.config.secret_key)
        .map_err(AppError::internal(SERVER_ERROR))?;
    let jar = jar.add(session_cookie(token, state.config.is_production()));

    info!("User {} logged in", user.id);

    Ok((
        jar,
        Json(Envelope::ok_with_message(
            format!("Welcome back {}", user.fullname),
            UserPayload {
                user: user.projection(),
            },
        )),
    ))
}

/// POST|GET /api/v1/user/logout
///
/// Always succeeds, with or without a session.
pub async fn handle_logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<Envelope<Empty>>) {
    (
        jar.add(cleared_cookie(state.config.is_production())),
        Json(Envelope::message("Logged out successfully.")),
    )
}

/// POST /api/v1/user/profile/update (multipart)
///
/// Partial update of the caller's profile. An optional `file` part is routed
/// by MIME type: images replace the avatar, PDFs replace the resume, anything
/// else goes to the generic upload slot.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Caller(caller_id): Caller,
    multipart: Multipart,
) -> Result<Json<Envelope<UserPayload>>, AppError> {
    let mut form = MultipartForm::read(multipart).await?;

    let mut user = state
        .store
        .find_user_by_id(caller_id)
        .await
        .map_err(AppError::internal(SERVER_ERROR))?
        .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

    ProfileUpdate::from_form(&form).apply(&mut user);

    // Checked before uploading so a taken email does not leave an orphaned file.
    let email_owner = state
        .store
        .find_user_by_email(&user.email)
        .await
        .map_err(AppError::internal(SERVER_ERROR))?;
    if email_owner.is_some_and(|owner| owner.id != user.id) {
        return Err(duplicate_email());
    }

    if let Some(file) = form.file.take() {
        let data_uri = DataUri::from_upload(&file)
            .ok_or_else(|| AppError::Validation("Invalid file provided".to_string()))?;
        let url = state
            .media
            .upload(&data_uri)
            .await
            .map_err(AppError::internal(SERVER_ERROR))?;
        let kind = UploadKind::classify(file.content_type.as_deref().unwrap_or(data_uri.mime()));
        apply_upload(&mut user, kind, url, file.file_name);
    }

    let user = state.store.update_user(&user).await.map_err(|e| match e {
        StoreError::DuplicateEmail => duplicate_email(),
        other => AppError::internal(SERVER_ERROR)(other),
    })?;

    info!("Updated profile of user {}", user.id);

    Ok(Json(Envelope::ok_with_message(
        "Profile updated successfully.",
        UserPayload {
            user: user.projection(),
        },
    )))
}
