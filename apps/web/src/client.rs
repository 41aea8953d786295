//! Credentialed HTTP client for the job board API.
//!
//! Holds a cookie store, so the `token` cookie set by login is sent on every
//! later request, the way a browser does with `withCredentials`.

use std::time::Duration;

use reqwest::{multipart::Form, Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::ClientError;
use crate::models::{AppliedJob, Company, User};

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApplicationsPayload {
    applications: Vec<AppliedJob>,
}

#[derive(Debug, Deserialize)]
struct CompanyPayload {
    company: Company,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    user: User,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
    role: &'a str,
}

/// A successful envelope: the server's message plus the decoded payload.
#[derive(Debug)]
pub struct Reply<T> {
    pub message: Option<String>,
    pub payload: T,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /api/v1/user/login. On success the session cookie is kept for later calls.
    pub async fn login(&self, email: &str, password: &str, role: &str) -> Result<User, ClientError> {
        let response = self
            .client
            .post(self.url("/api/v1/user/login"))
            .json(&LoginRequest {
                email,
                password,
                role,
            })
            .send()
            .await?;
        let reply: Reply<UserPayload> = read_envelope(response).await?;
        Ok(reply.payload.user)
    }

    /// GET /api/v1/user/logout
    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.client.get(self.url("/api/v1/user/logout")).send().await?;
        read_envelope::<Value>(response).await.map(|_| ())
    }

    /// GET /api/v1/application/get
    pub async fn get_applied_jobs(&self) -> Result<Vec<AppliedJob>, ClientError> {
        let response = self
            .client
            .get(self.url("/api/v1/application/get"))
            .send()
            .await?;
        let reply: Reply<ApplicationsPayload> = read_envelope(response).await?;
        Ok(reply.payload.applications)
    }

    /// GET /api/v1/company/get/:id
    pub async fn get_company(&self, company_id: &str) -> Result<Company, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/api/v1/company/get/{company_id}")))
            .send()
            .await?;
        let reply: Reply<CompanyPayload> = read_envelope(response).await?;
        Ok(reply.payload.company)
    }

    /// POST /api/v1/user/profile/update (multipart). Returns the updated user
    /// and the server's confirmation message.
    pub async fn update_profile(&self, form: Form) -> Result<Reply<User>, ClientError> {
        let response = self
            .client
            .post(self.url("/api/v1/user/profile/update"))
            .multipart(form)
            .send()
            .await?;
        let reply: Reply<UserPayload> = read_envelope(response).await?;
        Ok(Reply {
            message: reply.message,
            payload: reply.payload.user,
        })
    }
}

/// Decodes a `{ message?, success, ...payload }` envelope.
async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<Reply<T>, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string());
        debug!("API returned {}: {}", status, message);
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let envelope: Value = serde_json::from_str(&body)?;
    let message = envelope
        .get("message")
        .and_then(Value::as_str)
        .map(String::from);
    if envelope.get("success").and_then(Value::as_bool) != Some(true) {
        return Err(ClientError::Rejected(message.unwrap_or_default()));
    }

    let payload = serde_json::from_value(envelope)?;
    Ok(Reply { message, payload })
}
