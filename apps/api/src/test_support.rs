//! Router-level test harness: in-memory store, recording media host, and
//! request helpers driven through `tower::ServiceExt::oneshot`.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::auth::session::issue_token;
use crate::config::Config;
use crate::models::user::{NewUser, Role, UserRow};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::memory::MemoryStore;
use crate::store::JobBoardStore;
use crate::upload::{DataUri, MediaHost};

const BOUNDARY: &str = "jobboard-test-boundary";

/// Records every upload and answers with a predictable URL.
#[derive(Default)]
pub struct RecordingMediaHost {
    uploads: Mutex<Vec<DataUri>>,
    fail: bool,
}

impl RecordingMediaHost {
    pub fn uploads(&self) -> Vec<DataUri> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaHost for RecordingMediaHost {
    async fn upload(&self, file: &DataUri) -> Result<String> {
        if self.fail {
            anyhow::bail!("media host unavailable");
        }
        let mut uploads = self.uploads.lock().unwrap();
        uploads.push(file.clone());
        Ok(format!(
            "https://media.test/uploads/{}.{}",
            uploads.len(),
            file.extension()
        ))
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        s3_bucket: "uploads".to_string(),
        s3_endpoint: "http://localhost:9000".to_string(),
        s3_region: "us-east-1".to_string(),
        s3_public_url: "https://media.test".to_string(),
        aws_access_key_id: "test".to_string(),
        aws_secret_access_key: "test".to_string(),
        secret_key: "test-secret".to_string(),
        frontend_origin: "http://localhost:5173".to_string(),
        app_env: "test".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }

    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(String::from)
            .collect()
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub media: Arc<RecordingMediaHost>,
    pub config: Config,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build(RecordingMediaHost::default())
    }

    pub fn with_failing_media() -> Self {
        Self::build(RecordingMediaHost {
            fail: true,
            ..Default::default()
        })
    }

    fn build(media: RecordingMediaHost) -> Self {
        let store = Arc::new(MemoryStore::new());
        let media = Arc::new(media);
        let config = test_config();
        let state = AppState {
            store: store.clone(),
            media: media.clone(),
            config: config.clone(),
        };
        Self {
            router: build_router(state),
            store,
            media,
            config,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// `Cookie` header value for a session bound to `user_id`.
    pub fn session_for(&self, user_id: Uuid) -> String {
        format!(
            "token={}",
            issue_token(user_id, &self.config.secret_key).unwrap()
        )
    }

    pub async fn seed_user(&self, email: &str, password: &str, role: Role) -> UserRow {
        self.store
            .create_user(NewUser {
                fullname: "Test User".to_string(),
                email: email.to_string(),
                phone_number: "5550100".to_string(),
                password_hash: hash_password(password).await.unwrap(),
                role,
                avatar: None,
            })
            .await
            .unwrap()
    }
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// A file part for `post_multipart`: (file name, content type, bytes).
pub type FilePart<'a> = (&'a str, &'a str, &'a [u8]);

pub fn post_multipart(
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<FilePart<'_>>,
    cookie: Option<&str>,
) -> Request<Body> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, content_type, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).unwrap()
}
