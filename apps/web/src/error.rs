use thiserror::Error;

/// Shown when a failure carries no message of its own.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the server's envelope message when present.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// 2xx response whose envelope reported `success: false`.
    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Text suitable for showing to the user.
    pub fn user_message(&self) -> &str {
        match self {
            ClientError::Api { message, .. } | ClientError::Rejected(message)
                if !message.is_empty() =>
            {
                message.as_str()
            }
            _ => GENERIC_FAILURE,
        }
    }
}
