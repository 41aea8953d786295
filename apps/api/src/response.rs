use serde::Serialize;

/// The JSON envelope every endpoint answers with:
/// `{ "message"?: ..., "success": bool, ...payload }`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

/// Payload for envelopes that only carry a message.
#[derive(Debug, Serialize)]
pub struct Empty {}

impl<T: Serialize> Envelope<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            message: None,
            success: true,
            payload,
        }
    }

    pub fn ok_with_message(message: impl Into<String>, payload: T) -> Self {
        Self {
            message: Some(message.into()),
            success: true,
            payload,
        }
    }
}

impl Envelope<Empty> {
    pub fn message(message: impl Into<String>) -> Self {
        Self::ok_with_message(message, Empty {})
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            success: false,
            payload: Empty {},
        }
    }
}
