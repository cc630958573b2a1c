//! The JSON wrapper applied to every successful response.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// A human-readable message with an optional payload.
///
/// Serializes as `{"message": ..., "data": ...}`, omitting `data` when there
/// is no payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Describes the outcome of the request.
    pub message: String,
    /// The payload, if the endpoint returns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Create an envelope carrying `data`.
    pub fn with_data(message: &str, data: T) -> Self {
        Self {
            message: message.to_owned(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Create an envelope with a message and no payload.
    pub fn message_only(message: &str) -> Self {
        Self {
            message: message.to_owned(),
            data: None,
        }
    }
}

impl<T> IntoResponse for Envelope<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
