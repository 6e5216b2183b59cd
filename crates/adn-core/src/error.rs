//! Typed API errors derived from envelope metadata

use thiserror::Error;

use crate::envelope::Meta;

/// An error the service reported through the response envelope
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("API error {id}: {message}")]
pub struct ApiError {
    /// The service's error identifier, e.g. "404"
    pub id: String,

    /// Human-readable message supplied by the service
    pub message: String,

    /// Optional stable slug naming the error class
    pub slug: String,
}

impl ApiError {
    /// Error for a success envelope that carried no payload
    pub(crate) fn missing_data(meta: &Meta) -> Self {
        Self {
            id: "missing_data".to_string(),
            message: format!(
                "response envelope (code {:?}) reported success but carried no data",
                meta.code
            ),
            slug: String::new(),
        }
    }
}

impl From<Meta> for ApiError {
    fn from(meta: Meta) -> Self {
        Self {
            id: meta.error_id,
            message: meta.error_message,
            slug: meta.error_slug,
        }
    }
}
