//! The App.net response envelope
//!
//! Most endpoints wrap their payload as `{"meta": {...}, "data": {...}}`.
//! `meta` carries the HTTP-ish status code and, on failure, the service's
//! error identifier and message. An error reported in `meta` always wins:
//! the payload is not handed to the caller even when `data` is present.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Envelope metadata block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_message: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_slug: String,
}

impl Meta {
    /// True when the service reported a failure in this metadata block
    pub fn is_error(&self) -> bool {
        !self.error_id.is_empty()
    }
}

/// A decoded response envelope, generic over the payload type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    #[serde(default)]
    pub meta: Meta,

    // No `default` attribute here: serde already maps a missing field to
    // `None` for `Option` fields, and the attribute would force a spurious
    // `T: Default` bound on the derived `Deserialize` impl.
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope into its payload.
    ///
    /// A non-empty `error_id` produces an [`ApiError`] and discards any
    /// payload that came along with it. An envelope that reports success but
    /// carries no `data` is also an error: the caller was promised a payload.
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.meta.is_error() {
            return Err(ApiError::from(self.meta));
        }

        self.data.ok_or_else(|| ApiError::missing_data(&self.meta))
    }
}
