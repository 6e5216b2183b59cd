//! Error types for API client operations

use adn_core::ApiError;
use thiserror::Error;

use crate::template::TemplateError;

/// Errors surfaced by client operations
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure issuing the HTTP call. Never retried here;
    /// the caller decides whether to try again.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A URL template referenced a field the caller did not supply.
    /// Indicates a registry/caller contract violation, not a runtime
    /// condition.
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// The response body was not valid JSON for the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service reported a failure through the response envelope.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The token endpoint's dedicated `error` field was non-empty.
    #[error("OAuth error: {0}")]
    OAuth(String),
}
