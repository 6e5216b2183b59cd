//! # ADN HTTP
//!
//! HTTP client for the App.net API.
//!
//! This crate provides:
//! - A fixed endpoint registry (method + URL template + response shape)
//! - URL template rendering with typed failure on missing fields
//! - A reqwest-based client running one canonical request/decode pipeline
//! - Typed operations: OAuth authorization-code and password grants, user
//!   retrieval
//!
//! ## Example
//!
//! ```ignore
//! use adn_core::{Scope, Scopes};
//! use adn_http::{AdnClient, Application};
//!
//! let app = Application::new(
//!     "client-id",
//!     "client-secret",
//!     "http://localhost:3000/callback",
//!     Scopes::new(vec![Scope::Basic, Scope::Stream]),
//! );
//! let client = AdnClient::new(app);
//!
//! // Server-side flow: send the user here, get a code back on redirect.
//! let url = client.authentication_url("csrf-state")?;
//!
//! // ...then exchange the code and fetch a profile.
//! let token = client.access_token("code-from-redirect").await?;
//! let user = client.get_user("19058").await?;
//! ```

mod client;
mod endpoints;
mod error;
mod template;

pub use client::{
    AdnClient, ApiRequest, Application, ACCOUNT_BASE_URL, API_BASE_URL,
    MIGRATION_OVERRIDES_HEADER, RESPONSE_ENVELOPE_OVERRIDE,
};
pub use endpoints::{DecodeMode, EndpointDefinition, EndpointName, Host};
pub use error::Error;
pub use template::{render, TemplateArgs, TemplateError};
