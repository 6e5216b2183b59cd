//! # ADN Core
//!
//! Wire types for the App.net API.
//!
//! This crate provides:
//! - Domain entities (`User` and the records it embeds)
//! - OAuth permission scopes
//! - The response envelope (`meta` + `data`) and the typed API error
//!
//! ## Example
//!
//! ```rust,ignore
//! use adn_core::{Envelope, User};
//!
//! let envelope: Envelope<User> = serde_json::from_str(body)?;
//! let user = envelope.into_result()?;
//! ```

pub mod envelope;
pub mod error;
pub mod scopes;
pub mod types;

// Re-exports for convenience
pub use envelope::{Envelope, Meta};
pub use error::ApiError;
pub use scopes::{Scope, Scopes};
pub use types::*;
