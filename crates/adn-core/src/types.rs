//! App.net domain entities
//!
//! Plain records mirroring the JSON shapes the API returns. Fields the API
//! omits on unauthenticated requests deserialize to their defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An App.net user account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,

    /// The user-supplied name may be a pseudonym.
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: Description,

    /// The timezone is in tzinfo format.
    #[serde(default)]
    pub timezone: String,

    #[serde(default)]
    pub locale: String,

    /// The URL and original size of the user's avatar.
    #[serde(default)]
    pub avatar_image: Image,

    /// The URL and original size of the user's cover image.
    #[serde(default)]
    pub cover_image: Image,

    #[serde(rename = "type", default)]
    pub account_type: AccountType,

    /// The time at which the user was created, ISO 8601. Trimmed response
    /// bodies may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub counts: Counts,

    /// Opaque information an application may store.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub app_data: serde_json::Value,

    /// Does this user follow the user making the request? Omitted on
    /// unauthenticated requests.
    #[serde(default)]
    pub follows_you: bool,

    /// Does the user making the request follow this user? Omitted on
    /// unauthenticated requests.
    #[serde(default)]
    pub you_follow: bool,

    /// Has the user making the request muted this user? Omitted on
    /// unauthenticated requests.
    #[serde(default)]
    pub you_muted: bool,
}

/// Account kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Human,
    Bot,
    Corporate,
    Feed,
}

/// Biographical information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Description {
    pub text: String,

    /// Server-generated annotated HTML version of `text`.
    pub html: String,

    #[serde(default)]
    pub entities: Entities,
}

/// Rich-text entities annotated by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Entities {
    #[serde(default)]
    pub mentions: Vec<Mention>,

    #[serde(default)]
    pub hashtags: Vec<Hashtag>,

    #[serde(default)]
    pub links: Vec<Link>,
}

/// A @username reference inside annotated text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mention {
    pub name: String,
    pub id: String,
    pub pos: usize,
    pub len: usize,
}

/// A #hashtag inside annotated text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hashtag {
    pub name: String,
    pub pos: usize,
    pub len: usize,
}

/// A hyperlink inside annotated text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    pub text: String,
    pub url: String,
    pub pos: usize,
    pub len: usize,
}

/// An image reference with its original dimensions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Image {
    pub height: u32,
    pub width: u32,
    pub url: String,
}

/// Aggregate counts for a user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Counts {
    pub following: u64,
    pub followers: u64,
    pub posts: u64,
    pub stars: u64,
}
