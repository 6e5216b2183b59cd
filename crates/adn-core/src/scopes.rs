//! OAuth permission scopes
//!
//! App.net defines a fixed set of permission scopes. The authorization URL
//! and the password-grant form both carry the requested scopes, space-joined.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A single App.net permission scope
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Basic,
    Stream,
    Email,
    WritePost,
    Follow,
    PublicMessages,
    Messages,
    Files,
    UpdateProfile,
    Export,
}

impl Scope {
    /// The scope's wire name as it appears in OAuth requests
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Stream => "stream",
            Self::Email => "email",
            Self::WritePost => "write_post",
            Self::Follow => "follow",
            Self::PublicMessages => "public_messages",
            Self::Messages => "messages",
            Self::Files => "files",
            Self::UpdateProfile => "update_profile",
            Self::Export => "export",
        }
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered collection of requested scopes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Scopes(pub Vec<Scope>);

impl Scopes {
    pub fn new(scopes: impl Into<Vec<Scope>>) -> Self {
        Self(scopes.into())
    }

    /// Space-joined wire form, as the token endpoint's `scope` field expects
    pub fn spaced(&self) -> String {
        self.0
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Scopes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.spaced())
    }
}

impl From<Vec<Scope>> for Scopes {
    fn from(scopes: Vec<Scope>) -> Self {
        Self(scopes)
    }
}
