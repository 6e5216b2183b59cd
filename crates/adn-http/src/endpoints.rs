//! The endpoint registry
//!
//! Every API operation this crate can perform is a named entry in a fixed
//! table: an HTTP method, a URL template, the host class it is served from,
//! and how its response body is shaped. The table is a static match over
//! [`EndpointName`], so an unknown endpoint is unrepresentable rather than a
//! runtime lookup failure.

use reqwest::Method;

/// Symbolic names for the registered API endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointName {
    /// The browser authorization URL for the server-side OAuth flow.
    /// Rendered locally, never requested by this crate.
    AuthenticationUrl,

    /// The OAuth token endpoint, shared by the authorization-code and
    /// password grants.
    GetAccessToken,

    /// Fetch a user resource by id.
    RetrieveUser,
}

/// How an endpoint's response body is shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMode {
    /// `{"meta": {...}, "data": <payload>}`; `meta.error_id` reports failures.
    Envelope,

    /// The payload is the entire body.
    Direct,
}

/// Which base URL an endpoint is served from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    /// The resource API (`alpha-api.app.net`)
    Api,

    /// The account/OAuth host (`account.app.net`)
    Account,
}

/// One entry of the endpoint registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDefinition {
    pub method: Method,
    pub host: Host,

    /// Host-relative URL template; `{name}` placeholders are substituted
    /// from [`TemplateArgs`](crate::template::TemplateArgs).
    pub template: &'static str,

    pub decode: DecodeMode,
}

impl EndpointName {
    /// Every registered endpoint, for registry-wide assertions
    pub const ALL: [EndpointName; 3] = [
        EndpointName::AuthenticationUrl,
        EndpointName::GetAccessToken,
        EndpointName::RetrieveUser,
    ];

    /// Look up this endpoint's registry entry
    pub fn definition(self) -> EndpointDefinition {
        match self {
            Self::AuthenticationUrl => EndpointDefinition {
                method: Method::GET,
                host: Host::Account,
                template: "/oauth/authenticate?client_id={client_id}\
                           &response_type=code&redirect_uri={redirect_uri}\
                           &scope={scopes}&state={state}",
                decode: DecodeMode::Direct,
            },
            Self::GetAccessToken => EndpointDefinition {
                method: Method::POST,
                host: Host::Account,
                template: "/oauth/access_token",
                decode: DecodeMode::Direct,
            },
            Self::RetrieveUser => EndpointDefinition {
                method: Method::GET,
                host: Host::Api,
                template: "/stream/0/users/{user}",
                decode: DecodeMode::Envelope,
            },
        }
    }
}
