//! Reqwest-based App.net API client
//!
//! One `AdnClient` owns the application credentials, a pooled
//! [`reqwest::Client`], and the base URLs for the two App.net hosts. Every
//! operation runs the same pipeline: render the endpoint's URL template,
//! issue the request with the registry method and the standard headers, read
//! the full body, then decode it according to the endpoint's
//! [`DecodeMode`](crate::endpoints::DecodeMode).

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use adn_core::{Envelope, Scopes, User};

use crate::endpoints::{DecodeMode, EndpointName, Host};
use crate::error::Error;
use crate::template::{render, TemplateArgs};

/// Default base URL for the resource API
pub const API_BASE_URL: &str = "https://alpha-api.app.net";

/// Default base URL for the account/OAuth host
pub const ACCOUNT_BASE_URL: &str = "https://account.app.net";

/// Header requesting envelope-wrapped responses from the migration shim
pub const MIGRATION_OVERRIDES_HEADER: &str = "X-ADN-Migration-Overrides";

/// Value sent with [`MIGRATION_OVERRIDES_HEADER`] on every request
pub const RESPONSE_ENVELOPE_OVERRIDE: &str = "response_envelope=1";

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Application credentials and session state
///
/// Plain configuration owned by the caller; there is no process-wide default
/// instance. Construct one per registered API application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Application {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scopes: Scopes,

    /// Secret for the password grant, issued separately from `client_secret`.
    pub password_grant_secret: String,

    /// Access token from a previous exchange, used for authenticated calls.
    pub access_token: Option<String>,

    /// Username of the authenticated user, when known.
    pub username: Option<String>,

    /// Id of the authenticated user, when known.
    pub user_id: Option<String>,
}

impl Application {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        scopes: Scopes,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            scopes,
            ..Self::default()
        }
    }

    pub fn with_password_grant_secret(mut self, secret: impl Into<String>) -> Self {
        self.password_grant_secret = secret.into();
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}

/// Per-call request parameters: optional bearer token and optional body
///
/// Ephemeral; constructed by each typed operation and discarded after the
/// call.
#[derive(Debug, Clone, Default)]
pub struct ApiRequest {
    /// Bearer token; `None` sends an unauthenticated request.
    pub token: Option<String>,

    /// Request body, already encoded.
    pub body: Option<String>,

    /// Value for the `Content-Type` header, set only when a body is present.
    pub body_type: Option<String>,
}

impl ApiRequest {
    /// A URL-encoded form body, as the token endpoint expects
    pub fn form(body: impl Into<String>) -> Self {
        Self {
            token: None,
            body: Some(body.into()),
            body_type: Some(FORM_URLENCODED.to_string()),
        }
    }

    /// An authenticated request with no body
    pub fn authenticated(token: Option<String>) -> Self {
        Self {
            token,
            ..Self::default()
        }
    }
}

/// App.net API client
///
/// # Example
///
/// ```ignore
/// use adn_core::{Scope, Scopes};
/// use adn_http::{AdnClient, Application};
///
/// let app = Application::new("id", "secret", "http://localhost/cb",
///     Scopes::new(vec![Scope::Basic]));
/// let client = AdnClient::new(app);
/// let url = client.authentication_url("csrf-state")?;
/// ```
#[derive(Debug, Clone)]
pub struct AdnClient {
    http: reqwest::Client,
    application: Application,
    api_base: String,
    account_base: String,
}

impl AdnClient {
    /// Create a client with a default pooled HTTP client
    pub fn new(application: Application) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self::with_http_client(http, application)
    }

    /// Create a client around an existing [`reqwest::Client`]
    pub fn with_http_client(http: reqwest::Client, application: Application) -> Self {
        Self {
            http,
            application,
            api_base: API_BASE_URL.to_string(),
            account_base: ACCOUNT_BASE_URL.to_string(),
        }
    }

    /// Override the resource API base URL (tests point this at a mock server)
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Override the account/OAuth base URL
    pub fn account_base(mut self, base: impl Into<String>) -> Self {
        self.account_base = base.into();
        self
    }

    pub fn application(&self) -> &Application {
        &self.application
    }

    /// Generate the browser authorization URL for the server-side flow.
    ///
    /// `state` is the caller's opaque CSRF token, echoed back on the
    /// redirect. Pure URL construction; no network call.
    pub fn authentication_url(&self, state: &str) -> Result<String, Error> {
        let definition = EndpointName::AuthenticationUrl.definition();
        let args = TemplateArgs::default()
            .client_id(&self.application.client_id)
            .redirect_uri(&self.application.redirect_uri)
            .scopes(self.application.scopes.spaced())
            .state(state);

        let path = render(definition.template, &args)?;
        Ok(self.url_for(definition.host, &path))
    }

    /// Exchange an authorization code for an access token.
    ///
    /// Used after the server-side flow redirects back with a `code`
    /// parameter.
    pub async fn access_token(&self, code: &str) -> Result<String, Error> {
        let app = &self.application;
        let body = encode_form(&[
            ("client_id", &app.client_id),
            ("client_secret", &app.client_secret),
            ("grant_type", "authorization_code"),
            ("redirect_uri", &app.redirect_uri),
            ("code", code),
        ]);

        self.token_request(body).await
    }

    /// Obtain an access token via the password grant.
    pub async fn password_token(&self, username: &str, password: &str) -> Result<String, Error> {
        let app = &self.application;
        let body = encode_form(&[
            ("client_id", &app.client_id),
            ("password_grant_secret", &app.password_grant_secret),
            ("grant_type", "password"),
            ("username", username),
            ("password", password),
            ("scope", &app.scopes.spaced()),
        ]);

        self.token_request(body).await
    }

    /// Fetch a user resource by id, authenticated with the application's
    /// stored access token.
    pub async fn get_user(&self, id: &str) -> Result<User, Error> {
        let request = ApiRequest::authenticated(self.application.access_token.clone());
        let args = TemplateArgs::default().user(id);

        self.request(EndpointName::RetrieveUser, &args, &request)
            .await
    }

    /// The generic request pipeline behind every network operation.
    ///
    /// Renders the endpoint URL, issues the call, reads the full body, and
    /// decodes it according to the endpoint's [`DecodeMode`]. With envelope
    /// decoding, a non-empty `meta.error_id` yields [`Error::Api`] and no
    /// payload is produced.
    pub async fn request<T: DeserializeOwned>(
        &self,
        name: EndpointName,
        args: &TemplateArgs,
        request: &ApiRequest,
    ) -> Result<T, Error> {
        let decode = name.definition().decode;
        let response = self.execute(name, args, request).await?;
        let body = response.bytes().await?;

        decode_body(&body, decode)
    }

    /// Build and send one HTTP request for the named endpoint.
    ///
    /// One outbound call, no retries; connection pooling is reqwest's
    /// responsibility.
    async fn execute(
        &self,
        name: EndpointName,
        args: &TemplateArgs,
        request: &ApiRequest,
    ) -> Result<reqwest::Response, Error> {
        let definition = name.definition();
        let path = render(definition.template, args)?;
        let url = self.url_for(definition.host, &path);

        let mut builder = self
            .http
            .request(definition.method, url)
            .header(MIGRATION_OVERRIDES_HEADER, RESPONSE_ENVELOPE_OVERRIDE);

        if let Some(token) = &request.token {
            builder = builder.bearer_auth(token);
        }

        if let Some(body_type) = &request.body_type {
            builder = builder.header(reqwest::header::CONTENT_TYPE, body_type.as_str());
        }

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        Ok(builder.send().await?)
    }

    async fn token_request(&self, body: String) -> Result<String, Error> {
        let request = ApiRequest::form(body);
        let response: TokenResponse = self
            .request(EndpointName::GetAccessToken, &TemplateArgs::default(), &request)
            .await?;

        if !response.error.is_empty() {
            return Err(Error::OAuth(response.error));
        }

        Ok(response.access_token)
    }

    fn url_for(&self, host: Host, path: &str) -> String {
        let base = match host {
            Host::Api => &self.api_base,
            Host::Account => &self.account_base,
        };

        format!("{}{}", base.trim_end_matches('/'), path)
    }
}

/// Wire shape of the token endpoint's reply
#[derive(Debug, Deserialize, Default)]
struct TokenResponse {
    #[serde(default)]
    access_token: String,

    #[serde(default)]
    error: String,
}

/// Decode a fully-read response body according to the endpoint's mode.
///
/// Envelope mode deserializes `Envelope<T>` and unwraps it; the payload is
/// never produced when `meta.error_id` is set. Direct mode deserializes `T`
/// from the raw body, ignoring any envelope-shaped wrapping.
fn decode_body<T: DeserializeOwned>(body: &[u8], mode: DecodeMode) -> Result<T, Error> {
    match mode {
        DecodeMode::Envelope => {
            let envelope: Envelope<T> = serde_json::from_slice(body)?;
            envelope.into_result().map_err(Error::Api)
        }
        DecodeMode::Direct => Ok(serde_json::from_slice(body)?),
    }
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
