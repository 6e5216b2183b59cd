//! URL template rendering
//!
//! Registry templates are host-relative paths with `{field}` placeholders,
//! substituted from a [`TemplateArgs`] record. A placeholder whose field was
//! never set is a caller/registry contract violation and fails the render;
//! an empty string is never silently substituted for a required field.

use thiserror::Error;

/// Errors that can occur while rendering a URL template
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template references field '{0}' but it was not provided")]
    MissingField(String),

    #[error("template references unknown field '{0}'")]
    UnknownField(String),

    #[error("template has an unterminated '{{' placeholder")]
    UnterminatedPlaceholder,
}

/// Substitution arguments for URL templates
///
/// Each field corresponds to a placeholder name a registry template may
/// reference. All fields are optional; a template only fails over fields it
/// actually references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateArgs {
    user: Option<String>,
    client_id: Option<String>,
    redirect_uri: Option<String>,
    scopes: Option<String>,
    state: Option<String>,
}

impl TemplateArgs {
    pub fn user(mut self, id: impl Into<String>) -> Self {
        self.user = Some(id.into());
        self
    }

    pub fn client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self
    }

    pub fn redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(uri.into());
        self
    }

    pub fn scopes(mut self, scopes: impl Into<String>) -> Self {
        self.scopes = Some(scopes.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Resolve a placeholder name to its value, if the field was set
    fn field(&self, name: &str) -> Result<Option<&str>, TemplateError> {
        match name {
            "user" => Ok(self.user.as_deref()),
            "client_id" => Ok(self.client_id.as_deref()),
            "redirect_uri" => Ok(self.redirect_uri.as_deref()),
            "scopes" => Ok(self.scopes.as_deref()),
            "state" => Ok(self.state.as_deref()),
            other => Err(TemplateError::UnknownField(other.to_string())),
        }
    }
}

/// Render a URL template against the given arguments.
///
/// Substituted values are percent-encoded, so they are safe in both path
/// segments and query values.
pub fn render(template: &str, args: &TemplateArgs) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after
            .find('}')
            .ok_or(TemplateError::UnterminatedPlaceholder)?;
        let name = &after[..end];

        let value = args
            .field(name)?
            .ok_or_else(|| TemplateError::MissingField(name.to_string()))?;
        out.push_str(&urlencoding::encode(value));

        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}
