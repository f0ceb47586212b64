//! Wire DTOs shared by the provider client, the links API client and the UI.
//!
//! DESIGN
//! ======
//! `Session` mirrors the provider's token response so it can be stored and
//! restored without a translation layer. `Link` ids are normalized to strings
//! because the links API returns raw table rows whose id may be numeric.

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// A session counts as expired this many seconds before `expires_at`.
pub const EXPIRY_MARGIN_SECS: i64 = 10;

// =============================================================================
// SESSION
// =============================================================================

/// Account attached to a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Provider-issued proof of authentication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token sent to the links API.
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime in seconds as reported at issue time.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Absolute expiry, unix seconds.
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

impl Session {
    /// Fill `expires_at` from `expires_in` when the provider omitted it.
    #[must_use]
    pub fn with_expiry_from(mut self, now: i64) -> Self {
        if self.expires_at.is_none()
            && let Some(secs) = self.expires_in
        {
            self.expires_at = Some(now.saturating_add(secs));
        }
        self
    }

    /// Sessions without a known expiry never expire locally.
    #[must_use]
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at
            .is_some_and(|at| at.saturating_sub(EXPIRY_MARGIN_SECS) <= now)
    }

    /// `Authorization` header value for this session.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.email.as_deref())
    }
}

// =============================================================================
// CREDENTIALS
// =============================================================================

/// Email + password pair submitted to the provider.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Trim the email and require both fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingCredentials`] if either field is blank.
    pub fn new(email: &str, password: &str) -> Result<Self, ValidationError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(Self { email: email.to_owned(), password: password.to_owned() })
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// LINKS
// =============================================================================

/// A stored bookmark as returned by `GET /api/links`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub url: String,
}

/// Body of `POST /api/links`. Only constructible with both fields non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewLink {
    title: String,
    url: String,
}

impl NewLink {
    /// Trim both fields and reject blanks.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingLinkField`] if the title or URL is blank.
    pub fn parse(title: &str, url: &str) -> Result<Self, ValidationError> {
        let title = title.trim();
        let url = url.trim();
        if title.is_empty() || url.is_empty() {
            return Err(ValidationError::MissingLinkField);
        }
        Ok(Self { title: title.to_owned(), url: url.to_owned() })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(id) => Ok(id.to_string()),
        other => Err(D::Error::custom(format!("invalid link id: {other}"))),
    }
}
