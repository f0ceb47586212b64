//! Error types for provider calls, links API calls and form validation.
//!
//! The `Display` text of each variant is what the UI shows, so provider
//! rejections render the provider's own message verbatim.

/// Client-side validation failures. These block a submission before any
/// network call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Enter both email and password.")]
    MissingCredentials,
    #[error("Please fill in both fields")]
    MissingLinkField,
}

/// Errors produced by the authentication provider client.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The provider answered with a non-success status. `message` is the
    /// provider-supplied explanation.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The HTTP request could not be sent or its body could not be read.
    #[error("auth request failed: {0}")]
    Request(String),

    /// The provider answered 2xx with a body that is not a session.
    #[error("auth response parse failed: {0}")]
    Parse(String),
}

/// Errors produced by the links API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("links request failed: {0}")]
    Request(String),

    #[error("links API responded with status {status}")]
    Response { status: u16, body: String },

    #[error("links response parse failed: {0}")]
    Parse(String),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
