//! Login / sign-up form state machine.
//!
//! DESIGN
//! ======
//! The form is plain data so the page can keep it in one signal. A submit is
//! split in three steps to avoid holding the signal across an await:
//! [`AuthForm::begin`] validates and marks the form busy, [`authenticate`]
//! talks to the provider, and [`AuthForm::finish`] applies the outcome and
//! tells the page whether to navigate.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod tests;

use std::time::Duration;

use crate::error::AuthError;
use crate::model::{Credentials, Session};
use crate::provider::AuthProvider;
use crate::route::Route;

/// How long the login success notice stays up before navigating.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(1000);

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const SIGNUP_SUCCESS_MESSAGE: &str = "Signup successful! Check your email.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }

    /// Heading and submit-button label.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Sign Up",
        }
    }

    #[must_use]
    pub fn switch_prompt(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account?",
            Self::Signup => "Already have an account?",
        }
    }

    /// Label of the link that switches to the other mode.
    #[must_use]
    pub fn switch_label(self) -> &'static str {
        self.toggled().title()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Inline message shown above the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthSuccess {
    SignedIn(Session),
    /// `None` while the provider waits for email confirmation.
    SignedUp(Option<Session>),
}

impl AuthSuccess {
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::SignedIn(session) => Some(session),
            Self::SignedUp(session) => session.as_ref(),
        }
    }
}

/// What the page does after a submit completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStep {
    Stay,
    Navigate { to: Route, after: Duration },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub notice: Option<Notice>,
    pub busy: bool,
}

impl AuthForm {
    /// Switch between login and sign-up, dropping any notice.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.notice = None;
    }

    /// Start a submit. Returns `None` when a request is already running or
    /// the fields are blank; the latter leaves an error notice.
    pub fn begin(&mut self, email: &str, password: &str) -> Option<Credentials> {
        if self.busy {
            return None;
        }
        match Credentials::new(email, password) {
            Ok(credentials) => {
                self.busy = true;
                self.notice = None;
                Some(credentials)
            }
            Err(e) => {
                self.notice = Some(Notice::error(e.to_string()));
                None
            }
        }
    }

    /// Apply a provider outcome.
    ///
    /// A successful login keeps the form busy until the delayed navigation
    /// fires; a successful sign-up flips back to login mode.
    pub fn finish(&mut self, result: &Result<AuthSuccess, AuthError>) -> AuthStep {
        match result {
            Err(e) => {
                self.busy = false;
                self.notice = Some(Notice::error(e.to_string()));
                AuthStep::Stay
            }
            Ok(AuthSuccess::SignedIn(_)) => {
                self.notice = Some(Notice::success(LOGIN_SUCCESS_MESSAGE));
                AuthStep::Navigate { to: Route::Dashboard, after: LOGIN_REDIRECT_DELAY }
            }
            Ok(AuthSuccess::SignedUp(_)) => {
                self.busy = false;
                self.mode = AuthMode::Login;
                self.notice = Some(Notice::success(SIGNUP_SUCCESS_MESSAGE));
                AuthStep::Stay
            }
        }
    }
}

/// Run the provider call for `mode`.
///
/// # Errors
///
/// Returns the provider's [`AuthError`] unchanged.
pub async fn authenticate<P: AuthProvider + ?Sized>(
    provider: &P,
    mode: AuthMode,
    credentials: &Credentials,
) -> Result<AuthSuccess, AuthError> {
    match mode {
        AuthMode::Login => provider
            .sign_in_with_password(credentials)
            .await
            .map(AuthSuccess::SignedIn),
        AuthMode::Signup => provider.sign_up(credentials).await.map(AuthSuccess::SignedUp),
    }
}
