//! Session guard shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The UI resolves the session once and keeps the resulting [`SessionState`]
//! in a single context value. Pages ask it for a [`Guard`] decision instead
//! of querying the provider themselves.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use tracing::warn;

use crate::model::Session;
use crate::provider::{AuthProvider, now_secs};
use crate::route::Route;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// The provider has not answered yet.
    #[default]
    Pending,
    Anonymous,
    Active(Session),
}

/// What a page should do for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    Wait,
    Render,
    Redirect(Route),
}

impl SessionState {
    #[must_use]
    pub fn from_session(session: Option<Session>) -> Self {
        session.map_or(Self::Anonymous, Self::Active)
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Active(session) => Some(session),
            _ => None,
        }
    }

    /// The dashboard renders only with a session; the login page forwards
    /// signed-in users to the dashboard.
    #[must_use]
    pub fn guard(&self, page: Route) -> Guard {
        match (page, self) {
            (Route::Dashboard, Self::Pending) => Guard::Wait,
            (Route::Dashboard, Self::Anonymous) => Guard::Redirect(Route::Login),
            (Route::Login, Self::Active(_)) => Guard::Redirect(Route::Dashboard),
            (Route::Dashboard, Self::Active(_)) | (Route::Login, Self::Pending | Self::Anonymous) => Guard::Render,
        }
    }
}

/// Ask the provider for the current session. Provider failures count as
/// signed out.
pub async fn resolve_session<P: AuthProvider + ?Sized>(provider: &P) -> SessionState {
    match provider.get_session().await {
        Ok(session) => SessionState::from_session(session),
        Err(e) => {
            warn!(error = %e, "session lookup failed");
            SessionState::Anonymous
        }
    }
}

/// Re-resolve an active session whose token has expired at `now`, so the
/// provider can refresh or discard it. Any other state is returned as is.
pub async fn refresh_if_expired<P: AuthProvider + ?Sized>(provider: &P, state: &SessionState, now: i64) -> SessionState {
    match state {
        SessionState::Active(session) if session.is_expired(now) => resolve_session(provider).await,
        _ => state.clone(),
    }
}

/// [`refresh_if_expired`] against the current clock.
pub async fn refresh_if_expired_now<P: AuthProvider + ?Sized>(provider: &P, state: &SessionState) -> SessionState {
    refresh_if_expired(provider, state, now_secs()).await
}
