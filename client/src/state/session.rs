//! Session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` calls [`provide_session`] once. On the client it asks the auth
//! provider for the stored session in the background; until that answer
//! arrives the state stays `Pending`, which the dashboard guard renders as
//! a loading placeholder. Pages read and update the same signal through
//! [`use_session`]. API calls go through `fresh_session` so an expired
//! token is refreshed before use.

use leptos::prelude::*;
use links::SessionState;

/// Create the session signal, register it as context and start resolving it.
pub fn provide_session() -> RwSignal<SessionState> {
    let session = RwSignal::new(SessionState::Pending);
    provide_context(session);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let resolved = links::session::resolve_session(&crate::net::auth_client()).await;
        session.set(resolved);
    });

    session
}

/// Session to send with an API call. An expired token is handed back to the
/// provider first and the outcome written to the context, so a discarded
/// session reaches the guard and redirects to `/login`.
#[cfg(feature = "hydrate")]
pub async fn fresh_session(session: RwSignal<SessionState>) -> Option<links::Session> {
    let current = session.get_untracked();
    let checked = links::session::refresh_if_expired_now(&crate::net::auth_client(), &current).await;
    if checked != current {
        session.set(checked.clone());
    }
    checked.session().cloned()
}

/// The session signal registered by [`provide_session`].
pub fn use_session() -> RwSignal<SessionState> {
    expect_context::<RwSignal<SessionState>>()
}
