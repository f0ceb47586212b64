//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both pages apply the same session guard; only the page identity differs.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use links::{Guard, Route, SessionState};

/// Route to leave `page` for, if the guard says so.
pub fn redirect_target(state: &SessionState, page: Route) -> Option<Route> {
    match state.guard(page) {
        Guard::Redirect(to) => Some(to),
        Guard::Wait | Guard::Render => None,
    }
}

/// Navigate away from `page` whenever the session guard demands it.
pub fn install_session_guard<F>(session: RwSignal<SessionState>, page: Route, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(to) = redirect_target(&session.get(), page) {
            navigate(to.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
