//! Dashboard state and the network flows behind it.
//!
//! DESIGN
//! ======
//! One [`Dashboard`] value holds everything the page renders. Adding a link
//! follows the same three-step shape as the auth form: [`Dashboard::begin_add`]
//! validates the draft, [`create_and_reload`] POSTs and then re-fetches the
//! whole list, and [`Dashboard::finish_add`] installs the outcome. The list
//! always reflects server state; nothing is appended locally.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;

use tracing::warn;

use crate::api::LinksApi;
use crate::error::ApiError;
use crate::load::LoadState;
use crate::model::{Link, NewLink, Session};
use crate::provider::AuthProvider;
use crate::route::Route;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to load links";
pub const ADD_FAILED_MESSAGE: &str = "Failed to add link";

/// Raw contents of the add-link inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dashboard {
    pub links: LoadState<Vec<Link>>,
    pub draft: LinkDraft,
    /// Inline message for the add form.
    pub notice: Option<String>,
    pub submitting: bool,
}

impl Dashboard {
    /// Mark the list as loading before a fetch.
    pub fn begin_fetch(&mut self) {
        self.links = LoadState::Loading;
    }

    /// True while any request touching the list is in flight. A list fetch
    /// that resolves after an add would overwrite the reloaded list.
    #[must_use]
    pub fn busy(&self) -> bool {
        self.submitting || self.links.is_loading()
    }

    /// Validate the draft. Returns `None` while [`Dashboard::busy`] or when a
    /// field is blank; the latter sets the inline notice.
    pub fn begin_add(&mut self) -> Option<NewLink> {
        if self.busy() {
            return None;
        }
        match NewLink::parse(&self.draft.title, &self.draft.url) {
            Ok(new_link) => {
                self.submitting = true;
                self.notice = None;
                Some(new_link)
            }
            Err(e) => {
                self.notice = Some(e.to_string());
                None
            }
        }
    }

    /// Apply the outcome of [`create_and_reload`].
    pub fn finish_add(&mut self, result: Result<LoadState<Vec<Link>>, ApiError>) {
        self.submitting = false;
        match result {
            Ok(links) => {
                self.draft = LinkDraft::default();
                self.links = links;
            }
            Err(_) => self.notice = Some(ADD_FAILED_MESSAGE.to_owned()),
        }
    }

    #[must_use]
    pub fn add_label(&self) -> &'static str {
        if self.submitting { "Adding..." } else { "Add" }
    }
}

/// GET the caller's links. Failures are logged and surfaced as
/// [`LoadState::Error`].
pub async fn fetch_links<A: LinksApi + ?Sized>(api: &A, session: &Session) -> LoadState<Vec<Link>> {
    match api.list_links(session).await {
        Ok(links) => LoadState::Ready(links),
        Err(e) => {
            warn!(error = %e, "fetching links failed");
            LoadState::Error(FETCH_FAILED_MESSAGE.to_owned())
        }
    }
}

/// POST the new link, then reload the list once the POST has succeeded.
///
/// A failed reload after a successful create is not an add failure; it
/// shows up as an error state on the list.
///
/// # Errors
///
/// Returns the create call's [`ApiError`]; no reload happens in that case.
pub async fn create_and_reload<A: LinksApi + ?Sized>(
    api: &A,
    session: &Session,
    new_link: &NewLink,
) -> Result<LoadState<Vec<Link>>, ApiError> {
    if let Err(e) = api.create_link(session, new_link).await {
        warn!(error = %e, title = new_link.title(), "adding link failed");
        return Err(e);
    }
    Ok(fetch_links(api, session).await)
}

/// Sign out with the provider and return where to go next. Provider
/// failures are logged; the destination is always the login page.
pub async fn sign_out<P: AuthProvider + ?Sized>(provider: &P) -> Route {
    if let Err(e) = provider.sign_out().await {
        warn!(error = %e, "sign out failed");
    }
    Route::Login
}
