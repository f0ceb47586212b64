//! Dashboard page: the signed-in user's links plus an add form.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Nothing but a placeholder
//! renders until the session guard says `Render`; anonymous visitors are
//! sent to `/login`. The list is fetched once per mount and re-fetched after
//! every successful add.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use links::dashboard::Dashboard;
use links::{Guard, LoadState, Route, SessionState};

use crate::components::link_list::LinkList;
use crate::state::session::use_session;
use crate::util::auth::install_session_guard;

pub const DASHBOARD_TITLE: &str = "Your Links";

/// Header text identifying the signed-in account.
pub fn account_label(state: &SessionState) -> String {
    state
        .session()
        .and_then(|s| s.email())
        .map_or_else(|| "Signed in".to_owned(), |email| format!("Signed in as {email}"))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    install_session_guard(session, Route::Dashboard, use_navigate());

    let dashboard = RwSignal::new(Dashboard::default());

    Effect::new(move || {
        if session.with(|s| s.session().is_none()) {
            return;
        }
        if !dashboard.with_untracked(|d| matches!(d.links, LoadState::Idle)) {
            return;
        }
        dashboard.update(Dashboard::begin_fetch);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // A discarded session redirects through the guard.
            let Some(active) = crate::state::session::fresh_session(session).await else {
                return;
            };
            let fetched = links::dashboard::fetch_links(&crate::net::links_api(), &active).await;
            dashboard.update(|d| d.links = fetched);
        });
    });

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.with_untracked(|s| s.session().is_none()) {
            return;
        }
        let Some(new_link) = dashboard.try_update(Dashboard::begin_add).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(active) = crate::state::session::fresh_session(session).await else {
                dashboard.update(|d| d.submitting = false);
                return;
            };
            let result = links::dashboard::create_and_reload(&crate::net::links_api(), &active, &new_link).await;
            dashboard.update(|d| d.finish_add(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = new_link;
    };

    // The guard performs the redirect once the context is anonymous.
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            links::dashboard::sign_out(&crate::net::auth_client()).await;
            session.set(SessionState::Anonymous);
        });
    };

    let links_state = Signal::derive(move || dashboard.with(|d| d.links.clone()));

    view! {
        <Show
            when=move || session.with(|s| s.guard(Route::Dashboard) == Guard::Render)
            fallback=|| view! { <p class="dashboard-page__pending">"Loading..."</p> }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>{DASHBOARD_TITLE}</h1>
                    <span class="dashboard-page__account">{move || session.with(account_label)}</span>
                    <button class="dashboard-page__logout" type="button" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </header>

                <form class="link-form" on:submit=on_add.clone()>
                    <input
                        class="link-form__input"
                        type="text"
                        placeholder="Title"
                        prop:value=move || dashboard.with(|d| d.draft.title.clone())
                        on:input=move |ev| dashboard.update(|d| d.draft.title = event_target_value(&ev))
                    />
                    <input
                        class="link-form__input"
                        type="url"
                        placeholder="URL"
                        prop:value=move || dashboard.with(|d| d.draft.url.clone())
                        on:input=move |ev| dashboard.update(|d| d.draft.url = event_target_value(&ev))
                    />
                    <button class="link-form__submit" type="submit" disabled=move || dashboard.with(Dashboard::busy)>
                        {move || dashboard.with(Dashboard::add_label)}
                    </button>
                </form>
                {move || {
                    dashboard
                        .with(|d| d.notice.clone())
                        .map(|text| view! { <p class="notice notice--error">{text}</p> })
                }}

                <LinkList links=links_state/>
            </div>
        </Show>
    }
}
