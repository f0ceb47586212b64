//! Login / sign-up page.
//!
//! SYSTEM CONTEXT
//! ==============
//! One form serves both modes. A successful login shows a notice, waits
//! `LOGIN_REDIRECT_DELAY` and marks the session active. The session guard
//! does every navigation: it forwards active sessions to the dashboard,
//! both right after login and for users who arrive already signed in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use links::Route;
use links::auth_form::AuthForm;

use crate::components::notice::NoticeBanner;
use crate::state::session::use_session;
use crate::util::auth::install_session_guard;

pub fn submit_label(form: &AuthForm) -> &'static str {
    if form.busy { "Please wait..." } else { form.mode.title() }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    install_session_guard(session, Route::Login, use_navigate());

    let form = RwSignal::new(AuthForm::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form
            .try_update(|f| f.begin(&email.get_untracked(), &password.get_untracked()))
            .flatten()
        else {
            return;
        };
        let mode = form.with_untracked(|f| f.mode);

        // Marking the session active hands navigation to the guard, which
        // forwards to the dashboard.
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use links::SessionState;
            use links::auth_form::{AuthStep, AuthSuccess, authenticate};

            let result = authenticate(&crate::net::auth_client(), mode, &credentials).await;
            let step = form.try_update(|f| f.finish(&result)).unwrap_or(AuthStep::Stay);
            if let (AuthStep::Navigate { after, .. }, Ok(AuthSuccess::SignedIn(signed_in))) = (step, result) {
                gloo_timers::future::sleep(after).await;
                session.set(SessionState::Active(signed_in));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, mode);
        }
    };

    let on_toggle = move |_| form.update(AuthForm::toggle_mode);
    let notice = Signal::derive(move || form.with(|f| f.notice.clone()));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{move || form.with(|f| f.mode.title())}</h1>
                <NoticeBanner notice=notice/>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || form.with(|f| f.busy)>
                        {move || form.with(submit_label)}
                    </button>
                </form>
                <p class="login-switch">
                    {move || form.with(|f| f.mode.switch_prompt())}
                    " "
                    <button class="link-button" type="button" on:click=on_toggle>
                        {move || form.with(|f| f.mode.switch_label())}
                    </button>
                </p>
            </div>
        </div>
    }
}
