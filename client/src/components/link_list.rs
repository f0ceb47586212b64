//! The signed-in user's links, each opening in a new tab.

#[cfg(test)]
#[path = "link_list_test.rs"]
mod link_list_test;

use leptos::prelude::*;
use links::{Link, LoadState};

pub const LOADING_TEXT: &str = "Loading links...";
pub const EMPTY_TEXT: &str = "No links yet.";

/// Placeholder line shown instead of (or before) the list.
pub fn status_text(state: &LoadState<Vec<Link>>) -> Option<&str> {
    match state {
        LoadState::Idle => None,
        LoadState::Loading => Some(LOADING_TEXT),
        LoadState::Error(message) => Some(message),
        LoadState::Ready(links) if links.is_empty() => Some(EMPTY_TEXT),
        LoadState::Ready(_) => None,
    }
}

#[component]
pub fn LinkList(#[prop(into)] links: Signal<LoadState<Vec<Link>>>) -> impl IntoView {
    let status = move || {
        links.with(|state| {
            let is_error = state.error().is_some();
            status_text(state).map(|text| {
                let class = if is_error { "link-list__status link-list__status--error" } else { "link-list__status" };
                view! { <p class=class>{text.to_owned()}</p> }
            })
        })
    };

    let items = move || {
        links.with(|state| {
            state
                .ready()
                .cloned()
                .unwrap_or_default()
                .into_iter()
                .map(|link| {
                    view! {
                        <li class="link-list__item">
                            <a href=link.url target="_blank" rel="noreferrer">
                                {link.title}
                            </a>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section class="link-list">
            {status}
            <ul class="link-list__items">{items}</ul>
        </section>
    }
}
