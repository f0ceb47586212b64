//! Inline success/error banner.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use leptos::prelude::*;
use links::auth_form::{Notice, NoticeKind};

pub fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "notice notice--success",
        NoticeKind::Error => "notice notice--error",
    }
}

/// Renders nothing while `notice` is `None`.
#[component]
pub fn NoticeBanner(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            view! {
                <p class=notice_class(notice.kind) role="status">
                    {notice.text}
                </p>
            }
        })
    }
}
