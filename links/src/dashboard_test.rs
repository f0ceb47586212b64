use super::*;
use crate::test_helpers::{MockLinksApi, MockProvider, link, session};

fn draft(title: &str, url: &str) -> Dashboard {
    Dashboard {
        draft: LinkDraft { title: title.to_owned(), url: url.to_owned() },
        ..Dashboard::default()
    }
}

async fn add(dashboard: &mut Dashboard, api: &MockLinksApi) {
    let Some(new_link) = dashboard.begin_add() else {
        return;
    };
    let result = create_and_reload(api, &session("t"), &new_link).await;
    dashboard.finish_add(result);
}

// =============================================================================
// local state
// =============================================================================

#[test]
fn default_is_idle() {
    let dashboard = Dashboard::default();
    assert_eq!(dashboard.links, LoadState::Idle);
    assert!(!dashboard.submitting);
    assert!(!dashboard.busy());
    assert_eq!(dashboard.add_label(), "Add");
}

#[test]
fn begin_fetch_marks_loading() {
    let mut dashboard = Dashboard::default();
    dashboard.begin_fetch();
    assert!(dashboard.links.is_loading());
}

#[test]
fn begin_add_rejects_blank_fields() {
    for (title, url) in [("", "https://x.example.com"), ("Title", "  "), ("", "")] {
        let mut dashboard = draft(title, url);
        assert!(dashboard.begin_add().is_none());
        assert_eq!(dashboard.notice.as_deref(), Some("Please fill in both fields"));
        assert!(!dashboard.submitting);
    }
}

#[test]
fn begin_add_marks_submitting() {
    let mut dashboard = draft(" Notes ", "https://notes.example.com");
    dashboard.notice = Some("old".into());

    let new_link = dashboard.begin_add().unwrap();

    assert_eq!(new_link.title(), "Notes");
    assert!(dashboard.submitting);
    assert_eq!(dashboard.notice, None);
    assert_eq!(dashboard.add_label(), "Adding...");
}

#[test]
fn begin_add_while_submitting_is_ignored() {
    let mut dashboard = draft("Notes", "https://notes.example.com");
    dashboard.submitting = true;
    assert!(dashboard.begin_add().is_none());
}

#[test]
fn begin_add_while_list_loading_is_ignored() {
    let mut dashboard = draft("Notes", "https://notes.example.com");
    dashboard.begin_fetch();

    assert!(dashboard.busy());
    assert!(dashboard.begin_add().is_none());
    assert!(!dashboard.submitting);
    assert_eq!(dashboard.notice, None);
}

#[test]
fn finish_add_failure_keeps_draft() {
    let mut dashboard = draft("Notes", "https://notes.example.com");
    dashboard.submitting = true;

    dashboard.finish_add(Err(ApiError::Request("reset".into())));

    assert!(!dashboard.submitting);
    assert_eq!(dashboard.notice.as_deref(), Some(ADD_FAILED_MESSAGE));
    assert_eq!(dashboard.draft.title, "Notes");
}

// =============================================================================
// flows against the mock API
// =============================================================================

#[tokio::test]
async fn blank_fields_make_no_network_call() {
    let api = MockLinksApi::with_links(Vec::new());
    let mut dashboard = draft("", "https://notes.example.com");

    add(&mut dashboard, &api).await;

    assert!(api.calls().is_empty());
    assert!(dashboard.notice.is_some());
}

#[tokio::test]
async fn add_posts_then_reloads() {
    let api = MockLinksApi::with_links(vec![link("1", "Docs", "https://docs.example.com")]);
    let mut dashboard = draft("Notes", "https://notes.example.com");

    add(&mut dashboard, &api).await;

    assert_eq!(api.calls(), vec!["create", "list"]);
    assert_eq!(dashboard.draft, LinkDraft::default());
    assert!(!dashboard.submitting);
    let links = dashboard.links.ready().unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[1].title, "Notes");
    assert_eq!(links[1].url, "https://notes.example.com");
}

#[tokio::test]
async fn add_during_initial_fetch_waits_for_list() {
    let api = MockLinksApi::with_links(Vec::new());
    let mut dashboard = draft("Notes", "https://notes.example.com");
    dashboard.begin_fetch();

    add(&mut dashboard, &api).await;
    assert!(api.calls().is_empty());

    dashboard.links = fetch_links(&api, &session("t")).await;
    add(&mut dashboard, &api).await;

    assert_eq!(api.calls(), vec!["list", "create", "list"]);
    let links = dashboard.links.ready().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].title, "Notes");
}

#[tokio::test]
async fn failed_create_skips_reload() {
    let mut api = MockLinksApi::with_links(Vec::new());
    api.fail_create = true;
    let mut dashboard = draft("Notes", "https://notes.example.com");

    add(&mut dashboard, &api).await;

    assert_eq!(api.calls(), vec!["create"]);
    assert_eq!(dashboard.notice.as_deref(), Some(ADD_FAILED_MESSAGE));
    assert_eq!(dashboard.draft.url, "https://notes.example.com");
}

#[tokio::test]
async fn fetch_twice_returns_same_list() {
    let api = MockLinksApi::with_links(vec![
        link("1", "Docs", "https://docs.example.com"),
        link("2", "Blog", "https://blog.example.com"),
    ]);
    let first = fetch_links(&api, &session("t")).await;
    let second = fetch_links(&api, &session("t")).await;

    assert_eq!(first, second);
    assert_eq!(first.ready().map(Vec::len), Some(2));
}

#[tokio::test]
async fn fetch_failure_is_surfaced() {
    let mut api = MockLinksApi::with_links(Vec::new());
    api.fail_list = true;

    let state = fetch_links(&api, &session("t")).await;

    assert_eq!(state.error(), Some(FETCH_FAILED_MESSAGE));
}

#[tokio::test]
async fn sign_out_goes_to_login() {
    let provider = MockProvider::signed_in("t");
    assert_eq!(sign_out(&provider).await, Route::Login);
    assert!(provider.session.lock().unwrap().is_none());
}

#[tokio::test]
async fn sign_out_failure_still_goes_to_login() {
    let mut provider = MockProvider::signed_in("t");
    provider.fail_sign_out = true;
    assert_eq!(sign_out(&provider).await, Route::Login);
}
