use super::*;

#[test]
fn default_is_idle() {
    let state: LoadState<Vec<u8>> = LoadState::default();
    assert_eq!(state, LoadState::Idle);
    assert!(!state.is_loading());
    assert!(state.ready().is_none());
    assert!(state.error().is_none());
}

#[test]
fn accessors_match_variant() {
    let loading: LoadState<u8> = LoadState::Loading;
    assert!(loading.is_loading());

    let failed: LoadState<u8> = LoadState::Error("Failed to load links".into());
    assert_eq!(failed.error(), Some("Failed to load links"));
    assert!(failed.ready().is_none());

    let ready = LoadState::Ready(7u8);
    assert_eq!(ready.ready(), Some(&7));
    assert!(ready.error().is_none());
}
