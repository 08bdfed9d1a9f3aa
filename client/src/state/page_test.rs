use super::*;

#[test]
fn page_state_default_hides_everything() {
    let state = PageState::default();
    assert!(!state.signin_button_visible);
    assert!(!state.userinfo_visible);
    assert!(!state.page_wrapper_visible);
    assert_eq!(state.update_greeting, None);
    assert_eq!(state.modal, None);
    assert!(state.email_text.is_empty());
}

#[test]
fn modal_constructors_use_fixed_config() {
    let result = Modal::result("done");
    assert_eq!(result.kind, ModalKind::Result);
    assert_eq!(result.config, MODAL_CONFIG);

    let error = Modal::error("boom");
    assert_eq!(error.kind, ModalKind::Error);
    assert_eq!(error.text, "boom");
    assert_eq!(error.config, ModalConfig { backdrop: true, keyboard: false });
}

#[test]
fn auth_regions_consistency() {
    let mut state = PageState::default();
    assert!(state.auth_regions_consistent());
    state.signin_button_visible = true;
    assert!(state.auth_regions_consistent());
    state.userinfo_visible = true;
    assert!(!state.auth_regions_consistent());
}
