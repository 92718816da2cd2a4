use super::*;
use portal::auth::{Credentials, DemoAuthenticator};

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_signed_in());
}

#[test]
fn auth_state_signed_in_after_demo_login() {
    let user = DemoAuthenticator.sign_in(&Credentials::new("a@b.com", "pw")).unwrap();
    let state = AuthState { user: Some(user) };
    assert!(state.is_signed_in());
}
