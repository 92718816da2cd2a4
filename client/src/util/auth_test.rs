use super::*;
use portal::UserProfile;

#[test]
fn should_redirect_unauth_when_user_missing() {
    let state = AuthState { user: None };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(UserProfile {
            id: "1".to_owned(),
            name: "Dr. Sarah Johnson".to_owned(),
            email: "sarah@metro.example".to_owned(),
            year: "PGY-2".to_owned(),
            specialty: "Internal Medicine".to_owned(),
            institution: "Metro General Hospital".to_owned(),
        }),
    };
    assert!(!should_redirect_unauth(&state));
}
