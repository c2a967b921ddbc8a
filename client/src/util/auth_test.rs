use super::*;
use bank_types::User;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&AuthState::signed_out()));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::restoring()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            roles: Vec::new(),
        }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}
