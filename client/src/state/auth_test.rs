use super::*;

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn restoring_state_is_loading() {
    let state = AuthState::restoring();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn signed_in_state_carries_user() {
    let state = AuthState::signed_in(StoredSession {
        token: "jwt".to_owned(),
        user: User {
            id: "u1".to_owned(),
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            roles: Vec::new(),
        },
    });
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
    assert_eq!(state.username(), Some("alice"));
}
