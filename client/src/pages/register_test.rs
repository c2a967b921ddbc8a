use super::*;

#[test]
fn validate_register_input_builds_trimmed_request() {
    let request = validate_register_input(" bob ", " bob@example.com ", "pw123456", "pw123456").expect("request");
    assert_eq!(request.username, "bob");
    assert_eq!(request.email, "bob@example.com");
    assert_eq!(request.password, "pw123456");
    assert_eq!(request.roles, None);
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(validate_register_input("", "a@b.c", "pw", "pw"), Err(MISSING_FIELDS));
    assert_eq!(validate_register_input("bob", "  ", "pw", "pw"), Err(MISSING_FIELDS));
    assert_eq!(validate_register_input("bob", "a@b.c", "", ""), Err(MISSING_FIELDS));
}

#[test]
fn validate_register_input_rejects_email_without_at() {
    assert_eq!(validate_register_input("bob", "bob.example.com", "pw", "pw"), Err(INVALID_EMAIL));
}

#[test]
fn validate_register_input_rejects_mismatched_confirmation() {
    assert_eq!(validate_register_input("bob", "a@b.c", "pw", "wp"), Err(PASSWORD_MISMATCH));
}
