use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "secret"),
        Ok(Credentials::new("user@example.com", "secret"))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let credentials = validate_login_input("a@b.com", " pass ").unwrap();
    assert_eq!(credentials.password, " pass ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err(AuthError::MissingCredentials));
    assert_eq!(validate_login_input("   ", "secret"), Err(AuthError::MissingCredentials));
    assert_eq!(validate_login_input("a@b.com", ""), Err(AuthError::MissingCredentials));
}

#[test]
fn validated_input_signs_in_as_demo_resident() {
    let credentials = validate_login_input("a@b.com", "pw").unwrap();
    let user = DemoAuthenticator.sign_in(&credentials).unwrap();
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.year, "PGY-2");
}
