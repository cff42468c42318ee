use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  testuser  ", "x"),
        Ok(("testuser".to_owned(), "x".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_username() {
    assert_eq!(
        validate_login_input("   ", "x"),
        Err("Enter both username and password.")
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input("testuser", ""),
        Err("Enter both username and password.")
    );
}

#[test]
fn invalid_credentials_message_is_generic() {
    assert_eq!(INVALID_CREDENTIALS, "Invalid username or password.");
}
