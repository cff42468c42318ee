use super::*;

fn filled() -> SignupInput {
    SignupInput {
        username: "testuser".to_owned(),
        password: "x".to_owned(),
        first_name: "Test".to_owned(),
        last_name: "User".to_owned(),
        email: "test@example.com".to_owned(),
    }
}

#[test]
fn validate_signup_input_trims_and_accepts_full_input() {
    assert_eq!(
        validate_signup_input(" testuser ", "x", " Test ", " User ", " test@example.com "),
        Ok(filled())
    );
}

#[test]
fn validate_signup_input_requires_every_field() {
    assert_eq!(
        validate_signup_input("", "x", "Test", "User", "t@e.com"),
        Err("All fields are required.")
    );
    assert_eq!(
        validate_signup_input("testuser", "x", "Test", "User", "  "),
        Err("All fields are required.")
    );
}

#[test]
fn build_register_payload_uses_camel_case_wire_names() {
    assert_eq!(
        build_register_payload(&filled()),
        serde_json::json!({
            "username": "testuser",
            "password": "x",
            "firstName": "Test",
            "lastName": "User",
            "email": "test@example.com",
        })
    );
}

#[test]
fn map_register_error_recognizes_duplicate_email() {
    let raw = "request failed: 400: duplicate key value violates unique constraint \"users_email_key\"";
    assert_eq!(map_register_error(raw), "That email is already registered.");
}

#[test]
fn map_register_error_recognizes_duplicate_username() {
    let raw = "request failed: 400: duplicate key value violates unique constraint \"users_username_key\"";
    assert_eq!(map_register_error(raw), "That username is taken.");
}

#[test]
fn map_register_error_falls_back_to_generic_message() {
    assert_eq!(
        map_register_error("request failed: 500"),
        "Sign up failed. Please try again."
    );
}
