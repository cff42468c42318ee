use super::*;

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn auth_header_is_absent_without_a_stored_token() {
    // Native test builds have no localStorage, so no token can be present.
    assert_eq!(auth_header(), None);
}

#[test]
fn request_failed_message_formats_status_only() {
    assert_eq!(request_failed_message(404, ""), "request failed: 404");
}

#[test]
fn request_failed_message_appends_body_text() {
    assert_eq!(
        request_failed_message(400, "duplicate username: users_username_key"),
        "request failed: 400: duplicate username: users_username_key"
    );
}
