use super::*;

fn token_with_payload(payload: &serde_json::Value) -> String {
    let encoded = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("eyJhbGciOiJIUzI1NiJ9.{encoded}.signature")
}

#[test]
fn decode_username_extracts_claim() {
    let token = token_with_payload(&serde_json::json!({ "username": "testuser", "iat": 1 }));
    assert_eq!(decode_username(&token), Ok("testuser".to_owned()));
}

#[test]
fn decode_username_rejects_missing_claim() {
    let token = token_with_payload(&serde_json::json!({ "iat": 1 }));
    assert_eq!(decode_username(&token), Err(TokenError::MissingUsername));
}

#[test]
fn decode_username_rejects_empty_claim() {
    let token = token_with_payload(&serde_json::json!({ "username": "" }));
    assert_eq!(decode_username(&token), Err(TokenError::MissingUsername));
}

#[test]
fn decode_username_rejects_two_segment_value() {
    assert_eq!(decode_username("header.payload"), Err(TokenError::Malformed));
}

#[test]
fn decode_username_rejects_four_segment_value() {
    assert_eq!(decode_username("a.b.c.d"), Err(TokenError::Malformed));
}

#[test]
fn decode_username_rejects_non_base64_payload() {
    assert_eq!(decode_username("a.!!!.c"), Err(TokenError::Payload));
}

#[test]
fn decode_username_rejects_non_json_payload() {
    let encoded = URL_SAFE_NO_PAD.encode("not json");
    assert_eq!(
        decode_username(&format!("a.{encoded}.c")),
        Err(TokenError::Payload)
    );
}
