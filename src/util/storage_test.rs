use super::*;

#[test]
fn parse_stored_token_accepts_canonical_envelope() {
    assert_eq!(
        parse_stored_token(r#"{"token":"abc.def.ghi"}"#),
        Some("abc.def.ghi".to_owned())
    );
}

#[test]
fn parse_stored_token_accepts_json_quoted_string() {
    assert_eq!(parse_stored_token(r#""abc.def.ghi""#), Some("abc.def.ghi".to_owned()));
}

#[test]
fn parse_stored_token_accepts_legacy_bare_string() {
    assert_eq!(parse_stored_token("abc.def.ghi"), Some("abc.def.ghi".to_owned()));
}

#[test]
fn parse_stored_token_rejects_empty_values() {
    assert_eq!(parse_stored_token(""), None);
    assert_eq!(parse_stored_token("   "), None);
    assert_eq!(parse_stored_token(r#"{"token":""}"#), None);
    assert_eq!(parse_stored_token(r#""""#), None);
}

#[test]
fn parse_stored_token_rejects_foreign_json_object() {
    assert_eq!(parse_stored_token(r#"{"session":"abc"}"#), None);
}

#[test]
fn token_envelope_round_trips() {
    let raw = serde_json::to_string(&TokenEnvelope {
        token: "abc".to_owned(),
    })
    .unwrap();
    assert_eq!(raw, r#"{"token":"abc"}"#);
    assert_eq!(parse_stored_token(&raw), Some("abc".to_owned()));
}

#[test]
fn storage_reads_are_absent_off_browser() {
    // Native test builds have no localStorage; the helpers must degrade.
    assert_eq!(load_raw(TOKEN_KEY), None);
    assert_eq!(load_token(), None);
    save_token("abc");
    clear_token();
}
