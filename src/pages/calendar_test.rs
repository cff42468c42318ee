use super::*;
use crate::net::types::EventTime;

#[test]
fn extract_oauth_code_reads_the_code_parameter() {
    assert_eq!(extract_oauth_code("?code=4%2Fabc"), Some("4%2Fabc".to_owned()));
    assert_eq!(
        extract_oauth_code("?state=xyz&code=abc123"),
        Some("abc123".to_owned())
    );
}

#[test]
fn extract_oauth_code_ignores_other_parameters() {
    assert_eq!(extract_oauth_code("?state=xyz"), None);
    assert_eq!(extract_oauth_code(""), None);
    assert_eq!(extract_oauth_code("?code="), None);
}

#[test]
fn datetime_local_to_wire_appends_seconds() {
    assert_eq!(datetime_local_to_wire("2026-08-10T14:30"), "2026-08-10T14:30:00");
}

#[test]
fn datetime_local_to_wire_passes_through_other_shapes() {
    assert_eq!(datetime_local_to_wire("2026-08-10T14:30:00"), "2026-08-10T14:30:00");
    assert_eq!(datetime_local_to_wire(""), "");
}

#[test]
fn validate_event_input_requires_summary_and_start() {
    assert_eq!(
        validate_event_input("", "2026-08-10T14:00"),
        Err("Summary and start are required.")
    );
    assert_eq!(validate_event_input("Onsite", ""), Err("Summary and start are required."));
    assert_eq!(validate_event_input("Onsite", "2026-08-10T14:00"), Ok(()));
}

#[test]
fn build_event_payload_shapes_timed_events() {
    assert_eq!(
        build_event_payload("Onsite", "", false, "2026-08-10T14:00", "2026-08-10T15:00"),
        serde_json::json!({
            "summary": "Onsite",
            "start": { "dateTime": "2026-08-10T14:00:00" },
            "end": { "dateTime": "2026-08-10T15:00:00" },
        })
    );
}

#[test]
fn build_event_payload_defaults_end_to_start() {
    assert_eq!(
        build_event_payload("Onsite", "", false, "2026-08-10T14:00", ""),
        serde_json::json!({
            "summary": "Onsite",
            "start": { "dateTime": "2026-08-10T14:00:00" },
            "end": { "dateTime": "2026-08-10T14:00:00" },
        })
    );
}

#[test]
fn build_event_payload_shapes_all_day_events() {
    assert_eq!(
        build_event_payload("Career fair", "hall B", true, "2026-08-12", ""),
        serde_json::json!({
            "summary": "Career fair",
            "description": "hall B",
            "start": { "date": "2026-08-12" },
            "end": { "date": "2026-08-12" },
        })
    );
}

#[test]
fn format_window_renders_same_day_span_compactly() {
    let window = EventWindow {
        start: chrono::NaiveDate::from_ymd_opt(2026, 8, 10)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap(),
        end: chrono::NaiveDate::from_ymd_opt(2026, 8, 10)
            .unwrap()
            .and_hms_opt(15, 30, 0)
            .unwrap(),
        all_day: false,
    };
    assert_eq!(format_window(&window), "2026-08-10 14:00 to 15:30");
}

#[test]
fn format_window_marks_all_day_events() {
    let window = EventWindow {
        start: chrono::NaiveDate::from_ymd_opt(2026, 8, 12)
            .unwrap()
            .and_time(chrono::NaiveTime::MIN),
        end: chrono::NaiveDate::from_ymd_opt(2026, 8, 13)
            .unwrap()
            .and_time(chrono::NaiveTime::MIN),
        all_day: true,
    };
    assert_eq!(format_window(&window), "2026-08-12 (all day)");
}

#[test]
fn event_form_values_prefill_a_timed_event() {
    let event = CalendarEvent {
        id: Some("e1".to_owned()),
        summary: "Onsite".to_owned(),
        description: Some("bring ID".to_owned()),
        start: EventTime {
            date_time: Some("2026-08-10T14:00:00-04:00".to_owned()),
            date: None,
        },
        end: EventTime {
            date_time: Some("2026-08-10T15:00:00-04:00".to_owned()),
            date: None,
        },
    };
    assert_eq!(
        event_form_values(&event),
        (
            "Onsite".to_owned(),
            "bring ID".to_owned(),
            false,
            "2026-08-10T14:00".to_owned(),
            "2026-08-10T15:00".to_owned(),
        )
    );
}

#[test]
fn event_form_values_prefill_an_all_day_event() {
    let event = CalendarEvent {
        id: None,
        summary: "Career fair".to_owned(),
        description: None,
        start: EventTime {
            date_time: None,
            date: Some("2026-08-12".to_owned()),
        },
        end: EventTime {
            date_time: None,
            date: Some("2026-08-13".to_owned()),
        },
    };
    assert_eq!(
        event_form_values(&event),
        (
            "Career fair".to_owned(),
            String::new(),
            true,
            "2026-08-12".to_owned(),
            String::new(),
        )
    );
}
