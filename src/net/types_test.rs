use super::*;

#[test]
fn user_round_trips_camel_case_fields() {
    let raw = serde_json::json!({
        "username": "testuser",
        "firstName": "Test",
        "lastName": "User",
        "email": "test@example.com"
    });
    let user: User = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(user.first_name, "Test");
    assert_eq!(serde_json::to_value(&user).unwrap(), raw);
}

#[test]
fn application_deserializes_with_optional_fields_absent() {
    let app: Application = serde_json::from_value(serde_json::json!({
        "id": 1,
        "title": "Engineer",
        "company": "Acme"
    }))
    .unwrap();
    assert_eq!(app.id, 1);
    assert_eq!(app.status, None);
    assert_eq!(app.date_applied, None);
}

#[test]
fn application_id_tolerates_float_shaped_numbers() {
    let app: Application = serde_json::from_value(serde_json::json!({
        "id": 7.0,
        "title": "Engineer",
        "company": "Acme"
    }))
    .unwrap();
    assert_eq!(app.id, 7);
}

#[test]
fn application_id_rejects_fractional_numbers() {
    let result: Result<Application, _> = serde_json::from_value(serde_json::json!({
        "id": 7.5,
        "title": "Engineer",
        "company": "Acme"
    }));
    assert!(result.is_err());
}

#[test]
fn interview_reads_camel_case_wire_fields() {
    let interview: Interview = serde_json::from_value(serde_json::json!({
        "id": 3,
        "applicationId": 1,
        "round": "Phone screen",
        "scheduledAt": "2026-08-10T14:00",
        "location": "Zoom"
    }))
    .unwrap();
    assert_eq!(interview.application_id, Some(1));
    assert_eq!(interview.scheduled_at, "2026-08-10T14:00");
}

#[test]
fn timed_event_window_parses_rfc3339() {
    let event = CalendarEvent {
        id: Some("e1".to_owned()),
        summary: "Onsite".to_owned(),
        description: None,
        start: EventTime {
            date_time: Some("2026-08-10T14:00:00-04:00".to_owned()),
            date: None,
        },
        end: EventTime {
            date_time: Some("2026-08-10T15:00:00-04:00".to_owned()),
            date: None,
        },
    };
    let window = event.window().unwrap();
    assert!(!window.all_day);
    assert_eq!(
        window.start,
        chrono::NaiveDate::from_ymd_opt(2026, 8, 10)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap()
    );
    assert_eq!(window.end.time(), chrono::NaiveTime::from_hms_opt(15, 0, 0).unwrap());
}

#[test]
fn all_day_event_window_starts_at_midnight() {
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
    let window = event.window().unwrap();
    assert!(window.all_day);
    assert_eq!(window.start.time(), chrono::NaiveTime::MIN);
    assert_eq!(window.start.date(), chrono::NaiveDate::from_ymd_opt(2026, 8, 12).unwrap());
}

#[test]
fn event_window_rejects_empty_edges() {
    let event = CalendarEvent {
        id: None,
        summary: "Broken".to_owned(),
        description: None,
        start: EventTime::default(),
        end: EventTime::default(),
    };
    assert!(event.window().is_err());
}

#[test]
fn event_time_serializes_only_the_populated_variant() {
    let timed = EventTime {
        date_time: Some("2026-08-10T14:00:00Z".to_owned()),
        date: None,
    };
    assert_eq!(
        serde_json::to_value(&timed).unwrap(),
        serde_json::json!({ "dateTime": "2026-08-10T14:00:00Z" })
    );
}

#[test]
fn events_response_defaults_to_empty_items() {
    let resp: EventsResponse = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(resp.items.is_empty());
}
