use super::*;

fn application(id: i64) -> Application {
    Application {
        id,
        title: "Engineer".to_owned(),
        company: "Acme".to_owned(),
        status: None,
        notes: None,
        date_applied: None,
    }
}

#[test]
fn card_meta_joins_status_and_date() {
    let mut app = application(1);
    app.status = Some("applied".to_owned());
    app.date_applied = Some("2026-08-01".to_owned());
    assert_eq!(card_meta(&app), Some("applied · 2026-08-01".to_owned()));
}

#[test]
fn card_meta_uses_whichever_field_is_present() {
    let mut app = application(1);
    app.status = Some("offer".to_owned());
    assert_eq!(card_meta(&app), Some("offer".to_owned()));

    let mut app = application(1);
    app.date_applied = Some("2026-08-01".to_owned());
    assert_eq!(card_meta(&app), Some("2026-08-01".to_owned()));
}

#[test]
fn card_meta_is_absent_without_either_field() {
    assert_eq!(card_meta(&application(1)), None);
}

#[test]
fn confirmed_delete_splices_exactly_the_target_application() {
    let mut state = ListState::loaded(vec![application(1), application(2), application(3)]);
    state.remove_where(|app| app.id == 2);
    let ids: Vec<i64> = state.items.iter().map(|app| app.id).collect();
    assert_eq!(ids, vec![1, 3]);
}
