use super::*;

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint("testuser"), "/users/testuser");
}

#[test]
fn application_endpoints_format_expected_paths() {
    assert_eq!(application_endpoint(1), "/applications/1");
    assert_eq!(application_interviews_endpoint(1), "/applications/1/interviews");
    assert_eq!(application_reminders_endpoint(1), "/applications/1/reminders");
}

#[test]
fn interview_and_reminder_endpoints_format_expected_paths() {
    assert_eq!(interview_endpoint(7), "/interviews/7");
    assert_eq!(reminder_endpoint(9), "/reminders/9");
}

#[test]
fn event_endpoint_formats_expected_path() {
    assert_eq!(event_endpoint("evt_1"), "/google-calendar/events/evt_1");
}

#[test]
fn google_callback_endpoint_carries_code() {
    assert_eq!(google_callback_endpoint("4/abc"), "/google/auth/callback?code=4/abc");
}

#[test]
fn partial_failure_notice_is_silent_when_all_settle_ok() {
    let data = DashboardData {
        applications: Ok(Vec::new()),
        interviews: Ok(Vec::new()),
        reminders: Ok(Vec::new()),
    };
    assert_eq!(partial_failure_notice(&data), None);
}

#[test]
fn partial_failure_notice_names_only_the_failed_sources() {
    let data = DashboardData {
        applications: Ok(Vec::new()),
        interviews: Err("boom".to_owned()),
        reminders: Err("boom".to_owned()),
    };
    assert_eq!(
        partial_failure_notice(&data),
        Some("Some data failed to load: interviews, reminders".to_owned())
    );
}

#[test]
fn partial_failure_notice_reports_a_single_failure() {
    let data = DashboardData {
        applications: Err("boom".to_owned()),
        interviews: Ok(Vec::new()),
        reminders: Ok(Vec::new()),
    };
    assert_eq!(
        partial_failure_notice(&data),
        Some("Some data failed to load: applications".to_owned())
    );
}
