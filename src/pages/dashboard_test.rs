use super::*;

fn application(id: i64, title: &str, company: &str) -> Application {
    Application {
        id,
        title: title.to_owned(),
        company: company.to_owned(),
        status: None,
        notes: None,
        date_applied: None,
    }
}

fn interview(id: i64, round: &str, scheduled_at: &str) -> Interview {
    Interview {
        id,
        application_id: None,
        round: round.to_owned(),
        scheduled_at: scheduled_at.to_owned(),
        location: None,
        notes: None,
    }
}

fn reminder(id: i64, title: &str, remind_at: &str) -> Reminder {
    Reminder {
        id,
        application_id: None,
        title: title.to_owned(),
        remind_at: remind_at.to_owned(),
        notes: None,
    }
}

#[test]
fn application_section_links_each_record() {
    let section = application_section(&Ok(vec![application(1, "Engineer", "Acme")]));
    assert_eq!(section.count, 1);
    assert_eq!(section.error, None);
    assert_eq!(
        section.items,
        vec![SectionItem {
            href: "/applications/1".to_owned(),
            label: "Engineer @ Acme".to_owned(),
        }]
    );
}

#[test]
fn application_section_caps_the_preview() {
    let items = (1..=8).map(|i| application(i, "Role", "Co")).collect();
    let section = application_section(&Ok(items));
    assert_eq!(section.count, 8);
    assert_eq!(section.items.len(), SECTION_PREVIEW_LIMIT);
}

#[test]
fn failed_section_carries_the_message_without_items() {
    let section = interview_section(&Err("request failed: 500".to_owned()));
    assert_eq!(section.count, 0);
    assert!(section.items.is_empty());
    assert_eq!(section.error, Some("request failed: 500".to_owned()));
}

#[test]
fn summarize_reports_partial_failure_without_blocking_other_sections() {
    let data = DashboardData {
        applications: Ok(vec![application(1, "Engineer", "Acme")]),
        interviews: Err("boom".to_owned()),
        reminders: Ok(vec![reminder(3, "Follow up", "2026-08-20T09:00")]),
    };
    let summary = summarize(&data);
    assert_eq!(summary.applications.count, 1);
    assert!(summary.interviews.error.is_some());
    assert_eq!(summary.reminders.items.len(), 1);
    assert_eq!(
        summary.notice,
        Some("Some data failed to load: interviews".to_owned())
    );
}

#[test]
fn interview_and_reminder_labels_include_their_dates() {
    let section = interview_section(&Ok(vec![interview(2, "Onsite", "2026-08-15T10:00")]));
    assert_eq!(section.items[0].label, "Onsite — 2026-08-15T10:00");
    let section = reminder_section(&Ok(vec![reminder(4, "Send thank-you", "2026-08-16T08:00")]));
    assert_eq!(section.items[0].href, "/reminders/4");
}
