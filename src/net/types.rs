//! Wire DTOs for the REST backend and the calendar proxy.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads (camelCase field names,
//! wrapped response envelopes) so serde stays lossless and screens can stay
//! schema-driven. Records are transient per-screen copies; nothing here is
//! cached across navigation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by `GET /users/{username}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A tracked job application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Position title.
    pub title: String,
    pub company: String,
    /// Pipeline stage (e.g. `"applied"`, `"interviewing"`, `"offer"`).
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Application date as `YYYY-MM-DD`, when recorded.
    #[serde(default)]
    pub date_applied: Option<String>,
}

/// A scheduled interview round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Owning application, when linked.
    #[serde(default)]
    pub application_id: Option<i64>,
    /// Round description (e.g. `"Phone screen"`, `"Onsite"`).
    pub round: String,
    /// Scheduled date-time, carried as the wire string (feeds
    /// `datetime-local` inputs unchanged).
    pub scheduled_at: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A dated reminder, optionally linked to an application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default)]
    pub application_id: Option<i64>,
    pub title: String,
    /// Due date-time, carried as the wire string.
    pub remind_at: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Event start/end as sent by the calendar provider: either a timed
/// `dateTime` (RFC 3339) or an all-day `date` (`YYYY-MM-DD`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTime {
    #[serde(rename = "dateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// A calendar event from the `/google-calendar/events` proxy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default)]
    pub id: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start: EventTime,
    pub end: EventTime,
}

/// Normalized display window for a calendar event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventWindow {
    pub start: chrono::NaiveDateTime,
    pub end: chrono::NaiveDateTime,
    pub all_day: bool,
}

impl CalendarEvent {
    /// Normalize the provider's start/end shapes into a display window.
    ///
    /// # Errors
    ///
    /// Returns a message when either edge carries neither a parseable
    /// `dateTime` nor `date`.
    pub fn window(&self) -> Result<EventWindow, String> {
        let (start, all_day) = parse_event_time(&self.start)?;
        let (end, _) = parse_event_time(&self.end)?;
        Ok(EventWindow {
            start,
            end,
            all_day,
        })
    }
}

fn parse_event_time(time: &EventTime) -> Result<(chrono::NaiveDateTime, bool), String> {
    if let Some(raw) = &time.date_time {
        let parsed = chrono::DateTime::parse_from_rfc3339(raw)
            .map_err(|e| format!("bad event dateTime {raw:?}: {e}"))?;
        return Ok((parsed.naive_local(), false));
    }
    if let Some(raw) = &time.date {
        let day = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| format!("bad event date {raw:?}: {e}"))?;
        return Ok((day.and_time(chrono::NaiveTime::MIN), true));
    }
    Err("event time carries neither dateTime nor date".to_owned())
}

/// Envelope for `POST /auth/token` and `POST /auth/register`.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Envelope for user reads and updates.
#[derive(Clone, Debug, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

/// Envelope for `GET /applications`.
#[derive(Clone, Debug, Deserialize)]
pub struct ApplicationsResponse {
    pub applications: Vec<Application>,
}

/// Envelope for single-application reads and writes.
#[derive(Clone, Debug, Deserialize)]
pub struct ApplicationResponse {
    pub application: Application,
}

/// Envelope for interview collections.
#[derive(Clone, Debug, Deserialize)]
pub struct InterviewsResponse {
    pub interviews: Vec<Interview>,
}

/// Envelope for single-interview reads and writes.
#[derive(Clone, Debug, Deserialize)]
pub struct InterviewResponse {
    pub interview: Interview,
}

/// Envelope for reminder collections.
#[derive(Clone, Debug, Deserialize)]
pub struct RemindersResponse {
    pub reminders: Vec<Reminder>,
}

/// Envelope for single-reminder reads and writes.
#[derive(Clone, Debug, Deserialize)]
pub struct ReminderResponse {
    pub reminder: Reminder,
}

/// Envelope for the calendar proxy's event list (the provider's `items`
/// shape passed through).
#[derive(Clone, Debug, Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub items: Vec<CalendarEvent>,
}

/// Tokens returned by the OAuth2 callback exchange.
#[derive(Clone, Debug, Deserialize)]
pub struct GoogleTokens {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
