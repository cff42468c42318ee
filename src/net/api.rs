//! Typed REST calls for every backend operation.
//!
//! Client-side (hydrate): real HTTP calls through [`crate::net::http`].
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so fetch and
//! mutation failures degrade to inline screen messages without crashing
//! hydration. Nothing is retried here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http;
use super::types;

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(username: &str) -> String {
    format!("/users/{username}")
}

#[cfg(any(test, feature = "hydrate"))]
fn application_endpoint(id: i64) -> String {
    format!("/applications/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn application_interviews_endpoint(id: i64) -> String {
    format!("/applications/{id}/interviews")
}

#[cfg(any(test, feature = "hydrate"))]
fn application_reminders_endpoint(id: i64) -> String {
    format!("/applications/{id}/reminders")
}

#[cfg(any(test, feature = "hydrate"))]
fn interview_endpoint(id: i64) -> String {
    format!("/interviews/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn reminder_endpoint(id: i64) -> String {
    format!("/reminders/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn event_endpoint(id: &str) -> String {
    format!("/google-calendar/events/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn google_callback_endpoint(code: &str) -> String {
    format!("/google/auth/callback?code={code}")
}

/// Exchange credentials for a session token via `POST /auth/token`.
///
/// # Errors
///
/// Returns the transport/status error; the login screen maps any rejection
/// to its generic credentials message.
pub async fn login(username: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp: types::TokenResponse =
            http::send_json(http::Method::Post, "/auth/token", &payload).await?;
        Ok(resp.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Register a new account via `POST /auth/register`.
///
/// # Errors
///
/// Returns the transport/status error including any response body, so the
/// signup screen can map backend constraint names to friendly messages.
pub async fn register(payload: &serde_json::Value) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: types::TokenResponse =
            http::send_json(http::Method::Post, "/auth/register", payload).await?;
        Ok(resp.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Fetch one user via `GET /users/{username}`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn fetch_user(username: &str) -> Result<types::User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: types::UserResponse = http::get_json(&user_endpoint(username)).await?;
        Ok(resp.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Update profile fields via `PATCH /users/{username}`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn update_user(username: &str, payload: &serde_json::Value) -> Result<types::User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: types::UserResponse =
            http::send_json(http::Method::Patch, &user_endpoint(username), payload).await?;
        Ok(resp.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, payload);
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Fetch all applications via `GET /applications`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn list_applications() -> Result<Vec<types::Application>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: types::ApplicationsResponse = http::get_json("/applications").await?;
        Ok(resp.applications)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Create an application via `POST /applications`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn create_application(payload: &serde_json::Value) -> Result<types::Application, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: types::ApplicationResponse =
            http::send_json(http::Method::Post, "/applications", payload).await?;
        Ok(resp.application)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Fetch one application via `GET /applications/{id}`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn fetch_application(id: i64) -> Result<types::Application, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: types::ApplicationResponse = http::get_json(&application_endpoint(id)).await?;
        Ok(resp.application)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Update an application via `PATCH /applications/{id}`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn update_application(
    id: i64,
    payload: &serde_json::Value,
) -> Result<types::Application, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: types::ApplicationResponse =
            http::send_json(http::Method::Patch, &application_endpoint(id), payload).await?;
        Ok(resp.application)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Delete an application via `DELETE /applications/{id}`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn delete_application(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        http::delete(&application_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Fetch interviews linked to one application.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn application_interviews(id: i64) -> Result<Vec<types::Interview>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: types::InterviewsResponse =
            http::get_json(&application_interviews_endpoint(id)).await?;
        Ok(resp.interviews)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Fetch reminders linked to one application.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn application_reminders(id: i64) -> Result<Vec<types::Reminder>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: types::RemindersResponse =
            http::get_json(&application_reminders_endpoint(id)).await?;
        Ok(resp.reminders)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Fetch all interviews via `GET /interviews`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn list_interviews() -> Result<Vec<types::Interview>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: types::InterviewsResponse = http::get_json("/interviews").await?;
        Ok(resp.interviews)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Create an interview via `POST /interviews`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn create_interview(payload: &serde_json::Value) -> Result<types::Interview, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: types::InterviewResponse =
            http::send_json(http::Method::Post, "/interviews", payload).await?;
        Ok(resp.interview)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Fetch one interview via `GET /interviews/{id}`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn fetch_interview(id: i64) -> Result<types::Interview, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: types::InterviewResponse = http::get_json(&interview_endpoint(id)).await?;
        Ok(resp.interview)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Update an interview via `PATCH /interviews/{id}`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn update_interview(
    id: i64,
    payload: &serde_json::Value,
) -> Result<types::Interview, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: types::InterviewResponse =
            http::send_json(http::Method::Patch, &interview_endpoint(id), payload).await?;
        Ok(resp.interview)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Delete an interview via `DELETE /interviews/{id}`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn delete_interview(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        http::delete(&interview_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Fetch all reminders via `GET /reminders`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn list_reminders() -> Result<Vec<types::Reminder>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: types::RemindersResponse = http::get_json("/reminders").await?;
        Ok(resp.reminders)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Create a reminder via `POST /reminders`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn create_reminder(payload: &serde_json::Value) -> Result<types::Reminder, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: types::ReminderResponse =
            http::send_json(http::Method::Post, "/reminders", payload).await?;
        Ok(resp.reminder)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Fetch one reminder via `GET /reminders/{id}`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn fetch_reminder(id: i64) -> Result<types::Reminder, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: types::ReminderResponse = http::get_json(&reminder_endpoint(id)).await?;
        Ok(resp.reminder)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Update a reminder via `PATCH /reminders/{id}`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn update_reminder(id: i64, payload: &serde_json::Value) -> Result<types::Reminder, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: types::ReminderResponse =
            http::send_json(http::Method::Patch, &reminder_endpoint(id), payload).await?;
        Ok(resp.reminder)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Delete a reminder via `DELETE /reminders/{id}`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn delete_reminder(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        http::delete(&reminder_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Fetch calendar events via `GET /google-calendar/events`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn list_events() -> Result<Vec<types::CalendarEvent>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: types::EventsResponse = http::get_json("/google-calendar/events").await?;
        Ok(resp.items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Create a calendar event via `POST /google-calendar/events`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn create_event(payload: &serde_json::Value) -> Result<types::CalendarEvent, String> {
    #[cfg(feature = "hydrate")]
    {
        http::send_json(http::Method::Post, "/google-calendar/events", payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Replace a calendar event via `PUT /google-calendar/events/{id}`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn update_event(id: &str, payload: &serde_json::Value) -> Result<types::CalendarEvent, String> {
    #[cfg(feature = "hydrate")]
    {
        http::send_json(http::Method::Put, &event_endpoint(id), payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Delete a calendar event via `DELETE /google-calendar/events/{id}`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn delete_event(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        http::delete(&event_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Exchange an OAuth2 authorization code via
/// `GET /google/auth/callback?code=...`.
///
/// # Errors
///
/// Returns the transport/status error.
pub async fn exchange_google_code(code: &str) -> Result<types::GoogleTokens, String> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json(&google_callback_endpoint(code)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = code;
        Err(http::SERVER_STUB.to_owned())
    }
}

/// Outcome of the dashboard's three independent collection fetches.
///
/// Each source settles on its own so one failing collection never blocks the
/// others from rendering.
#[derive(Debug)]
pub struct DashboardData {
    pub applications: Result<Vec<types::Application>, String>,
    pub interviews: Result<Vec<types::Interview>, String>,
    pub reminders: Result<Vec<types::Reminder>, String>,
}

/// Fetch all three dashboard collections concurrently, settle-all style.
pub async fn fetch_dashboard_data() -> DashboardData {
    #[cfg(feature = "hydrate")]
    {
        let (applications, interviews, reminders) =
            futures::join!(list_applications(), list_interviews(), list_reminders());
        DashboardData {
            applications,
            interviews,
            reminders,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DashboardData {
            applications: Err(http::SERVER_STUB.to_owned()),
            interviews: Err(http::SERVER_STUB.to_owned()),
            reminders: Err(http::SERVER_STUB.to_owned()),
        }
    }
}

/// Summarize partial failure across dashboard sources, if any.
#[must_use]
pub fn partial_failure_notice(data: &DashboardData) -> Option<String> {
    let mut failed = Vec::new();
    if data.applications.is_err() {
        failed.push("applications");
    }
    if data.interviews.is_err() {
        failed.push("interviews");
    }
    if data.reminders.is_err() {
        failed.push("reminders");
    }
    if failed.is_empty() {
        None
    } else {
        Some(format!("Some data failed to load: {}", failed.join(", ")))
    }
}
