//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, validation, redirect
//! timing) and delegates rendering details to `components`.

pub mod application_detail;
pub mod application_form;
pub mod applications;
pub mod calendar;
pub mod dashboard;
pub mod home;
pub mod interview_detail;
pub mod interview_form;
pub mod interviews;
pub mod login;
pub mod profile;
pub mod reminder_detail;
pub mod reminder_form;
pub mod reminders;
pub mod signup;

/// Delay before a detail screen's not-found redirect fires.
#[cfg(feature = "hydrate")]
pub(crate) const REDIRECT_DELAY_MS: u32 = 2500;
/// Delay before a form navigates away after a success banner.
#[cfg(feature = "hydrate")]
pub(crate) const SUCCESS_DELAY_MS: u32 = 1500;
