//! Networking modules for the REST backend and calendar proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` attaches the bearer token to every outgoing request, `api` exposes
//! typed endpoint calls, and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
