//! Networking modules for the remote course API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and status classification, and `types` defines
//! the JSON schema shared with the API.

pub mod api;
pub mod types;
