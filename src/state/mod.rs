//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the plain status model; `auth` owns it and mirrors it into
//! Leptos context for components. `remote` is the per-page fetch status.

pub mod auth;
pub mod remote;
pub mod session;
