//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetching and delegates rendering details to
//! `components`. Pages behind the guard assume a signed-in session but still
//! route every authorized call through the session provider.

pub mod admin_courses;
pub mod admin_users;
pub mod catalog;
pub mod course;
pub mod home;
pub mod login;
pub mod my_courses;
pub mod not_found;
