//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and catalog cards while reading session state
//! from Leptos context providers. `protected_route` is the route guard.

pub mod course_card;
pub mod nav_bar;
pub mod protected_route;
pub mod skeleton;
