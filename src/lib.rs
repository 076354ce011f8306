//! # coursehub
//!
//! Leptos + WASM frontend for the course catalog and learning-management
//! site. Public pages browse the catalog; student and admin pages sit behind
//! a client-side route guard driven by a single session provider.
//!
//! This crate contains pages, components, session state, the route table,
//! and the REST helpers that talk to the remote course API.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;
