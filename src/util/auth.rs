//! Route-guard decisions and login redirect targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same decision so redirect behavior is
//! identical across pages. The guard is a UX gate only; the API still checks
//! the credential on every call.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_AFTER_LOGIN: &str = "/my-courses";

/// What a guarded route shows for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet: neutral placeholder, no redirect.
    Loading,
    /// Signed out: redirect to login, never render the destination.
    Denied,
    /// Signed in: render the destination.
    Granted,
}

pub fn decide(session: &Session) -> GuardDecision {
    match session {
        Session::Loading => GuardDecision::Loading,
        Session::Unauthenticated => GuardDecision::Denied,
        Session::Authenticated(_) => GuardDecision::Granted,
    }
}

/// The current location as a return target: path plus any query string.
///
/// `search` may come with or without its leading `?`.
pub fn return_target(pathname: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        return pathname.to_owned();
    }
    format!("{pathname}?{query}")
}

/// Login URL that returns to `from` after a successful sign-in.
pub fn login_redirect_path(from: &str) -> String {
    match safe_return_path(from) {
        Some(path) if !is_login(path) => format!("{LOGIN_PATH}?next={}", urlencoding::encode(path)),
        _ => LOGIN_PATH.to_owned(),
    }
}

/// Where to go after login, given the raw `next` query value.
///
/// Only same-origin absolute paths are honored; anything else falls back to
/// the default landing page.
pub fn post_login_destination(next: Option<&str>) -> String {
    next.and_then(safe_return_path)
        .filter(|path| !is_login(path))
        .unwrap_or(DEFAULT_AFTER_LOGIN)
        .to_owned()
}

fn safe_return_path(raw: &str) -> Option<&str> {
    let path = raw.trim();
    let same_origin = path.starts_with('/') && !path.starts_with("//") && !path.contains('\\');
    same_origin.then_some(path)
}

fn is_login(path: &str) -> bool {
    path.split(['?', '#']).next() == Some(LOGIN_PATH)
}
