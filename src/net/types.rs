//! Wire DTOs for the course API boundary.
//!
//! DESIGN
//! ======
//! Optional fields carry serde defaults so older API deployments that omit
//! them still deserialize instead of failing the whole page.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the `/account-info` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Account role (e.g. `"student"`, `"instructor"`, `"admin"`).
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "student".to_owned()
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }
}

/// Login form payload for `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub identifier: String,
    pub secret: String,
}

/// Successful `POST /login` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token to persist and attach to later requests.
    pub credential: String,
    pub user: User,
}

/// A catalog course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    /// Short marketing blurb shown on cards.
    #[serde(default)]
    pub summary: String,
    /// Instructor display name, if assigned.
    #[serde(default)]
    pub instructor: Option<String>,
    /// Number of lessons in the course.
    #[serde(default)]
    pub lessons: u32,
}
