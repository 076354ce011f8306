//! The client's current belief about who is signed in.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Authentication status. A user record exists only in `Authenticated`.
///
/// Starts in `Loading` because the stored credential has not been checked yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    Unauthenticated,
    #[default]
    Loading,
    Authenticated(User),
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unauthenticated | Self::Loading => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Loading => "loading",
            Self::Authenticated(_) => "authenticated",
        }
    }
}
