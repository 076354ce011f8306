//! Load status for page-level API data.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use crate::net::api::ApiError;

/// One fetch as a page sees it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Remote<T> {
    #[default]
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(failure_message(&err)),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// User-facing text for a failed API call.
pub fn failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => "Your session has ended. Please sign in again.".to_owned(),
        ApiError::Forbidden => "You do not have access to this page.".to_owned(),
        ApiError::Status(404) => "Not found.".to_owned(),
        ApiError::Network(_) => "Could not reach the server.".to_owned(),
        ApiError::Status(_) | ApiError::Decode(_) => format!("Something went wrong ({err})."),
    }
}
