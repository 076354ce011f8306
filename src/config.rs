//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! A static WASM bundle has no process environment at runtime, so settings are
//! captured from the build environment (`trunk build`) with sane defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";
pub const DEFAULT_TOKEN_KEY: &str = "coursehub_token";

/// Resolved client settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the course REST API, without a trailing slash.
    pub api_base: String,
    /// `localStorage` key holding the bearer credential.
    pub token_key: String,
}

impl AppConfig {
    /// Build config from build-time environment variables.
    ///
    /// Optional:
    /// - `COURSEHUB_API_BASE`: default `http://localhost:8080/api`
    /// - `COURSEHUB_TOKEN_KEY`: default `coursehub_token`
    pub fn from_env() -> Self {
        Self::from_values(option_env!("COURSEHUB_API_BASE"), option_env!("COURSEHUB_TOKEN_KEY"))
    }

    /// Build config from raw optional values, applying defaults and normalization.
    pub fn from_values(api_base: Option<&str>, token_key: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .map(|raw| raw.trim_end_matches('/'))
            .filter(|raw| !raw.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_owned();
        let token_key = token_key
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .unwrap_or(DEFAULT_TOKEN_KEY)
            .to_owned();
        Self { api_base, token_key }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
