use super::*;

#[test]
fn from_values_defaults_when_unset() {
    let cfg = AppConfig::from_values(None, None);
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    assert_eq!(cfg.token_key, DEFAULT_TOKEN_KEY);
    assert_eq!(cfg, AppConfig::default());
}

#[test]
fn from_values_trims_trailing_slashes() {
    let cfg = AppConfig::from_values(Some(" https://api.example.com/v1// "), None);
    assert_eq!(cfg.api_base, "https://api.example.com/v1");
}

#[test]
fn from_values_blank_values_fall_back_to_defaults() {
    let cfg = AppConfig::from_values(Some("   "), Some(""));
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    assert_eq!(cfg.token_key, DEFAULT_TOKEN_KEY);
}

#[test]
fn from_values_keeps_custom_token_key() {
    let cfg = AppConfig::from_values(None, Some("lms_token"));
    assert_eq!(cfg.token_key, "lms_token");
}
