use super::*;

/// # Safety
/// Both env tests touch the same variables, so they run as one test body.
unsafe fn clear_client_env() {
    unsafe {
        std::env::remove_var(BASE_URL_VAR);
        std::env::remove_var(TIMEOUT_VAR);
    }
}

#[test]
fn from_env_defaults_and_overrides() {
    unsafe { clear_client_env() };

    let cfg = ClientConfig::from_env();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.request_timeout_secs, None);
    assert_eq!(cfg.request_timeout(), None);

    unsafe {
        std::env::set_var(BASE_URL_VAR, "https://emoji.example.test/");
        std::env::set_var(TIMEOUT_VAR, "15");
    }

    let cfg = ClientConfig::from_env();
    assert_eq!(cfg.base_url, "https://emoji.example.test");
    assert_eq!(cfg.request_timeout(), Some(Duration::from_secs(15)));

    unsafe { clear_client_env() };
}

#[test]
fn new_trims_trailing_slashes() {
    assert_eq!(ClientConfig::new("http://127.0.0.1:8000//").base_url, "http://127.0.0.1:8000");
    assert_eq!(ClientConfig::new("  /").base_url, "");
}

#[test]
fn from_values_ignores_invalid_timeout() {
    assert_eq!(ClientConfig::from_values(None, Some("soon")).request_timeout_secs, None);
    assert_eq!(ClientConfig::from_values(None, Some("0")).request_timeout_secs, None);
    assert_eq!(ClientConfig::from_values(None, Some(" 30 ")).request_timeout_secs, Some(30));
}

#[test]
fn from_values_missing_base_is_same_origin() {
    let cfg = ClientConfig::from_values(None, None);
    assert_eq!(cfg, ClientConfig::default());
}
