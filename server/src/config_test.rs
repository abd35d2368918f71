use super::*;
use std::collections::HashMap;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.port, 3000);
    assert_eq!(config.backend_url, None);
}

#[test]
fn port_and_backend_are_parsed() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BACKEND_URL", " https://api.example.com/ "),
        ("BACKEND_TIMEOUT_SECS", "5"),
        ("MAX_BODY_BYTES", "1024"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.backend_url.as_deref(), Some("https://api.example.com"));
    assert_eq!(config.backend_timeout, Duration::from_secs(5));
    assert_eq!(config.max_body_bytes, 1024);
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
}

#[test]
fn blank_backend_disables_pass_through() {
    let config = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "  ")])).unwrap();
    assert_eq!(config.backend_url, None);
}

#[test]
fn backend_without_scheme_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "localhost:4000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBackendUrl(_)));
}

#[test]
fn malformed_optional_numbers_fall_back() {
    let config = ServerConfig::from_lookup(lookup(&[("BACKEND_TIMEOUT_SECS", "soon"), ("MAX_BODY_BYTES", "-1")])).unwrap();
    assert_eq!(config.backend_timeout, Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS));
    assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
}
