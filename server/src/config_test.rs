use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.site_root, None);
}

#[test]
fn reads_all_variables() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("INKWELL_API_URL", "https://blog.example.com"),
        ("SITE_ROOT", "/srv/inkwell"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.api_url, "https://blog.example.com");
    assert_eq!(config.site_root.as_deref(), Some("/srv/inkwell"));
}

#[test]
fn trailing_slash_is_trimmed_from_api_url() {
    let config = ServerConfig::from_lookup(lookup(&[("INKWELL_API_URL", "http://api.local:5000/")])).unwrap();
    assert_eq!(config.api_url, "http://api.local:5000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("SITE_ROOT", "")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.site_root, None);
}

#[test]
fn non_numeric_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".into()));
    assert_eq!(err.to_string(), "invalid PORT: eighty");
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}

#[test]
fn api_url_without_scheme_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("INKWELL_API_URL", "localhost:5000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidApiUrl("localhost:5000".into()));
}
