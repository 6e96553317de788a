use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("BIND_ADDR", "")])).unwrap();
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn reads_port_and_bind_addr() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn accepts_ipv6_bind_addr() {
    let config = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "::1")])).unwrap();
    assert_eq!(config.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".to_owned()));
    assert_eq!(err.to_string(), "invalid PORT \"70000\"");
}

#[test]
fn rejects_bad_bind_addr() {
    let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr("localhost".to_owned()));
}
