use super::*;

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_valid_values() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 443 ")), Ok(443));
}

#[test]
fn parse_port_rejects_zero_and_garbage() {
    assert_eq!(parse_port(Some("0")), Err(ConfigError::InvalidPort { raw: "0".into() }));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort { raw: "70000".into() }));
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort { raw: "http".into() }));
}

// =============================================================================
// parse_host
// =============================================================================

#[test]
fn parse_host_defaults_to_unspecified() {
    assert_eq!(parse_host(None), Ok(DEFAULT_HOST));
    assert_eq!(parse_host(Some("")), Ok(DEFAULT_HOST));
}

#[test]
fn parse_host_accepts_ipv4_and_ipv6() {
    assert_eq!(parse_host(Some("127.0.0.1")), Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    assert!(parse_host(Some("::1")).is_ok_and(|ip| ip.is_loopback()));
}

#[test]
fn parse_host_rejects_hostnames() {
    assert_eq!(parse_host(Some("localhost")), Err(ConfigError::InvalidHost { raw: "localhost".into() }));
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn default_config_binds_all_interfaces_on_3000() {
    let config = ServerConfig::default();
    assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn config_error_messages_name_the_variable() {
    let err = ConfigError::InvalidPort { raw: "x".into() };
    assert!(err.to_string().starts_with("invalid PORT"));
}
