use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_parts(None, None).unwrap();
    assert_eq!(cfg.addr, SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT));
}

#[test]
fn blank_values_take_defaults() {
    let cfg = HostConfig::from_parts(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.addr.port(), DEFAULT_PORT);
    assert_eq!(cfg.addr.ip(), DEFAULT_HOST);
}

#[test]
fn explicit_host_and_port() {
    let cfg = HostConfig::from_parts(Some("127.0.0.1"), Some("8080")).unwrap();
    assert_eq!(cfg.addr.to_string(), "127.0.0.1:8080");
}

#[test]
fn ipv6_host() {
    let cfg = HostConfig::from_parts(Some("::1"), Some("4000")).unwrap();
    assert_eq!(cfg.addr.to_string(), "[::1]:4000");
}

#[test]
fn rejects_bad_port() {
    assert_eq!(
        HostConfig::from_parts(None, Some("70000")),
        Err(ConfigError::InvalidPort("70000".into()))
    );
    assert_eq!(HostConfig::from_parts(None, Some("abc")), Err(ConfigError::InvalidPort("abc".into())));
}

#[test]
fn rejects_hostname() {
    let err = HostConfig::from_parts(Some("localhost"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidAddr("localhost".into()));
    assert!(err.to_string().contains("STUDIO_ADDR"));
}
