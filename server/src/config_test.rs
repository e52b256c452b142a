use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
    }
}

#[test]
fn from_env_defaults_to_all_interfaces_on_3000() {
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");

    unsafe { clear_server_env() };
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, bind_addr: DEFAULT_BIND_ADDR });
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(
        ServerConfig::from_values(Some("70000"), None),
        Err(ConfigError::Invalid { var: "PORT", value: "70000".to_owned() })
    );
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = ServerConfig::from_values(None, Some("localhost")).unwrap_err();
    assert_eq!(err.to_string(), "invalid BIND_ADDR: \"localhost\"");
}

#[test]
fn ipv6_bind_addr_is_accepted() {
    let cfg = ServerConfig::from_values(Some("3001"), Some("::1")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3001");
}
