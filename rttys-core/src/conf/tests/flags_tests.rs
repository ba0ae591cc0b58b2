use crate::conf::flags::{FlagSource, apply_flags};
use crate::conf::tests::test_helpers::matches;
use crate::conf::types::{Config, Whitelist};
use pretty_assertions::assert_eq;

#[test]
fn unset_flags_leave_prior_layer_untouched() {
    // Arrange
    let m = matches(&[]);
    let mut cfg = Config {
        addr_dev: ":6000".to_string(),
        token: "from-file".to_string(),
        local_auth: false,
        white_list: Whitelist::from_ids("alice"),
        ..Default::default()
    };
    let before = cfg.clone();

    // Act
    apply_flags(&mut cfg, &FlagSource::new(&m));

    // Assert
    assert_eq!(cfg, before);
}

#[test]
fn explicit_flags_override_prior_layer() {
    // Arrange
    let m = matches(&[
        "--addr-dev",
        ":7000",
        "--addr-user=:7001",
        "--addr-http-proxy",
        ":7002",
        "--http-proxy-redir-url",
        "https://example.com/",
        "--http-proxy-redir-domain",
        ".example.com",
        "--dev-auth-url",
        "http://auth/",
        "--token",
        "from-flag",
        "--db",
        "sqlite://other.db",
        "--ssl-cacert",
        "/ca.pem",
    ]);
    let mut cfg = Config {
        addr_dev: ":6000".to_string(),
        token: "from-file".to_string(),
        ..Default::default()
    };

    // Act
    apply_flags(&mut cfg, &FlagSource::new(&m));

    // Assert
    assert_eq!(cfg.addr_dev, ":7000");
    assert_eq!(cfg.addr_user, ":7001");
    assert_eq!(cfg.addr_http_proxy, ":7002");
    assert_eq!(cfg.http_proxy_redir_url, "https://example.com/");
    assert_eq!(cfg.http_proxy_redir_domain, ".example.com");
    assert_eq!(cfg.dev_auth_url, "http://auth/");
    assert_eq!(cfg.token, "from-flag");
    assert_eq!(cfg.db, "sqlite://other.db");
    assert_eq!(cfg.ssl_cacert, "/ca.pem");
}

#[test]
fn boolean_flags_accept_bare_and_explicit_values() {
    // Arrange
    let m = matches(&["--disable-sign-up", "--local-auth=false"]);
    let mut cfg = Config::default();

    // Act
    apply_flags(&mut cfg, &FlagSource::new(&m));

    // Assert
    assert!(cfg.disable_sign_up);
    assert!(!cfg.local_auth);
}

#[test]
fn shared_tls_mirrors_device_identity_over_file_values() {
    // Arrange
    let m = matches(&["--ssl-cert", "/dev/cert.pem", "--ssl-key", "/dev/key.pem"]);
    let mut cfg = Config {
        webui_ssl_cert: "/file/webui-cert.pem".to_string(),
        webui_ssl_key: "/file/webui-key.pem".to_string(),
        ..Default::default()
    };

    // Act
    apply_flags(&mut cfg, &FlagSource::new(&m));

    // Assert
    assert_eq!(cfg.webui_ssl_cert, "/dev/cert.pem");
    assert_eq!(cfg.webui_ssl_key, "/dev/key.pem");
}

#[test]
fn shared_tls_ignores_webui_flags() {
    // Arrange
    let m = matches(&["--ssl-cert", "/dev/cert.pem", "--webui-ssl-cert", "/w/cert.pem"]);
    let mut cfg = Config::default();

    // Act
    apply_flags(&mut cfg, &FlagSource::new(&m));

    // Assert
    assert_eq!(cfg.webui_ssl_cert, "/dev/cert.pem");
    assert_eq!(cfg.webui_ssl_key, "");
}

#[test]
fn separate_tls_takes_independent_webui_flags() {
    // Arrange
    let m = matches(&[
        "--ssl-cert",
        "/dev/cert.pem",
        "--ssl-key",
        "/dev/key.pem",
        "--separate-ssl-config",
        "--webui-ssl-cert",
        "/w/cert.pem",
        "--webui-ssl-key",
        "/w/key.pem",
    ]);
    let mut cfg = Config::default();

    // Act
    apply_flags(&mut cfg, &FlagSource::new(&m));

    // Assert
    assert!(cfg.separate_ssl_config);
    assert_eq!(cfg.webui_ssl_cert, "/w/cert.pem");
    assert_eq!(cfg.webui_ssl_key, "/w/key.pem");
}

#[test]
fn separate_tls_from_file_keeps_file_webui_values() {
    // Arrange
    let m = matches(&["--ssl-cert", "/dev/cert.pem"]);
    let mut cfg = Config {
        separate_ssl_config: true,
        webui_ssl_cert: "/file/webui-cert.pem".to_string(),
        webui_ssl_key: "/file/webui-key.pem".to_string(),
        ..Default::default()
    };

    // Act
    apply_flags(&mut cfg, &FlagSource::new(&m));

    // Assert
    assert_eq!(cfg.webui_ssl_cert, "/file/webui-cert.pem");
    assert_eq!(cfg.webui_ssl_key, "/file/webui-key.pem");
}

#[test]
fn separate_tls_flag_false_overrides_file() {
    // Arrange
    let m = matches(&["--separate-ssl-config=false"]);
    let mut cfg = Config {
        separate_ssl_config: true,
        ssl_cert: "/dev/cert.pem".to_string(),
        webui_ssl_cert: "/file/webui-cert.pem".to_string(),
        ..Default::default()
    };

    // Act
    apply_flags(&mut cfg, &FlagSource::new(&m));

    // Assert
    assert!(!cfg.separate_ssl_config);
    assert_eq!(cfg.webui_ssl_cert, "/dev/cert.pem");
}

#[test]
fn white_list_flag_wildcard_clears_file_restriction() {
    // Arrange
    let m = matches(&["--white-list", "*"]);
    let mut cfg = Config {
        white_list: Whitelist::from_ids("alice bob"),
        ..Default::default()
    };

    // Act
    apply_flags(&mut cfg, &FlagSource::new(&m));

    // Assert
    assert_eq!(cfg.white_list, Whitelist::AllowAll);
}

#[test]
fn white_list_flag_replaces_file_ids() {
    // Arrange
    let m = matches(&["--white-list", "carol  dave"]);
    let mut cfg = Config {
        white_list: Whitelist::from_ids("alice bob"),
        ..Default::default()
    };

    // Act
    apply_flags(&mut cfg, &FlagSource::new(&m));

    // Assert
    assert_eq!(cfg.white_list, Whitelist::from_ids("carol dave"));
    assert!(!cfg.allows("alice"));
}

#[test]
fn is_set_is_false_for_unregistered_flags() {
    // Arrange
    let m = matches(&["--token", "t"]);
    let flags = FlagSource::new(&m);

    // Act / Assert
    assert!(flags.is_set("token"));
    assert!(!flags.is_set("addr-dev"));
    assert!(!flags.is_set("http-proxy-port"));
}
