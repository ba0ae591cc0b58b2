use crate::conf::error::ConfigError;
use crate::conf::types::{Config, TlsField};
use std::fs;
use std::path::Path;

/// Returns the configured path for a TLS field; empty means unset.
pub fn tls_path(cfg: &Config, field: TlsField) -> &str {
    match field {
        TlsField::SslCacert => &cfg.ssl_cacert,
        TlsField::SslCert => &cfg.ssl_cert,
        TlsField::SslKey => &cfg.ssl_key,
        TlsField::WebuiSslCert => &cfg.webui_ssl_cert,
        TlsField::WebuiSslKey => &cfg.webui_ssl_key,
    }
}

/// Checks that every configured TLS path exists.
///
/// Fail-fast: the first missing path is reported and the rest are not probed.
/// Only presence is checked (lstat); content and permissions are left to the
/// TLS stack.
pub fn validate_tls_paths(cfg: &Config) -> Result<(), ConfigError> {
    for field in TlsField::ALL {
        let path = tls_path(cfg, field);
        if path.is_empty() {
            continue;
        }
        if fs::symlink_metadata(Path::new(path)).is_err() {
            return Err(ConfigError::missing_file(field, path));
        }
    }
    Ok(())
}
