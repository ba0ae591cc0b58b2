use crate::conf::types::{TlsIdentity, Whitelist};
use serde::Serialize;

pub const DEFAULT_ADDR_DEV: &str = ":5912";
pub const DEFAULT_ADDR_USER: &str = ":5913";
pub const DEFAULT_DB: &str = "sqlite://rttys.db";

/// Fully resolved runtime configuration.
///
/// Built once at startup by [`crate::conf::load_config`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Listen address for device connections, e.g. ":5912"
    pub addr_dev: String,

    /// Listen address for the user-facing web UI
    pub addr_user: String,

    /// Listen address for the HTTP proxy. Empty disables it.
    pub addr_http_proxy: String,

    pub disable_sign_up: bool,

    pub http_proxy_redir_url: String,
    pub http_proxy_redir_domain: String,

    /// Not wired to the file or the flags; always keeps its zero default.
    pub http_proxy_port: i64,

    /// Device-facing certificate.
    pub ssl_cert: String,

    /// Device-facing private key.
    pub ssl_key: String,

    /// CA used to verify device client certificates (mTLS).
    pub ssl_cacert: String,

    /// Mirrors `ssl_cert` unless `separate_ssl_config` is set.
    pub webui_ssl_cert: String,

    /// Mirrors `ssl_key` unless `separate_ssl_config` is set.
    pub webui_ssl_key: String,

    pub token: String,
    pub dev_auth_url: String,
    pub white_list: Whitelist,
    pub db: String,
    pub local_auth: bool,
    pub separate_ssl_config: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr_dev: DEFAULT_ADDR_DEV.to_string(),
            addr_user: DEFAULT_ADDR_USER.to_string(),
            addr_http_proxy: String::new(),
            disable_sign_up: false,
            http_proxy_redir_url: String::new(),
            http_proxy_redir_domain: String::new(),
            http_proxy_port: 0,
            ssl_cert: String::new(),
            ssl_key: String::new(),
            ssl_cacert: String::new(),
            webui_ssl_cert: String::new(),
            webui_ssl_key: String::new(),
            token: String::new(),
            dev_auth_url: String::new(),
            white_list: Whitelist::AllowAll,
            db: DEFAULT_DB.to_string(),
            local_auth: true,
            separate_ssl_config: false,
        }
    }
}

impl Config {
    /// Whether a client with the given identifier may connect.
    pub fn allows(&self, id: &str) -> bool {
        self.white_list.allows(id)
    }

    pub fn device_tls(&self) -> Option<TlsIdentity> {
        TlsIdentity::from_paths(&self.ssl_cert, &self.ssl_key)
    }

    pub fn webui_tls(&self) -> Option<TlsIdentity> {
        TlsIdentity::from_paths(&self.webui_ssl_cert, &self.webui_ssl_key)
    }

    /// Device mTLS is on when a CA is configured.
    pub fn device_mtls(&self) -> bool {
        !self.ssl_cacert.is_empty()
    }
}
