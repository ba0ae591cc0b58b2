use crate::conf::overlay::{OverlaySource, overlay};
use crate::conf::types::{Config, WILDCARD, Whitelist};
use clap::ArgMatches;
use clap::parser::ValueSource;
use std::any::Any;
use tracing::debug;

/// Command-line flags as an overlay layer.
///
/// A flag only provides a value when the caller set it explicitly (on the
/// command line or through its environment variable). Values that fall back
/// to a registered default are treated as absent.
#[derive(Debug, Clone, Copy)]
pub struct FlagSource<'a> {
    matches: &'a ArgMatches,
}

impl<'a> FlagSource<'a> {
    pub fn new(matches: &'a ArgMatches) -> Self {
        Self { matches }
    }

    pub fn is_set(&self, id: &str) -> bool {
        // value_source panics on ids clap never registered.
        let known = self.matches.ids().any(|known| known.as_str() == id);
        known
            && matches!(
                self.matches.value_source(id),
                Some(source) if source != ValueSource::DefaultValue
            )
    }

    fn get<T>(&self, id: &str) -> Option<T>
    where
        T: Any + Clone + Send + Sync + 'static,
    {
        if !self.is_set(id) {
            return None;
        }
        self.matches.try_get_one::<T>(id).ok().flatten().cloned()
    }
}

impl OverlaySource for FlagSource<'_> {
    fn string(&self, key: &str) -> Option<String> {
        self.get::<String>(key)
    }

    fn integer(&self, key: &str) -> Option<i64> {
        self.get::<i64>(key)
    }

    fn boolean(&self, key: &str) -> Option<bool> {
        self.get::<bool>(key)
    }
}

/// Overlays explicitly set flags onto `cfg`. Runs whether or not a
/// configuration file was applied.
pub fn apply_flags(cfg: &mut Config, flags: &FlagSource<'_>) {
    overlay(flags, "addr-dev", &mut cfg.addr_dev);
    overlay(flags, "addr-user", &mut cfg.addr_user);
    overlay(flags, "addr-http-proxy", &mut cfg.addr_http_proxy);
    overlay(flags, "http-proxy-redir-url", &mut cfg.http_proxy_redir_url);
    overlay(flags, "http-proxy-redir-domain", &mut cfg.http_proxy_redir_domain);
    overlay(flags, "disable-sign-up", &mut cfg.disable_sign_up);
    overlay(flags, "dev-auth-url", &mut cfg.dev_auth_url);
    overlay(flags, "local-auth", &mut cfg.local_auth);
    overlay(flags, "token", &mut cfg.token);
    overlay(flags, "db", &mut cfg.db);

    overlay(flags, "ssl-cacert", &mut cfg.ssl_cacert);
    overlay(flags, "ssl-cert", &mut cfg.ssl_cert);
    overlay(flags, "ssl-key", &mut cfg.ssl_key);
    overlay(flags, "separate-ssl-config", &mut cfg.separate_ssl_config);

    if cfg.separate_ssl_config {
        overlay(flags, "webui-ssl-cert", &mut cfg.webui_ssl_cert);
        overlay(flags, "webui-ssl-key", &mut cfg.webui_ssl_key);
    } else {
        // Shared identity: the web UI always serves the device certificate.
        cfg.webui_ssl_cert = cfg.ssl_cert.clone();
        cfg.webui_ssl_key = cfg.ssl_key.clone();
    }

    if let Some(raw) = flags.string("white-list") {
        cfg.white_list = if raw == WILDCARD {
            Whitelist::AllowAll
        } else {
            Whitelist::from_ids(&raw)
        };
    }

    debug!("applied command-line flags");
}
