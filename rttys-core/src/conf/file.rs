use crate::conf::error::ConfigError;
use crate::conf::overlay::{OverlaySource, overlay};
use crate::conf::scalars::{ScalarTable, read_scalars};
use crate::conf::types::{Config, WILDCARD, Whitelist};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const WHITE_LIST_KEY: &str = "white-list";

/// Wildcard as written when the reader keeps the surrounding quotes.
const QUOTED_WILDCARD: &str = "\"*\"";

/// A parsed configuration file.
///
/// Only top-level scalar keys are consulted, each kept as the text written in
/// the file and converted when a slot asks for it.
#[derive(Debug)]
pub struct YamlDocument {
    path: PathBuf,
    values: ScalarTable,
}

impl YamlDocument {
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let src = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::parse(path, &src)
    }

    pub fn parse(path: &Path, src: &str) -> Result<Self, ConfigError> {
        let src = quote_bare_wildcard(src);
        let values = match read_scalars(&src).map_err(|e| ConfigError::parse(path, e))? {
            Some(values) => values,
            None => {
                warn!(
                    path = %path.display(),
                    "configuration file is not a key/value mapping, no keys applied"
                );
                ScalarTable::new()
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.values.get(key)?.as_deref()
    }
}

impl OverlaySource for YamlDocument {
    fn string(&self, key: &str) -> Option<String> {
        self.text(key).map(str::to_owned)
    }

    fn integer(&self, key: &str) -> Option<i64> {
        self.text(key)?.trim().parse().ok()
    }

    fn boolean(&self, key: &str) -> Option<bool> {
        parse_bool(self.text(key)?)
    }
}

/// Accepts the spellings operators use for booleans in rttys config files.
fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}

/// Rewrites a top-level `white-list: *` line to `white-list: "*"`.
///
/// A bare `*` starts a YAML alias and would otherwise fail to parse.
fn quote_bare_wildcard(src: &str) -> Cow<'_, str> {
    let is_bare = |line: &str| {
        line.strip_prefix(WHITE_LIST_KEY)
            .and_then(|rest| rest.strip_prefix(':'))
            .is_some_and(|value| value.trim() == WILDCARD)
    };

    if !src.lines().any(is_bare) {
        return Cow::Borrowed(src);
    }

    let mut out = String::with_capacity(src.len() + 2);
    for line in src.lines() {
        if is_bare(line) {
            out.push_str(WHITE_LIST_KEY);
            out.push_str(": \"*\"");
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    Cow::Owned(out)
}

/// Overlays the known keys of `doc` onto `cfg`.
///
/// `separate-ssl-config` is read before the webui keys, which are only honored
/// when it is on at that point.
pub fn apply_file(cfg: &mut Config, doc: &YamlDocument) {
    overlay(doc, "addr-dev", &mut cfg.addr_dev);
    overlay(doc, "addr-user", &mut cfg.addr_user);
    overlay(doc, "addr-http-proxy", &mut cfg.addr_http_proxy);
    overlay(doc, "disable-sign-up", &mut cfg.disable_sign_up);
    overlay(doc, "http-proxy-redir-url", &mut cfg.http_proxy_redir_url);
    overlay(doc, "http-proxy-redir-domain", &mut cfg.http_proxy_redir_domain);
    overlay(doc, "ssl-cert", &mut cfg.ssl_cert);
    overlay(doc, "ssl-key", &mut cfg.ssl_key);
    overlay(doc, "ssl-cacert", &mut cfg.ssl_cacert);
    overlay(doc, "separate-ssl-config", &mut cfg.separate_ssl_config);

    if cfg.separate_ssl_config {
        overlay(doc, "webui-ssl-cert", &mut cfg.webui_ssl_cert);
        overlay(doc, "webui-ssl-key", &mut cfg.webui_ssl_key);
    } else if doc.contains("webui-ssl-cert") || doc.contains("webui-ssl-key") {
        warn!(
            path = %doc.path().display(),
            "webui-ssl-cert/webui-ssl-key ignored: separate-ssl-config is off"
        );
    }

    overlay(doc, "token", &mut cfg.token);
    overlay(doc, "dev-auth-url", &mut cfg.dev_auth_url);
    overlay(doc, "db", &mut cfg.db);
    overlay(doc, "local-auth", &mut cfg.local_auth);

    if let Some(raw) = doc.string(WHITE_LIST_KEY)
        && raw != WILDCARD
        && raw != QUOTED_WILDCARD
    {
        cfg.white_list = Whitelist::from_ids(&raw);
    }
}

/// Reads `path` and overlays it onto `cfg`.
pub fn load_file_layer(cfg: &mut Config, path: &Path) -> Result<(), ConfigError> {
    let doc = YamlDocument::read(path)?;
    apply_file(cfg, &doc);
    debug!(path = %path.display(), "applied configuration file");
    Ok(())
}
