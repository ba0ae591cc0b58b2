use crate::conf::error::ConfigError;
use crate::conf::file::load_file_layer;
use crate::conf::flags::{FlagSource, apply_flags};
use crate::conf::types::Config;
use crate::conf::validate::validate_tls_paths;
use clap::ArgMatches;
use clap::parser::MatchesError;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Flag naming the configuration file.
pub const CONF_FLAG: &str = "conf";

/// Resolves the runtime configuration.
///
/// Layers are applied in precedence order: built-in defaults, then the YAML
/// file at `conf` (when given), then explicitly set flags. The result is
/// returned only if every referenced TLS path exists.
pub fn load_config(conf: Option<&Path>, matches: &ArgMatches) -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    if let Some(path) = conf.filter(|p| !p.as_os_str().is_empty()) {
        load_file_layer(&mut cfg, path)?;
    }

    //--------------------------------------------------------------------------
    // Flags always win
    //--------------------------------------------------------------------------
    apply_flags(&mut cfg, &FlagSource::new(matches));

    //--------------------------------------------------------------------------
    // TLS material must exist before any listener is created
    //--------------------------------------------------------------------------
    validate_tls_paths(&cfg)?;

    info!(
        addr_dev = %cfg.addr_dev,
        addr_user = %cfg.addr_user,
        device_tls = cfg.device_tls().is_some(),
        device_mtls = cfg.device_mtls(),
        separate_ssl_config = cfg.separate_ssl_config,
        white_list = cfg.white_list.is_restricted(),
        local_auth = cfg.local_auth,
        "configuration resolved"
    );

    Ok(cfg)
}

/// Like [`load_config`], taking the file path from the `conf` flag.
///
/// `conf` may be registered as a `PathBuf` or a `String`.
pub fn load_config_from_matches(matches: &ArgMatches) -> Result<Config, ConfigError> {
    let conf = conf_path(matches);
    load_config(conf.as_deref(), matches)
}

fn conf_path(matches: &ArgMatches) -> Option<PathBuf> {
    match matches.try_get_one::<PathBuf>(CONF_FLAG) {
        Ok(path) => path.cloned(),
        Err(MatchesError::Downcast { .. }) => match matches.try_get_one::<String>(CONF_FLAG) {
            Ok(path) => path.map(PathBuf::from),
            Err(e) => {
                warn!(error = %e, "--{CONF_FLAG} has an unsupported type, no file applied");
                None
            }
        },
        // Not registered: there is no file to load.
        Err(_) => None,
    }
}
