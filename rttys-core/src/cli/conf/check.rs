use crate::conf::types::{Config, Whitelist};
use crate::conf::{ConfigError, load_config_from_matches};
use clap::ArgMatches;
use miette::Report;
use owo_colors::OwoColorize;

pub fn check(matches: &ArgMatches, plain: bool) -> anyhow::Result<()> {
    match load_config_from_matches(matches) {
        Ok(cfg) => {
            print!("{}", summary(&cfg));
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain);
            std::process::exit(1);
        }
    }
}

/// One line per resolved concern, in the order an operator reads them.
pub fn summary(cfg: &Config) -> String {
    let tls = |enabled: bool| if enabled { "tls" } else { "plain" };
    let mut lines = vec!["Config loaded successfully".to_string()];

    let mut dev = format!("device listener {} ({}", cfg.addr_dev, tls(cfg.device_tls().is_some()));
    if cfg.device_mtls() {
        dev.push_str(", mtls");
    }
    dev.push(')');
    lines.push(dev);

    let mut user = format!("user listener {} ({}", cfg.addr_user, tls(cfg.webui_tls().is_some()));
    if cfg.separate_ssl_config {
        user.push_str(", separate certificate");
    }
    user.push(')');
    lines.push(user);

    lines.push(if cfg.addr_http_proxy.is_empty() {
        "http proxy disabled".to_string()
    } else {
        format!("http proxy {}", cfg.addr_http_proxy)
    });

    lines.push(match &cfg.white_list {
        Whitelist::AllowAll => "white list: all devices allowed".to_string(),
        Whitelist::Only(ids) => format!("white list: {} devices allowed", ids.len()),
    });

    lines.push(format!(
        "local auth {}, sign up {}",
        if cfg.local_auth { "on" } else { "off" },
        if cfg.disable_sign_up { "disabled" } else { "enabled" }
    ));
    lines.push(format!("db {}", cfg.db));

    lines.iter().map(|line| format!("✔ {line}\n")).collect()
}

fn print_config_error(err: ConfigError, plain: bool) {
    let hint = config_error_hint(&err);
    if plain {
        eprintln!("{}: {}", "error".red().bold(), err);
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }
    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        //---------------------------------------------------------------------
        // Configuration file
        //---------------------------------------------------------------------
        ConfigError::ReadFile { .. } => Some(
            "Pass an existing file with -c/--conf, or omit it to run on defaults and flags.",
        ),

        ConfigError::Parse { .. } => Some(
            "The configuration file must be a YAML mapping of keys to values.\n\
             \n\
             Example:\n\
             \n\
             addr-dev: \":5912\"\n\
             addr-user: \":5913\"\n\
             white-list: \"device1 device2\"",
        ),

        //---------------------------------------------------------------------
        // TLS material
        //---------------------------------------------------------------------
        ConfigError::MissingFile { .. } => Some(
            "Point the option at an existing file, or leave it empty to disable it.\n\
             \n\
             Unless separate-ssl-config is on, webui-ssl-cert and webui-ssl-key\n\
             follow ssl-cert and ssl-key.",
        ),
    }
}
