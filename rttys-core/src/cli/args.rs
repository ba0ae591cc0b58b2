use clap::Args;
use std::path::PathBuf;

/// Flags that feed the configuration resolver.
///
/// The typed fields exist for registration and help output. Resolution reads
/// the underlying `ArgMatches`, because only explicitly set flags may override
/// the configuration file. Defaults are applied by `Config::default`, not by clap.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Config file path
    #[arg(id = "conf", short, long, env = "RTTYS_CONF", value_name = "PATH")]
    pub conf: Option<PathBuf>,

    /// Address to listen for devices [default: ":5912"]
    #[arg(id = "addr-dev", long, env = "RTTYS_ADDR_DEV", value_name = "ADDR")]
    pub addr_dev: Option<String>,

    /// Address to listen for users [default: ":5913"]
    #[arg(id = "addr-user", long, env = "RTTYS_ADDR_USER", value_name = "ADDR")]
    pub addr_user: Option<String>,

    /// Address to listen for HTTP proxy
    #[arg(id = "addr-http-proxy", long, env = "RTTYS_ADDR_HTTP_PROXY", value_name = "ADDR")]
    pub addr_http_proxy: Option<String>,

    /// URL to redirect to after HTTP proxy
    #[arg(id = "http-proxy-redir-url", long, env = "RTTYS_HTTP_PROXY_REDIR_URL", value_name = "URL")]
    pub http_proxy_redir_url: Option<String>,

    /// Domain for HTTP proxy set cookie
    #[arg(
        id = "http-proxy-redir-domain",
        long,
        env = "RTTYS_HTTP_PROXY_REDIR_DOMAIN",
        value_name = "DOMAIN"
    )]
    pub http_proxy_redir_domain: Option<String>,

    /// Disable sign up
    #[arg(
        id = "disable-sign-up",
        long,
        env = "RTTYS_DISABLE_SIGN_UP",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub disable_sign_up: Option<bool>,

    /// Device authentication URL
    #[arg(id = "dev-auth-url", long, env = "RTTYS_DEV_AUTH_URL", value_name = "URL")]
    pub dev_auth_url: Option<String>,

    /// Need to login for local [default: true]
    #[arg(
        id = "local-auth",
        long,
        env = "RTTYS_LOCAL_AUTH",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub local_auth: Option<bool>,

    /// Token to verify devices
    #[arg(id = "token", long, env = "RTTYS_TOKEN")]
    pub token: Option<String>,

    /// Database connection string [default: "sqlite://rttys.db"]
    #[arg(id = "db", long, env = "RTTYS_DB", value_name = "URL")]
    pub db: Option<String>,

    /// CA certificate to verify devices (mTLS)
    #[arg(id = "ssl-cacert", long, env = "RTTYS_SSL_CACERT", value_name = "PATH")]
    pub ssl_cacert: Option<String>,

    /// Certificate file path
    #[arg(id = "ssl-cert", long, env = "RTTYS_SSL_CERT", value_name = "PATH")]
    pub ssl_cert: Option<String>,

    /// Key file path
    #[arg(id = "ssl-key", long, env = "RTTYS_SSL_KEY", value_name = "PATH")]
    pub ssl_key: Option<String>,

    /// Use a separate certificate for the web UI
    #[arg(
        id = "separate-ssl-config",
        long,
        env = "RTTYS_SEPARATE_SSL_CONFIG",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub separate_ssl_config: Option<bool>,

    /// Web UI certificate file path (requires --separate-ssl-config)
    #[arg(id = "webui-ssl-cert", long, env = "RTTYS_WEBUI_SSL_CERT", value_name = "PATH")]
    pub webui_ssl_cert: Option<String>,

    /// Web UI key file path (requires --separate-ssl-config)
    #[arg(id = "webui-ssl-key", long, env = "RTTYS_WEBUI_SSL_KEY", value_name = "PATH")]
    pub webui_ssl_key: Option<String>,

    /// Space separated device IDs allowed to connect, or "*" for all
    #[arg(id = "white-list", long, env = "RTTYS_WHITE_LIST", value_name = "IDS")]
    pub white_list: Option<String>,
}
