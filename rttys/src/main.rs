use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use rttys_core::cli::ConfigArgs;
use rttys_core::cli::conf::{self, ConfCmd};
use rttys_core::logging::{self, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "rttys",
    version,
    about = "rttys: access your terminal from anywhere via the web"
)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration tooling
    Conf {
        #[command(subcommand)]
        cmd: ConfCmd,
    },
}

fn main() {
    // Keep the raw matches: resolution needs to know which flags were set
    // explicitly, which the derived struct cannot tell apart from defaults.
    let matches = Cli::command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    init_logging(logging::default_log_mode());
    tracing::debug!(conf = ?cli.config.conf, "starting");

    let result = match cli.command {
        Some(Command::Conf {
            cmd: ConfCmd::Dump { json, yaml },
        }) => conf::dump(&matches, json, yaml),

        Some(Command::Conf {
            cmd: ConfCmd::Check { plain },
        }) => conf::check(&matches, plain),

        None => conf::check(&matches, false),
    };

    if let Err(e) = result {
        eprintln!("rttys: {e:#}");
        std::process::exit(1);
    }
}
