mod check;
mod dump;

pub use check::*;
use clap::Subcommand;
pub use dump::*;

#[derive(Subcommand, Debug)]
pub enum ConfCmd {
    /// Resolve configuration, verify TLS files and exit
    Check {
        /// Print errors without diagnostic rendering
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print resolved configuration
    Dump {
        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },
}
