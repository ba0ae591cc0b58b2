use clap::{ArgMatches, Args, Command};
use rttys_core::cli::ConfigArgs;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory holding a config file and any TLS material it references.
pub struct ConfigDir {
    dir: TempDir,
}

impl ConfigDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `rttys.conf` with `contents`. `{dir}` expands to this directory.
    pub fn write_conf(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join("rttys.conf");
        let contents = contents.replace("{dir}", &self.dir.path().to_string_lossy());
        fs::write(&path, contents).expect("failed to write config");
        path
    }

    /// Copies a fixture from `integration-tests/fixtures`.
    pub fn copy_fixture(&self, name: &str) -> PathBuf {
        let src = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join(name);
        let contents = fs::read_to_string(&src).expect("failed to read fixture");
        self.write_conf(&contents)
    }

    /// Creates a placeholder PEM file and returns its path.
    pub fn pem(&self, name: &str) -> String {
        let path = self.dir.path().join(name);
        fs::write(&path, "-----BEGIN CERTIFICATE-----\n").expect("failed to write pem");
        path.to_string_lossy().into_owned()
    }
}

impl Default for ConfigDir {
    fn default() -> Self {
        Self::new()
    }
}

/// The flags the binary registers, minus their `RTTYS_*` env fallbacks.
pub fn flags_command() -> Command {
    ConfigArgs::augment_args(Command::new("rttys")).mut_args(|arg| arg.env(None::<&'static str>))
}

/// Parses a command line against the flags the binary registers.
pub fn parse_flags(args: &[&str]) -> ArgMatches {
    flags_command()
        .try_get_matches_from(std::iter::once("rttys").chain(args.iter().copied()))
        .expect("arguments should parse")
}
