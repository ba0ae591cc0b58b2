use crate::cli::ConfigArgs;
use crate::conf::file::YamlDocument;
use clap::{ArgMatches, Args, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// The binary's flags with their `RTTYS_*` env fallbacks detached, so a
/// variable set in the test environment never leaks into a layer.
pub fn command() -> Command {
    ConfigArgs::augment_args(Command::new("rttys")).mut_args(|arg| arg.env(None::<&'static str>))
}

/// Parses `args` the way the binary registers its flags.
pub fn matches(args: &[&str]) -> ArgMatches {
    command()
        .try_get_matches_from(std::iter::once("rttys").chain(args.iter().copied()))
        .expect("arguments should parse")
}

pub fn yaml(src: &str) -> YamlDocument {
    YamlDocument::parse(Path::new("/test/rttys.conf"), src).expect("yaml should parse")
}

/// Creates an empty file and returns its path as a string.
pub fn touch(dir: &Path, name: &str) -> String {
    let path: PathBuf = dir.join(name);
    fs::write(&path, "").unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn helper_command_ignores_the_environment() {
    let cmd = command();

    let with_env: Vec<_> = cmd
        .get_arguments()
        .filter(|arg| arg.get_env().is_some())
        .map(|arg| arg.get_id().to_string())
        .collect();

    assert!(with_env.is_empty(), "args still reading env: {with_env:?}");
    assert!(cmd.get_arguments().any(|arg| arg.get_id() == "token"));
}
