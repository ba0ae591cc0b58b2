use crate::conf::types::TlsField;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // Configuration file
    //-------------------------------------------------------------------------
    #[error("read config file {path}: {source}")]
    #[diagnostic(code(rttys::conf::read_file))]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    #[diagnostic(code(rttys::conf::parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    //-------------------------------------------------------------------------
    // TLS material
    //-------------------------------------------------------------------------
    #[error("{field} \"{}\" does not exist", .path.display())]
    #[diagnostic(code(rttys::conf::missing_file))]
    MissingFile { field: TlsField, path: PathBuf },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn missing_file(field: TlsField, path: impl Into<PathBuf>) -> Self {
        Self::MissingFile {
            field,
            path: path.into(),
        }
    }

    /// The configuration file could not be read or parsed.
    pub fn is_config_file_error(&self) -> bool {
        matches!(self, Self::ReadFile { .. } | Self::Parse { .. })
    }

    /// A resolved TLS path does not exist on disk.
    pub fn is_missing_file_error(&self) -> bool {
        matches!(self, Self::MissingFile { .. })
    }
}
