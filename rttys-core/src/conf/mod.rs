mod error;
pub mod file;
pub mod flags;
mod loader;
pub mod overlay;
mod scalars;
#[cfg(test)]
mod tests;
pub mod types;
pub mod validate;

pub use error::ConfigError;
pub use loader::{CONF_FLAG, load_config, load_config_from_matches};
pub use types::Config;
