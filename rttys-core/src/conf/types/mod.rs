mod config;
mod tls;
mod whitelist;

pub use config::*;
pub use tls::*;
pub use whitelist::*;
