pub mod args;
pub mod conf;

pub use args::ConfigArgs;
