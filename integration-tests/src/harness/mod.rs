mod fixture;
pub mod tracing;

pub use fixture::{ConfigDir, flags_command, parse_flags};
pub use tracing::{CapturedEvent, init_test_tracing};
