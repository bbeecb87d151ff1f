mod args;
mod fetch;
mod params;
mod resolved_command;

pub use args::{Args, Command, parse_args};
pub use fetch::run_fetch;
pub use params::{DEFAULT_MANIFEST_PATH, DEFAULT_OUTPUT_DIR, FetchParams};
pub use resolved_command::{ResolvedCommand, resolve_command};
