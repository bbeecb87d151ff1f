mod fetcher;
mod types;

pub use fetcher::{Fetcher, fetch_all, resolve_output_path};
pub use types::{DEFAULT_TIMEOUT_SECS, FetchOptions, RunSummary, SavedImage};
