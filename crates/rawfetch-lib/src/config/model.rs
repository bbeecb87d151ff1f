use crate::download::DEFAULT_TIMEOUT_SECS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub manifest_path: Option<PathBuf>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Allow image names containing path separators
    #[serde(default)]
    pub allow_nested_names: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest_path: None,
            output_dir: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            allow_nested_names: false,
        }
    }
}
