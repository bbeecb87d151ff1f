use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Copy, Debug)]
pub struct FetchOptions {
    pub timeout: Duration,
    /// Accept names like `icons/a.png` and create the intermediate directories.
    pub allow_nested_names: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            allow_nested_names: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedImage {
    pub path: PathBuf,
    /// Body length in bytes
    pub size: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub success_count: usize,
    pub failed_count: usize,
    /// Names of the failed entries, in manifest order
    pub failed: Vec<String>,
}

impl RunSummary {
    pub fn record_success(&mut self) {
        self.success_count += 1;
    }

    pub fn record_failure(&mut self, name: &str) {
        self.failed_count += 1;
        self.failed.push(name.to_string());
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_run_succeeds() {
        assert!(RunSummary::default().all_succeeded());
    }

    #[test]
    fn test_single_failure_fails_run() {
        let mut summary = RunSummary::default();
        summary.record_success();
        summary.record_failure("b.png");
        summary.record_success();

        assert_eq!(summary.success_count, 2);
        assert_eq!(summary.failed_count, 1);
        assert_eq!(summary.failed, vec!["b.png".to_string()]);
        assert!(!summary.all_succeeded());
    }
}
