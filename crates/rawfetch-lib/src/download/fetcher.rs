use super::types::{FetchOptions, RunSummary, SavedImage};
use crate::error::{FetchError, ImageFetchError};
use crate::manifest::{ImageEntry, Manifest};
use crate::output::ProgressPrinter;
use reqwest::Client;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

/// Joins `name` onto `output_dir`, rejecting anything that could land outside it.
pub fn resolve_output_path(
    output_dir: &Path,
    name: &str,
    allow_nested_names: bool,
) -> Result<PathBuf, ImageFetchError> {
    let path = Path::new(name);

    let escapes = path
        .components()
        .any(|component| !matches!(component, Component::Normal(_)));
    let nested = name.contains(['/', '\\']);

    if name.is_empty() || escapes || (nested && !allow_nested_names) {
        return Err(ImageFetchError::UnsafeName {
            name: name.to_string(),
        });
    }

    Ok(output_dir.join(path))
}

/// Sequential HTTP fetcher sharing one client across all entries.
pub struct Fetcher {
    client: Client,
    options: FetchOptions,
}

impl Fetcher {
    pub fn new(options: FetchOptions) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(options.timeout).build()?;
        Ok(Self { client, options })
    }

    /// Downloads one entry into `output_dir`.
    ///
    /// The whole body is received before the destination is opened, so an
    /// existing file is only replaced by a complete response.
    pub async fn fetch_image(
        &self,
        entry: &ImageEntry,
        output_dir: &Path,
    ) -> Result<SavedImage, ImageFetchError> {
        let output_path =
            resolve_output_path(output_dir, &entry.name, self.options.allow_nested_names)?;
        let url = entry.github_raw_url.as_str();

        debug!(url, output = %output_path.display(), "Requesting");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ImageFetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageFetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ImageFetchError::Body {
                url: url.to_string(),
                source,
            })?;

        if self.options.allow_nested_names
            && let Some(parent) = output_path.parent()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ImageFetchError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(&output_path, &body)
            .await
            .map_err(|source| ImageFetchError::Write {
                path: output_path.clone(),
                source,
            })?;
        debug!(output = %output_path.display(), bytes = body.len(), "Written");

        Ok(SavedImage {
            path: output_path,
            size: body.len() as u64,
        })
    }
}

/// Downloads every manifest entry in order, printing one outcome line per entry.
///
/// Entry failures are counted and never abort the run; only output directory
/// creation and transcript I/O errors are returned.
pub async fn fetch_all<W: Write>(
    manifest: &Manifest,
    output_dir: &Path,
    options: FetchOptions,
    printer: &mut ProgressPrinter<W>,
) -> Result<RunSummary, FetchError> {
    let fetcher = Fetcher::new(options)?;

    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|e| FetchError::OutputDirectoryCreation {
            path: output_dir.to_path_buf(),
            reason: e.to_string(),
        })?;
    info!(output_dir = %output_dir.display(), images = manifest.images.len(), "Starting");

    printer.header(manifest)?;

    let mut summary = RunSummary::default();
    for entry in &manifest.images {
        printer.started(&entry.name)?;

        match fetcher.fetch_image(entry, output_dir).await {
            Ok(saved) => {
                printer.saved(&saved.path, saved.size)?;
                summary.record_success();
            }
            Err(err) => {
                let request_failure = err.is_request_failure();
                let cause = err.cause_chain();
                warn!(name = %entry.name, "Download failed: {}", cause);

                if request_failure {
                    printer.request_failed(&cause)?;
                } else {
                    printer.errored(&cause)?;
                }
                summary.record_failure(&entry.name);
            }
        }
    }

    printer.summary(&summary)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_unsafe(result: Result<PathBuf, ImageFetchError>) -> bool {
        matches!(result, Err(ImageFetchError::UnsafeName { .. }))
    }

    #[test]
    fn test_plain_name_is_joined() {
        let path = resolve_output_path(Path::new("images"), "logo.png", false).unwrap();
        assert_eq!(path, Path::new("images").join("logo.png"));
    }

    #[test]
    fn test_traversal_is_rejected() {
        let dir = Path::new("images");
        assert!(is_unsafe(resolve_output_path(dir, "../evil.png", false)));
        assert!(is_unsafe(resolve_output_path(dir, "../evil.png", true)));
        assert!(is_unsafe(resolve_output_path(dir, "a/../../evil.png", true)));
        assert!(is_unsafe(resolve_output_path(dir, "/etc/passwd", true)));
        assert!(is_unsafe(resolve_output_path(dir, "..", false)));
        assert!(is_unsafe(resolve_output_path(dir, "", false)));
    }

    #[test]
    fn test_nested_names_need_opt_in() {
        let dir = Path::new("images");
        assert!(is_unsafe(resolve_output_path(dir, "icons/a.png", false)));
        assert!(is_unsafe(resolve_output_path(dir, "icons\\a.png", false)));

        let path = resolve_output_path(dir, "icons/a.png", true).unwrap();
        assert_eq!(path, dir.join("icons").join("a.png"));
    }

    #[test]
    fn test_unsafe_name_is_not_a_request_failure() {
        let err = resolve_output_path(Path::new("images"), "../x", false).unwrap_err();
        assert!(!err.is_request_failure());
        assert!(err.cause_chain().contains("../x"));
    }
}
