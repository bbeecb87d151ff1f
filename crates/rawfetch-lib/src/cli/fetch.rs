use crate::cli::FetchParams;
use crate::download::{RunSummary, fetch_all};
use crate::error::FetchError;
use crate::output::ProgressPrinter;
use std::io::Write;
use tracing;

pub async fn run_fetch<W: Write>(params: FetchParams, out: W) -> Result<RunSummary, FetchError> {
    let FetchParams {
        manifest_path,
        manifest,
        output_dir,
        options,
    } = params;

    tracing::info!(
        "Fetching {} images listed in {} into {}",
        manifest.images.len(),
        manifest_path.display(),
        output_dir.display()
    );

    let mut printer = ProgressPrinter::new(out);
    let summary = fetch_all(&manifest, &output_dir, options, &mut printer).await?;

    if summary.all_succeeded() {
        tracing::info!("All {} images downloaded", summary.success_count);
    } else {
        tracing::warn!(
            "{} of {} images failed: {}",
            summary.failed_count,
            manifest.images.len(),
            summary.failed.join(", ")
        );
    }

    Ok(summary)
}
