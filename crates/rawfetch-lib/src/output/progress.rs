use crate::download::RunSummary;
use crate::manifest::Manifest;
use std::io::{self, Write};
use std::path::Path;

const SEPARATOR_WIDTH: usize = 60;

/// Size in kibibytes with one decimal, e.g. `2048` -> `"2.0 KB"`.
pub fn format_kib(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

/// Writes the human-facing run transcript.
pub struct ProgressPrinter<W: Write> {
    out: W,
}

impl<W: Write> ProgressPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn header(&mut self, manifest: &Manifest) -> io::Result<()> {
        writeln!(
            self.out,
            "Fetching images from GitHub: {}",
            manifest.source_label()
        )?;
        writeln!(self.out, "Branch/Commit: {}", manifest.branch)?;
        self.separator()
    }

    /// Announces an entry. Flushed so the line is visible while the request is in flight.
    pub fn started(&mut self, name: &str) -> io::Result<()> {
        write!(self.out, "Downloading {name}... ")?;
        self.out.flush()
    }

    pub fn saved(&mut self, path: &Path, bytes: u64) -> io::Result<()> {
        writeln!(
            self.out,
            "✓ Saved to {} ({})",
            path.display(),
            format_kib(bytes)
        )
    }

    pub fn request_failed(&mut self, cause: &str) -> io::Result<()> {
        writeln!(self.out, "✗ Failed: {cause}")
    }

    pub fn errored(&mut self, cause: &str) -> io::Result<()> {
        writeln!(self.out, "✗ Error: {cause}")
    }

    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        self.separator()?;
        writeln!(
            self.out,
            "Summary: {} succeeded, {} failed",
            summary.success_count, summary.failed_count
        )?;
        self.out.flush()
    }

    fn separator(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))
    }
}
