mod progress;

pub use progress::{ProgressPrinter, format_kib};
