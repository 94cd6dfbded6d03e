//! CLI output formatting.
//!
//! Each message has a `format_*` function (returns the text, no I/O) and a
//! `print_*` wrapper that writes it to stdout or stderr.
//!
//! ```text
//! Wrote assets/photos/manifest.json (12 items)     # stdout
//! Missing directory: assets/videos                 # stderr
//! Error: IO error: Permission denied (os error 13) # stderr
//! ```

use crate::manifest::{ManifestError, RunOutcome};
use std::path::Path;

/// Success line for a written manifest.
pub fn format_written(path: &Path, count: usize) -> String {
    format!("Wrote {} ({} items)", path.display(), count)
}

/// Report for a media root that does not exist.
pub fn format_missing_root(path: &Path) -> String {
    format!("Missing directory: {}", path.display())
}

/// Report for a failed run.
pub fn format_error(err: &ManifestError) -> String {
    match err.missing_root() {
        Some(path) => format_missing_root(path),
        None => format!("Error: {}", err),
    }
}

/// Print the outcome of a successful run.
pub fn print_outcome(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Written { path, count } => println!("{}", format_written(path, *count)),
        RunOutcome::Skipped { missing } => eprintln!("{}", format_missing_root(missing)),
    }
}

/// Print a failed run to stderr.
pub fn print_error(err: &ManifestError) {
    eprintln!("{}", format_error(err));
}
