//! CLI output formatting for the batch pipeline.
//!
//! # Information-First Display
//!
//! Progress lines lead with the file's identity — its name — and show the
//! written output as the payload, so a run reads as an inventory of what
//! was produced. Failures keep the same shape with the reason indented
//! beneath, letting a long batch scan cleanly for problems.
//!
//! # Output Format
//!
//! ```text
//! Processing 3 images → photos/padded
//! 001-dawn.jpg → 001-dawn-padded.jpg
//! 002-dusk.jpg → 002-dusk-padded.jpg
//! 003-noon.jpg failed
//!     Failed to decode photos/003-noon.jpg: ...
//!
//! Processed 2 images, 1 failed
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>` or
//! `String`) for testability and a `print_*` wrapper that writes to
//! stdout. Format functions are pure — no I/O, no side effects.

use crate::process::{BatchEvent, BatchReport};
use std::path::Path;

/// Name-only view of a path, for compact progress lines.
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Header printed before the batch starts.
pub fn format_batch_header(file_count: usize, output_folder: &Path) -> String {
    let noun = if file_count == 1 { "image" } else { "images" };
    format!(
        "Processing {} {} → {}",
        file_count,
        noun,
        output_folder.display()
    )
}

/// One finished file. Successes are a single line; failures carry the
/// reason indented beneath the name.
pub fn format_batch_event(event: &BatchEvent) -> Vec<String> {
    match &event.outcome {
        Ok(output) => vec![format!(
            "{} → {}",
            file_name(&event.input),
            file_name(output)
        )],
        Err(reason) => vec![
            format!("{} failed", file_name(&event.input)),
            format!("    {}", reason),
        ],
    }
}

/// Closing summary line for the whole run.
pub fn format_batch_summary(report: &BatchReport) -> String {
    let processed = report.processed();
    let noun = if processed == 1 { "image" } else { "images" };
    match report.failed() {
        0 => format!("Processed {} {}", processed, noun),
        failed => format!("Processed {} {}, {} failed", processed, noun, failed),
    }
}

/// Listing for `check`: what would be processed and where it would land.
pub fn format_check_output(files: &[std::path::PathBuf], output_folder: &Path) -> Vec<String> {
    let mut lines = vec![format_batch_header(files.len(), output_folder)];
    for file in files {
        lines.push(format!("    {}", file_name(file)));
    }
    lines
}

pub fn print_batch_event(event: &BatchEvent) {
    for line in format_batch_event(event) {
        println!("{}", line);
    }
}

pub fn print_batch_summary(report: &BatchReport) {
    println!();
    println!("{}", format_batch_summary(report));
}
