//! Batch processing: the per-file pipeline mapped over the work list.
//!
//! Each file goes through the same blocking sequence: decode, shadow
//! composite, aspect pad, encode. Files are fully independent — no shared
//! mutable state, no ordering requirement — so the batch is a plain
//! [rayon](https://docs.rs/rayon) `par_iter` over the discovered list.
//!
//! ## Failure Isolation
//!
//! One bad file never aborts the batch. Every worker yields a
//! [`FileResult`] and the run always completes; decode and encode failures
//! are reported per file with the offending path, and the caller decides
//! the process exit from the aggregate [`BatchReport`].
//!
//! ## Progress Events
//!
//! Workers optionally stream a [`BatchEvent`] per finished file over an
//! `mpsc` channel, so the CLI can print progress from a dedicated printer
//! thread while the pool stays busy.

use crate::config::PipelineParams;
use crate::imaging::{add_padding, make_shadow};
use crate::scan;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

/// Errors that stop the whole batch before it starts.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-file failures. These are collected, not propagated.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Outcome of one file: the written output path, or what went wrong.
#[derive(Debug)]
pub struct FileResult {
    pub input: PathBuf,
    pub outcome: Result<PathBuf, FileError>,
}

/// Progress event emitted as each file finishes.
///
/// Carries the error as display text so events stay cheap to send across
/// the channel; the typed error lives in the [`BatchReport`].
#[derive(Debug, Clone)]
pub struct BatchEvent {
    pub input: PathBuf,
    pub outcome: Result<PathBuf, String>,
}

/// Aggregate result of a batch run.
#[derive(Debug)]
pub struct BatchReport {
    pub results: Vec<FileResult>,
}

impl BatchReport {
    /// Number of files written successfully.
    pub fn processed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_ok()).count()
    }

    /// Number of files that failed.
    pub fn failed(&self) -> usize {
        self.results.len() - self.processed()
    }

    /// True when every file was written.
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }
}

/// Run the pipeline over an already-discovered file list.
///
/// Discovery belongs to the caller (see [`scan::discover_files`]), so
/// `NoFilesFound` has already surfaced before this point. The output
/// folder is created, with parents, before any worker is scheduled. The
/// caller is likewise expected to have validated the config —
/// [`PipelineParams`] can only come from a validated
/// [`Options`](crate::config::Options).
pub fn run_batch(
    files: &[PathBuf],
    params: &PipelineParams,
    output_folder: &Path,
    events: Option<Sender<BatchEvent>>,
) -> Result<BatchReport, ProcessError> {
    std::fs::create_dir_all(output_folder)?;

    let results: Vec<FileResult> = files
        .par_iter()
        .map_with(events, |events, file| {
            let outcome = process_file(file, params, output_folder);
            if let Some(tx) = events {
                // A dropped receiver only loses progress display
                tx.send(BatchEvent {
                    input: file.clone(),
                    outcome: outcome
                        .as_ref()
                        .map(|path| path.clone())
                        .map_err(|e| e.to_string()),
                })
                .ok();
            }
            FileResult {
                input: file.clone(),
                outcome,
            }
        })
        .collect();

    Ok(BatchReport { results })
}

/// The per-file pipeline: decode → shadow → pad → encode.
fn process_file(
    input: &Path,
    params: &PipelineParams,
    output_folder: &Path,
) -> Result<PathBuf, FileError> {
    let image = image::open(input).map_err(|source| FileError::Decode {
        path: input.to_path_buf(),
        source,
    })?;

    let shadowed = make_shadow(&image, &params.shadow);
    let padded = add_padding(&image, Some(&shadowed), &params.pad);

    let output = scan::output_path(output_folder, input);
    padded.save(&output).map_err(|source| FileError::Encode {
        path: output.clone(),
        source,
    })?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Options;
    use crate::imaging::Extent;
    use image::{Rgb, RgbImage};
    use std::fs;
    use tempfile::TempDir;

    /// Small params so tests stay fast: offset/border 3, pad 4, no blur.
    fn test_params() -> PipelineParams {
        let options = Options {
            shadow_offset: Extent::Pixels(3),
            pad: Extent::Pixels(4),
            radius: 0,
            ..Options::default()
        };
        options.validate().unwrap()
    }

    fn create_test_png(path: &Path, width: u32, height: u32) {
        let img = RgbImage::from_pixel(width, height, Rgb([200, 40, 40]));
        img.save(path).unwrap();
    }

    #[test]
    fn end_to_end_single_file() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("photo.png");
        create_test_png(&input, 100, 50);
        let out_dir = tmp.path().join("padded");

        let files = scan::discover_files(&input).unwrap();
        let report = run_batch(&files, &test_params(), &out_dir, None).unwrap();
        assert_eq!(report.processed(), 1);
        assert!(report.is_clean());

        // Landscape 100x50: shadow canvas 106x56; pad 4 → 108 wide,
        // round(108 / 5 * 4) = 86 tall
        let output = out_dir.join("photo-padded.png");
        assert!(output.exists());
        let written = image::open(&output).unwrap();
        assert_eq!((written.width(), written.height()), (108, 86));

        // Background corners match the resolved bg color (white)
        let rgba = written.to_rgba8();
        for (x, y) in [(0, 0), (107, 0), (0, 85), (107, 85)] {
            assert_eq!(rgba.get_pixel(x, y).0[..3], [255, 255, 255]);
        }
    }

    #[test]
    fn batch_processes_a_directory() {
        let tmp = TempDir::new().unwrap();
        let input_dir = tmp.path().join("photos");
        fs::create_dir(&input_dir).unwrap();
        create_test_png(&input_dir.join("a.png"), 20, 10);
        create_test_png(&input_dir.join("b.png"), 10, 20);
        let out_dir = tmp.path().join("out");

        let files = scan::discover_files(&input_dir).unwrap();
        let report = run_batch(&files, &test_params(), &out_dir, None).unwrap();
        assert_eq!(report.processed(), 2);
        assert!(out_dir.join("a-padded.png").exists());
        assert!(out_dir.join("b-padded.png").exists());
    }

    #[test]
    fn corrupt_file_does_not_block_the_batch() {
        let tmp = TempDir::new().unwrap();
        let input_dir = tmp.path().join("photos");
        fs::create_dir(&input_dir).unwrap();
        create_test_png(&input_dir.join("a.png"), 20, 10);
        fs::write(input_dir.join("broken.jpg"), b"not an image").unwrap();
        create_test_png(&input_dir.join("c.png"), 20, 10);
        let out_dir = tmp.path().join("out");

        let files = scan::discover_files(&input_dir).unwrap();
        let report = run_batch(&files, &test_params(), &out_dir, None).unwrap();
        assert_eq!(report.processed(), 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_clean());

        assert!(out_dir.join("a-padded.png").exists());
        assert!(out_dir.join("c-padded.png").exists());

        let failure = report
            .results
            .iter()
            .find(|r| r.outcome.is_err())
            .unwrap();
        assert!(failure.input.ends_with("broken.jpg"));
        assert!(matches!(
            failure.outcome,
            Err(FileError::Decode { .. })
        ));
    }

    #[test]
    fn output_folder_is_created_with_parents() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("photo.png");
        create_test_png(&input, 10, 10);
        let out_dir = tmp.path().join("deeply/nested/out");

        let files = scan::discover_files(&input).unwrap();
        let report = run_batch(&files, &test_params(), &out_dir, None).unwrap();
        assert!(report.is_clean());
        assert!(out_dir.join("photo-padded.png").exists());
    }

    #[test]
    fn events_stream_one_per_file() {
        let tmp = TempDir::new().unwrap();
        let input_dir = tmp.path().join("photos");
        fs::create_dir(&input_dir).unwrap();
        create_test_png(&input_dir.join("a.png"), 10, 10);
        fs::write(input_dir.join("broken.png"), b"junk").unwrap();
        let out_dir = tmp.path().join("out");

        let files = scan::discover_files(&input_dir).unwrap();
        let (tx, rx) = std::sync::mpsc::channel();
        run_batch(&files, &test_params(), &out_dir, Some(tx)).unwrap();

        let events: Vec<BatchEvent> = rx.iter().collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events.iter().filter(|e| e.outcome.is_ok()).count(), 1);
        assert_eq!(events.iter().filter(|e| e.outcome.is_err()).count(), 1);
    }

    #[test]
    fn output_keeps_the_input_codec() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("photo.jpg");
        let img = RgbImage::from_pixel(16, 16, Rgb([10, 120, 10]));
        img.save(&input).unwrap();
        let out_dir = tmp.path().join("out");

        let files = scan::discover_files(&input).unwrap();
        run_batch(&files, &test_params(), &out_dir, None).unwrap();
        let output = out_dir.join("photo-padded.jpg");
        assert!(output.exists());
        assert!(image::open(&output).is_ok());
    }
}
