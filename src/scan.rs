//! Input discovery and output path layout.
//!
//! Resolves the user's input path into the batch's work list and decides
//! where each output lands. Discovery is flat by design: a directory input
//! expands to the non-directory entries directly inside it, nothing
//! recursive. Sorting makes the batch order deterministic regardless of
//! filesystem enumeration order.
//!
//! ## Output Layout
//!
//! For each input `name.ext` the output is `<output_folder>/name-padded.ext`,
//! keeping the original extension so the codec never changes:
//!
//! ```text
//! photos/
//! ├── 001-dawn.jpg
//! ├── 002-dusk.png
//! └── padded/                  # use_subfolder = true (default)
//!     ├── 001-dawn-padded.jpg
//!     └── 002-dusk-padded.png
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No files found at {0}")]
    NoFilesFound(PathBuf),
}

/// Expand the input path into the list of files to process.
///
/// A file input is a single-element batch. A directory input expands to
/// every non-directory entry directly inside it, sorted by name. An empty
/// result is [`ScanError::NoFilesFound`], raised before any worker starts.
pub fn discover_files(input: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !input.is_dir() {
        if input.is_file() {
            return Ok(vec![input.to_path_buf()]);
        }
        return Err(ScanError::NoFilesFound(input.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = fs::read_dir(input)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| !path.is_dir())
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(ScanError::NoFilesFound(input.to_path_buf()));
    }
    Ok(files)
}

/// Resolve where the output folder lives.
///
/// With `use_subfolder` on, the folder nests under the input's own
/// directory (the input itself when it is a directory, its parent when it
/// is a file). Off, `output_folder` is taken as a path as given.
pub fn resolve_output_folder(input: &Path, output_folder: &str, use_subfolder: bool) -> PathBuf {
    if !use_subfolder {
        return PathBuf::from(output_folder);
    }
    let base = if input.is_dir() {
        input
    } else {
        input.parent().unwrap_or(Path::new("."))
    };
    base.join(output_folder)
}

/// Output path for one input file: `<output_folder>/<stem>-padded.<ext>`.
pub fn output_path(output_folder: &Path, input_file: &Path) -> PathBuf {
    let stem = input_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = match input_file.extension() {
        Some(ext) => format!("{stem}-padded.{}", ext.to_string_lossy()),
        None => format!("{stem}-padded"),
    };
    output_folder.join(name)
}
