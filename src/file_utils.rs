// src/file_utils.rs

use crate::error::PlayerError;
use log::debug;
use std::{
    collections::BTreeSet,
    io::{Error as IoError, ErrorKind as IoErrorKind},
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Checks that `folder_path` exists and is a directory.
///
/// # Errors
///
/// Returns `PlayerError::DirectoryNotFound` otherwise.
pub fn validate_directory(folder_path: &Path) -> Result<(), PlayerError> {
    if !folder_path.is_dir() {
        return Err(PlayerError::DirectoryNotFound {
            path: folder_path.to_path_buf(),
        });
    }
    Ok(())
}

/// Returns true if the lowercased extension of `path` is in `extensions`.
pub fn has_video_extension(path: &Path, extensions: &BTreeSet<String>) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |ext| extensions.contains(&ext.to_lowercase()))
}

/// Lists the regular files directly inside `folder_path` whose extension is in `extensions`.
/// Subdirectories are not entered. Results are sorted by file name.
///
/// # Arguments
///
/// * `folder_path` - The directory to scan.
/// * `extensions` - Lowercase extensions without the leading dot.
///
/// # Errors
///
/// Returns an error if:
/// * `folder_path` is not a directory (`DirectoryNotFound`).
/// * The directory cannot be read (`PermissionDenied`, or `Unexpected` for other I/O failures).
pub fn find_video_files(
    folder_path: &Path,
    extensions: &BTreeSet<String>,
) -> Result<Vec<PathBuf>, PlayerError> {
    validate_directory(folder_path)?;

    let mut video_files = Vec::new();

    let walker = WalkDir::new(folder_path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry_result in walker {
        let entry =
            entry_result.map_err(|e| classify_scan_error(folder_path, IoError::from(e)))?;
        let path = entry.path();

        // is_file follows symlinks, so a link to a video counts.
        if path.is_file() && has_video_extension(path, extensions) {
            video_files.push(path.to_path_buf());
        }
    }

    debug!(
        "Found {} candidate video(s) in '{}'",
        video_files.len(),
        folder_path.display()
    );
    Ok(video_files)
}

fn classify_scan_error(folder_path: &Path, err: IoError) -> PlayerError {
    match err.kind() {
        IoErrorKind::PermissionDenied => PlayerError::PermissionDenied {
            path: folder_path.to_path_buf(),
        },
        // The folder disappeared between validation and listing.
        IoErrorKind::NotFound => PlayerError::DirectoryNotFound {
            path: folder_path.to_path_buf(),
        },
        _ => PlayerError::Unexpected {
            context: format!("reading directory '{}'", folder_path.display()),
            source: err,
        },
    }
}
