use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;
use crate::error::ScanError;

/// Filter: Returns true if this is a folder to be IGNORED
fn should_skip(entry: &DirEntry, excluded_dirs: &[String]) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name().to_str().unwrap_or("");
    excluded_dirs.iter().any(|dir| dir == name)
}

/// Helper: Check if a path has one of the scanned extensions
fn has_target_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|target| target == ext))
}

/// Collect every markup file below `root`, in stable file-name order
///
/// Excluded directories are pruned before they are descended into.
/// Subdirectories that cannot be read are logged and skipped.
///
/// # Errors
///
/// Returns error if `root` does not exist, cannot be read, or is not a directory
pub fn scan_markup_files(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>, ScanError> {
    let metadata = std::fs::metadata(root).map_err(|source| ScanError::Enumeration {
        path: root.to_path_buf(),
        source,
    })?;

    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    // A root we can stat but not list still has to fail loudly
    std::fs::read_dir(root).map_err(|source| ScanError::Enumeration {
        path: root.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !should_skip(e, &config.excluded_dirs))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("skipping unreadable path: {e}");
                None
            }
        })
        .filter(|e| e.file_type().is_file() && has_target_extension(e.path(), &config.extensions))
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.dedup();
    tracing::debug!(count = files.len(), root = %root.display(), "enumerated markup files");

    Ok(files)
}

/// Root-relative, `/`-separated form of `path` used in reports
#[must_use]
pub fn display_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);

    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
