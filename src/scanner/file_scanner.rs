//! Candidate file scanning and collection

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::decoder::DecodeFailure;

/// Outcome of auditing a single file
#[derive(Debug, Clone)]
pub struct AuditRecord {
    pub path: PathBuf,
    pub failure: Option<DecodeFailure>,
}

impl AuditRecord {
    pub fn is_clean(&self) -> bool {
        self.failure.is_none()
    }
}

/// Collect all files with the given extension from a directory
///
/// The extension is matched exactly (case-sensitive), without the
/// leading dot. Symlinks are not followed; traversal errors propagate.
///
/// # Arguments
/// * `dir` - Directory to scan
/// * `extension` - File extension to match, e.g. `"vue"`
/// * `recursive` - Whether to scan subdirectories recursively
///
/// # Returns
/// Vector of matching file paths, in traversal order
pub fn collect_matching_files(
    dir: &Path,
    extension: &str,
    recursive: bool,
) -> Result<Vec<PathBuf>> {
    let mut matches = Vec::new();

    if recursive {
        for entry in WalkDir::new(dir).follow_links(false) {
            let entry = entry?;
            if entry.file_type().is_file() {
                if let Some(ext) = entry.path().extension() {
                    if ext == extension {
                        matches.push(entry.path().to_path_buf());
                    }
                }
            }
        }
    } else {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Some(ext) = entry.path().extension() {
                    if ext == extension {
                        matches.push(entry.path());
                    }
                }
            }
        }
    }

    Ok(matches)
}
