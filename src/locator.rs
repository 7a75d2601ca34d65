//! Dependency file location and project type detection
//!
//! Walks a project tree once, collects marker-file hits per ecosystem,
//! and classifies the project by testing ecosystems in a fixed
//! priority order (Python, Node.js, Maven, Gradle, .NET). The first
//! ecosystem with at least one marker wins; detection never tries to
//! pick the "most specific" match.

use crate::domain::Ecosystem;
use crate::error::LocateError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directories never descended into during the walk.
///
/// Vendored trees carry marker files of their own ecosystems and
/// would misclassify the project.
const SKIPPED_DIRS: &[&str] = &["node_modules", "target", "dist", "venv", ".venv"];

/// A classified project: its ecosystem and the marker files found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Detected ecosystem
    pub ecosystem: Ecosystem,
    /// Absolute paths of the marker files, sorted for determinism
    pub files: Vec<PathBuf>,
}

impl Detection {
    /// Returns the marker paths relative to the scan root.
    ///
    /// Files outside the root (which cannot happen for a walk rooted
    /// there) are passed through unchanged.
    pub fn relative_files(&self, root: &Path) -> Vec<PathBuf> {
        self.files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap_or(f).to_path_buf())
            .collect()
    }
}

/// Locate dependency marker files under `root` and classify the project.
///
/// Read-only traversal; hidden directories and vendored trees are
/// skipped. Returns `UnknownProjectType` when no marker is found
/// anywhere in the tree.
pub fn locate(root: &Path) -> Result<Detection, LocateError> {
    if !root.exists() {
        return Err(LocateError::path_not_found(root));
    }

    let mut hits: Vec<Vec<PathBuf>> = vec![Vec::new(); Ecosystem::detection_order().len()];

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e))
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        for (idx, ecosystem) in Ecosystem::detection_order().iter().enumerate() {
            if ecosystem.matches_marker(file_name) {
                hits[idx].push(entry.path().to_path_buf());
            }
        }
    }

    for (idx, ecosystem) in Ecosystem::detection_order().iter().enumerate() {
        if !hits[idx].is_empty() {
            let mut files = std::mem::take(&mut hits[idx]);
            files.sort();
            return Ok(Detection {
                ecosystem: *ecosystem,
                files,
            });
        }
    }

    Err(LocateError::unknown_project_type(root))
}

/// Returns true for directories the walk should not descend into
fn is_skipped_dir(entry: &walkdir::DirEntry) -> bool {
    if !entry.file_type().is_dir() || entry.depth() == 0 {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.') || SKIPPED_DIRS.contains(&name))
        .unwrap_or(false)
}
