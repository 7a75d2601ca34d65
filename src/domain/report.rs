//! Scan report structures
//!
//! `ScanReport` is the terminal output value of a scan. It is
//! constructed exactly once, by the report assembler, and never
//! mutated afterwards.

use super::{Dependency, Ecosystem};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A dependency whose registry "latest" differs from its declared version.
///
/// Comparison is exact string equality, so semantically equal versions
/// like "1.0" and "1.0.0" are still flagged. Known limitation carried
/// over from the observed behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeCandidate {
    /// Package name, matching exactly one parsed dependency
    pub name: String,
    /// Version currently declared in the manifest
    pub current_version: String,
    /// Latest version reported by the registry
    pub latest_version: String,
    /// Manifest file the dependency was parsed from
    pub source_file: PathBuf,
}

impl UpgradeCandidate {
    /// Creates an upgrade candidate for a dependency
    pub fn new(dependency: &Dependency, latest_version: impl Into<String>) -> Self {
        Self {
            name: dependency.name.clone(),
            current_version: dependency.version.clone(),
            latest_version: latest_version.into(),
            source_file: dependency.source_file.clone(),
        }
    }
}

/// The assembled result of one scan invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Detected project ecosystem
    pub ecosystem: Ecosystem,
    /// Root-relative paths of the marker files, in locator order
    pub dependency_files: Vec<PathBuf>,
    /// All parsed dependencies, in parse order
    pub dependencies: Vec<Dependency>,
    /// Upgrade candidates, in dependency order
    pub upgrade_candidates: Vec<UpgradeCandidate>,
}

impl ScanReport {
    /// Assembles a report from the outputs of the pipeline stages.
    ///
    /// Pure aggregation; the inputs are taken as-is.
    pub fn assemble(
        ecosystem: Ecosystem,
        dependency_files: Vec<PathBuf>,
        dependencies: Vec<Dependency>,
        upgrade_candidates: Vec<UpgradeCandidate>,
    ) -> Self {
        Self {
            ecosystem,
            dependency_files,
            dependencies,
            upgrade_candidates,
        }
    }

    /// Returns true if no dependency has an upgrade candidate
    pub fn is_up_to_date(&self) -> bool {
        self.upgrade_candidates.is_empty()
    }
}
