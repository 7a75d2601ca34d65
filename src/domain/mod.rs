//! Core domain models for depscan
//!
//! This module contains the fundamental types used throughout the application:
//! - Ecosystem types for supported project classifications
//! - Dependency records with their declared constraints
//! - The assembled scan report and its upgrade candidates

mod dependency;
mod ecosystem;
mod report;

pub use dependency::{Constraint, Dependency, DependencyKind};
pub use ecosystem::Ecosystem;
pub use report::{ScanReport, UpgradeCandidate};
