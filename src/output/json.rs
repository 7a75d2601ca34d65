//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of the scan report
//! - Error listings alongside the report so partial results stay visible

use crate::domain::Ecosystem;
use crate::output::{OutputFormatter, Verbosity};
use crate::scanner::ScanOutcome;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full outcome
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Detected ecosystem identifier
    ecosystem: Ecosystem,
    /// Dependency files, relative to the scanned root
    dependency_files: Vec<String>,
    /// Parsed dependencies (omitted in quiet mode)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<JsonDependency<'a>>,
    /// Upgrade candidates
    upgrade_candidates: Vec<JsonCandidate<'a>>,
    /// Summary statistics
    summary: JsonSummary,
    /// Errors encountered
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

/// JSON representation of a parsed dependency
#[derive(Serialize)]
struct JsonDependency<'a> {
    /// Package name
    name: &'a str,
    /// Declared version
    version: &'a str,
    /// Constraint operator (e.g. "==", ">=", "^")
    constraint: &'a str,
    /// File the dependency was parsed from
    source_file: String,
    /// Whether it's a development dependency
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    dev: bool,
}

/// JSON representation of an upgrade candidate
#[derive(Serialize)]
struct JsonCandidate<'a> {
    /// Package name
    name: &'a str,
    /// Currently declared version
    current: &'a str,
    /// Latest version reported by the registry
    latest: &'a str,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    /// Total parsed dependencies
    dependencies: usize,
    /// Total upgrade candidates
    upgrade_candidates: usize,
    /// Total parse and check errors
    errors: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, outcome: &ScanOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        let report = &outcome.report;

        let dependencies: Vec<JsonDependency> = if self.verbosity == Verbosity::Quiet {
            Vec::new()
        } else {
            report
                .dependencies
                .iter()
                .map(|d| JsonDependency {
                    name: &d.name,
                    version: &d.version,
                    constraint: d.constraint.symbol(),
                    source_file: d.source_file.display().to_string(),
                    dev: d.is_dev(),
                })
                .collect()
        };

        let upgrade_candidates: Vec<JsonCandidate> = report
            .upgrade_candidates
            .iter()
            .map(|c| JsonCandidate {
                name: &c.name,
                current: &c.current_version,
                latest: &c.latest_version,
            })
            .collect();

        let errors: Vec<String> = outcome
            .parse_errors
            .iter()
            .map(|e| e.to_string())
            .chain(outcome.check_errors.iter().map(|e| e.to_string()))
            .collect();

        let output = JsonOutput {
            ecosystem: report.ecosystem,
            dependency_files: report
                .dependency_files
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            dependencies,
            summary: JsonSummary {
                dependencies: report.dependencies.len(),
                upgrade_candidates: upgrade_candidates.len(),
                errors: errors.len(),
            },
            upgrade_candidates,
            errors,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Constraint, Dependency, Ecosystem, ScanReport, UpgradeCandidate};
    use crate::error::CheckError;
    use std::path::PathBuf;

    fn sample_outcome() -> ScanOutcome {
        let deps = vec![Dependency::new(
            "express",
            "4.18.0",
            Constraint::Caret,
            PathBuf::from("package.json"),
        )];
        let candidate = UpgradeCandidate::new(&deps[0], "4.19.2");
        let report = ScanReport::assemble(
            Ecosystem::NodeJs,
            vec![PathBuf::from("package.json")],
            deps,
            vec![candidate],
        );
        ScanOutcome {
            report,
            parse_errors: Vec::new(),
            check_errors: Vec::new(),
        }
    }

    #[test]
    fn test_json_output_shape() {
        let formatter = JsonFormatter::new(Verbosity::Normal);
        let mut output = Vec::new();

        formatter.format(&sample_outcome(), &mut output).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(parsed["ecosystem"], "nodejs");
        assert_eq!(parsed["dependency_files"][0], "package.json");
        assert_eq!(parsed["dependencies"][0]["name"], "express");
        assert_eq!(parsed["dependencies"][0]["constraint"], "^");
        assert_eq!(parsed["upgrade_candidates"][0]["current"], "4.18.0");
        assert_eq!(parsed["upgrade_candidates"][0]["latest"], "4.19.2");
        assert_eq!(parsed["summary"]["dependencies"], 1);
        assert_eq!(parsed["summary"]["upgrade_candidates"], 1);
        assert_eq!(parsed["summary"]["errors"], 0);
        // No errors key when clean
        assert!(parsed.get("errors").is_none());
    }

    #[test]
    fn test_json_quiet_omits_dependency_list() {
        let formatter = JsonFormatter::new(Verbosity::Quiet);
        let mut output = Vec::new();

        formatter.format(&sample_outcome(), &mut output).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert!(parsed.get("dependencies").is_none());
        assert_eq!(parsed["summary"]["dependencies"], 1);
    }

    #[test]
    fn test_json_includes_errors() {
        let formatter = JsonFormatter::new(Verbosity::Normal);
        let mut outcome = sample_outcome();
        outcome
            .check_errors
            .push(CheckError::not_found("left-pad", "npm"));
        let mut output = Vec::new();

        formatter.format(&outcome, &mut output).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(parsed["summary"]["errors"], 1);
        let errors = parsed["errors"].as_array().unwrap();
        assert!(errors[0].as_str().unwrap().contains("left-pad"));
    }
}
