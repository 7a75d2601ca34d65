//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Colored scan report display grouped by manifest file
//! - Upgrade candidate lines with current and latest versions
//! - Parse and check error listings
//! - Summary with dependency and candidate counts

use crate::domain::Dependency;
use crate::output::{OutputFormatter, Verbosity};
use crate::scanner::ScanOutcome;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Calculate the maximum package name length for alignment
    fn max_name_length<'a, I: Iterator<Item = &'a str>>(&self, names: I) -> usize {
        names.map(|n| n.len()).max().unwrap_or(0)
    }

    /// Format a single dependency line (verbose mode)
    fn format_dependency_line(
        &self,
        dependency: &Dependency,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let spec = format!(
            "{}{}",
            dependency.constraint.symbol(),
            dependency.version
        );
        let dev_marker = if dependency.is_dev() { " (dev)" } else { "" };

        if self.color {
            writeln!(
                writer,
                "  {:width$} {}{}",
                dependency.name,
                spec.dimmed(),
                dev_marker.dimmed(),
                width = max_name_len
            )
        } else {
            writeln!(
                writer,
                "  {:width$} {}{}",
                dependency.name,
                spec,
                dev_marker,
                width = max_name_len
            )
        }
    }

    /// Format a single upgrade candidate line
    fn format_candidate_line(
        &self,
        name: &str,
        current: &str,
        latest: &str,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.color {
            writeln!(
                writer,
                "  {:width$} {} {} {}",
                name,
                current.dimmed(),
                "->".dimmed(),
                latest.bright_white().bold(),
                width = max_name_len
            )
        } else {
            writeln!(
                writer,
                "  {:width$} {} -> {}",
                name,
                current,
                latest,
                width = max_name_len
            )
        }
    }

    /// Format the closing summary lines
    fn format_summary(&self, outcome: &ScanOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        let report = &outcome.report;
        let candidates = report.upgrade_candidates.len();
        let errors = outcome.parse_errors.len() + outcome.check_errors.len();

        if self.verbosity == Verbosity::Quiet {
            if candidates > 0 {
                if self.color {
                    writeln!(
                        writer,
                        "{} {}",
                        candidates.to_string().yellow(),
                        "outdated"
                    )?;
                } else {
                    writeln!(writer, "{} outdated", candidates)?;
                }
            } else if self.color {
                writeln!(writer, "{}", "Up to date".dimmed())?;
            } else {
                writeln!(writer, "Up to date")?;
            }
            return Ok(());
        }

        if self.color {
            writeln!(writer, "{}:", "Summary".bold())?;
            writeln!(
                writer,
                "  {} dependencies in {} file(s)",
                report.dependencies.len().to_string().cyan(),
                report.dependency_files.len()
            )?;
            if candidates > 0 {
                writeln!(
                    writer,
                    "  {} upgrade candidate(s)",
                    candidates.to_string().yellow()
                )?;
            } else {
                writeln!(writer, "  {}", "All dependencies up to date".green())?;
            }
            if errors > 0 {
                writeln!(writer, "  {} error(s)", errors.to_string().red())?;
            }
        } else {
            writeln!(writer, "Summary:")?;
            writeln!(
                writer,
                "  {} dependencies in {} file(s)",
                report.dependencies.len(),
                report.dependency_files.len()
            )?;
            if candidates > 0 {
                writeln!(writer, "  {} upgrade candidate(s)", candidates)?;
            } else {
                writeln!(writer, "  All dependencies up to date")?;
            }
            if errors > 0 {
                writeln!(writer, "  {} error(s)", errors)?;
            }
        }

        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, outcome: &ScanOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return self.format_summary(outcome, writer);
        }

        let report = &outcome.report;

        // Header: ecosystem and manifest files
        if self.color {
            writeln!(
                writer,
                "{} {}",
                "Detected:".bold(),
                report.ecosystem.display_name().cyan()
            )?;
        } else {
            writeln!(writer, "Detected: {}", report.ecosystem.display_name())?;
        }
        for file in &report.dependency_files {
            let display = file.display().to_string();
            if self.color {
                writeln!(writer, "  {}", display.dimmed())?;
            } else {
                writeln!(writer, "  {}", display)?;
            }
        }
        writeln!(writer)?;

        // Verbose: list every parsed dependency
        if self.verbosity == Verbosity::Verbose && !report.dependencies.is_empty() {
            if self.color {
                writeln!(writer, "{}:", "Dependencies".bold())?;
            } else {
                writeln!(writer, "Dependencies:")?;
            }
            let max_name_len = self
                .max_name_length(report.dependencies.iter().map(|d| d.name.as_str()))
                .max(20);
            for dependency in &report.dependencies {
                self.format_dependency_line(dependency, max_name_len, writer)?;
            }
            writeln!(writer)?;
        }

        // Upgrade candidates
        if !report.upgrade_candidates.is_empty() {
            if self.color {
                writeln!(writer, "{}:", "Upgrades available".bold())?;
            } else {
                writeln!(writer, "Upgrades available:")?;
            }
            let max_name_len = self
                .max_name_length(report.upgrade_candidates.iter().map(|c| c.name.as_str()))
                .max(20);
            for candidate in &report.upgrade_candidates {
                self.format_candidate_line(
                    &candidate.name,
                    &candidate.current_version,
                    &candidate.latest_version,
                    max_name_len,
                    writer,
                )?;
            }
            writeln!(writer)?;
        }

        // Errors
        if !outcome.parse_errors.is_empty() || !outcome.check_errors.is_empty() {
            if self.color {
                writeln!(writer, "{}:", "Errors".red().bold())?;
            } else {
                writeln!(writer, "Errors:")?;
            }
            for error in &outcome.parse_errors {
                if self.color {
                    writeln!(writer, "  {} {}", "x".red(), error)?;
                } else {
                    writeln!(writer, "  - {}", error)?;
                }
            }
            for error in &outcome.check_errors {
                if self.color {
                    writeln!(writer, "  {} {}", "x".red(), error)?;
                } else {
                    writeln!(writer, "  - {}", error)?;
                }
            }
            writeln!(writer)?;
        }

        self.format_summary(outcome, writer)
    }
}
