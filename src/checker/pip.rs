//! PyPI upgrade checker via the pip CLI
//!
//! Invokes `pip index versions <package>` and scans stdout for the
//! `Available versions: ...` line. The first comma-separated token is
//! taken as the latest version — an ordering heuristic of pip's
//! output, not a guarantee of semantic sorting.

use crate::checker::{candidate_if_different, UpgradeChecker};
use crate::domain::{Dependency, Ecosystem, UpgradeCandidate};
use crate::error::CheckError;
use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;
use tokio::process::Command;

static AVAILABLE_VERSIONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Available versions: (.*)").unwrap());

/// Upgrade checker backed by the local pip client
pub struct PipChecker {
    program: String,
}

impl PipChecker {
    /// Create a new pip checker invoking the given program
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Extract the latest version from `pip index versions` output
    fn parse_latest(output: &str) -> Option<String> {
        let caps = AVAILABLE_VERSIONS_RE.captures(output)?;
        caps[1]
            .split(", ")
            .next()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

#[async_trait]
impl UpgradeChecker for PipChecker {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Python
    }

    fn registry_name(&self) -> &'static str {
        "PyPI"
    }

    async fn check(
        &self,
        dependency: &Dependency,
    ) -> Result<Option<UpgradeCandidate>, CheckError> {
        let command_desc = format!("{} index versions", self.program);

        let output = Command::new(&self.program)
            .args(["index", "versions", &dependency.name])
            .output()
            .await
            .map_err(|e| CheckError::subprocess(&dependency.name, &command_desc, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CheckError::subprocess(
                &dependency.name,
                &command_desc,
                format!("exit status {}: {}", output.status, stderr.trim()),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let latest = Self::parse_latest(&stdout).ok_or_else(|| {
            CheckError::invalid_response(
                &dependency.name,
                self.registry_name(),
                "no 'Available versions' line in pip output",
            )
        })?;

        Ok(candidate_if_different(dependency, &latest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_latest_takes_first_token() {
        let output = "requests (2.31.0)\nAvailable versions: 2.31.0, 2.30.0, 2.29.0\n";
        assert_eq!(PipChecker::parse_latest(output).as_deref(), Some("2.31.0"));
    }

    #[test]
    fn test_parse_latest_single_version() {
        let output = "Available versions: 1.0.0\n";
        assert_eq!(PipChecker::parse_latest(output).as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_parse_latest_missing_line() {
        assert!(PipChecker::parse_latest("WARNING: pip index is experimental\n").is_none());
        assert!(PipChecker::parse_latest("").is_none());
    }

    #[test]
    fn test_parse_latest_ignores_surrounding_noise() {
        let output = "WARNING: pip index is experimental\n\
                      requests (2.31.0)\n\
                      Available versions: 2.31.0, 2.30.0\n\
                      INSTALLED: 2.28.0\n";
        assert_eq!(PipChecker::parse_latest(output).as_deref(), Some("2.31.0"));
    }

    #[test]
    fn test_ecosystem_and_registry() {
        let checker = PipChecker::new("pip");
        assert_eq!(checker.ecosystem(), Ecosystem::Python);
        assert_eq!(checker.registry_name(), "PyPI");
    }

    #[tokio::test]
    async fn test_missing_program_is_subprocess_error() {
        let checker = PipChecker::new("definitely-not-a-real-pip-binary");
        let dep = Dependency::new(
            "requests",
            "2.28.0",
            crate::domain::Constraint::Exact,
            "requirements.txt",
        );
        let err = checker.check(&dep).await.unwrap_err();
        assert!(matches!(err, CheckError::Subprocess { .. }));
    }
}
