//! npm upgrade checker via the npm CLI
//!
//! Invokes `npm view <package> version`; trimmed stdout is taken as
//! the latest published version.

use crate::checker::{candidate_if_different, UpgradeChecker};
use crate::domain::{Dependency, Ecosystem, UpgradeCandidate};
use crate::error::CheckError;
use async_trait::async_trait;
use tokio::process::Command;

/// Upgrade checker backed by the local npm client
pub struct NpmChecker {
    program: String,
}

impl NpmChecker {
    /// Create a new npm checker invoking the given program
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl UpgradeChecker for NpmChecker {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::NodeJs
    }

    fn registry_name(&self) -> &'static str {
        "npm"
    }

    async fn check(
        &self,
        dependency: &Dependency,
    ) -> Result<Option<UpgradeCandidate>, CheckError> {
        let command_desc = format!("{} view", self.program);

        let output = Command::new(&self.program)
            .args(["view", &dependency.name, "version"])
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

        let latest = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if latest.is_empty() {
            return Err(CheckError::invalid_response(
                &dependency.name,
                self.registry_name(),
                "empty version output",
            ));
        }

        Ok(candidate_if_different(dependency, &latest))
    }
}
