//! Python requirements.txt parser
//!
//! Line-oriented: blank lines and `#` comments are skipped. Only the
//! `==` (exact) and `>=` (minimum) operators are recognized; lines
//! using other operators (`~=`, `<`, extras, unpinned names) are
//! silently dropped. That gap is deliberate parity with the observed
//! behavior, not an oversight.

use crate::domain::{Constraint, Dependency, Ecosystem};
use crate::error::ParseError;
use crate::parser::ManifestParser;
use std::path::Path;

/// Parser for requirements.txt files
pub struct PythonManifestParser;

impl ManifestParser for PythonManifestParser {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Python
    }

    fn parse(&self, path: &Path, content: &str) -> Result<Vec<Dependency>, ParseError> {
        // setup.py and pyproject.toml are detection markers only
        if path.file_name().and_then(|n| n.to_str()) != Some("requirements.txt") {
            return Ok(Vec::new());
        }

        let mut dependencies = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((name, version)) = line.split_once("==") {
                dependencies.push(Dependency::new(
                    name.trim(),
                    version.trim(),
                    Constraint::Exact,
                    path,
                ));
            } else if let Some((name, version)) = line.split_once(">=") {
                dependencies.push(Dependency::new(
                    name.trim(),
                    version.trim(),
                    Constraint::Min,
                    path,
                ));
            }
            // Other operators and unpinned lines are dropped.
        }

        Ok(dependencies)
    }
}
