//! Dependency record structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// The version constraint declared for a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// Exact pin (`==1.2.3` for Python, bare `1.2.3` for Maven)
    Exact,
    /// Minimum version (`>=1.2.3`)
    Min,
    /// Caret range (`^1.2.3`)
    Caret,
    /// Tilde range (`~1.2.3`)
    Tilde,
    /// Anything else: range expressions, unrecognized prefixes
    Unknown,
}

impl Constraint {
    /// Returns the operator symbol as written in the manifest
    pub fn symbol(&self) -> &'static str {
        match self {
            Constraint::Exact => "==",
            Constraint::Min => ">=",
            Constraint::Caret => "^",
            Constraint::Tilde => "~",
            Constraint::Unknown => "?",
        }
    }
}

/// Whether a dependency is declared for runtime or development only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyKind {
    /// Regular runtime dependency
    Runtime,
    /// Development-only dependency (devDependencies)
    Development,
}

/// A single declared dependency parsed from a manifest file.
///
/// Immutable once parsed; one instance per declaration per file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Package name (`group:artifact` for Maven)
    pub name: String,
    /// Declared version, with constraint operators stripped
    pub version: String,
    /// Declared constraint
    pub constraint: Constraint,
    /// Manifest file this dependency was parsed from
    pub source_file: PathBuf,
    /// Maven group id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Maven artifact id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    /// Runtime vs development, where the manifest distinguishes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DependencyKind>,
}

impl Dependency {
    /// Creates a new dependency
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        constraint: Constraint,
        source_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            constraint,
            source_file: source_file.into(),
            group_id: None,
            artifact_id: None,
            kind: None,
        }
    }

    /// Sets Maven coordinates (builder pattern)
    pub fn with_coordinates(
        mut self,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
    ) -> Self {
        self.group_id = Some(group_id.into());
        self.artifact_id = Some(artifact_id.into());
        self
    }

    /// Sets the dependency kind (builder pattern)
    pub fn with_kind(mut self, kind: DependencyKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Returns true if this is a development-only dependency
    pub fn is_dev(&self) -> bool {
        self.kind == Some(DependencyKind::Development)
    }

    /// Returns the source file path
    pub fn source_file(&self) -> &Path {
        &self.source_file
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dev_marker = if self.is_dev() { " (dev)" } else { "" };
        write!(f, "{}@{}{}", self.name, self.version, dev_marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_new() {
        let dep = Dependency::new("requests", "2.28.0", Constraint::Exact, "requirements.txt");
        assert_eq!(dep.name, "requests");
        assert_eq!(dep.version, "2.28.0");
        assert_eq!(dep.constraint, Constraint::Exact);
        assert_eq!(dep.source_file, PathBuf::from("requirements.txt"));
        assert!(dep.group_id.is_none());
        assert!(dep.kind.is_none());
    }

    #[test]
    fn test_dependency_with_coordinates() {
        let dep = Dependency::new(
            "org.apache.commons:commons-lang3",
            "3.12.0",
            Constraint::Exact,
            "pom.xml",
        )
        .with_coordinates("org.apache.commons", "commons-lang3");
        assert_eq!(dep.group_id.as_deref(), Some("org.apache.commons"));
        assert_eq!(dep.artifact_id.as_deref(), Some("commons-lang3"));
    }

    #[test]
    fn test_dependency_with_kind() {
        let dep = Dependency::new("jest", "29.0.0", Constraint::Caret, "package.json")
            .with_kind(DependencyKind::Development);
        assert!(dep.is_dev());

        let dep = Dependency::new("lodash", "4.17.21", Constraint::Caret, "package.json")
            .with_kind(DependencyKind::Runtime);
        assert!(!dep.is_dev());
    }

    #[test]
    fn test_dependency_display() {
        let dep = Dependency::new("lodash", "4.17.21", Constraint::Caret, "package.json");
        assert_eq!(format!("{}", dep), "lodash@4.17.21");

        let dev = dep.clone().with_kind(DependencyKind::Development);
        assert_eq!(format!("{}", dev), "lodash@4.17.21 (dev)");
    }

    #[test]
    fn test_constraint_symbols() {
        assert_eq!(Constraint::Exact.symbol(), "==");
        assert_eq!(Constraint::Min.symbol(), ">=");
        assert_eq!(Constraint::Caret.symbol(), "^");
        assert_eq!(Constraint::Tilde.symbol(), "~");
        assert_eq!(Constraint::Unknown.symbol(), "?");
    }

    #[test]
    fn test_serde_constraint() {
        assert_eq!(
            serde_json::to_string(&Constraint::Exact).unwrap(),
            "\"exact\""
        );
        assert_eq!(serde_json::to_string(&Constraint::Min).unwrap(), "\"min\"");
        let parsed: Constraint = serde_json::from_str("\"caret\"").unwrap();
        assert_eq!(parsed, Constraint::Caret);
    }

    #[test]
    fn test_serde_dependency_roundtrip() {
        let dep = Dependency::new("react", "18.2.0", Constraint::Caret, "package.json")
            .with_kind(DependencyKind::Runtime);
        let json = serde_json::to_string(&dep).unwrap();
        let parsed: Dependency = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, dep);
    }

    #[test]
    fn test_serde_skips_absent_extras() {
        let dep = Dependency::new("a", "1.0", Constraint::Exact, "requirements.txt");
        let json = serde_json::to_string(&dep).unwrap();
        assert!(!json.contains("group_id"));
        assert!(!json.contains("artifact_id"));
        assert!(!json.contains("kind"));
    }
}
