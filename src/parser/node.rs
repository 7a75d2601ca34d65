//! Node.js package.json parser
//!
//! Iterates both `dependencies` and `devDependencies`. The `^` and
//! `~` version prefixes are stripped to recover a bare version and
//! recorded as the constraint. Any other value (range expressions,
//! tags, URLs, bare pins) is passed through verbatim with
//! `Constraint::Unknown` and is not validated as a semantic version.

use crate::domain::{Constraint, Dependency, DependencyKind, Ecosystem};
use crate::error::ParseError;
use crate::parser::ManifestParser;
use serde_json::Value;
use std::path::Path;

/// The package.json maps scanned for dependencies, in order
const DEPENDENCY_MAPS: &[(&str, DependencyKind)] = &[
    ("dependencies", DependencyKind::Runtime),
    ("devDependencies", DependencyKind::Development),
];

/// Parser for package.json files
pub struct NodeManifestParser;

impl NodeManifestParser {
    /// Split a declared version into (bare version, constraint)
    fn split_version(raw: &str) -> (&str, Constraint) {
        if let Some(rest) = raw.strip_prefix('^') {
            (rest, Constraint::Caret)
        } else if let Some(rest) = raw.strip_prefix('~') {
            (rest, Constraint::Tilde)
        } else {
            (raw, Constraint::Unknown)
        }
    }
}

impl ManifestParser for NodeManifestParser {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::NodeJs
    }

    fn parse(&self, path: &Path, content: &str) -> Result<Vec<Dependency>, ParseError> {
        let root: Value =
            serde_json::from_str(content).map_err(|e| ParseError::json(path, e.to_string()))?;

        let mut dependencies = Vec::new();

        for (map_name, kind) in DEPENDENCY_MAPS {
            let Some(map) = root.get(*map_name).and_then(Value::as_object) else {
                continue;
            };
            for (name, value) in map {
                // Non-string values (workspace objects etc.) are skipped
                let Some(raw) = value.as_str() else {
                    continue;
                };
                let (version, constraint) = Self::split_version(raw);
                dependencies
                    .push(Dependency::new(name, version, constraint, path).with_kind(*kind));
            }
        }

        Ok(dependencies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<Dependency> {
        NodeManifestParser
            .parse(Path::new("package.json"), content)
            .unwrap()
    }

    #[test]
    fn test_parse_caret_dependency() {
        let deps = parse(r#"{"dependencies": {"x": "^1.2.3"}}"#);
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].name, "x");
        assert_eq!(deps[0].version, "1.2.3");
        assert_eq!(deps[0].constraint, Constraint::Caret);
        assert_eq!(deps[0].kind, Some(DependencyKind::Runtime));
    }

    #[test]
    fn test_parse_tilde_dependency() {
        let deps = parse(r#"{"dependencies": {"x": "~4.17.21"}}"#);
        assert_eq!(deps[0].version, "4.17.21");
        assert_eq!(deps[0].constraint, Constraint::Tilde);
    }

    #[test]
    fn test_other_prefixes_pass_through_verbatim() {
        let deps = parse(
            r#"{"dependencies": {
                "pinned": "1.0.0",
                "ranged": ">=1.0.0 <2.0.0",
                "tagged": "latest"
            }}"#,
        );
        assert_eq!(deps.len(), 3);
        for dep in &deps {
            assert_eq!(dep.constraint, Constraint::Unknown);
        }
        assert_eq!(deps[0].version, "1.0.0");
        assert_eq!(deps[1].version, ">=1.0.0 <2.0.0");
        assert_eq!(deps[2].version, "latest");
    }

    #[test]
    fn test_parses_dev_dependencies() {
        let deps = parse(
            r#"{
                "dependencies": {"react": "^18.2.0"},
                "devDependencies": {"jest": "^29.0.0"}
            }"#,
        );
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0].name, "react");
        assert_eq!(deps[0].kind, Some(DependencyKind::Runtime));
        assert_eq!(deps[1].name, "jest");
        assert_eq!(deps[1].kind, Some(DependencyKind::Development));
    }

    #[test]
    fn test_preserves_document_order() {
        let deps = parse(r#"{"dependencies": {"zzz": "^1.0.0", "aaa": "^2.0.0"}}"#);
        assert_eq!(deps[0].name, "zzz");
        assert_eq!(deps[1].name, "aaa");
    }

    #[test]
    fn test_missing_maps() {
        assert!(parse(r#"{"name": "my-app"}"#).is_empty());
        assert!(parse("{}").is_empty());
    }

    #[test]
    fn test_non_string_versions_skipped() {
        let deps = parse(r#"{"dependencies": {"weird": {"workspace": true}, "ok": "^1.0.0"}}"#);
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].name, "ok");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = NodeManifestParser.parse(Path::new("package.json"), "{not json");
        assert!(matches!(result, Err(ParseError::Json { .. })));
    }

    #[test]
    fn test_scoped_package_names() {
        let deps = parse(r#"{"dependencies": {"@types/node": "^20.0.0"}}"#);
        assert_eq!(deps[0].name, "@types/node");
        assert_eq!(deps[0].version, "20.0.0");
    }

    #[test]
    fn test_ecosystem() {
        assert_eq!(NodeManifestParser.ecosystem(), Ecosystem::NodeJs);
    }
}
