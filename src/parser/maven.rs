//! Maven pom.xml parser
//!
//! Pattern-matches `<dependency>...</dependency>` blocks with a
//! non-validating text pattern rather than an XML parser, extracting
//! groupId, artifactId and version in document order. This is lossy:
//! commented-out or nested blocks are not distinguished from active
//! ones. On well-formed input it reproduces the same extracted list
//! a real XML parser would.

use crate::domain::{Constraint, Dependency, Ecosystem};
use crate::error::ParseError;
use crate::parser::ManifestParser;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static DEPENDENCY_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)<dependency>.*?<groupId>(.*?)</groupId>.*?<artifactId>(.*?)</artifactId>.*?<version>(.*?)</version>.*?</dependency>",
    )
    .unwrap()
});

/// Parser for pom.xml files
pub struct MavenManifestParser;

impl ManifestParser for MavenManifestParser {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Maven
    }

    fn parse(&self, path: &Path, content: &str) -> Result<Vec<Dependency>, ParseError> {
        let mut dependencies = Vec::new();

        for caps in DEPENDENCY_BLOCK_RE.captures_iter(content) {
            let group_id = caps[1].trim().to_string();
            let artifact_id = caps[2].trim().to_string();
            let version = caps[3].trim().to_string();

            dependencies.push(
                Dependency::new(
                    format!("{}:{}", group_id, artifact_id),
                    version,
                    Constraint::Exact,
                    path,
                )
                .with_coordinates(group_id, artifact_id),
            );
        }

        Ok(dependencies)
    }
}
