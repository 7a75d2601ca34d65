//! Manifest parsers for supported ecosystems
//!
//! One parser per ecosystem that declares dependencies in a parseable
//! manifest:
//! - Python (requirements.txt)
//! - Node.js (package.json)
//! - Maven (pom.xml)
//!
//! Gradle and .NET projects are detection-only: they have no parser
//! and contribute no dependency records.

mod maven;
mod node;
mod python;

pub use maven::MavenManifestParser;
pub use node::NodeManifestParser;
pub use python::PythonManifestParser;

use crate::domain::{Dependency, Ecosystem};
use crate::error::ParseError;
use std::path::Path;

/// Trait for extracting dependency records from one manifest file
pub trait ManifestParser {
    /// Returns the ecosystem this parser handles
    fn ecosystem(&self) -> Ecosystem;

    /// Parse the content of one manifest file into dependency records.
    ///
    /// `path` is recorded as each record's provenance. Files this
    /// parser does not handle (e.g. setup.py for Python) yield an
    /// empty list, not an error.
    fn parse(&self, path: &Path, content: &str) -> Result<Vec<Dependency>, ParseError>;
}

/// Get the manifest parser for an ecosystem, if it has one
pub fn parser_for(ecosystem: Ecosystem) -> Option<Box<dyn ManifestParser>> {
    match ecosystem {
        Ecosystem::Python => Some(Box::new(PythonManifestParser)),
        Ecosystem::NodeJs => Some(Box::new(NodeManifestParser)),
        Ecosystem::Maven => Some(Box::new(MavenManifestParser)),
        Ecosystem::Gradle | Ecosystem::Dotnet => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_for_python() {
        let parser = parser_for(Ecosystem::Python).unwrap();
        assert_eq!(parser.ecosystem(), Ecosystem::Python);
    }

    #[test]
    fn test_parser_for_nodejs() {
        let parser = parser_for(Ecosystem::NodeJs).unwrap();
        assert_eq!(parser.ecosystem(), Ecosystem::NodeJs);
    }

    #[test]
    fn test_parser_for_maven() {
        let parser = parser_for(Ecosystem::Maven).unwrap();
        assert_eq!(parser.ecosystem(), Ecosystem::Maven);
    }

    #[test]
    fn test_no_parser_for_detection_only_ecosystems() {
        assert!(parser_for(Ecosystem::Gradle).is_none());
        assert!(parser_for(Ecosystem::Dotnet).is_none());
    }
}
