//! Ecosystem type definitions for supported project types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported project ecosystems, classified by marker-file presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    /// Python (requirements.txt, setup.py, pyproject.toml)
    Python,
    /// Node.js (package.json)
    #[serde(rename = "nodejs")]
    NodeJs,
    /// Java with Maven (pom.xml)
    Maven,
    /// Java/Kotlin with Gradle (build.gradle, build.gradle.kts)
    Gradle,
    /// .NET (*.csproj)
    Dotnet,
}

impl Ecosystem {
    /// Returns the marker filenames for this ecosystem.
    ///
    /// Entries starting with `*.` are extension patterns matched
    /// against the file name suffix.
    pub fn marker_filenames(&self) -> &'static [&'static str] {
        match self {
            Ecosystem::Python => &["requirements.txt", "setup.py", "pyproject.toml"],
            Ecosystem::NodeJs => &["package.json"],
            Ecosystem::Maven => &["pom.xml"],
            Ecosystem::Gradle => &["build.gradle", "build.gradle.kts"],
            Ecosystem::Dotnet => &["*.csproj"],
        }
    }

    /// Returns true if the given file name is a marker for this ecosystem
    pub fn matches_marker(&self, file_name: &str) -> bool {
        self.marker_filenames().iter().any(|marker| {
            if let Some(ext) = marker.strip_prefix('*') {
                file_name.ends_with(ext)
            } else {
                file_name == *marker
            }
        })
    }

    /// Returns the display name for this ecosystem
    pub fn display_name(&self) -> &'static str {
        match self {
            Ecosystem::Python => "Python",
            Ecosystem::NodeJs => "Node.js",
            Ecosystem::Maven => "Maven",
            Ecosystem::Gradle => "Gradle",
            Ecosystem::Dotnet => ".NET",
        }
    }

    /// Returns the registry name for this ecosystem, if it has one
    pub fn registry_name(&self) -> Option<&'static str> {
        match self {
            Ecosystem::Python => Some("PyPI"),
            Ecosystem::NodeJs => Some("npm"),
            Ecosystem::Maven => Some("Maven Central"),
            Ecosystem::Gradle | Ecosystem::Dotnet => None,
        }
    }

    /// Returns all ecosystems in detection priority order.
    ///
    /// Detection is first-match-wins: the first ecosystem in this
    /// order with at least one marker file claims the project.
    pub fn detection_order() -> &'static [Ecosystem] {
        &[
            Ecosystem::Python,
            Ecosystem::NodeJs,
            Ecosystem::Maven,
            Ecosystem::Gradle,
            Ecosystem::Dotnet,
        ]
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_filenames() {
        assert_eq!(
            Ecosystem::Python.marker_filenames(),
            &["requirements.txt", "setup.py", "pyproject.toml"]
        );
        assert_eq!(Ecosystem::NodeJs.marker_filenames(), &["package.json"]);
        assert_eq!(Ecosystem::Maven.marker_filenames(), &["pom.xml"]);
        assert_eq!(
            Ecosystem::Gradle.marker_filenames(),
            &["build.gradle", "build.gradle.kts"]
        );
        assert_eq!(Ecosystem::Dotnet.marker_filenames(), &["*.csproj"]);
    }

    #[test]
    fn test_matches_marker_exact() {
        assert!(Ecosystem::Python.matches_marker("requirements.txt"));
        assert!(Ecosystem::Python.matches_marker("setup.py"));
        assert!(!Ecosystem::Python.matches_marker("requirements.dev.txt"));
        assert!(Ecosystem::NodeJs.matches_marker("package.json"));
        assert!(!Ecosystem::NodeJs.matches_marker("package-lock.json"));
    }

    #[test]
    fn test_matches_marker_extension() {
        assert!(Ecosystem::Dotnet.matches_marker("MyApp.csproj"));
        assert!(Ecosystem::Dotnet.matches_marker("Lib.Core.csproj"));
        assert!(!Ecosystem::Dotnet.matches_marker("MyApp.sln"));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Ecosystem::Python.display_name(), "Python");
        assert_eq!(Ecosystem::NodeJs.display_name(), "Node.js");
        assert_eq!(Ecosystem::Maven.display_name(), "Maven");
        assert_eq!(Ecosystem::Gradle.display_name(), "Gradle");
        assert_eq!(Ecosystem::Dotnet.display_name(), ".NET");
    }

    #[test]
    fn test_registry_names() {
        assert_eq!(Ecosystem::Python.registry_name(), Some("PyPI"));
        assert_eq!(Ecosystem::NodeJs.registry_name(), Some("npm"));
        assert_eq!(Ecosystem::Maven.registry_name(), Some("Maven Central"));
        assert_eq!(Ecosystem::Gradle.registry_name(), None);
        assert_eq!(Ecosystem::Dotnet.registry_name(), None);
    }

    #[test]
    fn test_detection_order() {
        let order = Ecosystem::detection_order();
        assert_eq!(order.len(), 5);
        assert_eq!(order[0], Ecosystem::Python);
        assert_eq!(order[1], Ecosystem::NodeJs);
        assert_eq!(order[2], Ecosystem::Maven);
        assert_eq!(order[3], Ecosystem::Gradle);
        assert_eq!(order[4], Ecosystem::Dotnet);
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", Ecosystem::NodeJs), "Node.js");
        assert_eq!(format!("{}", Ecosystem::Maven), "Maven");
    }

    #[test]
    fn test_serde_serialization() {
        assert_eq!(
            serde_json::to_string(&Ecosystem::Python).unwrap(),
            "\"python\""
        );
        assert_eq!(
            serde_json::to_string(&Ecosystem::NodeJs).unwrap(),
            "\"nodejs\""
        );
        assert_eq!(
            serde_json::to_string(&Ecosystem::Dotnet).unwrap(),
            "\"dotnet\""
        );
    }

    #[test]
    fn test_serde_deserialization() {
        let eco: Ecosystem = serde_json::from_str("\"nodejs\"").unwrap();
        assert_eq!(eco, Ecosystem::NodeJs);

        let eco: Ecosystem = serde_json::from_str("\"maven\"").unwrap();
        assert_eq!(eco, Ecosystem::Maven);
    }
}
