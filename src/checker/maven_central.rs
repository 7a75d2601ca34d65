//! Maven Central search API checker
//!
//! Performs an HTTP GET against the Maven Central search endpoint:
//! `{base}?q=g:{groupId}+AND+a:{artifactId}&rows=20&wt=json`
//! and takes the first document's `latestVersion` field.

use crate::checker::{candidate_if_different, HttpClient, UpgradeChecker};
use crate::domain::{Dependency, Ecosystem, UpgradeCandidate};
use crate::error::CheckError;
use async_trait::async_trait;
use serde::Deserialize;

/// Maven Central search response
#[derive(Debug, Deserialize)]
struct MavenSearchResponse {
    response: MavenResponseBody,
}

/// Maven Central response body
#[derive(Debug, Deserialize)]
struct MavenResponseBody {
    #[serde(rename = "numFound")]
    num_found: u64,
    docs: Vec<MavenDoc>,
}

/// One artifact document in the search response
#[derive(Debug, Deserialize)]
struct MavenDoc {
    #[serde(rename = "latestVersion")]
    latest_version: String,
}

/// Upgrade checker backed by the Maven Central search API
pub struct MavenCentralChecker {
    client: HttpClient,
    search_url: String,
}

impl MavenCentralChecker {
    /// Create a new Maven Central checker
    pub fn new(client: HttpClient, search_url: impl Into<String>) -> Self {
        Self {
            client,
            search_url: search_url.into(),
        }
    }

    /// Build the search URL for group:artifact coordinates
    fn build_url(&self, group_id: &str, artifact_id: &str) -> String {
        format!(
            "{}?q=g:{}+AND+a:{}&rows=20&wt=json",
            self.search_url, group_id, artifact_id
        )
    }
}

#[async_trait]
impl UpgradeChecker for MavenCentralChecker {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Maven
    }

    fn registry_name(&self) -> &'static str {
        "Maven Central"
    }

    async fn check(
        &self,
        dependency: &Dependency,
    ) -> Result<Option<UpgradeCandidate>, CheckError> {
        let (Some(group_id), Some(artifact_id)) =
            (dependency.group_id.as_deref(), dependency.artifact_id.as_deref())
        else {
            return Err(CheckError::unsupported(
                &dependency.name,
                "missing groupId/artifactId coordinates",
            ));
        };

        let url = self.build_url(group_id, artifact_id);
        let response: MavenSearchResponse = self
            .client
            .get_json(&url, &dependency.name, self.registry_name())
            .await?;

        if response.response.num_found == 0 {
            return Err(CheckError::not_found(&dependency.name, self.registry_name()));
        }

        let latest = response
            .response
            .docs
            .first()
            .map(|doc| doc.latest_version.as_str())
            .ok_or_else(|| {
                CheckError::invalid_response(
                    &dependency.name,
                    self.registry_name(),
                    "numFound > 0 but docs is empty",
                )
            })?;

        Ok(candidate_if_different(dependency, latest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::CheckerConfig;
    use crate::domain::Constraint;

    fn make_checker() -> MavenCentralChecker {
        let config = CheckerConfig::default();
        let client = HttpClient::new(config.timeout).unwrap();
        MavenCentralChecker::new(client, config.maven_search_url)
    }

    #[test]
    fn test_build_url() {
        let checker = make_checker();
        let url = checker.build_url("org.apache.commons", "commons-lang3");
        assert!(url.starts_with("https://search.maven.org/solrsearch/select"));
        assert!(url.contains("q=g:org.apache.commons+AND+a:commons-lang3"));
        assert!(url.contains("rows=20"));
        assert!(url.contains("wt=json"));
    }

    #[test]
    fn test_deserialize_response() {
        let json = r#"
        {
            "response": {
                "numFound": 2,
                "docs": [
                    {"id": "org.apache.commons:commons-lang3", "latestVersion": "3.14.0"},
                    {"id": "org.apache.commons:commons-lang3-old", "latestVersion": "3.1"}
                ]
            }
        }
        "#;

        let response: MavenSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.response.num_found, 2);
        assert_eq!(response.response.docs[0].latest_version, "3.14.0");
    }

    #[test]
    fn test_deserialize_empty_response() {
        let json = r#"{"response": {"numFound": 0, "docs": []}}"#;
        let response: MavenSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.response.num_found, 0);
        assert!(response.response.docs.is_empty());
    }

    #[test]
    fn test_ecosystem_and_registry() {
        let checker = make_checker();
        assert_eq!(checker.ecosystem(), Ecosystem::Maven);
        assert_eq!(checker.registry_name(), "Maven Central");
    }

    #[tokio::test]
    async fn test_missing_coordinates_is_unsupported() {
        let checker = make_checker();
        // Parsed without coordinates (not produced by the Maven parser,
        // but the contract must hold for any input)
        let dep = Dependency::new("bare-name", "1.0.0", Constraint::Exact, "pom.xml");
        let err = checker.check(&dep).await.unwrap_err();
        assert!(matches!(err, CheckError::Unsupported { .. }));
    }
}
