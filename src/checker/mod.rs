//! Upgrade candidate checkers for supported ecosystems
//!
//! One checker per ecosystem with a registry:
//! - Python: `pip index versions` subprocess
//! - Node.js: `npm view <pkg> version` subprocess
//! - Maven: Maven Central search API over HTTP
//!
//! Each check is a single-shot call: no retry, no backoff, no caching
//! across dependencies or runs. A dependency is an upgrade candidate
//! exactly when the registry's latest version differs from the
//! declared version by string comparison; "1.0" vs "1.0.0" therefore
//! flags, a documented limitation carried over deliberately.

mod client;
mod maven_central;
mod npm;
mod pip;

pub use client::HttpClient;
pub use maven_central::MavenCentralChecker;
pub use npm::NpmChecker;
pub use pip::PipChecker;

use crate::domain::{Dependency, Ecosystem, UpgradeCandidate};
use crate::error::CheckError;
use async_trait::async_trait;
use std::time::Duration;

/// Default timeout for registry HTTP requests
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default Maven Central search endpoint
const DEFAULT_MAVEN_SEARCH_URL: &str = "https://search.maven.org/solrsearch/select";

/// Explicit checker configuration, injected at construction.
///
/// Never read from ambient global state; tests and callers override
/// the fields they care about.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Program invoked for Python version listings
    pub pip_program: String,
    /// Program invoked for npm version queries
    pub npm_program: String,
    /// Maven Central search API base URL
    pub maven_search_url: String,
    /// Timeout applied to registry HTTP requests
    pub timeout: Duration,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            pip_program: "pip".to_string(),
            npm_program: "npm".to_string(),
            maven_search_url: DEFAULT_MAVEN_SEARCH_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Trait for per-ecosystem upgrade checkers
#[async_trait]
pub trait UpgradeChecker: Send + Sync {
    /// Returns the ecosystem this checker handles
    fn ecosystem(&self) -> Ecosystem;

    /// Returns the registry name for error messages
    fn registry_name(&self) -> &'static str;

    /// Check one dependency against the registry.
    ///
    /// `Ok(None)` means up to date; errors are scoped to this
    /// dependency and never abort the scan.
    async fn check(&self, dependency: &Dependency)
        -> Result<Option<UpgradeCandidate>, CheckError>;
}

/// Get the upgrade checker for an ecosystem, if it has a registry
pub fn checker_for(
    ecosystem: Ecosystem,
    config: &CheckerConfig,
    client: HttpClient,
) -> Option<Box<dyn UpgradeChecker>> {
    match ecosystem {
        Ecosystem::Python => Some(Box::new(PipChecker::new(config.pip_program.clone()))),
        Ecosystem::NodeJs => Some(Box::new(NpmChecker::new(config.npm_program.clone()))),
        Ecosystem::Maven => Some(Box::new(MavenCentralChecker::new(
            client,
            config.maven_search_url.clone(),
        ))),
        Ecosystem::Gradle | Ecosystem::Dotnet => None,
    }
}

/// Build a candidate when the registry latest differs from the
/// declared version (exact string comparison).
pub(crate) fn candidate_if_different(
    dependency: &Dependency,
    latest: &str,
) -> Option<UpgradeCandidate> {
    if latest != dependency.version {
        Some(UpgradeCandidate::new(dependency, latest))
    } else {
        None
    }
}
