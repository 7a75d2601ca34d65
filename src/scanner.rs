//! Scan orchestrator coordinating the pipeline
//!
//! Workflow: locate → parse → check → assemble, strictly sequential
//! between stages. Within the check stage, registry lookups fan out
//! concurrently under a bounded semaphore; results are rejoined in
//! input order so reports stay deterministic.
//!
//! Error policy: only project type detection aborts a scan. Parse and
//! check failures are collected per file / per dependency alongside
//! the successful results, so callers can inspect failures without
//! digging through logs.

use crate::checker::{checker_for, CheckerConfig, HttpClient, UpgradeChecker};
use crate::domain::{Dependency, Ecosystem, ScanReport, UpgradeCandidate};
use crate::error::{CheckError, LocateError, ParseError};
use crate::locator::locate;
use crate::parser::parser_for;
use crate::progress::Progress;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Default bound on concurrent registry lookups
const DEFAULT_CONCURRENCY: usize = 8;

/// Scan configuration, injected at construction
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Checker configuration (programs, endpoints, timeout)
    pub checker: CheckerConfig,
    /// Maximum concurrent registry lookups
    pub concurrency: usize,
    /// Skip the registry check stage entirely
    pub offline: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            checker: CheckerConfig::default(),
            concurrency: DEFAULT_CONCURRENCY,
            offline: false,
        }
    }
}

/// Result of one scan: the assembled report plus the collected
/// stage-local failures.
#[derive(Debug)]
pub struct ScanOutcome {
    /// The assembled report
    pub report: ScanReport,
    /// Per-file parse failures (the files contributed no records)
    pub parse_errors: Vec<ParseError>,
    /// Per-dependency check failures (treated as "no candidate")
    pub check_errors: Vec<CheckError>,
}

impl ScanOutcome {
    /// Returns true if every stage completed without partial failures
    pub fn is_clean(&self) -> bool {
        self.parse_errors.is_empty() && self.check_errors.is_empty()
    }
}

/// Orchestrator for the scan pipeline
pub struct Scanner {
    config: ScanConfig,
    client: HttpClient,
    semaphore: Arc<Semaphore>,
}

impl Scanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig) -> Result<Self, CheckError> {
        let client = HttpClient::new(config.checker.timeout)?;
        let semaphore = Arc::new(Semaphore::new(config.concurrency.max(1)));
        Ok(Self {
            config,
            client,
            semaphore,
        })
    }

    /// Run a full scan of the project at `root`
    pub async fn scan(&self, root: &Path) -> Result<ScanOutcome, LocateError> {
        self.scan_with_progress(root, &mut Progress::disabled()).await
    }

    /// Run a full scan with progress reporting
    pub async fn scan_with_progress(
        &self,
        root: &Path,
        progress: &mut Progress,
    ) -> Result<ScanOutcome, LocateError> {
        // Stage 1: locate marker files and classify the project.
        // The one failure that aborts the scan.
        progress.spinner("Detecting project type...");
        let detection = locate(root)?;
        progress.finish_and_clear();

        // Stage 2: parse each marker file; failures are per-file.
        progress.spinner("Parsing dependency files...");
        let mut dependencies = Vec::new();
        let mut parse_errors = Vec::new();

        if let Some(parser) = parser_for(detection.ecosystem) {
            for file in &detection.files {
                let content = match std::fs::read_to_string(file) {
                    Ok(content) => content,
                    Err(e) => {
                        parse_errors.push(ParseError::read(file, e));
                        continue;
                    }
                };
                match parser.parse(file, &content) {
                    Ok(parsed) => dependencies.extend(parsed),
                    Err(e) => parse_errors.push(e),
                }
            }
        }
        progress.finish_and_clear();

        // Stage 3: check each dependency against the registry;
        // failures are per-dependency.
        let (candidates, check_errors) = if self.config.offline {
            (Vec::new(), Vec::new())
        } else {
            self.check_dependencies(detection.ecosystem, &dependencies, progress)
                .await
        };

        // Stage 4: assemble the report. Pure aggregation.
        let report = ScanReport::assemble(
            detection.ecosystem,
            detection.relative_files(root),
            dependencies,
            candidates,
        );

        Ok(ScanOutcome {
            report,
            parse_errors,
            check_errors,
        })
    }

    /// Fan out registry lookups, bounded by the semaphore, and
    /// collect candidates and failures in input order.
    async fn check_dependencies(
        &self,
        ecosystem: Ecosystem,
        dependencies: &[Dependency],
        progress: &mut Progress,
    ) -> (Vec<UpgradeCandidate>, Vec<CheckError>) {
        let Some(checker) = checker_for(ecosystem, &self.config.checker, self.client.clone())
        else {
            return (Vec::new(), Vec::new());
        };
        let checker: Arc<dyn UpgradeChecker> = Arc::from(checker);

        progress.start(dependencies.len() as u64, "Checking dependencies");
        let progress_ref: &Progress = progress;

        let lookups = dependencies.iter().map(|dep| {
            let checker = Arc::clone(&checker);
            let semaphore = Arc::clone(&self.semaphore);
            async move {
                let _permit = semaphore.acquire().await.expect("semaphore closed");
                progress_ref.set_message(&format!("Checking {}", dep.name));
                let result = checker.check(dep).await;
                progress_ref.inc();
                result
            }
        });

        let results = futures::future::join_all(lookups).await;
        progress.finish_and_clear();

        let mut candidates = Vec::new();
        let mut errors = Vec::new();
        for result in results {
            match result {
                Ok(Some(candidate)) => candidates.push(candidate),
                Ok(None) => {}
                Err(e) => errors.push(e),
            }
        }
        (candidates, errors)
    }
}
