//! depscan - Multi-ecosystem dependency scanner CLI tool
//!
//! Scans a project directory, detects its ecosystem, parses its
//! dependency manifests, and checks package registries for newer
//! versions:
//! - Python (requirements.txt, setup.py, pyproject.toml)
//! - Node.js (package.json)
//! - Maven (pom.xml)
//! - Gradle (build.gradle)
//! - .NET (*.csproj)

use clap::Parser;
use depscan::checker::CheckerConfig;
use depscan::cli::CliArgs;
use depscan::output::{create_formatter, OutputConfig};
use depscan::progress::Progress;
use depscan::scanner::{ScanConfig, Scanner};
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    // Print version info in verbose mode
    if args.verbose {
        eprintln!("depscan v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.path.display());
        if args.offline {
            eprintln!("Mode: offline");
        }
    }

    let checker = CheckerConfig {
        timeout: Duration::from_secs(args.timeout),
        ..CheckerConfig::default()
    };
    let config = ScanConfig {
        checker,
        concurrency: args.concurrency,
        offline: args.offline,
    };
    let scanner = Scanner::new(config)?;

    // Progress bars go to stderr; suppress them for quiet and JSON runs
    let mut progress = Progress::new(!args.quiet && !args.json);
    let outcome = scanner.scan_with_progress(&args.path, &mut progress).await?;

    // Create output formatter based on CLI options
    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet);
    let formatter = create_formatter(output_config);

    // Output results
    let mut stdout = io::stdout().lock();
    formatter.format(&outcome, &mut stdout)?;
    stdout.flush()?;

    // Return appropriate exit code
    if outcome.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        // Partial success - the report was produced but some files or
        // packages could not be processed
        Ok(ExitCode::from(2))
    }
}
