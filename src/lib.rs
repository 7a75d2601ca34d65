//! depscan - Multi-ecosystem dependency scanner library
//!
//! This library provides the core functionality for scanning a project
//! directory, detecting its ecosystem, parsing its dependency manifests,
//! and checking package registries for upgrade candidates:
//! - Python (requirements.txt, setup.py, pyproject.toml)
//! - Node.js (package.json)
//! - Maven (pom.xml)
//! - Gradle (build.gradle, detection only)
//! - .NET (*.csproj, detection only)

pub mod checker;
pub mod cli;
pub mod domain;
pub mod error;
pub mod locator;
pub mod output;
pub mod parser;
pub mod progress;
pub mod scanner;
