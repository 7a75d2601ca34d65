//! Application error types using thiserror
//!
//! Error hierarchy:
//! - LocateError: project type detection failures (the only stage
//!   whose errors abort a scan)
//! - ParseError: per-file manifest parsing failures (non-fatal)
//! - CheckError: per-dependency registry lookup failures (non-fatal)

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Project type detection errors
    #[error(transparent)]
    Locate(#[from] LocateError),

    /// Manifest parsing errors
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Registry lookup errors
    #[error(transparent)]
    Check(#[from] CheckError),
}

/// Errors raised while classifying a project tree
#[derive(Error, Debug)]
pub enum LocateError {
    /// No recognized marker file anywhere in the tree
    #[error("could not determine project type for {path}: no recognized dependency files")]
    UnknownProjectType { path: PathBuf },

    /// Scan root does not exist
    #[error("project path does not exist: {path}")]
    PathNotFound { path: PathBuf },
}

/// Errors raised while parsing a single manifest file.
///
/// Always scoped to one file; other files still contribute records.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Failed to read the manifest file
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON (package.json)
    #[error("failed to parse JSON in {path}: {message}")]
    Json { path: PathBuf, message: String },

    /// Malformed manifest content
    #[error("failed to parse {path}: {message}")]
    Malformed { path: PathBuf, message: String },
}

/// Errors raised while checking a single dependency against its registry.
///
/// Always scoped to one dependency; the remaining dependencies are
/// still checked.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Registry client exited non-zero or could not be spawned
    #[error("{command} failed for '{package}': {message}")]
    Subprocess {
        package: String,
        command: String,
        message: String,
    },

    /// Network request failed
    #[error("failed to fetch '{package}' from {registry}: {message}")]
    Network {
        package: String,
        registry: String,
        message: String,
    },

    /// Package not found in the registry
    #[error("package '{package}' not found in {registry}")]
    NotFound { package: String, registry: String },

    /// Response could not be interpreted
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Dependency is missing data the checker needs (e.g. Maven coordinates)
    #[error("cannot check '{package}': {message}")]
    Unsupported { package: String, message: String },
}

impl LocateError {
    /// Creates a new UnknownProjectType error
    pub fn unknown_project_type(path: impl Into<PathBuf>) -> Self {
        LocateError::UnknownProjectType { path: path.into() }
    }

    /// Creates a new PathNotFound error
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        LocateError::PathNotFound { path: path.into() }
    }
}

impl ParseError {
    /// Creates a new Read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ParseError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Json error
    pub fn json(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ParseError::Json {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new Malformed error
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ParseError::Malformed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns the manifest file this error is scoped to
    pub fn path(&self) -> &PathBuf {
        match self {
            ParseError::Read { path, .. }
            | ParseError::Json { path, .. }
            | ParseError::Malformed { path, .. } => path,
        }
    }
}

impl CheckError {
    /// Creates a new Subprocess error
    pub fn subprocess(
        package: impl Into<String>,
        command: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        CheckError::Subprocess {
            package: package.into(),
            command: command.into(),
            message: message.into(),
        }
    }

    /// Creates a new Network error
    pub fn network(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        CheckError::Network {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new NotFound error
    pub fn not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        CheckError::NotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        CheckError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Unsupported error
    pub fn unsupported(package: impl Into<String>, message: impl Into<String>) -> Self {
        CheckError::Unsupported {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Returns the package name this error is scoped to
    pub fn package(&self) -> &str {
        match self {
            CheckError::Subprocess { package, .. }
            | CheckError::Network { package, .. }
            | CheckError::NotFound { package, .. }
            | CheckError::InvalidResponse { package, .. }
            | CheckError::Unsupported { package, .. } => package,
        }
    }
}
