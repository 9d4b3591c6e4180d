// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum FfmcError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<FfmcError>,
    },

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

impl FfmcError {
    /// Innermost error once every `Context` layer is peeled off.
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, FfmcError>;

/// Failures reading the point CSV or the boundary shapefile.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("A required file was not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Column '{column}' not found in '{}'", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid number '{value}' in column '{column}' at line {line} of '{}'", path.display())]
    InvalidValue {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },

    #[error("Attribute '{attribute}' not found in '{}'", path.display())]
    MissingAttribute { path: PathBuf, attribute: String },

    #[error("Malformed {format} file '{}': {details}", path.display())]
    Malformed {
        path: PathBuf,
        format: String,
        details: String,
    },
}

/// Errors raised by the aggregation rules themselves.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No data found for the province '{province}'.")]
    ProvinceNotFound { province: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write file '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    Serialization { format: String, details: String },
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<FfmcError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| FfmcError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| FfmcError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
