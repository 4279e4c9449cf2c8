//! Crate error type
//!
//! Template composition fails either before parsing (a source is missing) or
//! inside the engine. Callers branch on [`Error::kind`] instead of matching
//! message text.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Boxed engine error, kept intact so `source()` reaches the engine's own error
pub type EngineError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("template '{}' is not found", path.display())]
    PathNotFound { path: PathBuf },

    #[error("failed to parse templates: {source}")]
    EngineParse {
        #[source]
        source: EngineError,
    },

    #[error("failed to render template '{name}': {source}")]
    Render {
        name: String,
        #[source]
        source: EngineError,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Error category, for programmatic branching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    PathNotFound,
    EngineParse,
    Render,
    Config,
}

impl Error {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    pub fn engine_parse(source: impl Into<EngineError>) -> Self {
        Self::EngineParse {
            source: source.into(),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::PathNotFound { .. } => ErrorKind::PathNotFound,
            Self::EngineParse { .. } => ErrorKind::EngineParse,
            Self::Render { .. } => ErrorKind::Render,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// The offending template path, for `PathNotFound`
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PathNotFound { path } => Some(path),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
