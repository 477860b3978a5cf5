//! CLI error types.

use std::path::PathBuf;

use mdsite::MarkdownError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Markdown {
        path: PathBuf,
        #[source]
        source: MarkdownError,
    },

    #[error("{0}")]
    InvalidPath(String),
}

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn markdown(path: impl Into<PathBuf>, source: MarkdownError) -> Self {
        CliError::Markdown {
            path: path.into(),
            source,
        }
    }
}

pub(crate) type Result<T> = std::result::Result<T, CliError>;
