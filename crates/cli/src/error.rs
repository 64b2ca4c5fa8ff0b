// crates/cli/src/error.rs
use owner_lines_engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("error walking the path {root:?}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: EngineError,
    },

    #[error("can't serialize: {0}")]
    Serialize(#[source] EngineError),

    #[error("can't write {}: {source}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Failures of the run itself, reported as a message on stdout.
    /// The rest are problems with the invocation or the terminal.
    pub fn is_run_failure(&self) -> bool {
        matches!(
            self,
            Self::Walk { .. } | Self::Serialize(_) | Self::WriteReport { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
