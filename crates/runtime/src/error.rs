use hero_core::{ConfigError, ErrorSeverity, HeroError, OracleError};

/// Runtime errors
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// A query needed an oracle that was not wired in.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// Query configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Content files could not be read or parsed.
    #[error("content loading failed: {0}")]
    Content(#[from] anyhow::Error),
}

impl RuntimeError {
    /// Severity of the underlying failure, for log levels.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(e) => e.severity(),
            Self::Config(e) => e.severity(),
            Self::Content(_) => ErrorSeverity::Validation,
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
