use std::path::{Path, PathBuf};

/// Convenience result type used across carousel.
pub type CarouselResult<T> = Result<T, CarouselError>;

/// Top-level error taxonomy used by engine and orchestration APIs.
#[derive(thiserror::Error, Debug)]
pub enum CarouselError {
    /// Invalid user-provided, catalog or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A show, video or job artifact that was asked for does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Errors while composing frames or driving external processes.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Filesystem failure on a specific path.
    #[error("io error on '{}': {source}", path.display())]
    Io {
        /// Path the operation was acting on.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CarouselError {
    /// Build a [`CarouselError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CarouselError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`CarouselError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`CarouselError::Io`] value for `path`.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Build a [`CarouselError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// `true` for [`CarouselError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
