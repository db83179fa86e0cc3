use thiserror::Error;

/// Error taxonomy for the pipeline.
///
/// Loaders and stage functions return these directly; the pipeline driver
/// attaches stage context on top.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required column is absent, ambiguous, or structurally unusable.
    #[error("schema error: {0}")]
    Schema(String),

    /// A date/time field could not be parsed.
    #[error("parse error in column {column}, row {row}: {value:?} is not a valid {expected}")]
    Parse {
        column: String,
        /// 1-based data row number (header row excluded).
        row: usize,
        value: String,
        expected: &'static str,
    },

    /// A value violates a declared domain or post-condition.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

impl PipelineError {
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
