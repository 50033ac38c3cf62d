//! Error types for Phasic

use thiserror::Error;

/// Main error type for Phasic curricula
#[derive(Error, Debug)]
pub enum CurriculumError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid stopping condition: {0}")]
    Condition(String),

    #[error("Ran out of tasks to sample from, {sampled} sampled")]
    Exhausted { sampled: usize },

    #[error("Task not in task space: {0}")]
    Encode(String),

    #[error("Cannot decode task: {0}")]
    Decode(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for Phasic operations
pub type Result<T> = std::result::Result<T, CurriculumError>;
