use thiserror::Error;

/// Custom error types for askbar
#[derive(Debug, Error)]
pub enum AskbarError {
    #[error("Invalid candidate list: {0}\n\nExpected a JSON array of strings or of {{\"title\", \"items\"}} objects.")]
    InvalidCandidates(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
