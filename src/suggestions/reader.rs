use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::CandidateSource;
use crate::error::AskbarError;

/// Read a candidate list from stdin or a file
pub struct CandidateReader;

impl CandidateReader {
    /// Read candidates from a JSON file
    pub fn read_file(path: &Path) -> Result<CandidateSource, AskbarError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::parse(&contents)
    }

    /// Read candidates piped on stdin
    ///
    /// Returns `None` when stdin is empty, e.g. redirected from /dev/null.
    pub fn read_stdin() -> Result<Option<CandidateSource>, AskbarError> {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Self::parse_optional(&buffer)
    }

    /// Like [`parse`](Self::parse), but blank input yields `None`
    pub fn parse_optional(json_str: &str) -> Result<Option<CandidateSource>, AskbarError> {
        if json_str.trim().is_empty() {
            return Ok(None);
        }
        Self::parse(json_str).map(Some)
    }

    /// Parse a JSON array of strings or of `{title, items}` groups
    pub fn parse(json_str: &str) -> Result<CandidateSource, AskbarError> {
        let source = serde_json::from_str::<CandidateSource>(json_str)
            .map_err(|e| AskbarError::InvalidCandidates(e.to_string()))?;
        log::debug!("Loaded {} candidates", source.len());
        Ok(source)
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
