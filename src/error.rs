// src/error.rs
use thiserror::Error;

use crate::extract::ExtractError;

/// The only two ways an analysis can fail. Scoring and pricing are total.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Rejected before any network activity.
    #[error("invalid URL {0:?}: expected an absolute http:// or https:// address")]
    InvalidUrl(String),

    #[error("could not extract content from {url}")]
    ExtractionFailed {
        url: String,
        #[source]
        source: ExtractError,
    },
}

impl AnalysisError {
    /// One-line message for end users (GUI status area).
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::InvalidUrl(_) => {
                s!("Please enter a valid URL including http:// or https://")
            }
            AnalysisError::ExtractionFailed { url, source } => {
                format!("Error analyzing website: could not extract content from {url} ({source})")
            }
        }
    }
}
