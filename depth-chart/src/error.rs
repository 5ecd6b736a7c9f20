//! Error types for the depth chart tool.

use thiserror::Error;
use crate::parser::ParseError;

#[derive(Error, Debug)]
pub enum DepthChartError {
    /// Transport failures talking to the roster service
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The roster service answered with a non-2xx status
    #[error("{url} returned {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Payload had the wrong shape
    #[error("Invalid payload: {0}")]
    Parse(#[from] ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DepthChartError>;

impl DepthChartError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
