// File: crates/rechart-core/src/error.rs
// Summary: Error type shared by construction, option parsing and SVG export.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A construction request lacked one of element, dataset or x-axis labels.
    #[error("missing required chart input: {0}")]
    MissingInput(&'static str),

    #[error("invalid chart options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("failed to write chart output: {0}")]
    Io(#[from] std::io::Error),
}

pub type ChartResult<T> = Result<T, ChartError>;
