//! # Error Module
//!
//! A single error type covers every failure the generator, the renderer and the
//! verifier can report. All of them are terminal: callers propagate with `?` and
//! the binary prints the message and exits.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BlockError>;

#[derive(Error, Debug)]
pub enum BlockError {
    /// Reading or writing a block file failed (including a missing input file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record in a block file could not be turned into a block.
    #[error("Malformed record on line {line} ({content:?}): {reason}")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },

    /// Rejection sampling ran out of its retry budget.
    #[error("Map saturated: placed {placed} blocks, then gave up after {attempts} rejected candidates")]
    Saturation { placed: usize, attempts: u64 },

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The JSON configuration file could not be parsed.
    #[error("Invalid configuration file: {0}")]
    ConfigFile(#[from] serde_json::Error),

    /// Writing the rasterised canvas failed.
    #[error("Image export failed: {0}")]
    Image(#[from] image::ImageError),

    /// The window backend failed to start.
    #[error("Window error: {0}")]
    Window(String),

    /// Verification found overlapping blocks.
    #[error("Found {count} overlapping block pair(s)")]
    Overlapping { count: usize },
}

impl BlockError {
    pub(crate) fn parse(line: usize, content: &str, reason: impl Into<String>) -> Self {
        BlockError::Parse {
            line,
            content: content.to_owned(),
            reason: reason.into(),
        }
    }
}
