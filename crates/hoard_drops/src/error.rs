//! # Drop Engine Error Types
//!
//! All errors that can occur in the drop engine. The trial and selection
//! paths never fail; everything here belongs to the configuration I/O
//! surface.

use thiserror::Error;

/// Errors that can occur while loading or saving drop tables.
#[derive(Error, Debug)]
pub enum DropsError {
    /// Reading or writing a drop table file failed.
    #[error("drop table file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A drop table file did not decode as valid TOML.
    #[error("invalid drop table file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A registry snapshot could not be encoded as TOML.
    #[error("failed to encode drop table: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for drop engine operations.
pub type DropsResult<T> = Result<T, DropsError>;
