// Common error types for version handling

use std::num::ParseIntError;

/// Errors produced while decoding a version identifier
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// A segment of the string form is not a 16-bit signed decimal integer
    #[error("Invalid version segment '{segment}' in '{input}': {source}")]
    InvalidFormat {
        input: String,
        segment: String,
        #[source]
        source: ParseIntError,
    },

    /// Reading or writing the packed stream form failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VersionError {
    /// Returns true for string-form parse failures
    pub const fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }
}

pub type Result<T> = std::result::Result<T, VersionError>;
