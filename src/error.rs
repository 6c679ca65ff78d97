//! Error types for descriptor chains.

use thiserror::Error;

/// Main error type for chain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("Descriptor not found for key: {key}")]
    DescriptorNotFound { key: String },

    #[error("Index out of bounds: {index} (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type for chain operations.
pub type Result<T> = std::result::Result<T, ChainError>;
