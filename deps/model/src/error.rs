//! Error types for decoding and building entity buffers.

use crate::entity::EntityType;
use thiserror::Error;

/// Structural errors found while interpreting or building an entity buffer.
///
/// None of these describe account state; they only report that a byte buffer
/// does not have the shape its header claims.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("buffer too small: {required} bytes required, {actual} available")]
    BufferTooSmall { required: usize, actual: usize },

    #[error("buffer length {actual} does not match computed size {expected}")]
    BufferSizeMismatch { expected: u64, actual: u64 },

    #[error("declared size {declared} does not match computed size {real}")]
    SizeMismatch { declared: u32, real: u64 },

    #[error("unexpected entity type: expected {expected}, found {actual}")]
    UnexpectedEntityType {
        expected: EntityType,
        actual: EntityType,
    },

    #[error("unsupported entity version {0}")]
    UnsupportedVersion(u8),

    #[error("too many keys in attachment: {count} (at most {max})", max = u8::MAX)]
    TooManyKeys { count: usize },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = core::result::Result<T, LayoutError>;
