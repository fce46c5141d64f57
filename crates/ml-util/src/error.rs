//! Shared error types for the utility crate.

use thiserror::Error;

/// Error returned by an [`crate::alloc::Allocator`] when a growth request cannot be satisfied.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// The allocator refused to grow a buffer to the requested capacity.
    #[error("allocation of {requested} bytes failed")]
    OutOfMemory { requested: usize },
}

pub type AllocResult<T> = std::result::Result<T, AllocError>;
