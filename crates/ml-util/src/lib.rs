//! Shared primitives used across the translator: a typed index vector and a
//! pluggable allocator abstraction for the buffer-growth points the rest of
//! the crates care about.

pub mod alloc;
pub mod error;
pub mod index_vec;

pub use alloc::{Allocator, CountingFaultyAllocator, SystemAllocator};
pub use error::{AllocError, AllocResult};
pub use index_vec::{define_idx, Idx, IndexVec};
