//! The compile-time error taxonomy.

use thiserror::Error;

/// Every way a program can fail to be accepted. The analyzer stops at the
/// first one; there is no recovery once parsing (as opposed to lexing) has
/// failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CompileError {
    #[error("syntax error")]
    SyntaxError,
    #[error("invalid token")]
    InvalidToken,
    #[error("out of memory")]
    OutOfMemory,
    #[error("name collision")]
    NameCollision,
    #[error("redundant tab")]
    RedundantTab,
    #[error("empty function")]
    EmptyFunction,
    #[error("nested function")]
    NestedFunction,
    #[error("return in main function")]
    ReturnInMain,
    #[error("redundant return")]
    RedundantReturn,
}

pub type CompileResult<T> = std::result::Result<T, CompileError>;
