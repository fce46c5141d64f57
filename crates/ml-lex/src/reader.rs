//! The byte source the lexer pulls from.
//!
//! The lexer is generic over anything implementing [`std::io::Read`]; there
//! is no separate `close` callback, since teardown is whatever `Drop` the
//! reader type already has. A `BufReader<File>` closes its file handle on
//! drop, which is the same guarantee a caller-supplied `close()` would have
//! given.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Default capacity of the lexer's internal read buffer, refilled lazily.
pub const DEFAULT_READ_BUFFER_SIZE: usize = 1024;

/// Open `path` for lexing, buffered with [`DEFAULT_READ_BUFFER_SIZE`].
pub fn open_source(path: impl AsRef<Path>) -> io::Result<BufReader<File>> {
    Ok(BufReader::with_capacity(
        DEFAULT_READ_BUFFER_SIZE,
        File::open(path)?,
    ))
}
