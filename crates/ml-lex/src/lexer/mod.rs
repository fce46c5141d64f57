//! The lexer itself: a byte-driven state machine with one token of output per call.

mod scan;

use crate::reader::DEFAULT_READ_BUFFER_SIZE;
use crate::token::Token;
use ml_util::{Allocator, SystemAllocator};
use std::io::Read;

/// Converts a byte stream into a sequence of [`Token`]s.
///
/// Each call to [`Lexer::next_token`] consumes exactly the bytes belonging to
/// one token (plus, for multi-byte tokens, the one lookahead byte that proved
/// it was complete). The lexer never holds a token's bytes across calls;
/// any lookahead buffer is local to a single `next_token` call, which keeps
/// the maximal-munch recognition rules simple to trace (see DESIGN.md).
pub struct Lexer<R, A = SystemAllocator> {
    reader: R,
    allocator: A,
    read_buf: Vec<u8>,
    read_pos: usize,
    read_len: usize,
    at_eof: bool,
    skip_line: bool,
    done: bool,
}

impl<R: Read> Lexer<R, SystemAllocator> {
    /// Build a lexer over `reader` with the default read-buffer capacity and
    /// the system allocator.
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, DEFAULT_READ_BUFFER_SIZE)
    }

    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self::with_allocator(reader, capacity, SystemAllocator)
    }
}

impl<R: Read, A: Allocator> Lexer<R, A> {
    /// Build a lexer with an explicit read-buffer capacity and allocator,
    /// primarily for exercising out-of-memory recovery in tests.
    pub fn with_allocator(reader: R, capacity: usize, allocator: A) -> Self {
        Self {
            reader,
            allocator,
            read_buf: vec![0u8; capacity.max(1)],
            read_pos: 0,
            read_len: 0,
            at_eof: false,
            skip_line: false,
            done: false,
        }
    }

    /// Produce the next token. Once [`Token::Eof`] has been returned, every
    /// later call returns it again.
    pub fn next_token(&mut self) -> Token {
        if self.done {
            return Token::Eof;
        }
        self.scan_next()
    }

    fn refill(&mut self) -> bool {
        if self.at_eof {
            return false;
        }
        match self.reader.read(&mut self.read_buf) {
            Ok(0) | Err(_) => {
                // A read error is treated identically to end-of-input: the
                // translator has no channel for a distinct I/O-error token.
                self.at_eof = true;
                false
            }
            Ok(n) => {
                self.read_len = n;
                self.read_pos = 0;
                true
            }
        }
    }

    fn peek_byte(&mut self) -> Option<u8> {
        if self.read_pos >= self.read_len && !self.refill() {
            return None;
        }
        Some(self.read_buf[self.read_pos])
    }

    fn consume_byte(&mut self) {
        debug_assert!(self.read_pos < self.read_len);
        self.read_pos += 1;
    }

    fn mark_done(&mut self) {
        self.done = true;
    }
}

impl<R: Read, A: Allocator> Iterator for Lexer<R, A> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}
