//! Per-byte recognition rules. See `SPEC_FULL.md` §4.2 for the authoritative
//! statement of these rules; this file is a direct, literal implementation of
//! them.

use super::Lexer;
use crate::token::Token;
use ml_util::Allocator;
use std::io::Read;

fn is_lower(b: u8) -> bool {
    b.is_ascii_lowercase()
}

fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

impl<R: Read, A: Allocator> Lexer<R, A> {
    pub(super) fn scan_next(&mut self) -> Token {
        loop {
            let Some(b) = self.peek_byte() else {
                self.mark_done();
                return Token::Eof;
            };

            if self.skip_line && b != b'\r' && b != b'\n' {
                self.consume_byte();
                continue;
            }

            return match b {
                b'\r' => self.lex_cr(),
                b'\n' => self.lex_lf(),
                b'#' => self.lex_comment(),
                b' ' => self.lex_space(),
                b'\t' => {
                    self.consume_byte();
                    self.skip_line = false;
                    Token::Tab
                }
                b'+' => self.single(Token::Plus),
                b'-' => self.single(Token::Minus),
                b'*' => self.single(Token::Star),
                b'/' => self.single(Token::Slash),
                b',' => self.single(Token::Comma),
                b'(' => self.single(Token::LParen),
                b')' => self.single(Token::RParen),
                b'<' => self.lex_assign(),
                b'.' | b'0'..=b'9' => self.lex_number(),
                b'a'..=b'z' => self.lex_identifier(),
                _ => {
                    self.consume_byte();
                    self.error()
                }
            };
        }
    }

    fn single(&mut self, tok: Token) -> Token {
        self.consume_byte();
        self.skip_line = false;
        tok
    }

    fn error(&mut self) -> Token {
        self.skip_line = true;
        Token::Error
    }

    fn lex_cr(&mut self) -> Token {
        self.consume_byte();
        self.skip_line = false;
        if self.peek_byte() == Some(b'\n') {
            self.consume_byte();
            Token::LineTerminator("\r\n".into())
        } else {
            Token::LineTerminator("\r".into())
        }
    }

    fn lex_lf(&mut self) -> Token {
        self.consume_byte();
        self.skip_line = false;
        Token::LineTerminator("\n".into())
    }

    fn lex_comment(&mut self) -> Token {
        self.consume_byte();
        self.skip_line = true;
        Token::Comment
    }

    fn lex_space(&mut self) -> Token {
        self.skip_line = false;
        while self.peek_byte() == Some(b' ') {
            self.consume_byte();
        }
        Token::Space
    }

    /// Accumulate bytes matching `pred` into a growable scratch buffer,
    /// routing growth through the pluggable allocator so an induced failure
    /// surfaces as a lexical error rather than an abort.
    fn collect_while(&mut self, pred: impl Fn(u8) -> bool) -> Result<String, Token> {
        let mut scratch: Vec<u8> = Vec::new();
        while let Some(b) = self.peek_byte() {
            if !pred(b) {
                break;
            }
            if scratch.len() == scratch.capacity() {
                let want = (scratch.capacity().max(8)) * 2 - scratch.len();
                if self.allocator.try_reserve(&mut scratch, want).is_err() {
                    self.skip_line = true;
                    return Err(Token::OutOfMemory);
                }
            }
            scratch.push(b);
            self.consume_byte();
        }
        Ok(String::from_utf8(scratch).expect("scanned bytes are always ASCII"))
    }

    fn lex_number(&mut self) -> Token {
        self.skip_line = false;
        let mut lexeme = match self.collect_while(|b| is_digit(b)) {
            Ok(s) => s,
            Err(e) => return e,
        };
        if self.peek_byte() == Some(b'.') {
            lexeme.push('.');
            self.consume_byte();
            match self.collect_while(is_digit) {
                Ok(rest) => lexeme.push_str(&rest),
                Err(e) => return e,
            }
            // A second dot immediately following is a lexical error.
            if self.peek_byte() == Some(b'.') {
                self.consume_byte();
                return self.error();
            }
        }
        // A letter immediately following a numeric literal is always an error.
        if matches!(self.peek_byte(), Some(b) if is_lower(b)) {
            self.consume_byte();
            return self.error();
        }
        match lexeme.parse::<f64>() {
            Ok(value) => Token::Number { value, lexeme },
            Err(_) => self.error(),
        }
    }

    fn lex_identifier(&mut self) -> Token {
        self.skip_line = false;
        let lexeme = match self.collect_while(is_lower) {
            Ok(s) => s,
            Err(e) => return e,
        };

        if self.peek_byte() == Some(b'.') {
            self.consume_byte();
            return self.error();
        }

        if matches!(self.peek_byte(), Some(b) if is_digit(b)) {
            if lexeme == "arg" {
                return self.lex_argument(lexeme);
            }
            self.consume_byte();
            return self.error();
        }

        Token::from_ident_lexeme(lexeme)
    }

    fn lex_argument(&mut self, prefix: String) -> Token {
        let digits = match self.collect_while(is_digit) {
            Ok(s) => s,
            Err(e) => return e,
        };

        // A letter or dot directly after the digit run is an error.
        if matches!(self.peek_byte(), Some(b) if is_lower(b) || b == b'.') {
            self.consume_byte();
            return self.error();
        }

        if digits.len() > 1 && digits.starts_with('0') {
            return self.error();
        }

        match digits.parse::<u32>() {
            Ok(index) => {
                let lexeme = format!("{prefix}{digits}");
                Token::Argument { index, lexeme }
            }
            Err(_) => self.error(),
        }
    }

    fn lex_assign(&mut self) -> Token {
        self.consume_byte();
        self.skip_line = false;
        if self.peek_byte() == Some(b'-') {
            self.consume_byte();
            Token::Assign
        } else {
            self.error()
        }
    }
}
