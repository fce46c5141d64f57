//! Parsing a `function NAME params...` header line.

use super::Parser;
use crate::error::{CompileError as E, CompileResult};
use crate::func::{FuncId, FuncRecord};
use crate::symbols::{SymbolId, Usage};
use ml_lex::Token;
use ml_util::Allocator;
use std::io::Read;

impl<'a, R: Read, A: Allocator> Parser<'a, R, A> {
    /// Consumes everything up to (but not including) the line's terminator,
    /// registering the function name and its parameters and pushing a new,
    /// still-empty [`FuncRecord`].
    pub(super) fn parse_function(&mut self) -> CompileResult<FuncId> {
        match self.next() {
            Token::Space => {}
            Token::Error => return Err(E::InvalidToken),
            Token::OutOfMemory => return Err(E::OutOfMemory),
            _ => return Err(E::SyntaxError),
        }

        let name = match self.next() {
            Token::Ident(n) => n,
            Token::Error => return Err(E::InvalidToken),
            Token::OutOfMemory => return Err(E::OutOfMemory),
            _ => return Err(E::SyntaxError),
        };
        let name_id = self
            .an
            .symbols
            .ensure(&name, Usage::FuncName)
            .map_err(|_| E::NameCollision)?;

        let param_begin = self.an.param_offsets.len();
        let mut seen: Vec<SymbolId> = Vec::new();
        loop {
            match self.next() {
                Token::Space | Token::Comment => continue,
                tok @ (Token::LineTerminator(_) | Token::Eof) => {
                    self.push_back(tok);
                    break;
                }
                Token::Ident(p) => {
                    let pid = self
                        .an
                        .symbols
                        .ensure(&p, Usage::FuncParam)
                        .map_err(|_| E::NameCollision)?;
                    if seen.contains(&pid) {
                        return Err(E::NameCollision);
                    }
                    seen.push(pid);
                    self.an.param_offsets.push(pid);
                }
                Token::Error => return Err(E::InvalidToken),
                Token::OutOfMemory => return Err(E::OutOfMemory),
                _ => return Err(E::SyntaxError),
            }
        }

        let param_end = self.an.param_offsets.len();
        let body_start = self.an.tokens_sub.len();
        Ok(self.an.functions.push(FuncRecord {
            name: name_id,
            params: param_begin..param_end,
            body: body_start..body_start,
            has_return: false,
        }))
    }
}
