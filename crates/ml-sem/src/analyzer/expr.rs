//! Parsing the expression that follows `print`, `return`, `NAME <-`, or
//! stands alone as a call statement.

use super::Parser;
use crate::error::{CompileError as E, CompileResult};
use crate::symbols::{ResolveHint, SymbolId, Usage};
use crate::token_entry::{PlainToken, TokenEntry};
use ml_lex::Token;
use ml_util::Allocator;
use std::io::Read;

impl<'a, R: Read, A: Allocator> Parser<'a, R, A> {
    /// Registers a name reference: looks it up (or creates it), settles its
    /// role via [`crate::symbols::SymbolTable::resolve`], and commits that
    /// role.
    pub(super) fn use_symbol(
        &mut self,
        name: &str,
        next_is_lparen: bool,
        hint: ResolveHint,
    ) -> CompileResult<SymbolId> {
        let id = self
            .an
            .symbols
            .ensure(name, Usage::TransientKeep)
            .map_err(|_| E::NameCollision)?;
        let usage = self
            .an
            .symbols
            .resolve(id, next_is_lparen, hint, self.in_func_body);
        self.an
            .symbols
            .mark(id, usage)
            .map_err(|_| E::NameCollision)?;
        Ok(id)
    }

    fn mark_arg_index(&mut self, index: u32) {
        if let Err(pos) = self.an.arg_indexes.binary_search(&index) {
            self.an.arg_indexes.insert(pos, index);
        }
    }

    /// Parses a (non-empty) expression up to the line's terminator, which is
    /// left unconsumed for the line-level dispatch loop. Flattens it
    /// directly into the active token stream, ending with a `Terminator`.
    pub(super) fn parse_expression(&mut self) -> CompileResult<()> {
        let mut prev_was_ident = false;
        let mut any = false;

        loop {
            let tok = self.next();
            match tok {
                Token::Space | Token::Comment => continue,
                tok @ (Token::Eof | Token::LineTerminator(_)) => {
                    self.push_back(tok);
                    break;
                }
                Token::Error => return Err(E::InvalidToken),
                Token::OutOfMemory => return Err(E::OutOfMemory),
                Token::Print | Token::Return | Token::Function | Token::Tab | Token::Assign => {
                    return Err(E::SyntaxError);
                }
                Token::Number { value, .. } => {
                    prev_was_ident = false;
                    any = true;
                    self.append_entry(TokenEntry::Number(value));
                }
                Token::Argument { index, .. } => {
                    prev_was_ident = false;
                    any = true;
                    self.mark_arg_index(index);
                    self.append_entry(TokenEntry::Argument(index));
                }
                Token::Ident(name) => {
                    if prev_was_ident {
                        return Err(E::SyntaxError);
                    }
                    prev_was_ident = true;
                    any = true;
                    let next = self.skip_trivia();
                    let is_call = next == Token::LParen;
                    let id = self.use_symbol(&name, is_call, ResolveHint::Variable)?;
                    self.append_entry(TokenEntry::Symbol(id));
                    self.push_back(next);
                }
                Token::Plus => {
                    prev_was_ident = false;
                    any = true;
                    self.append_entry(TokenEntry::Plain(PlainToken::Plus));
                }
                Token::Minus => {
                    prev_was_ident = false;
                    any = true;
                    self.append_entry(TokenEntry::Plain(PlainToken::Minus));
                }
                Token::Star => {
                    prev_was_ident = false;
                    any = true;
                    self.append_entry(TokenEntry::Plain(PlainToken::Star));
                }
                Token::Slash => {
                    prev_was_ident = false;
                    any = true;
                    self.append_entry(TokenEntry::Plain(PlainToken::Slash));
                }
                Token::Comma => {
                    prev_was_ident = false;
                    any = true;
                    self.append_entry(TokenEntry::Plain(PlainToken::Comma));
                }
                Token::LParen => {
                    prev_was_ident = false;
                    any = true;
                    self.append_entry(TokenEntry::Plain(PlainToken::LParen));
                }
                Token::RParen => {
                    prev_was_ident = false;
                    any = true;
                    self.append_entry(TokenEntry::Plain(PlainToken::RParen));
                }
            }
        }

        if !any {
            return Err(E::SyntaxError);
        }
        self.append_entry(TokenEntry::Terminator);
        Ok(())
    }
}
