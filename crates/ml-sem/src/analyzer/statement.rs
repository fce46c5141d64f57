//! Parsing a line that starts with a bare identifier: either an assignment
//! (`NAME <- expr`) or a call statement (`NAME(args)`).

use super::Parser;
use crate::error::{CompileError as E, CompileResult};
use crate::symbols::ResolveHint;
use crate::token_entry::{PlainToken, TokenEntry};
use ml_lex::Token;
use ml_util::Allocator;
use std::io::Read;

impl<'a, R: Read, A: Allocator> Parser<'a, R, A> {
    pub(super) fn parse_name_statement(&mut self, name: String) -> CompileResult<()> {
        match self.skip_spaces() {
            Token::Assign => {
                let lhs = self.use_symbol(&name, false, ResolveHint::Variable)?;
                self.append_entry(TokenEntry::Symbol(lhs));
                self.append_entry(TokenEntry::Plain(PlainToken::Assign));
                self.parse_expression()
            }
            Token::LParen => {
                let callee = self.use_symbol(&name, true, ResolveHint::None)?;
                self.append_entry(TokenEntry::Symbol(callee));
                self.append_entry(TokenEntry::Plain(PlainToken::LParen));
                self.parse_expression()
            }
            Token::Error => Err(E::InvalidToken),
            Token::OutOfMemory => Err(E::OutOfMemory),
            _ => Err(E::SyntaxError),
        }
    }
}
