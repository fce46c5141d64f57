//! The single-pass parser/semantic-analyzer: turns a token stream into a
//! fully resolved [`Analyzer`] or the first [`CompileError`] encountered.
//!
//! There is no AST. Each statement is flattened directly into one of two
//! token-entry streams (`tokens_main` for top-level code, `tokens_sub` for
//! function bodies) as it's recognized, the way the line-oriented grammar
//! lets a single forward pass commit to a representation without ever
//! needing to backtrack.

mod expr;
mod function;
mod statement;

use crate::error::CompileResult;
use crate::func::{FuncId, FuncRecord};
use crate::symbols::{SymbolId, SymbolTable};
use crate::token_entry::TokenEntry;
use ml_lex::{Lexer, Token};
use ml_util::{Allocator, IndexVec};
use std::io::Read;

/// A fully analyzed program: every name resolved, every statement flattened
/// into one of the two token streams, every function's body span recorded.
#[derive(Default, Debug, PartialEq)]
pub struct Analyzer {
    pub symbols: SymbolTable,
    pub functions: IndexVec<FuncId, FuncRecord>,
    pub param_offsets: Vec<SymbolId>,
    pub tokens_main: Vec<TokenEntry>,
    pub tokens_sub: Vec<TokenEntry>,
    /// Every distinct `argN` index referenced anywhere, sorted ascending.
    pub arg_indexes: Vec<u32>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the analyzer to completion over `lexer`, consuming it.
    pub fn analyze<R: Read, A: Allocator>(mut self, lexer: &mut Lexer<R, A>) -> CompileResult<Self> {
        let mut parser = Parser {
            an: &mut self,
            lexer,
            pending: None,
            has_tab: false,
            in_func_body: false,
            current_func: None,
            line_kind: LineKind::None,
            pending_is_return: false,
        };
        parser.run()?;
        Ok(self)
    }
}

pub(super) enum LineKind {
    None,
    FunctionHeader(FuncId),
    Statement,
}

/// Parse state threaded through the analyzer submodules. Lives only for the
/// duration of one [`Analyzer::analyze`] call.
pub(super) struct Parser<'a, R, A> {
    pub(super) an: &'a mut Analyzer,
    pub(super) lexer: &'a mut Lexer<R, A>,
    /// One token of pushback: some statements must read past their own end
    /// to know where they stop, and hand the boundary token back to the
    /// line-level dispatch loop.
    pending: Option<Token>,
    pub(super) has_tab: bool,
    pub(super) in_func_body: bool,
    pub(super) current_func: Option<FuncId>,
    line_kind: LineKind,
    pending_is_return: bool,
}

impl<'a, R: Read, A: Allocator> Parser<'a, R, A> {
    pub(super) fn next(&mut self) -> Token {
        self.pending.take().unwrap_or_else(|| self.lexer.next_token())
    }

    pub(super) fn push_back(&mut self, tok: Token) {
        debug_assert!(self.pending.is_none(), "at most one token of lookahead");
        self.pending = Some(tok);
    }

    /// Skip `Space` only; used at the start of a line, where a comment is
    /// itself meaningful (it marks the line as having no statement).
    pub(super) fn skip_spaces(&mut self) -> Token {
        loop {
            let t = self.next();
            if t != Token::Space {
                return t;
            }
        }
    }

    /// Skip `Space` and `Comment`; used inside expressions, where both are
    /// fully transparent.
    pub(super) fn skip_trivia(&mut self) -> Token {
        loop {
            match self.next() {
                Token::Space | Token::Comment => continue,
                other => return other,
            }
        }
    }

    pub(super) fn current_list_mut(&mut self) -> &mut Vec<TokenEntry> {
        if self.has_tab {
            &mut self.an.tokens_sub
        } else {
            &mut self.an.tokens_main
        }
    }

    pub(super) fn append_entry(&mut self, entry: TokenEntry) {
        self.current_list_mut().push(entry);
    }

    fn run(&mut self) -> CompileResult<()> {
        use crate::error::CompileError as E;

        loop {
            let tok = self.skip_spaces();
            match tok {
                Token::Eof => {
                    self.finish_line()?;
                    self.close_function()?;
                    break;
                }
                Token::LineTerminator(_) => {
                    self.finish_line()?;
                }
                Token::Comment => {}
                Token::Tab => {
                    if self.has_tab {
                        return Err(E::RedundantTab);
                    }
                    self.has_tab = true;
                }
                Token::Function => {
                    if self.in_func_body && self.has_tab {
                        return Err(E::NestedFunction);
                    }
                    self.begin_statement_line()?;
                    let fid = self.parse_function()?;
                    self.line_kind = LineKind::FunctionHeader(fid);
                }
                Token::Print => {
                    self.begin_statement_line()?;
                    self.append_entry(TokenEntry::Plain(crate::token_entry::PlainToken::Print));
                    self.parse_expression()?;
                    self.line_kind = LineKind::Statement;
                }
                Token::Return => {
                    if !self.in_func_body {
                        return Err(E::ReturnInMain);
                    }
                    self.begin_statement_line()?;
                    self.append_entry(TokenEntry::Plain(crate::token_entry::PlainToken::Return));
                    self.parse_expression()?;
                    self.line_kind = LineKind::Statement;
                    self.pending_is_return = true;
                }
                Token::Ident(name) => {
                    self.begin_statement_line()?;
                    self.parse_name_statement(name)?;
                    self.line_kind = LineKind::Statement;
                }
                Token::Error => return Err(E::InvalidToken),
                Token::OutOfMemory => return Err(E::OutOfMemory),
                _ => return Err(E::SyntaxError),
            }
        }
        Ok(())
    }

    /// Runs before any statement-bearing token is parsed. A non-indented
    /// line ends whatever function body is currently open.
    fn begin_statement_line(&mut self) -> CompileResult<()> {
        if self.in_func_body && !self.has_tab {
            self.close_function()?;
        }
        Ok(())
    }

    fn close_function(&mut self) -> CompileResult<()> {
        use crate::error::CompileError as E;
        if let Some(fid) = self.current_func.take() {
            let rec = &self.an.functions[fid];
            if rec.body.start == rec.body.end {
                return Err(E::EmptyFunction);
            }
        }
        self.in_func_body = false;
        Ok(())
    }

    fn finish_line(&mut self) -> CompileResult<()> {
        use crate::error::CompileError as E;

        if self.has_tab && matches!(self.line_kind, LineKind::None) {
            return Err(E::RedundantTab);
        }

        match std::mem::replace(&mut self.line_kind, LineKind::None) {
            LineKind::FunctionHeader(fid) => {
                self.in_func_body = true;
                self.current_func = Some(fid);
            }
            LineKind::Statement if self.in_func_body && self.has_tab => {
                if let Some(fid) = self.current_func {
                    let len = self.an.tokens_sub.len();
                    self.an.functions[fid].body.end = len;
                    if self.pending_is_return {
                        if self.an.functions[fid].has_return {
                            return Err(E::RedundantReturn);
                        }
                        self.an.functions[fid].has_return = true;
                    }
                }
            }
            _ => {}
        }

        self.has_tab = false;
        self.pending_is_return = false;
        Ok(())
    }
}
