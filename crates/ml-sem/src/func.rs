//! A parsed function: its name, its parameter slice, and the span of body
//! statements it owns in the program's sub-statement stream.

use crate::symbols::SymbolId;
use ml_util::define_idx;
use std::ops::Range;

define_idx!(FuncId);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuncRecord {
    pub name: SymbolId,
    /// Indices into [`crate::Analyzer::param_offsets`].
    pub params: Range<usize>,
    /// Indices into [`crate::Analyzer::tokens_sub`].
    pub body: Range<usize>,
    pub has_return: bool,
}
