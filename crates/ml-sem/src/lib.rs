//! Name resolution and the single-pass parser that turns a token stream into
//! a fully resolved program.

pub mod analyzer;
pub mod error;
pub mod func;
pub mod symbols;
pub mod token_entry;

pub use analyzer::Analyzer;
pub use error::{CompileError, CompileResult};
pub use func::{FuncId, FuncRecord};
pub use symbols::{NameCollision, ResolveHint, SymbolId, SymbolTable, Usage};
pub use token_entry::{PlainToken, TokenEntry};
