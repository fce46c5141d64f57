//! Streaming lexical analysis for ML.
//!
//! [`Lexer`] turns a byte stream into [`Token`]s one call at a time. It never
//! looks back past the token it just returned and never looks ahead past the
//! single byte needed to resolve a multi-byte token (`\r\n`, `<-`, `argN`).

pub mod lexer;
pub mod reader;
pub mod token;

pub use lexer::Lexer;
pub use reader::open_source;
pub use token::Token;
