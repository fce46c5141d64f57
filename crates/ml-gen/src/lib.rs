//! Translates an analyzed program into a standalone C source file.
//!
//! [`visit::accept`] walks the program once, in the section order the
//! emitted C needs (declarations, then functions, then `main`), and drives
//! an arbitrary [`Sink`]. [`CSink`] is the only sink this repository ships,
//! but the split keeps the walk itself free of text-formatting concerns.

pub mod c_sink;
pub mod hexfloat;
pub mod sink;
pub mod visit;

pub use c_sink::CSink;
pub use hexfloat::format_hex_float;
pub use sink::Sink;
pub use visit::accept;

use ml_sem::Analyzer;

/// Convenience entry point: walk `an` with a fresh [`CSink`] and return the
/// finished C source.
pub fn emit_c(an: &Analyzer) -> String {
    let mut sink = CSink::new();
    accept(an, &mut sink);
    sink.finish()
}
