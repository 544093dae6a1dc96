//! minic-util — spans, interned symbols, and diagnostics.
//!
//! Foundational types shared by every later stage of the pipeline
//! (lexer, parser, binder, code generator, VM driver). Nothing in this
//! crate knows about the minic language's grammar or semantics.

pub mod diagnostic;
mod span;
mod symbol;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use span::Span;
pub use symbol::Symbol;
