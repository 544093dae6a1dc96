//! Lexer implementation, split by token family the way `faxc-lex` is:
//!
//! - `core` — main `Lexer` struct, whitespace/comment skipping, dispatch
//! - `identifier` — identifiers and keyword recognition
//! - `number` — numeric literals (decimal/hex/octal/binary)
//! - `operator` — punctuation and greedy multi-character operator scanning
//! - `comment` — `#` line comments and `'…'`/`"…"` block comments

mod comment;
mod core;
mod identifier;
mod number;
mod operator;

pub use core::Lexer;
