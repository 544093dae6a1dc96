//! minic-par — the minic parser.
//!
//! Recursive-descent at the statement/declaration level, precedence-climbing
//! (Pratt) for expressions. The parser owns its token stream, a cursor into
//! it, and a diagnostic handler; there is no global mutable parser state, so
//! nothing here prevents two `Parser`s from running concurrently over
//! different sources.

pub mod ast;
pub mod error;
mod expr;
mod items;
mod stmt;

use minic_lex::{Token, TokenKind};
use minic_util::{Handler, Span};

pub use ast::*;
pub use error::ParseError;

/// Recursive-descent / Pratt parser over a token stream.
pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    handler: &'a Handler,
    next_node_id: NodeId,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, handler: &'a Handler) -> Self {
        Self {
            tokens,
            pos: 0,
            handler,
            next_node_id: 0,
        }
    }

    /// Parse a complete source file: `var*` then `func+` then EOF.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let program = self.parse_program_inner();
        log::debug!(
            "parsed {} globals, {} functions",
            program.as_ref().map(|p| p.globals.len()).unwrap_or(0),
            program.as_ref().map(|p| p.funcs.len()).unwrap_or(0)
        );
        program
    }

    fn fresh_node_id(&mut self) -> NodeId {
        let id = self.next_node_id;
        self.next_node_id += 1;
        id
    }

    // -- token stream helpers -------------------------------------------------

    fn current(&self) -> &TokenKind {
        &self.tokens[self.pos.min(self.tokens.len() - 1)].kind
    }

    fn current_span(&self) -> Span {
        self.tokens[self.pos.min(self.tokens.len() - 1)].span
    }

    fn is_eof(&self) -> bool {
        matches!(self.current(), TokenKind::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos.min(self.tokens.len() - 1)].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn describe_current(&self) -> String {
        describe_kind(self.current())
    }

    fn error(&self, expected: impl Into<String>) -> ParseError {
        let span = self.current_span();
        let err = ParseError::UnexpectedToken {
            found: self.describe_current(),
            expected: expected.into(),
            span,
        };
        self.handler.error(err.to_string(), span);
        err
    }
}

fn describe_kind(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Ident(s) => format!("identifier `{s}`"),
        TokenKind::Number(n) => format!("number `{n}`"),
        TokenKind::Keyword(k) => format!("keyword `{k:?}`"),
        TokenKind::Punct(p) => format!("`{p:?}`"),
        TokenKind::Operator(op) => format!("`{}`", op.spelling()),
        TokenKind::UnknownOperator(s) => format!("unknown operator `{s}`"),
        TokenKind::Eof => "end of input".to_string(),
    }
}

#[cfg(test)]
pub(crate) fn parse_source(source: &str) -> Result<Program, ParseError> {
    let handler = Handler::new();
    let lexer = minic_lex::Lexer::new(source, &handler);
    let tokens = lexer.tokenize().map_err(ParseError::from)?;
    let mut parser = Parser::new(tokens, &handler);
    parser.parse_program()
}
