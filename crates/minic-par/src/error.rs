//! Parse error types.

use minic_util::Span;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected token: {found}, expected {expected} at {span}")]
    UnexpectedToken {
        found: String,
        expected: String,
        span: Span,
    },

    #[error("`var` declaration out of position at {span}: {reason}")]
    VarOutOfPosition { reason: String, span: Span },

    #[error("missing body for `else` branch at {span}")]
    MissingElseBody { span: Span },

    #[error("left-hand side of `=` must be a variable name at {span}")]
    NonLvalueAssignTarget { span: Span },

    #[error("mismatched brackets at {span}: {reason}")]
    MismatchedBrackets { reason: String, span: Span },

    #[error("operator run {spelling:?} is not a known operator at {span}")]
    UnknownOperator { spelling: String, span: Span },

    #[error("lexical error: {0}")]
    Lex(#[from] minic_lex::LexError),
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::VarOutOfPosition { span, .. }
            | ParseError::MissingElseBody { span }
            | ParseError::NonLvalueAssignTarget { span }
            | ParseError::MismatchedBrackets { span, .. }
            | ParseError::UnknownOperator { span, .. } => *span,
            ParseError::Lex(e) => e.span(),
        }
    }
}
