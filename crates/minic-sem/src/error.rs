//! Binder error types.

use minic_util::{Span, Symbol};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("duplicate name `{name}` at {span}")]
    DuplicateName { name: Symbol, span: Span },

    #[error("unknown identifier `{name}` at {span}")]
    UnknownIdentifier { name: Symbol, span: Span },

    #[error("call to unknown function `{name}` at {span}")]
    UnknownFunction { name: Symbol, span: Span },

    #[error("call to `{func}` at {span} has a bad argument list: {reason}")]
    ArgumentMismatch {
        func: Symbol,
        reason: String,
        span: Span,
    },

    #[error("no function named `main` was found")]
    MissingMain,

    #[error("`main` must take no parameters and return `Int` ({span})")]
    WrongMainSignature { span: Span },
}

impl BindError {
    pub fn span(&self) -> Span {
        match self {
            BindError::DuplicateName { span, .. }
            | BindError::UnknownIdentifier { span, .. }
            | BindError::UnknownFunction { span, .. }
            | BindError::ArgumentMismatch { span, .. }
            | BindError::WrongMainSignature { span } => *span,
            BindError::MissingMain => Span::DUMMY,
        }
    }
}
