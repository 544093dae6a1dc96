//! Driver-level error type: wraps every phase's error plus file I/O.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("could not read {path}: {source}")]
    ReadSource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Lex(#[from] minic_lex::LexError),

    #[error("{0}")]
    Parse(#[from] minic_par::ParseError),

    #[error("{0}")]
    Bind(#[from] minic_sem::BindError),

    #[error("{0}")]
    Runtime(#[from] minic_vm::RuntimeError),
}

pub type Result<T> = std::result::Result<T, DriverError>;
