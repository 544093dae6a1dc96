//! Runtime error types.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("modulo by zero")]
    ModuloByZero,

    #[error("negative shift count")]
    NegativeShiftCount,

    #[error("operand stack underflow (this is an interpreter bug)")]
    StackUnderflow,

    #[error("call to undefined function {0} (this is an interpreter bug)")]
    UndefinedFunction(usize),
}
