// error.rs

use thiserror::Error;

/// Errors produced by the checked arithmetic operations. The display
/// messages are stable; callers may match on them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("Addition overflow!")]
    AdditionOverflow,
    #[error("Subtraction overflow!")]
    SubtractionOverflow,
    #[error("Multiplication overflow!")]
    MultiplicationOverflow,
    #[error("Division overflow!")]
    DivisionOverflow,
    #[error("Division by zero!")]
    DivisionByZero,
}
