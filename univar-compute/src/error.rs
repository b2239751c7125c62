//! Errors produced while evaluating or differentiating expressions.
//!
//! Building and combining expressions never fails: folds that would hit one
//! of these conditions are simply not performed, and the condition surfaces
//! here once [`eval`](crate::Expr::eval) reaches the offending node with a
//! concrete input.

use crate::primitive::Number;
use thiserror::Error;

/// An error from evaluating an expression at a point.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    /// A logarithm of a non-positive value.
    #[error("log is undefined for {0}")]
    LogOutOfDomain(f64),

    /// A logarithm in a base that is not positive (or is exactly 1).
    #[error("log is undefined in base {0}")]
    LogBaseOutOfDomain(f64),

    /// An inverse trig function applied outside [-1, 1].
    #[error("{func} is undefined at {x}")]
    OutOfDomain { func: &'static str, x: f64 },

    /// A power whose result is not a real number, such as a negative base
    /// raised to a fractional exponent.
    #[error("result is not a real number")]
    NonReal,
}

/// An error from differentiating an expression.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DerivativeError {
    /// The derivative of `n^x` involves `ln(n)`, which does not exist for
    /// `n <= 0`.
    #[error("derivative of {0}^x is undefined for a non-positive base")]
    NonPositiveBase(Number),
}
