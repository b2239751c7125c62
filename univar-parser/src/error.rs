//! Syntax errors reported by the lexer and parser.

use thiserror::Error;

/// An error encountered while turning source text into an expression tree.
///
/// All of these are reported to the caller of [`parse`](crate::parse); the
/// parser never recovers from or papers over a malformed input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    /// A character that belongs to no token class.
    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),

    /// Two numeric literals with nothing between them, such as `1.2.3`.
    #[error("invalid numeric literal `{0}`")]
    InvalidNumber(String),

    /// A multi-letter name that is not a known function. Variables are
    /// single letters, so `xy` and `foo` are both rejected.
    #[error("`{0}` is not a known function, and variable names are single letters")]
    InvalidName(String),

    /// Only functions of one variable are supported.
    #[error("only one variable is supported, found both `{first}` and `{second}`")]
    MultipleVariables { first: char, second: char },

    /// A binary operator with no value to its left, such as `* x` or `x + * 2`.
    #[error("the `{0}` operator is missing its left operand")]
    MissingLeftOperand(char),

    /// The input ended where a value was still expected, such as `x +`.
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// A function name not applied to a parenthesized argument, such as
    /// `sin + 1` or a trailing `log`.
    #[error("the `{0}` function must be followed by a parenthesized argument")]
    ExpectedFunctionCall(String),

    /// `log` written with a base that is not a positive number.
    #[error("log base must be positive, found `{0}`")]
    InvalidLogBase(f64),

    /// The base of `log` did not reduce to a constant during lowering.
    #[error("the base of `log` must be a constant")]
    NonConstantLogBase,

    /// A `(` with no matching `)`.
    #[error("unmatched `(`")]
    UnmatchedOpenParen,

    /// A `)` with no matching `(`.
    #[error("unmatched `)`")]
    UnmatchedCloseParen,

    /// The input contained no expression at all.
    #[error("empty expression")]
    EmptyExpression,

    /// An operator or function was left with too few operands.
    #[error("the `{0}` operator is missing an operand")]
    MissingOperands(&'static str),

    /// Operands were left over after every operator was applied, meaning two
    /// values were adjacent with no operator between them.
    #[error("expression has dangling operands")]
    DanglingOperands,
}
