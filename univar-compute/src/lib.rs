//! Symbolic single-variable functions that evaluate, differentiate, and
//! print themselves.
//!
//! An [`Expr`] is an immutable tree of function shapes: parameterized leaves
//! for the common one-step functions (`x + n`, `nx`, `x^n`, `sin(x)`, ...)
//! and generic combinators for everything else. Trees simplify as they are
//! *built*: every combination of two expressions runs through a pairwise
//! rewrite table, so `x + x` is stored as `2x` and `(x + 5) - x` as the
//! constant `5`. The operations on a finished tree are then plain structural
//! recursion.
//!
//! Expressions come from the combination operators, or from [`parse`]:
//!
//! ```
//! use univar_compute::parse;
//!
//! let f = parse("x^2 + 3x")?;
//! assert_eq!(f.eval(2.0)?, 10.0);
//!
//! let slope = f.differentiate()?;
//! assert_eq!(slope.eval(2.0)?, 7.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Combining expressions never fails: operations that have no result for
//! some input (division by zero, logs of non-positive values) build a valid
//! tree and report the problem from [`Expr::eval`] when it is actually hit.

pub mod error;
pub mod primitive;
pub mod symbolic;

pub use error::{DerivativeError, EvalError};
pub use primitive::Number;
pub use symbolic::{expr::Expr, lower::parse};
pub use univar_parser::SyntaxError;
