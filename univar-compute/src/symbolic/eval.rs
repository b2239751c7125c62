//! Numeric evaluation of expressions.

use crate::error::EvalError;
use crate::symbolic::expr::Expr;

/// Maps NaN and infinite results, which mostly arise from powers, to
/// [`EvalError::NonReal`].
fn finite_or_nonreal(value: f64) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonReal)
    }
}

impl Expr {
    /// Evaluates the expression at `x`.
    ///
    /// Division by zero, logs outside their domain, inverse trig outside
    /// [-1, 1] and non-real powers are reported as [`EvalError`]s; the tree
    /// itself is never in an invalid state.
    ///
    /// ```
    /// use univar_compute::parse;
    ///
    /// let f = parse("x^2 + 3x")?;
    /// assert_eq!(f.eval(2.0)?, 10.0);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Expr::Const(n) => Ok(n.to_f64()),
            Expr::Identity => Ok(x),
            Expr::AddN(n) => Ok(x + n.to_f64()),
            Expr::SubN(n) => Ok(x - n.to_f64()),
            Expr::NSub(n) => Ok(n.to_f64() - x),
            Expr::MulN(n) => Ok(n.to_f64() * x),
            // the constructor rules out a zero divisor
            Expr::DivN(n) => Ok(x / n.to_f64()),
            Expr::NDiv(n) => {
                if x == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(n.to_f64() / x)
                }
            }
            Expr::FloorDivN(n) => {
                if n.is_zero() {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok((x / n.to_f64()).floor())
                }
            }
            Expr::NFloorDiv(n) => {
                if x == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok((n.to_f64() / x).floor())
                }
            }
            Expr::PowN(n) => {
                if x == 0.0 && n.is_negative() {
                    Err(EvalError::DivisionByZero)
                } else {
                    finite_or_nonreal(x.powf(n.to_f64()))
                }
            }
            Expr::NPow(n) => finite_or_nonreal(n.to_f64().powf(x)),
            Expr::LogBase(n) => {
                let base = n.to_f64();
                if base <= 0.0 || base == 1.0 {
                    Err(EvalError::LogBaseOutOfDomain(base))
                } else if x <= 0.0 {
                    Err(EvalError::LogOutOfDomain(x))
                } else {
                    Ok(x.ln() / base.ln())
                }
            }
            Expr::LogOf(n) => {
                let arg = n.to_f64();
                if arg <= 0.0 {
                    Err(EvalError::LogOutOfDomain(arg))
                } else if x <= 0.0 {
                    Err(EvalError::LogBaseOutOfDomain(x))
                } else if x == 1.0 {
                    // ln(1) = 0 in the denominator
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(arg.ln() / x.ln())
                }
            }
            Expr::Sin => Ok(x.sin()),
            Expr::Cos => Ok(x.cos()),
            Expr::Tan => Ok(x.tan()),
            Expr::Asin => {
                if !(-1.0..=1.0).contains(&x) {
                    Err(EvalError::OutOfDomain { func: "asin", x })
                } else {
                    Ok(x.asin())
                }
            }
            Expr::Acos => {
                if !(-1.0..=1.0).contains(&x) {
                    Err(EvalError::OutOfDomain { func: "acos", x })
                } else {
                    Ok(x.acos())
                }
            }
            Expr::Atan => Ok(x.atan()),
            Expr::Add(f, g) => Ok(f.eval(x)? + g.eval(x)?),
            Expr::Sub(f, g) => Ok(f.eval(x)? - g.eval(x)?),
            Expr::Mul(f, g) => Ok(f.eval(x)? * g.eval(x)?),
            Expr::Div(f, g) => {
                let denom = g.eval(x)?;
                if denom == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(f.eval(x)? / denom)
                }
            }
            Expr::Pow(f, g) => finite_or_nonreal(f.eval(x)?.powf(g.eval(x)?)),
            Expr::Chain(f, g) => f.eval(g.eval(x)?),
        }
    }
}
