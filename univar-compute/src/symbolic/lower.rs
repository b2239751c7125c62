//! Lowering of parse trees into expressions.
//!
//! The parser's [`Ast`] records the literal shape of the input; this pass
//! rebuilds it through the simplifying operators, so the returned [`Expr`]
//! is already folded. `2 * 3 * x` lowers to the single leaf `6x`.

use crate::primitive::Number;
use crate::symbolic::expr::Expr;
use std::str::FromStr;
use univar_parser::{Ast, BinOpKind, SyntaxError, TrigKind};

/// Parses the input into an [`Expr`].
///
/// ```
/// use univar_compute::parse;
///
/// let f = parse("2(x + 1)")?;
/// assert_eq!(f.eval(3.0)?, 8.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse(input: &str) -> Result<Expr, SyntaxError> {
    lower(univar_parser::parse(input)?)
}

fn lower(ast: Ast) -> Result<Expr, SyntaxError> {
    Ok(match ast {
        Ast::Num(n) => Expr::constant(Number::from(n)),
        Ast::Var(_) => Expr::Identity,
        Ast::BinOp { kind, lhs, rhs } => {
            let lhs = lower(*lhs)?;
            let rhs = lower(*rhs)?;
            match kind {
                BinOpKind::Add => lhs + rhs,
                BinOpKind::Sub => lhs - rhs,
                BinOpKind::Mul => lhs * rhs,
                BinOpKind::Div => lhs / rhs,
                BinOpKind::Exp => lhs.pow(rhs),
            }
        }
        Ast::Log { base, arg } => {
            let base = match lower(*base)? {
                Expr::Const(n) => n,
                _ => return Err(SyntaxError::NonConstantLogBase),
            };
            if !base.is_positive() {
                return Err(SyntaxError::InvalidLogBase(base.to_f64()));
            }
            Expr::log_base(base).compose(lower(*arg)?)
        }
        Ast::Trig { kind, arg } => {
            let func = match kind {
                TrigKind::Sin => Expr::Sin,
                TrigKind::Cos => Expr::Cos,
                TrigKind::Tan => Expr::Tan,
                TrigKind::Asin => Expr::Asin,
                TrigKind::Acos => Expr::Acos,
                TrigKind::Atan => Expr::Atan,
            };
            func.compose(lower(*arg)?)
        }
    })
}

impl FromStr for Expr {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Expr, SyntaxError> {
        parse(s)
    }
}
