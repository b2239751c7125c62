//! Infix rendering of expressions.
//!
//! A child is parenthesized when its priority is *strictly* lower than its
//! parent's; equal priorities print bare, which reads naturally for chains of
//! the same operator. [`Expr::Mul`] with a constant operand renders
//! coefficient-style (`2(x + 1)`, `-(sin(x))`), and [`Expr::Chain`] renders
//! the outer function with `x` textually replaced by the inner rendering, so
//! `sin` composed with `2x` prints as `sin(2x)`.

use crate::symbolic::expr::Expr;
use std::f64::consts::E;
use std::fmt;

impl Expr {
    /// Renders a child of a binary node, parenthesizing if it binds more
    /// loosely than the parent.
    fn child_str(&self, parent: &Expr) -> String {
        if self.priority() < parent.priority() {
            format!("({self})")
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(n) => write!(f, "{n}"),
            Expr::Identity => write!(f, "x"),
            Expr::AddN(n) => write!(f, "x + {n}"),
            Expr::SubN(n) => write!(f, "x - {n}"),
            Expr::NSub(n) => write!(f, "{n} - x"),
            Expr::MulN(n) => {
                if n.is_neg_one() {
                    write!(f, "(-x)")
                } else {
                    write!(f, "{n}x")
                }
            }
            Expr::DivN(n) => write!(f, "x / {n}"),
            Expr::NDiv(n) => write!(f, "{n} / x"),
            Expr::FloorDivN(n) => write!(f, "x // {n}"),
            Expr::NFloorDiv(n) => write!(f, "{n} // x"),
            Expr::PowN(n) => write!(f, "x^{n}"),
            Expr::NPow(n) => write!(f, "{n}^x"),
            Expr::LogBase(n) => {
                if (n.to_f64() - E).abs() < 1e-9 {
                    write!(f, "ln(x)")
                } else {
                    write!(f, "log{n}(x)")
                }
            }
            Expr::LogOf(n) => write!(f, "log_x({n})"),
            Expr::Sin => write!(f, "sin(x)"),
            Expr::Cos => write!(f, "cos(x)"),
            Expr::Tan => write!(f, "tan(x)"),
            Expr::Asin => write!(f, "asin(x)"),
            Expr::Acos => write!(f, "acos(x)"),
            Expr::Atan => write!(f, "atan(x)"),
            Expr::Add(l, r) => {
                write!(f, "{} + {}", l.child_str(self), r.child_str(self))
            }
            Expr::Sub(l, r) => {
                write!(f, "{} - {}", l.child_str(self), r.child_str(self))
            }
            Expr::Mul(l, r) => {
                // a constant operand prints as a coefficient
                for (c, other) in [(l, r), (r, l)] {
                    if let Expr::Const(n) = &**c {
                        return if n.is_one() {
                            write!(f, "{other}")
                        } else if n.is_neg_one() {
                            write!(f, "-({other})")
                        } else {
                            write!(f, "{n}({other})")
                        };
                    }
                }
                write!(f, "{} * {}", l.child_str(self), r.child_str(self))
            }
            Expr::Div(l, r) => {
                write!(f, "{} / {}", l.child_str(self), r.child_str(self))
            }
            Expr::Pow(l, r) => {
                write!(f, "{} ^ {}", l.child_str(self), r.child_str(self))
            }
            Expr::Chain(outer, inner) => {
                write!(f, "{}", outer.to_string().replace('x', &inner.to_string()))
            }
        }
    }
}
