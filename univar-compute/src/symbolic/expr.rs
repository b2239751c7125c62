//! The expression tree and its normalizing constructors.

use crate::primitive::Number;

/// A function of one variable, represented as an immutable tree.
///
/// Most variants are *parameterized leaves*: a shape like "x plus a constant"
/// together with the constant, covering the common one-step functions without
/// any allocation. The boxed variants at the bottom combine two arbitrary
/// subtrees and only appear when no leaf shape fits.
///
/// Construct leaves through the methods on this type (`add_n`, `mult_n`, and
/// friends) rather than the variants directly: the constructors collapse
/// degenerate parameters (`mult_n(1)` is [`Expr::Identity`], `pow_n(0)` is
/// the constant 1) so the rest of the crate can rely on those shapes never
/// occurring. Combining trees with `+`, `-`, `*`, `/`, [`pow`](Expr::pow) and
/// [`compose`](Expr::compose) applies the pairwise rewrite rules the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `f(x) = n`.
    Const(Number),

    /// `f(x) = x`.
    Identity,

    /// `f(x) = x + n`.
    AddN(Number),

    /// `f(x) = x - n`.
    SubN(Number),

    /// `f(x) = n - x`.
    NSub(Number),

    /// `f(x) = nx`.
    MulN(Number),

    /// `f(x) = x / n`.
    DivN(Number),

    /// `f(x) = n / x`.
    NDiv(Number),

    /// `f(x) = x // n`, flooring division.
    FloorDivN(Number),

    /// `f(x) = n // x`, flooring division.
    NFloorDiv(Number),

    /// `f(x) = x^n`.
    PowN(Number),

    /// `f(x) = n^x`.
    NPow(Number),

    /// `f(x) = log_n(x)`: the *argument* varies with the input.
    LogBase(Number),

    /// `f(x) = log_x(n)`: the *base* varies with the input.
    LogOf(Number),

    /// `f(x) = sin(x)`.
    Sin,

    /// `f(x) = cos(x)`.
    Cos,

    /// `f(x) = tan(x)`.
    Tan,

    /// `f(x) = asin(x)`.
    Asin,

    /// `f(x) = acos(x)`.
    Acos,

    /// `f(x) = atan(x)`.
    Atan,

    /// `f(x) + g(x)`.
    Add(Box<Expr>, Box<Expr>),

    /// `f(x) - g(x)`.
    Sub(Box<Expr>, Box<Expr>),

    /// `f(x) * g(x)`.
    Mul(Box<Expr>, Box<Expr>),

    /// `f(x) / g(x)`.
    Div(Box<Expr>, Box<Expr>),

    /// `f(x) ^ g(x)`.
    Pow(Box<Expr>, Box<Expr>),

    /// `f(g(x))`: function composition, outer first.
    Chain(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// How tightly this node binds when printed; a child with strictly lower
    /// priority than its parent is parenthesized by [`Display`](std::fmt).
    pub fn priority(&self) -> u8 {
        match self {
            Expr::Const(_) | Expr::Identity => 6,
            Expr::AddN(_) | Expr::Add(..) => 0,
            Expr::SubN(_) | Expr::NSub(_) | Expr::Sub(..) => 1,
            Expr::MulN(_) | Expr::Mul(..) => 2,
            Expr::DivN(_)
            | Expr::NDiv(_)
            | Expr::FloorDivN(_)
            | Expr::NFloorDiv(_)
            | Expr::Div(..) => 3,
            Expr::PowN(_) | Expr::NPow(_) | Expr::Pow(..) => 4,
            Expr::LogBase(_)
            | Expr::LogOf(_)
            | Expr::Sin
            | Expr::Cos
            | Expr::Tan
            | Expr::Asin
            | Expr::Acos
            | Expr::Atan
            | Expr::Chain(..) => 5,
        }
    }

    /// The constant function `f(x) = n`.
    pub fn constant(n: impl Into<Number>) -> Expr {
        Expr::Const(n.into())
    }

    /// The identity function `f(x) = x`.
    pub fn identity() -> Expr {
        Expr::Identity
    }

    /// `f(x) = x + n`. Negative `n` flips to [`sub_n`](Expr::sub_n) so the
    /// printed form never reads `x + -2`.
    pub fn add_n(n: impl Into<Number>) -> Expr {
        let n = n.into();
        if n.is_zero() {
            Expr::Identity
        } else if n.is_negative() {
            Expr::sub_n(-n)
        } else {
            Expr::AddN(n)
        }
    }

    /// `f(x) = x - n`. Negative `n` flips to [`add_n`](Expr::add_n).
    pub fn sub_n(n: impl Into<Number>) -> Expr {
        let n = n.into();
        if n.is_zero() {
            Expr::Identity
        } else if n.is_negative() {
            Expr::add_n(-n)
        } else {
            Expr::SubN(n)
        }
    }

    /// `f(x) = n - x`.
    pub fn n_sub(n: impl Into<Number>) -> Expr {
        let n = n.into();
        if n.is_zero() {
            Expr::mult_n(-1)
        } else {
            Expr::NSub(n)
        }
    }

    /// `f(x) = nx`.
    pub fn mult_n(n: impl Into<Number>) -> Expr {
        let n = n.into();
        if n.is_zero() {
            Expr::constant(0)
        } else if n.is_one() {
            Expr::Identity
        } else {
            Expr::MulN(n)
        }
    }

    /// `f(x) = x / n`. A zero divisor builds the generic division node
    /// instead, which reports the division by zero at evaluation time.
    pub fn div_n(n: impl Into<Number>) -> Expr {
        let n = n.into();
        if n.is_one() {
            Expr::Identity
        } else if n.is_zero() {
            Expr::Div(Box::new(Expr::Identity), Box::new(Expr::constant(0)))
        } else {
            Expr::DivN(n)
        }
    }

    /// `f(x) = n / x`.
    pub fn n_div(n: impl Into<Number>) -> Expr {
        let n = n.into();
        if n.is_zero() {
            Expr::constant(0)
        } else {
            Expr::NDiv(n)
        }
    }

    /// `f(x) = x // n`.
    pub fn floordiv_n(n: impl Into<Number>) -> Expr {
        Expr::FloorDivN(n.into())
    }

    /// `f(x) = n // x`.
    pub fn n_floordiv(n: impl Into<Number>) -> Expr {
        let n = n.into();
        if n.is_zero() {
            Expr::constant(0)
        } else {
            Expr::NFloorDiv(n)
        }
    }

    /// `f(x) = x^n`.
    pub fn pow_n(n: impl Into<Number>) -> Expr {
        let n = n.into();
        if n.is_zero() {
            Expr::constant(1)
        } else if n.is_one() {
            Expr::Identity
        } else {
            Expr::PowN(n)
        }
    }

    /// `f(x) = n^x`.
    pub fn n_pow(n: impl Into<Number>) -> Expr {
        let n = n.into();
        if n.is_zero() || n.is_one() {
            Expr::Const(n)
        } else {
            Expr::NPow(n)
        }
    }

    /// `f(x) = log_n(x)`. The base must be positive.
    pub fn log_base(n: impl Into<Number>) -> Expr {
        let n = n.into();
        debug_assert!(n.is_positive(), "log base must be positive, got {n}");
        Expr::LogBase(n)
    }

    /// `f(x) = log_x(n)`. The argument must be positive.
    pub fn log_of(n: impl Into<Number>) -> Expr {
        let n = n.into();
        if n.is_one() {
            return Expr::constant(0);
        }
        debug_assert!(n.is_positive(), "log argument must be positive, got {n}");
        Expr::LogOf(n)
    }
}
