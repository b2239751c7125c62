//! Pairwise rewrite rules applied when two expressions are combined.
//!
//! Each operation is one total function over the operand pair. The match arms
//! encode the closed-form result of combining two leaf shapes, like `(x + a) +
//! (x + b)` giving `2x + (a + b)` and `(ax) * (b / x)` giving the constant
//! `ab`, and the final arm builds the generic combinator node for every pair
//! with no better shape.
//!
//! Rewriting never fails. A fold that would divide by zero, take a log out of
//! its domain, or produce a non-real power is skipped, leaving the generic
//! node in place; the error is reported by [`Expr::eval`] once the node is
//! actually reached with an input. `parse("1/0")` therefore succeeds, and
//! evaluating it does not.

use crate::primitive::Number;
use crate::symbolic::expr::Expr;

/// Combines two expressions with `+`.
pub fn add(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs, rhs) {
        (Expr::Const(a), Expr::Const(b)) => Expr::constant(a + b),
        (Expr::Const(a), g) if a.is_zero() => g,
        (Expr::Const(a), Expr::AddN(b)) => Expr::add_n(a + b),
        (Expr::Const(a), Expr::SubN(b)) => Expr::add_n(a - b),
        (Expr::Const(a), Expr::NSub(b)) => Expr::n_sub(a + b),
        (Expr::Const(a), Expr::Identity) => Expr::add_n(a),

        (Expr::Identity, Expr::Identity) => Expr::mult_n(2),
        // addition commutes, so reuse the rules with the operands swapped
        (Expr::Identity, g) => add(g, Expr::Identity),

        (Expr::AddN(a), Expr::Const(b)) => Expr::add_n(a + b),
        (Expr::AddN(a), Expr::AddN(b)) => add(Expr::mult_n(2), Expr::constant(a + b)),
        (Expr::AddN(a), Expr::SubN(b)) => {
            if a > b {
                add(Expr::mult_n(2), Expr::constant(a - b))
            } else {
                sub(Expr::mult_n(2), Expr::constant(b - a))
            }
        }
        (Expr::AddN(a), Expr::NSub(b)) => Expr::constant(a + b),
        (Expr::AddN(a), Expr::Identity) => add(Expr::mult_n(2), Expr::constant(a)),

        (Expr::SubN(a), Expr::Const(b)) => Expr::add_n(b - a),
        (Expr::SubN(a), Expr::AddN(b)) => {
            if b > a {
                add(Expr::mult_n(2), Expr::constant(b - a))
            } else {
                sub(Expr::mult_n(2), Expr::constant(a - b))
            }
        }
        (Expr::SubN(a), Expr::SubN(b)) => sub(Expr::mult_n(2), Expr::constant(a + b)),
        (Expr::SubN(a), Expr::NSub(b)) => Expr::constant(b - a),
        (Expr::SubN(a), Expr::Identity) => sub(Expr::mult_n(2), Expr::constant(a)),

        (Expr::NSub(a), Expr::Const(b)) => Expr::n_sub(a + b),
        (Expr::NSub(a), Expr::AddN(b)) => Expr::constant(a + b),
        (Expr::NSub(a), Expr::SubN(b)) => Expr::constant(a - b),
        (Expr::NSub(a), Expr::NSub(b)) => add(Expr::mult_n(-2), Expr::constant(a + b)),
        (Expr::NSub(a), Expr::Identity) => Expr::constant(a),

        (f, Expr::Const(b)) if b.is_zero() => f,
        (f, g) => Expr::Add(Box::new(f), Box::new(g)),
    }
}

/// Combines two expressions with `-`.
pub fn sub(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs, rhs) {
        (Expr::Const(a), Expr::Const(b)) => Expr::constant(a - b),
        (Expr::Const(a), g) if a.is_zero() => mul(g, Expr::constant(-1)),
        (Expr::Const(a), Expr::AddN(b)) => Expr::n_sub(a - b),
        (Expr::Const(a), Expr::SubN(b)) => Expr::n_sub(a + b),
        (Expr::Const(a), Expr::NSub(b)) => Expr::add_n(a - b),
        (Expr::Const(a), Expr::Identity) => Expr::n_sub(a),

        (Expr::Identity, Expr::Identity) => Expr::constant(0),
        (Expr::Identity, Expr::Const(b)) => Expr::add_n(-b),
        (Expr::Identity, Expr::AddN(b)) => Expr::constant(-b),
        (Expr::Identity, Expr::SubN(b)) => Expr::constant(b),

        (Expr::AddN(a), Expr::Const(b)) => Expr::add_n(a - b),
        (Expr::AddN(a), Expr::AddN(b)) => Expr::constant(a - b),
        (Expr::AddN(a), Expr::SubN(b)) => Expr::constant(a + b),
        (Expr::AddN(a), Expr::NSub(b)) => add(Expr::mult_n(2), Expr::constant(a - b)),
        (Expr::AddN(a), Expr::Identity) => Expr::constant(a),

        (Expr::SubN(a), Expr::Const(b)) => Expr::sub_n(a + b),
        (Expr::SubN(a), Expr::AddN(b)) => Expr::constant(-(a + b)),
        (Expr::SubN(a), Expr::SubN(b)) => Expr::constant(b - a),
        (Expr::SubN(a), Expr::NSub(b)) => sub(Expr::mult_n(2), Expr::constant(a + b)),
        (Expr::SubN(a), Expr::Identity) => Expr::constant(-a),

        (Expr::NSub(a), Expr::Const(b)) => Expr::n_sub(a - b),
        (Expr::NSub(a), Expr::AddN(b)) => add(Expr::mult_n(-2), Expr::constant(a - b)),
        (Expr::NSub(a), Expr::SubN(b)) => add(Expr::mult_n(-2), Expr::constant(a + b)),
        (Expr::NSub(a), Expr::NSub(b)) => Expr::constant(a - b),
        (Expr::NSub(a), Expr::Identity) => add(Expr::mult_n(-2), Expr::constant(a)),

        (f, Expr::Const(b)) if b.is_zero() => f,
        (f, g) => Expr::Sub(Box::new(f), Box::new(g)),
    }
}

/// Combines two expressions with `*`.
pub fn mul(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs, rhs) {
        (Expr::Const(a), Expr::Const(b)) => Expr::constant(a * b),
        (Expr::Const(a), _) if a.is_zero() => Expr::constant(0),
        (Expr::Const(a), g) if a.is_one() => g,
        (Expr::Const(a), Expr::MulN(b)) => Expr::mult_n(a * b),
        (Expr::Const(a), Expr::NDiv(b)) => Expr::n_div(a * b),
        (Expr::Const(a), Expr::Identity) => Expr::mult_n(a),

        (Expr::Identity, Expr::Identity) => Expr::pow_n(2),
        (Expr::Identity, g) => mul(g, Expr::Identity),

        (Expr::MulN(a), Expr::Const(b)) => Expr::mult_n(a * b),
        (Expr::MulN(a), Expr::MulN(b)) => mul(Expr::pow_n(2), Expr::constant(a * b)),
        (Expr::MulN(a), Expr::DivN(b)) => mul(Expr::pow_n(2), Expr::constant(a / b)),
        (Expr::MulN(a), Expr::NDiv(b)) => Expr::constant(a * b),
        (Expr::MulN(a), Expr::Identity) => mul(Expr::pow_n(2), Expr::constant(a)),

        // x/a times g commutes back into the rules above; for a plain
        // constant that leaves the generic node with the constant first,
        // which is the shape the printer folds into a coefficient
        (Expr::DivN(a), Expr::Const(b)) => mul(Expr::Const(b), Expr::DivN(a)),
        (Expr::DivN(a), Expr::MulN(b)) => mul(Expr::pow_n(2), Expr::constant(b / a)),
        (Expr::DivN(a), Expr::DivN(b)) => div(Expr::pow_n(2), Expr::constant(a * b)),
        (Expr::DivN(a), Expr::NDiv(b)) => Expr::constant(b / a),
        (Expr::DivN(a), Expr::Identity) => div(Expr::pow_n(2), Expr::constant(a)),

        (Expr::NDiv(a), Expr::Const(b)) => mul(Expr::Const(b), Expr::NDiv(a)),
        (Expr::NDiv(a), Expr::MulN(b)) => mul(Expr::MulN(b), Expr::NDiv(a)),
        (Expr::NDiv(a), Expr::DivN(b)) => mul(Expr::DivN(b), Expr::NDiv(a)),
        (Expr::NDiv(a), Expr::NDiv(b)) => div(Expr::constant(a * b), Expr::pow_n(2)),
        (Expr::NDiv(a), Expr::Identity) => Expr::constant(a),

        (Expr::PowN(a), Expr::Identity) => Expr::pow_n(a + Number::int(1)),

        (_, Expr::Const(b)) if b.is_zero() => Expr::constant(0),
        (f, Expr::Const(b)) if b.is_one() => f,
        (f, g) => Expr::Mul(Box::new(f), Box::new(g)),
    }
}

/// Combines two expressions with `/`.
pub fn div(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs, rhs) {
        (Expr::Const(a), _) if a.is_zero() => Expr::constant(0),
        (Expr::Const(a), Expr::Const(b)) if !b.is_zero() => Expr::constant(a / b),
        (Expr::Const(a), Expr::DivN(b)) => Expr::n_div(a * b),
        (Expr::Const(a), Expr::Identity) => Expr::n_div(a),

        (Expr::Identity, Expr::Identity) => Expr::constant(1),
        (Expr::Identity, Expr::Const(b)) => Expr::div_n(b),
        (Expr::Identity, Expr::MulN(b)) => Expr::constant(Number::int(1) / b),
        (Expr::Identity, Expr::DivN(b)) => Expr::constant(b),

        (Expr::MulN(a), Expr::Const(b)) if !b.is_zero() => Expr::mult_n(a / b),
        (Expr::MulN(a), Expr::MulN(b)) => Expr::constant(a / b),
        (Expr::MulN(a), Expr::DivN(b)) => Expr::constant(a * b),
        (Expr::MulN(a), Expr::NDiv(b)) => mul(Expr::pow_n(2), Expr::constant(a / b)),
        (Expr::MulN(a), Expr::Identity) => Expr::constant(a),

        (Expr::DivN(a), Expr::Const(b)) if !b.is_zero() => Expr::div_n(a * b),
        (Expr::DivN(a), Expr::MulN(b)) => Expr::constant(Number::int(1) / (a * b)),
        (Expr::DivN(a), Expr::DivN(b)) => Expr::constant(b / a),
        (Expr::DivN(a), Expr::NDiv(b)) => div(Expr::pow_n(2), Expr::constant(a * b)),
        (Expr::DivN(a), Expr::Identity) => Expr::constant(Number::int(1) / a),

        (Expr::NDiv(a), Expr::Const(b)) if !b.is_zero() => Expr::n_div(a / b),
        (Expr::NDiv(a), Expr::MulN(b)) => div(Expr::constant(a / b), Expr::pow_n(2)),
        (Expr::NDiv(a), Expr::DivN(b)) => div(Expr::constant(a * b), Expr::pow_n(2)),
        (Expr::NDiv(a), Expr::NDiv(b)) => Expr::constant(a / b),
        (Expr::NDiv(a), Expr::Identity) => div(Expr::constant(a), Expr::pow_n(2)),

        (f, Expr::Const(b)) if b.is_one() => f,
        (f, g) => Expr::Div(Box::new(f), Box::new(g)),
    }
}

/// Combines two expressions with `^`.
pub fn pow(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs, rhs) {
        // b ^ log_b(x) = x
        (Expr::Const(b), Expr::LogBase(c)) if b == c => Expr::Identity,
        (Expr::Const(a), _) if a.is_zero() || a.is_one() => Expr::Const(a),
        (Expr::Const(a), Expr::Const(b)) => match a.checked_pow(&b) {
            Some(v) => Expr::Const(v),
            None => Expr::Pow(Box::new(Expr::Const(a)), Box::new(Expr::Const(b))),
        },
        (_, Expr::Const(b)) if b.is_zero() => Expr::constant(1),
        (f, Expr::Const(b)) if b.is_one() => f,
        (f, g) => Expr::Pow(Box::new(f), Box::new(g)),
    }
}

/// Composes two expressions: `chain(f, g)` is `f(g(x))`.
pub fn chain(outer: Expr, inner: Expr) -> Expr {
    match (outer, inner) {
        (Expr::Const(k), _) => Expr::Const(k),
        (f, Expr::Const(k)) => match f.eval(k.to_f64()) {
            Ok(v) => Expr::constant(Number::from(v)),
            Err(_) => Expr::Chain(Box::new(f), Box::new(Expr::Const(k))),
        },
        (Expr::Identity, g) => g,
        (f, g) => Expr::Chain(Box::new(f), Box::new(g)),
    }
}

impl Expr {
    /// Raises `self` to the power `rhs`, simplifying where possible.
    pub fn pow(self, rhs: Expr) -> Expr {
        pow(self, rhs)
    }

    /// Composes `self` with `inner`, producing `self(inner(x))`.
    pub fn compose(self, inner: Expr) -> Expr {
        chain(self, inner)
    }
}

/// The arithmetic operators apply the same rewrite rules as the functions in
/// this module; `f + g` is [`add`]`(f, g)`. To combine with an expression
/// held as source text, parse it first: `f + "2x + 1".parse::<Expr>()?`.
impl std::ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        add(self, rhs)
    }
}

impl std::ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        sub(self, rhs)
    }
}

impl std::ops::Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        mul(self, rhs)
    }
}

impl std::ops::Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        div(self, rhs)
    }
}

impl std::ops::Add<f64> for Expr {
    type Output = Expr;

    fn add(self, rhs: f64) -> Expr {
        add(self, Expr::constant(rhs))
    }
}

impl std::ops::Sub<f64> for Expr {
    type Output = Expr;

    fn sub(self, rhs: f64) -> Expr {
        sub(self, Expr::constant(rhs))
    }
}

impl std::ops::Mul<f64> for Expr {
    type Output = Expr;

    fn mul(self, rhs: f64) -> Expr {
        mul(self, Expr::constant(rhs))
    }
}

impl std::ops::Div<f64> for Expr {
    type Output = Expr;

    fn div(self, rhs: f64) -> Expr {
        div(self, Expr::constant(rhs))
    }
}

impl std::ops::Add<Expr> for f64 {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        add(Expr::constant(self), rhs)
    }
}

impl std::ops::Sub<Expr> for f64 {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        sub(Expr::constant(self), rhs)
    }
}

impl std::ops::Mul<Expr> for f64 {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        mul(Expr::constant(self), rhs)
    }
}

impl std::ops::Div<Expr> for f64 {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        div(Expr::constant(self), rhs)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Expr {
        Expr::constant(value)
    }
}
