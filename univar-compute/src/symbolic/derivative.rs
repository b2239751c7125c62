//! Symbolic differentiation.

use crate::error::DerivativeError;
use crate::primitive::Number;
use crate::symbolic::expr::Expr;
use crate::symbolic::simplify::{add, chain, div, mul, pow, sub};
use std::f64::consts::E;

impl Expr {
    /// Returns the derivative of the expression with respect to `x`.
    ///
    /// The rules build their results through the simplifying constructors, so
    /// the returned tree is already folded: the derivative of `2x + 1` is the
    /// constant `2`, not `2 * 1 + 0`.
    ///
    /// The only failure is `n^x` with `n <= 0`, whose derivative would need
    /// `ln(n)`. Flooring division steps over intervals of zero slope, so its
    /// derivative is `0` (undefined at the jumps themselves).
    ///
    /// ```
    /// use univar_compute::parse;
    ///
    /// let f = parse("sin(x)")?;
    /// assert_eq!(f.differentiate()?.to_string(), "cos(x)");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn differentiate(&self) -> Result<Expr, DerivativeError> {
        Ok(match self {
            Expr::Const(_) => Expr::constant(0),
            Expr::Identity | Expr::AddN(_) | Expr::SubN(_) => Expr::constant(1),
            Expr::NSub(_) => Expr::constant(-1),
            Expr::MulN(n) => Expr::Const(*n),
            Expr::DivN(n) => Expr::constant(Number::int(1) / *n),
            Expr::NDiv(n) => div(Expr::constant(-*n), Expr::pow_n(2)),
            Expr::FloorDivN(_) | Expr::NFloorDiv(_) => Expr::constant(0),
            Expr::PowN(n) => mul(Expr::pow_n(*n - Number::int(1)), Expr::Const(*n)),
            Expr::NPow(n) => {
                if !n.is_positive() {
                    return Err(DerivativeError::NonPositiveBase(*n));
                }
                mul(Expr::n_pow(*n), Expr::constant(n.to_f64().ln()))
            }
            Expr::LogBase(n) => div(Expr::constant(1), Expr::mult_n(n.to_f64().ln())),
            Expr::LogOf(n) => div(
                Expr::constant(-n.to_f64().ln()),
                mul(Expr::Identity, pow(Expr::log_base(E), Expr::constant(2))),
            ),
            Expr::Sin => Expr::Cos,
            Expr::Cos => mul(Expr::constant(-1), Expr::Sin),
            Expr::Tan => add(pow(Expr::Tan, Expr::constant(2)), Expr::constant(1)),
            Expr::Asin => div(
                Expr::constant(1),
                pow(
                    sub(Expr::constant(1), Expr::pow_n(2)),
                    Expr::constant(0.5),
                ),
            ),
            Expr::Acos => div(
                Expr::constant(-1),
                pow(
                    sub(Expr::constant(1), Expr::pow_n(2)),
                    Expr::constant(0.5),
                ),
            ),
            Expr::Atan => div(
                Expr::constant(1),
                add(Expr::constant(1), Expr::pow_n(2)),
            ),
            Expr::Add(f, g) => add(f.differentiate()?, g.differentiate()?),
            Expr::Sub(f, g) => sub(f.differentiate()?, g.differentiate()?),
            Expr::Mul(f, g) => {
                // product rule
                let f = (**f).clone();
                let g = (**g).clone();
                add(
                    mul(f.differentiate()?, g.clone()),
                    mul(f, g.differentiate()?),
                )
            }
            Expr::Div(f, g) => {
                // quotient rule; the denominator stays g * g rather than g^2
                // so the division-of-scalings rules above it still apply
                let f = (**f).clone();
                let g = (**g).clone();
                div(
                    sub(
                        mul(f.differentiate()?, g.clone()),
                        mul(f, g.differentiate()?),
                    ),
                    mul(g.clone(), g),
                )
            }
            Expr::Pow(f, g) => {
                // d/dx f^g = f^g * (g' ln(f) + g f'/f)
                let f = (**f).clone();
                let g = (**g).clone();
                let f_prime = f.differentiate()?;
                let g_prime = g.differentiate()?;
                mul(
                    pow(f.clone(), g.clone()),
                    add(
                        mul(g_prime, chain(Expr::log_base(E), f.clone())),
                        mul(g, div(f_prime, f)),
                    ),
                )
            }
            Expr::Chain(f, g) => {
                let g = (**g).clone();
                mul(chain(f.differentiate()?, g.clone()), g.differentiate()?)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Number;
    use pretty_assertions::assert_eq;

    fn d(f: Expr) -> Expr {
        f.differentiate().unwrap()
    }

    #[test]
    fn linear_leaves() {
        assert_eq!(d(Expr::constant(5)), Expr::constant(0));
        assert_eq!(d(Expr::identity()), Expr::constant(1));
        assert_eq!(d(Expr::add_n(3)), Expr::constant(1));
        assert_eq!(d(Expr::sub_n(3)), Expr::constant(1));
        assert_eq!(d(Expr::n_sub(3)), Expr::constant(-1));
        assert_eq!(d(Expr::mult_n(4)), Expr::constant(4));
        assert_eq!(d(Expr::div_n(4)), Expr::constant(Number::rational(1, 4)));
        assert_eq!(d(Expr::floordiv_n(3)), Expr::constant(0));
    }

    #[test]
    fn power_rule() {
        assert_eq!(
            d(Expr::pow_n(3)),
            Expr::Mul(Box::new(Expr::pow_n(2)), Box::new(Expr::constant(3))),
        );
        // x^2 collapses further: 2x
        assert_eq!(d(Expr::pow_n(2)), Expr::mult_n(2));
    }

    #[test]
    fn reciprocal_slope() {
        assert_eq!(
            d(Expr::n_div(3)),
            Expr::Div(Box::new(Expr::constant(-3)), Box::new(Expr::pow_n(2))),
        );
    }

    #[test]
    fn exponential_needs_positive_base() {
        assert_eq!(
            d(Expr::n_pow(2)),
            Expr::Mul(
                Box::new(Expr::n_pow(2)),
                Box::new(Expr::constant(2f64.ln())),
            ),
        );
        assert_eq!(
            Expr::n_pow(-2).differentiate(),
            Err(DerivativeError::NonPositiveBase(Number::int(-2))),
        );
    }

    #[test]
    fn trig_rules() {
        assert_eq!(d(Expr::Sin), Expr::Cos);
        assert_eq!(
            d(Expr::Cos),
            Expr::Mul(Box::new(Expr::constant(-1)), Box::new(Expr::Sin)),
        );
        assert_eq!(
            d(Expr::Tan),
            Expr::Add(
                Box::new(Expr::Pow(Box::new(Expr::Tan), Box::new(Expr::constant(2)))),
                Box::new(Expr::constant(1)),
            ),
        );
    }

    #[test]
    fn sum_and_product() {
        // d/dx (2x + 1) = 2
        let f = Expr::mult_n(2) + Expr::constant(1);
        assert_eq!(d(f), Expr::constant(2));

        // d/dx (x sin(x)) = sin(x) + x cos(x)
        let f = Expr::Mul(Box::new(Expr::identity()), Box::new(Expr::Sin));
        assert_eq!(
            d(f),
            Expr::Add(
                Box::new(Expr::Sin),
                Box::new(Expr::Mul(Box::new(Expr::Cos), Box::new(Expr::Identity))),
            ),
        );
    }

    #[test]
    fn chain_rule() {
        // d/dx sin(2x) = cos(2x) * 2
        let f = Expr::Sin.compose(Expr::mult_n(2));
        assert_eq!(
            d(f),
            Expr::Mul(
                Box::new(Expr::Cos.compose(Expr::mult_n(2))),
                Box::new(Expr::constant(2)),
            ),
        );
    }
}
