//! Exact numeric constants for expression trees.
//!
//! Constants are kept as rationals for as long as the arithmetic stays exact,
//! falling back to floating-point when a result overflows `i64` or is not
//! rational in the first place (`e`, roots, and so on). This keeps repeated
//! folding from accumulating rounding error: `x / 3 * 3` folds back to `x`
//! exactly.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Greatest common divisor using the Euclidean algorithm.
fn gcd(mut a: i64, mut b: i64) -> i64 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Largest magnitude we promote a whole-valued `f64` to a rational at. Above
/// this, `f64` no longer distinguishes adjacent integers.
const MAX_EXACT_INT: f64 = 9.0e15;

/// A numeric constant: an exact rational, or a floating-point fallback.
///
/// `Rational(num, den)` is always in lowest terms with `den > 0`; the
/// constructors maintain the invariant, so matching on `Rational(n, 1)` is a
/// reliable integer test.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Rational(i64, i64),
    Float(f64),
}

impl Number {
    /// Creates an integer.
    pub fn int(n: i64) -> Number {
        Number::Rational(n, 1)
    }

    /// Creates a rational, normalizing the sign to the numerator and reducing
    /// by the GCD. A zero denominator becomes an infinite float.
    pub fn rational(num: i64, den: i64) -> Number {
        if den == 0 {
            return Number::Float(if num >= 0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            });
        }

        let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
        let g = gcd(num, den);
        Number::Rational(num / g, den / g)
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Rational(n, _) => *n == 0,
            Number::Float(f) => *f == 0.0,
        }
    }

    pub fn is_one(&self) -> bool {
        match self {
            Number::Rational(n, d) => *n == 1 && *d == 1,
            Number::Float(f) => *f == 1.0,
        }
    }

    pub fn is_neg_one(&self) -> bool {
        match self {
            Number::Rational(n, d) => *n == -1 && *d == 1,
            Number::Float(f) => *f == -1.0,
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Number::Rational(n, _) => *n < 0,
            Number::Float(f) => *f < 0.0,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Number::Rational(n, _) => *n > 0,
            Number::Float(f) => *f > 0.0,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Rational(_, 1))
    }

    /// Returns the value as an `i64` if it is an exact integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Number::Rational(n, 1) => Some(*n),
            _ => None,
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Rational(n, d) => *n as f64 / *d as f64,
            Number::Float(f) => *f,
        }
    }

    /// Raises `self` to the power `exp`, staying exact where possible.
    ///
    /// Returns `None` when the result is not a real number (`0` to a negative
    /// power, a negative base with a fractional exponent, or overflow past
    /// what `f64` can hold).
    pub fn checked_pow(&self, exp: &Number) -> Option<Number> {
        if let (Number::Rational(n, d), Some(e)) = (*self, exp.as_integer()) {
            // exact only for small exponents; larger ones overflow i64 for
            // any base other than 0 and ±1 anyway
            if e.unsigned_abs() <= 32 {
                if n == 0 && e < 0 {
                    return None;
                }
                let p = e.unsigned_abs() as u32;
                if let (Some(num), Some(den)) = (n.checked_pow(p), d.checked_pow(p)) {
                    return Some(if e < 0 {
                        Number::rational(den, num)
                    } else {
                        Number::rational(num, den)
                    });
                }
            }
        }

        let value = self.to_f64().powf(exp.to_f64());
        value.is_finite().then(|| Number::from(value))
    }
}

impl From<f64> for Number {
    /// Whole-valued finite floats become exact integers; everything else
    /// stays a float.
    fn from(f: f64) -> Number {
        if f.is_finite() && f.fract() == 0.0 && f.abs() < MAX_EXACT_INT {
            Number::int(f as i64)
        } else {
            Number::Float(f)
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Number {
        Number::int(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Number {
        Number::int(n as i64)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Rational(n1, d1), Number::Rational(n2, d2)) => n1 == n2 && d1 == d2,
            _ => self.to_f64() == other.to_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Rational(n1, d1), Number::Rational(n2, d2)) => {
                // denominators are positive, so cross-multiplying preserves
                // the ordering; i128 cannot overflow here
                (*n1 as i128 * *d2 as i128).partial_cmp(&(*n2 as i128 * *d1 as i128))
            }
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Rational(n, d) => Number::Rational(-n, d),
            Number::Float(f) => Number::Float(-f),
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        if let (Number::Rational(n1, d1), Number::Rational(n2, d2)) = (self, rhs) {
            // n1/d1 + n2/d2 = (n1*d2 + n2*d1) / (d1*d2)
            if let (Some(a), Some(b), Some(den)) =
                (n1.checked_mul(d2), n2.checked_mul(d1), d1.checked_mul(d2))
            {
                if let Some(num) = a.checked_add(b) {
                    return Number::rational(num, den);
                }
            }
        }
        Number::from(self.to_f64() + rhs.to_f64())
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        self + (-rhs)
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        if let (Number::Rational(n1, d1), Number::Rational(n2, d2)) = (self, rhs) {
            // cross-reduce before multiplying to keep the factors small
            let g1 = gcd(n1, d2);
            let g2 = gcd(n2, d1);
            if let (Some(num), Some(den)) =
                ((n1 / g1).checked_mul(n2 / g2), (d1 / g2).checked_mul(d2 / g1))
            {
                return Number::rational(num, den);
            }
        }
        Number::from(self.to_f64() * rhs.to_f64())
    }
}

impl Div for Number {
    type Output = Number;

    fn div(self, rhs: Number) -> Number {
        match rhs {
            Number::Rational(n, d) => self * Number::rational(d, n),
            Number::Float(f) => Number::from(self.to_f64() / f),
        }
    }
}

impl fmt::Display for Number {
    /// Integers render bare. Non-integer values render through `f64` so the
    /// output stays parseable as a single literal (`1/2` would read back as a
    /// division).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Rational(n, 1) => write!(f, "{n}"),
            Number::Rational(..) => write!(f, "{}", self.to_f64()),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}
