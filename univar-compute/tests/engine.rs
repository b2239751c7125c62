//! End-to-end checks: parse, evaluate, differentiate, print, and back.

use assert_float_eq::assert_float_absolute_eq;
use univar_compute::{parse, EvalError, Expr};

/// Checks that `f` matches the closed-form `expected` across the sampled
/// domain.
fn similar(f: &Expr, expected: impl Fn(f64) -> f64, domain: impl Iterator<Item = f64>) {
    for x in domain {
        let got = f
            .eval(x)
            .unwrap_or_else(|e| panic!("`{f}` failed at {x}: {e}"));
        assert_float_absolute_eq!(got, expected(x), 1e-9);
    }
}

/// Positive sample points clear of every shape's domain edges.
fn positive_domain() -> impl Iterator<Item = f64> {
    (1..=28).map(|i| 0.3 + i as f64 / 4.0)
}

/// Sample points inside (-1, 1) for the inverse trig functions.
fn unit_domain() -> impl Iterator<Item = f64> {
    (-9..=9).map(|i| i as f64 / 10.0)
}

/// Central-difference slope of `f` at `x`.
fn numeric_slope(f: &Expr, x: f64) -> f64 {
    let h = 1e-6;
    let hi = f.eval(x + h).unwrap();
    let lo = f.eval(x - h).unwrap();
    (hi - lo) / (2.0 * h)
}

/// Checks the symbolic derivative of `f` against finite differences.
fn check_slope(f: &Expr, domain: impl Iterator<Item = f64>) {
    let slope = f.differentiate().unwrap();
    for x in domain {
        assert_float_absolute_eq!(slope.eval(x).unwrap(), numeric_slope(f, x), 1e-2);
    }
}

#[test]
fn leaf_values_match_closed_forms() {
    similar(&Expr::add_n(3), |x| x + 3.0, positive_domain());
    similar(&Expr::n_sub(3), |x| 3.0 - x, positive_domain());
    similar(&Expr::mult_n(4), |x| 4.0 * x, positive_domain());
    similar(&Expr::div_n(4), |x| x / 4.0, positive_domain());
    similar(&Expr::n_div(3), |x| 3.0 / x, positive_domain());
    similar(&Expr::pow_n(3), |x| x.powi(3), positive_domain());
    similar(&Expr::n_pow(2), |x| 2f64.powf(x), positive_domain());
    similar(&Expr::log_base(2), |x| x.log2(), positive_domain());
    similar(&Expr::log_of(5), |x| 5f64.ln() / x.ln(), (2..=20).map(f64::from));
    similar(&Expr::floordiv_n(2), |x| (x / 2.0).floor(), positive_domain());
}

#[test]
fn leaf_derivatives_match_closed_forms() {
    let d = |f: Expr| f.differentiate().unwrap();
    similar(&d(Expr::add_n(3)), |_| 1.0, positive_domain());
    similar(&d(Expr::n_sub(3)), |_| -1.0, positive_domain());
    similar(&d(Expr::mult_n(4)), |_| 4.0, positive_domain());
    similar(&d(Expr::div_n(4)), |_| 0.25, positive_domain());
    similar(&d(Expr::n_div(3)), |x| -3.0 / (x * x), positive_domain());
    similar(&d(Expr::pow_n(3)), |x| 3.0 * x * x, positive_domain());
    similar(&d(Expr::n_pow(2)), |x| 2f64.powf(x) * 2f64.ln(), positive_domain());
    similar(
        &d(Expr::log_base(2)),
        |x| 1.0 / (x * 2f64.ln()),
        positive_domain(),
    );
    similar(
        &d(Expr::log_of(5)),
        |x| -(5f64.ln()) / (x * x.ln() * x.ln()),
        (2..=20).map(f64::from),
    );
    similar(&d(Expr::Sin), |x| x.cos(), positive_domain());
    similar(&d(Expr::Cos), |x| -x.sin(), positive_domain());
    similar(&d(Expr::Tan), |x| 1.0 + x.tan() * x.tan(), unit_domain());
    similar(&d(Expr::Asin), |x| 1.0 / (1.0 - x * x).sqrt(), unit_domain());
    similar(&d(Expr::Acos), |x| -1.0 / (1.0 - x * x).sqrt(), unit_domain());
    similar(&d(Expr::Atan), |x| 1.0 / (1.0 + x * x), positive_domain());
}

#[test]
fn parse_and_evaluate() {
    let f = parse("2x + 1").unwrap();
    assert_eq!(f.eval(3.0), Ok(7.0));

    let f = parse("3 + 4 * (2 - x)").unwrap();
    assert_eq!(f.eval(1.0), Ok(7.0));

    let f = parse("202sin(50x)").unwrap();
    similar(&f, |x| 202.0 * (50.0 * x).sin(), positive_domain());
}

#[test]
fn division_by_zero_surfaces_at_eval() {
    let f = parse("1/0").unwrap();
    assert_eq!(f.eval(123.0), Err(EvalError::DivisionByZero));

    let f = parse("x / (x - 2)").unwrap();
    assert_eq!(f.eval(4.0), Ok(2.0));
    assert_eq!(f.eval(2.0), Err(EvalError::DivisionByZero));
}

#[test]
fn combined_functions_feed_each_other() {
    // (x + 5) ^ (3x) at 1 is 6^3
    let f = Expr::add_n(5).pow(Expr::mult_n(3));
    assert_eq!(f.eval(1.0), Ok(216.0));

    // its slope there follows the generalized power rule:
    // f * (3 ln(x + 5) + 3x / (x + 5))
    let slope = f.differentiate().unwrap();
    let expected = 216.0 * (3.0 * 6f64.ln() + 0.5);
    assert_float_absolute_eq!(slope.eval(1.0).unwrap(), expected, 1e-9);
    assert_float_absolute_eq!(slope.eval(1.0).unwrap(), numeric_slope(&f, 1.0), 1e-2);

    // composing with a constant folds the whole tree
    let f = Expr::pow_n(2).compose(Expr::constant(3));
    assert_eq!(f, Expr::constant(9));
}

#[test]
fn printing_round_trips() {
    let inputs = [
        "2x + 1",
        "2(x + 1)",
        "sin(x) + cos(2x)",
        "2^log3(x)",
        "(x / 2) / x^2",
        "x ^ ln(x)",
    ];

    for input in inputs {
        let f = parse(input).unwrap();
        let first = f.differentiate().unwrap();
        let second = first.differentiate().unwrap();

        for g in [&f, &first, &second] {
            let reparsed = parse(&g.to_string())
                .unwrap_or_else(|e| panic!("`{g}` did not reparse: {e}"));
            for x in [0.7, 1.3, 2.1, 3.4] {
                match g.eval(x) {
                    Ok(v) => assert_float_absolute_eq!(reparsed.eval(x).unwrap(), v, 1e-9),
                    Err(e) => assert_eq!(reparsed.eval(x), Err(e)),
                }
            }
        }
    }
}

#[test]
fn derivatives_match_finite_differences() {
    check_slope(&parse("x^2 + 3x").unwrap(), positive_domain());
    check_slope(&parse("sin(x) + cos(2x)").unwrap(), positive_domain());
    check_slope(&parse("x ^ ln(x)").unwrap(), (4..=12).map(|i| i as f64 / 4.0));
}
