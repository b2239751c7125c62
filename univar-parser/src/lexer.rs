//! Rewrites raw tokens into a stream of [`Lexeme`]s ready for parsing.
//!
//! This is where the notational conveniences of handwritten math get
//! desugared:
//!
//! - implicit multiplication: `2x`, `2(x + 1)`, `(x)(x)`, `202sin(x)` all gain
//!   a `*` between the juxtaposed values;
//! - unary minus: a `-` with no value to its left becomes `-1 *`;
//! - logarithms: `ln(...)` becomes `e log (...)`, and `log2(...)` becomes
//!   `2 log (...)`: the base travels through the stream as an ordinary number
//!   *before* the `log` lexeme, so the parser can treat `log` as a binary
//!   operation whose operands are the base and the argument.
//!
//! The output is still flat; [`parser`](crate::parser) gives it shape.

use crate::error::SyntaxError;
use crate::tokenizer::{tokenize_complete, Token, TokenKind};

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl BinOpKind {
    /// The binding power of the operator; higher binds tighter. Note that `/`
    /// binds tighter than `*` and `-` tighter than `+`, so `6 / 2 * 3` is
    /// `(6 / 2) * 3` read left-to-right but `3 * 6 / 2` is `3 * (6 / 2)`.
    pub fn precedence(self) -> u8 {
        match self {
            BinOpKind::Exp => 4,
            BinOpKind::Div => 3,
            BinOpKind::Mul => 2,
            BinOpKind::Sub => 1,
            BinOpKind::Add => 0,
        }
    }

    /// The source character for the operator.
    pub fn symbol(self) -> char {
        match self {
            BinOpKind::Add => '+',
            BinOpKind::Sub => '-',
            BinOpKind::Mul => '*',
            BinOpKind::Div => '/',
            BinOpKind::Exp => '^',
        }
    }
}

/// A trigonometric function name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigKind {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

impl TrigKind {
    fn from_name(name: &str) -> Option<TrigKind> {
        Some(match name {
            "sin" => TrigKind::Sin,
            "cos" => TrigKind::Cos,
            "tan" => TrigKind::Tan,
            "asin" => TrigKind::Asin,
            "acos" => TrigKind::Acos,
            "atan" => TrigKind::Atan,
            _ => return None,
        })
    }

    /// The source name of the function.
    pub fn name(self) -> &'static str {
        match self {
            TrigKind::Sin => "sin",
            TrigKind::Cos => "cos",
            TrigKind::Tan => "tan",
            TrigKind::Asin => "asin",
            TrigKind::Acos => "acos",
            TrigKind::Atan => "atan",
        }
    }
}

/// A named function. `Log` is binary: its base arrives as the [`Lexeme::Num`]
/// immediately preceding it in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Trig(TrigKind),
    Log,
}

/// One element of the rewritten stream fed to the shunting-yard parser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lexeme {
    Num(f64),
    Var(char),
    Op(BinOpKind),
    Open,
    Close,
    Func(Func),
}

/// Whether the stream so far ends in something that can act as the left
/// operand of a binary operator. This is also the trigger for implicit
/// multiplication.
fn is_value_like(out: &[Lexeme]) -> bool {
    matches!(
        out.last(),
        Some(Lexeme::Num(_) | Lexeme::Var(_) | Lexeme::Close)
    )
}

fn push_binary(out: &mut Vec<Lexeme>, op: BinOpKind) -> Result<(), SyntaxError> {
    if !is_value_like(out) {
        return Err(SyntaxError::MissingLeftOperand(op.symbol()));
    }
    out.push(Lexeme::Op(op));
    Ok(())
}

fn parse_number(lexeme: &str) -> Result<f64, SyntaxError> {
    lexeme
        .parse()
        .map_err(|_| SyntaxError::InvalidNumber(lexeme.to_owned()))
}

/// Scans the input into a [`Lexeme`] stream, applying the rewrite rules
/// described in the [module documentation](self).
pub fn scan(input: &str) -> Result<Vec<Lexeme>, SyntaxError> {
    let tokens: Vec<Token> = tokenize_complete(input)?
        .into_vec()
        .into_iter()
        .filter(|token| !token.is_whitespace())
        .collect();

    let mut out = Vec::with_capacity(tokens.len());
    let mut var: Option<char> = None;
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        match token.kind {
            TokenKind::Whitespace => {}
            TokenKind::Int | TokenKind::Float => {
                if matches!(out.last(), Some(Lexeme::Num(_))) {
                    // two numeric literals with no operator between them;
                    // report the full run of text they cover
                    let start = tokens[i - 1].span.start;
                    let end = token.span.end;
                    return Err(SyntaxError::InvalidNumber(input[start..end].to_owned()));
                }
                if is_value_like(&out) {
                    out.push(Lexeme::Op(BinOpKind::Mul));
                }
                out.push(Lexeme::Num(parse_number(token.lexeme)?));
            }
            TokenKind::Name => {
                let name = token.lexeme;
                let next_kind = tokens.get(i + 1).map(|token| token.kind);
                if let Some(kind) = TrigKind::from_name(name) {
                    if next_kind != Some(TokenKind::OpenParen) {
                        return Err(SyntaxError::ExpectedFunctionCall(name.to_owned()));
                    }
                    if is_value_like(&out) {
                        out.push(Lexeme::Op(BinOpKind::Mul));
                    }
                    out.push(Lexeme::Func(Func::Trig(kind)));
                } else if name == "ln" {
                    if next_kind != Some(TokenKind::OpenParen) {
                        return Err(SyntaxError::ExpectedFunctionCall(name.to_owned()));
                    }
                    if is_value_like(&out) {
                        out.push(Lexeme::Op(BinOpKind::Mul));
                    }
                    out.push(Lexeme::Num(std::f64::consts::E));
                    out.push(Lexeme::Func(Func::Log));
                } else if name == "log" {
                    if is_value_like(&out) {
                        out.push(Lexeme::Op(BinOpKind::Mul));
                    }
                    match (tokens.get(i + 1), tokens.get(i + 2)) {
                        (Some(base), Some(open))
                            if base.kind.is_number() && open.kind == TokenKind::OpenParen =>
                        {
                            out.push(Lexeme::Num(parse_number(base.lexeme)?));
                            out.push(Lexeme::Func(Func::Log));

                            // the base was consumed here, not as its own literal
                            i += 1;
                        }
                        _ if next_kind == Some(TokenKind::OpenParen) => {
                            // `log(x)` with no base; the arity check reports
                            // this once the tree is built
                            out.push(Lexeme::Func(Func::Log));
                        }
                        _ => return Err(SyntaxError::ExpectedFunctionCall(name.to_owned())),
                    }
                } else {
                    let mut chars = name.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => {
                            match var {
                                Some(first) if first != c => {
                                    return Err(SyntaxError::MultipleVariables {
                                        first,
                                        second: c,
                                    });
                                }
                                _ => var = Some(c),
                            }
                            if is_value_like(&out) {
                                out.push(Lexeme::Op(BinOpKind::Mul));
                            }
                            out.push(Lexeme::Var(c));
                        }
                        _ => return Err(SyntaxError::InvalidName(name.to_owned())),
                    }
                }
            }
            TokenKind::Sub => {
                if is_value_like(&out) {
                    out.push(Lexeme::Op(BinOpKind::Sub));
                } else {
                    // unary minus desugars to multiplication by -1
                    out.push(Lexeme::Num(-1.0));
                    out.push(Lexeme::Op(BinOpKind::Mul));
                }
            }
            TokenKind::Add => push_binary(&mut out, BinOpKind::Add)?,
            TokenKind::Mul => push_binary(&mut out, BinOpKind::Mul)?,
            TokenKind::Div => push_binary(&mut out, BinOpKind::Div)?,
            TokenKind::Exp => push_binary(&mut out, BinOpKind::Exp)?,
            TokenKind::OpenParen => {
                if is_value_like(&out) {
                    out.push(Lexeme::Op(BinOpKind::Mul));
                }
                out.push(Lexeme::Open);
            }
            TokenKind::CloseParen => out.push(Lexeme::Close),
        }

        i += 1;
    }

    if matches!(out.last(), Some(Lexeme::Op(_))) {
        return Err(SyntaxError::UnexpectedEnd);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use BinOpKind::*;
    use Lexeme::*;

    #[test]
    fn implicit_mul_number_variable() {
        assert_eq!(scan("50x"), Ok(vec![Num(50.0), Op(Mul), Var('x')]));
    }

    #[test]
    fn unary_minus() {
        assert_eq!(scan("-1.0"), Ok(vec![Num(-1.0), Op(Mul), Num(1.0)]));
    }

    #[test]
    fn unary_minus_after_binary_minus() {
        assert_eq!(
            scan("x - -1"),
            Ok(vec![Var('x'), Op(Sub), Num(-1.0), Op(Mul), Num(1.0)]),
        );
    }

    #[test]
    fn implicit_mul_before_paren() {
        assert_eq!(
            scan("2(x + 1)"),
            Ok(vec![Num(2.0), Op(Mul), Open, Var('x'), Op(Add), Num(1.0), Close]),
        );
    }

    #[test]
    fn implicit_mul_between_parens() {
        assert_eq!(
            scan("(2 + x)(2 - x)"),
            Ok(vec![
                Open,
                Num(2.0),
                Op(Add),
                Var('x'),
                Close,
                Op(Mul),
                Open,
                Num(2.0),
                Op(Sub),
                Var('x'),
                Close,
            ]),
        );
    }

    #[test]
    fn implicit_mul_before_function() {
        assert_eq!(
            scan("202sin(50x)"),
            Ok(vec![
                Num(202.0),
                Op(Mul),
                Func(super::Func::Trig(TrigKind::Sin)),
                Open,
                Num(50.0),
                Op(Mul),
                Var('x'),
                Close,
            ]),
        );
    }

    #[test]
    fn log_base_travels_before_log() {
        assert_eq!(
            scan("50^log2(x)"),
            Ok(vec![
                Num(50.0),
                Op(Exp),
                Num(2.0),
                Func(super::Func::Log),
                Open,
                Var('x'),
                Close,
            ]),
        );
    }

    #[test]
    fn ln_is_log_base_e() {
        assert_eq!(
            scan("ln(x)"),
            Ok(vec![
                Num(std::f64::consts::E),
                Func(super::Func::Log),
                Open,
                Var('x'),
                Close,
            ]),
        );
    }

    #[test]
    fn adjacent_numbers_are_rejected() {
        assert_eq!(
            scan("1.2.3"),
            Err(SyntaxError::InvalidNumber("1.2.3".to_owned())),
        );
    }

    #[test]
    fn second_variable_is_rejected() {
        assert_eq!(
            scan("x + y"),
            Err(SyntaxError::MultipleVariables {
                first: 'x',
                second: 'y',
            }),
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(scan("foo(x)"), Err(SyntaxError::InvalidName("foo".to_owned())));
    }

    #[test]
    fn operator_without_left_operand() {
        assert_eq!(scan("* x"), Err(SyntaxError::MissingLeftOperand('*')));
    }

    #[test]
    fn operator_without_right_operand() {
        assert_eq!(scan("x +"), Err(SyntaxError::UnexpectedEnd));
    }

    #[test]
    fn function_without_call() {
        assert_eq!(
            scan("sin + 1"),
            Err(SyntaxError::ExpectedFunctionCall("sin".to_owned())),
        );
    }
}
