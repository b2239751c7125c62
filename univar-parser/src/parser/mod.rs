//! Shunting-yard parsing of the [`Lexeme`] stream into an [`Ast`].

pub mod ast;

use crate::error::SyntaxError;
use crate::lexer::{scan, BinOpKind, Func, Lexeme};
use ast::Ast;

/// Parses the input into an [`Ast`].
///
/// ```
/// use univar_parser::{parse, Ast, BinOpKind};
///
/// let ast = parse("3x^2").unwrap();
/// let Ast::BinOp { kind: BinOpKind::Mul, .. } = ast else { panic!() };
/// ```
pub fn parse(input: &str) -> Result<Ast, SyntaxError> {
    build_tree(shunting_yard(scan(input)?)?)
}

/// Reorders an infix lexeme stream into postfix.
///
/// Operators are compared by [`BinOpKind::precedence`]; every operator is
/// left-associative except `^`, which never pops an equal-precedence `^` off
/// the stack and so associates to the right. Functions wait on the operator
/// stack until the `)` closing their argument pops them.
pub fn shunting_yard(lexemes: Vec<Lexeme>) -> Result<Vec<Lexeme>, SyntaxError> {
    let mut out = Vec::with_capacity(lexemes.len());
    let mut operators: Vec<Lexeme> = Vec::new();

    for lexeme in lexemes {
        match lexeme {
            Lexeme::Num(_) | Lexeme::Var(_) => out.push(lexeme),
            Lexeme::Func(_) | Lexeme::Open => operators.push(lexeme),
            Lexeme::Op(op) => {
                while let Some(&Lexeme::Op(top)) = operators.last() {
                    let tighter = top.precedence() > op.precedence()
                        || (top.precedence() == op.precedence() && op != BinOpKind::Exp);
                    if !tighter {
                        break;
                    }
                    out.push(Lexeme::Op(top));
                    operators.pop();
                }
                operators.push(lexeme);
            }
            Lexeme::Close => {
                loop {
                    match operators.pop() {
                        Some(Lexeme::Open) => break,
                        Some(popped) => out.push(popped),
                        None => return Err(SyntaxError::UnmatchedCloseParen),
                    }
                }
                if let Some(Lexeme::Func(func)) = operators.last().copied() {
                    // the `)` also closes the function call wrapping it
                    operators.pop();
                    out.push(Lexeme::Func(func));
                }
            }
        }
    }

    while let Some(popped) = operators.pop() {
        if popped == Lexeme::Open {
            return Err(SyntaxError::UnmatchedOpenParen);
        }
        out.push(popped);
    }

    Ok(out)
}

/// Folds a postfix lexeme stream into a tree.
fn build_tree(postfix: Vec<Lexeme>) -> Result<Ast, SyntaxError> {
    let mut operands: Vec<Ast> = Vec::new();

    for lexeme in postfix {
        match lexeme {
            Lexeme::Num(n) => operands.push(Ast::Num(n)),
            Lexeme::Var(c) => operands.push(Ast::Var(c)),
            Lexeme::Op(kind) => {
                let (rhs, lhs) = match (operands.pop(), operands.pop()) {
                    (Some(rhs), Some(lhs)) => (rhs, lhs),
                    _ => return Err(SyntaxError::MissingOperands(op_name(kind))),
                };
                operands.push(Ast::BinOp {
                    kind,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                });
            }
            Lexeme::Func(Func::Log) => {
                let (arg, base) = match (operands.pop(), operands.pop()) {
                    (Some(arg), Some(base)) => (arg, base),
                    _ => return Err(SyntaxError::MissingOperands("log")),
                };
                operands.push(Ast::Log {
                    base: Box::new(base),
                    arg: Box::new(arg),
                });
            }
            Lexeme::Func(Func::Trig(kind)) => {
                let arg = operands
                    .pop()
                    .ok_or(SyntaxError::MissingOperands(kind.name()))?;
                operands.push(Ast::Trig {
                    kind,
                    arg: Box::new(arg),
                });
            }
            Lexeme::Open | Lexeme::Close => {
                // parentheses never survive shunting yard
                return Err(SyntaxError::UnmatchedOpenParen);
            }
        }
    }

    let tree = operands.pop().ok_or(SyntaxError::EmptyExpression)?;
    if !operands.is_empty() {
        return Err(SyntaxError::DanglingOperands);
    }
    Ok(tree)
}

fn op_name(kind: BinOpKind) -> &'static str {
    match kind {
        BinOpKind::Add => "+",
        BinOpKind::Sub => "-",
        BinOpKind::Mul => "*",
        BinOpKind::Div => "/",
        BinOpKind::Exp => "^",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TrigKind;
    use pretty_assertions::assert_eq;
    use BinOpKind::*;
    use Lexeme::{Num, Var};

    fn postfix(input: &str) -> Vec<Lexeme> {
        shunting_yard(scan(input).unwrap()).unwrap()
    }

    #[test]
    fn linear_expr() {
        assert_eq!(
            postfix("2x + 1"),
            vec![
                Num(2.0),
                Var('x'),
                Lexeme::Op(Mul),
                Num(1.0),
                Lexeme::Op(Add),
            ],
        );
    }

    #[test]
    fn exponent_binds_tighter_than_mul() {
        assert_eq!(
            postfix("3x^2"),
            vec![
                Num(3.0),
                Var('x'),
                Num(2.0),
                Lexeme::Op(Exp),
                Lexeme::Op(Mul),
            ],
        );
    }

    #[test]
    fn parens_override_precedence() {
        assert_eq!(
            postfix("(3x)^2"),
            vec![
                Num(3.0),
                Var('x'),
                Lexeme::Op(Mul),
                Num(2.0),
                Lexeme::Op(Exp),
            ],
        );
    }

    #[test]
    fn mixed_precedence_with_parens() {
        assert_eq!(
            postfix("3 + 4 * (2 - 1)"),
            vec![
                Num(3.0),
                Num(4.0),
                Num(2.0),
                Num(1.0),
                Lexeme::Op(Sub),
                Lexeme::Op(Mul),
                Lexeme::Op(Add),
            ],
        );
    }

    #[test]
    fn function_waits_for_close_paren() {
        assert_eq!(
            postfix("50sin(202x)"),
            vec![
                Num(50.0),
                Num(202.0),
                Var('x'),
                Lexeme::Op(Mul),
                Lexeme::Func(Func::Trig(TrigKind::Sin)),
                Lexeme::Op(Mul),
            ],
        );
    }

    #[test]
    fn exponent_is_right_associative() {
        assert_eq!(
            postfix("x^2^3"),
            vec![
                Var('x'),
                Num(2.0),
                Num(3.0),
                Lexeme::Op(Exp),
                Lexeme::Op(Exp),
            ],
        );
    }

    #[test]
    fn builds_binop_tree() {
        assert_eq!(
            parse("2x + 1"),
            Ok(Ast::BinOp {
                kind: Add,
                lhs: Box::new(Ast::BinOp {
                    kind: Mul,
                    lhs: Box::new(Ast::Num(2.0)),
                    rhs: Box::new(Ast::Var('x')),
                }),
                rhs: Box::new(Ast::Num(1.0)),
            }),
        );
    }

    #[test]
    fn builds_log_tree_with_base_first() {
        assert_eq!(
            parse("log2(x)"),
            Ok(Ast::Log {
                base: Box::new(Ast::Num(2.0)),
                arg: Box::new(Ast::Var('x')),
            }),
        );
    }

    #[test]
    fn unmatched_parens() {
        assert_eq!(parse("2 * (x + 1"), Err(SyntaxError::UnmatchedOpenParen));
        assert_eq!(parse("2 * x + 1)"), Err(SyntaxError::UnmatchedCloseParen));
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse(""), Err(SyntaxError::EmptyExpression));
        assert_eq!(parse("   "), Err(SyntaxError::EmptyExpression));
    }

    #[test]
    fn log_without_base_is_an_arity_error() {
        assert_eq!(parse("log(x)"), Err(SyntaxError::MissingOperands("log")));
    }
}
