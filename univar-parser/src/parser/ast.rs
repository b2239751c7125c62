use crate::lexer::{BinOpKind, TrigKind};

/// The parse tree of one expression.
///
/// This records the shape of the input and nothing more; no simplification
/// happens at this level. `Log` is kept distinct from [`Ast::BinOp`] because
/// its left operand is a *base*, which downstream consumers constrain in ways
/// ordinary operands are not (it must reduce to a positive constant).
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    /// A numeric literal.
    Num(f64),

    /// The sole variable of the expression.
    Var(char),

    /// A binary operation.
    BinOp {
        kind: BinOpKind,
        lhs: Box<Ast>,
        rhs: Box<Ast>,
    },

    /// `log` of `arg` in the given `base`. `ln(v)` parses as base `e`.
    Log { base: Box<Ast>, arg: Box<Ast> },

    /// A trigonometric function applied to `arg`.
    Trig { kind: TrigKind, arg: Box<Ast> },
}
