//! Parser for infix expressions in a single variable.
//!
//! The pipeline has three stages:
//!
//! 1. The [`tokenizer`] splits raw text into character-class tokens (numbers,
//!    names, operators, parentheses) using a generated lexer.
//! 2. The [`lexer`] rewrites the token stream into a sequence of [`Lexeme`]s,
//!    inserting the implicit multiplications of conventional math notation
//!    (`2x`, `2(x + 1)`, `50sin(x)`), desugaring unary minus into `-1 *`, and
//!    resolving `ln(...)` / `log2(...)` into a base-carrying `log` form.
//! 3. The [`parser`] runs the shunting-yard algorithm over the lexemes and
//!    folds the resulting postfix sequence into an [`Ast`].
//!
//! The produced [`Ast`] is deliberately dumb: it records the shape of the
//! input and nothing else. Evaluation, simplification and differentiation
//! live in `univar-compute`, which lowers the [`Ast`] into its own
//! self-simplifying expression type.
//!
//! ```
//! use univar_parser::{parse, Ast, BinOpKind};
//!
//! let ast = parse("2x + 1").unwrap();
//! let Ast::BinOp { kind, .. } = ast else { panic!() };
//! assert_eq!(kind, BinOpKind::Add);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod tokenizer;

pub use error::SyntaxError;
pub use lexer::{BinOpKind, Func, Lexeme, TrigKind};
pub use parser::{ast::Ast, parse};
