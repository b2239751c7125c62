//! Self-simplifying expression trees.
//!
//! [`expr`] defines the tree and the normalizing leaf constructors;
//! [`simplify`] the pairwise rewrite rules behind the arithmetic operators;
//! [`eval`], [`derivative`] and [`fmt`] the operations on a finished tree;
//! and [`lower`] the bridge from `univar-parser`'s parse trees.

pub mod derivative;
pub mod eval;
pub mod expr;
pub mod fmt;
pub mod lower;
pub mod simplify;

pub use expr::Expr;
pub use lower::parse;
