//! # Literal Syntax Nodes
//!
//! Values written directly in query text, e.g. the `42` in
//! `user(id: 42)`, reach scalars as [`Literal`] nodes rather than runtime
//! values. A scalar's literal parser looks only at the node's [`Kind`] and,
//! for leaf kinds, its raw source text.
//!
//! ## Submodules
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[literal]** - Literal nodes and their kind tags
//!
//! ## Raw text
//!
//! Int and Float nodes keep the digits exactly as written:
//!
//! ```text
//! 007        → Literal::Int("007")
//! -1.50e3    → Literal::Float("-1.50e3")
//! ```
//!
//! The scalar decides what the text means. `Int` reads `007` as 7, `ID`
//! keeps it as the string `"007"`.
pub mod literal;
pub mod tokens;

pub use literal::{Kind, Literal, ObjectField};
pub use tokens::Token;
