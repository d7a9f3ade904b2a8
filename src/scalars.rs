//! The built-in scalar definitions.
//!
//! Each submodule exposes the same shape:
//!
//! - `coerce` - typed conversion from a runtime [`Value`](crate::Value)
//! - `serialize` / `parse_value` - the output and input directions, as
//!   [`Value`](crate::Value) in and out
//! - `parse_literal` - typed reading of a [`Literal`](crate::ast::Literal),
//!   `None` when the node's kind does not fit
//! - `DESCRIPTION` - schema description text
//!
//! The directions currently share one rule per scalar; they are kept as
//! separate entry points because custom scalars routinely diverge.
pub mod boolean;
pub mod float;
pub mod id;
pub mod int;
pub mod string;
