//! # Tiny AST Crate
//!
//! The two trees of the tiny compiler pipeline:
//!
//! ```text
//! (add 2 (subtract 4 2))  →  source::Node  →  target::Node  →  add(2, subtract(4, 2));
//! ```
//!
//! - [`source`] mirrors the s-expression input: a `Program` of nested
//!   `CallExpression`s whose leaves are number and string literals.
//! - [`target`] mirrors the emitted call syntax: top-level calls wrapped in
//!   `ExpressionStatement`s, callees as `Identifier`s.
//!
//! Both trees serialize with a `"type"` tag so their JSON reads like the
//! node shapes used throughout the pipeline documentation.
//!
//! ## Design Principles
//!
//! - **Tagged Unions**: Every node kind is an enum variant, dispatch is `match`
//! - **No Positions**: Nodes carry no span information
//! - **Owned Trees**: Each stage owns the tree it produced until it hands it on
//! - **Any Depth**: Dropping and serializing never recurse on the native stack

mod depth;
pub mod source;
pub mod target;

#[cfg(test)]
mod tests;
