//! # Tiny Transform
//!
//! Walks a source AST and rewrites it into the target AST.
//!
//! ## Architecture
//!
//! ```text
//! source::Node → traverse(visitor) → Transformer → target::Node
//! ```
//!
//! - [`traverser`] is the generic depth-first walker: a [`Visitor`] gets an
//!   `enter` hook before a node's children and an `exit` hook after them.
//! - [`transformer`] is the one visitor the pipeline ships, building the
//!   target tree as the walk proceeds.
//!
//! ## Example
//!
//! ```rust
//! use tiny_ast::{source, target};
//! use tiny_transform::transform;
//!
//! let ast = source::Node::program(vec![source::Node::call("add", vec![source::Node::number("1")])]);
//! let out = transform(&ast).unwrap();
//! assert_eq!(
//!     out,
//!     target::Node::program(vec![target::Node::statement(target::Node::call(
//!         "add",
//!         vec![target::Node::number("1")],
//!     ))])
//! );
//! ```

pub mod error;
pub mod transformer;
pub mod traverser;

pub use error::TraverseError;
pub use transformer::transform;
pub use traverser::{traverse, Visitor};
