//! # Tiny Codegen
//!
//! Last stage of the pipeline: renders a target AST as text.
//!
//! | node | output |
//! |---|---|
//! | `Program` | statements joined by the statement separator |
//! | `ExpressionStatement` | expression + terminator |
//! | `CallExpression` | `callee(arg, arg)` |
//! | `Identifier` / `NumberLiteral` | verbatim |
//! | `StringLiteral` | `"value"`, no escaping |
//!
//! ## Example
//!
//! ```rust
//! use config::constants::OutputStyle;
//! use tiny_ast::target::Node;
//! use tiny_codegen::generate;
//!
//! let ast = Node::program(vec![Node::statement(Node::call(
//!     "add",
//!     vec![Node::number("2"), Node::call("subtract", vec![Node::number("4"), Node::number("2")])],
//! ))]);
//! assert_eq!(generate(&ast, &OutputStyle::default()).unwrap(), "add(2, subtract(4, 2));");
//! ```

pub mod error;
mod generator;

pub use error::GenError;
pub use generator::generate;
