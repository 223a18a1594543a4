//! # Tiny Parser
//!
//! Front half of the tiny compiler: turns s-expression source text into a
//! source-language AST.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → source::Node::Program
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::{parse, tokenize};
//!
//! let tokens = tokenize("(add 2 (subtract 4 2))").unwrap();
//! let program = parse(tokens).unwrap();
//! assert_eq!(program.kind(), tiny_ast::source::NodeKind::Program);
//! ```
//!
//! ## Pipeline Integration
//!
//! This crate is the first layer in the pipeline:
//!
//! ```text
//! tiny-parser → tiny-transform → tiny-codegen → tiny-compiler
//! ```

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export public API
pub use error::{LexError, ParseError};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use tiny_ast::source::Node;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Lex source text into an ordered token sequence.
///
/// Whitespace produces no tokens. The first unrecognized character aborts
/// lexing.
///
/// ## Example
///
/// ```rust
/// use tiny_parser::{tokenize, TokenKind};
///
/// let tokens = tokenize("(add 2 2)").unwrap();
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[1].kind, TokenKind::Name);
/// assert!(tokenize("(add 2 #)").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Parse a token sequence into a `Program` node.
///
/// ## Example
///
/// ```rust
/// use tiny_ast::source::Node;
/// use tiny_parser::{parse, tokenize};
///
/// let program = parse(tokenize("(add 1 2)").unwrap()).unwrap();
/// assert_eq!(
///     program,
///     Node::program(vec![Node::call("add", vec![Node::number("1"), Node::number("2")])])
/// );
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Node, ParseError> {
    Parser::new(tokens).parse()
}

// =============================================================================
// TESTS
// =============================================================================
