//! # Tokens
//!
//! Token types for the s-expression lexer. Tokens carry no position
//! metadata, only their kind and text.
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::lexer::{Token, TokenKind};
//!
//! let token = Token::new(TokenKind::Number, "10");
//! assert_eq!(token.kind, TokenKind::Number);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
///
/// `value` holds the token text: the paren character, the digit run, the
/// name, or the string contents without its quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token type.
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// Token text.
    pub value: String,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Create a paren token for `(` or `)`.
    pub fn paren(c: char) -> Self {
        Self::new(TokenKind::Paren, c.to_string())
    }

    /// Check if token is `(`.
    pub fn is_open_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.value == "("
    }

    /// Check if token is `)`.
    pub fn is_close_paren(&self) -> bool {
        self.kind == TokenKind::Paren && self.value == ")"
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// `(` or `)`
    Paren,
    /// Unsigned digit run like `42`
    Number,
    /// Double-quoted text like `"foo"`
    String,
    /// Letter run like `add`
    Name,
}

impl TokenKind {
    /// Lowercase name for error messages.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Paren => "paren",
            Self::Number => "number",
            Self::String => "string",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

// =============================================================================
// TESTS
// =============================================================================
