//! # Front-end Errors
//!
//! Error types raised by the lexer and parser. Each carries enough detail
//! (character, token, index) to diagnose the input without re-running.

use crate::lexer::Token;
use thiserror::Error;

// =============================================================================
// LEX ERROR
// =============================================================================

/// Failure to split source text into tokens.
///
/// Positions are zero-based character indices into the source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Character that matches none of the token classes.
    #[error("unrecognized character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    /// String literal with no closing quote before end of input.
    #[error("unterminated string literal starting at position {position}")]
    UnterminatedString { position: usize },
}

// =============================================================================
// PARSE ERROR
// =============================================================================

/// Token stream that violates the call-expression grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token of the wrong kind.
    ///
    /// `index` is the token's position in the token sequence.
    #[error("unexpected {} token '{}' at index {}, expected {}", .found.kind, .found.value, .index, .expected)]
    UnexpectedToken {
        found: Token,
        index: usize,
        expected: &'static str,
    },

    /// Tokens ran out before the grammar was satisfied.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
}

// =============================================================================
// TESTS
// =============================================================================
