//! # Compile Errors
//!
//! Wraps the failure of whichever pipeline stage stopped the compile.

use thiserror::Error;
use tiny_codegen::GenError;
use tiny_parser::{LexError, ParseError};
use tiny_transform::TraverseError;

/// The first error raised by a pipeline stage, unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Input character matches no token class.
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    /// Tokens violate the call-expression grammar.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Malformed source AST reached the traverser.
    #[error("traverse error: {0}")]
    Traverse(#[from] TraverseError),

    /// Malformed target AST reached the code generator.
    #[error("codegen error: {0}")]
    Gen(#[from] GenError),
}

// =============================================================================
// TESTS
// =============================================================================
