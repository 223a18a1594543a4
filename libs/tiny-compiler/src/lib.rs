//! # Tiny Compiler
//!
//! Compiles LISP-like call syntax into C-like call syntax.
//!
//! ```text
//! (add 2 (subtract 4 2))   →   add(2, subtract(4, 2));
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! tokenize → parse → transform → generate
//! ```
//!
//! Stages run in strict sequence. The first failing stage ends the compile
//! and its error is returned inside [`CompileError`]; no partial output is
//! produced. Every call works only on data it owns, so independent compiles
//! may run on separate threads.
//!
//! ## Example
//!
//! ```rust
//! use tiny_compiler::compile;
//!
//! assert_eq!(compile("(add 2 (subtract 4 2))").unwrap(), "add(2, subtract(4, 2));");
//! assert!(compile("(add 1 2").is_err());
//! ```

pub mod error;

pub use config::constants::OutputStyle;
pub use error::CompileError;
pub use tiny_ast::{source, target};
pub use tiny_codegen::{generate, GenError};
pub use tiny_parser::{parse, tokenize, LexError, ParseError, Token, TokenKind};
pub use tiny_transform::{transform, traverse, TraverseError, Visitor};

use log::debug;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compile `source` with the default output style.
pub fn compile(source: &str) -> Result<String, CompileError> {
    compile_with(source, &OutputStyle::default())
}

/// Compile `source`, rendering with `style`.
///
/// ## Example
///
/// ```rust
/// use tiny_compiler::{compile_with, OutputStyle};
///
/// let style = OutputStyle::new(" ", ",", ";").unwrap();
/// assert_eq!(compile_with("(a 1 2)(b)", &style).unwrap(), "a(1,2); b();");
/// ```
pub fn compile_with(source: &str, style: &OutputStyle) -> Result<String, CompileError> {
    debug!("compiling {} bytes", source.len());

    let tokens = tokenize(source)?;
    let ast = parse(tokens)?;
    let target = transform(&ast)?;
    let output = generate(&target, style)?;

    Ok(output)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_simple() {
        assert_eq!(compile("(add 2 2)").unwrap(), "add(2, 2);");
    }

    #[test]
    fn test_compile_stage_errors_keep_their_variant() {
        assert!(matches!(compile("(add 2 #)"), Err(CompileError::Lex(_))));
        assert!(matches!(compile("(add 2"), Err(CompileError::Parse(_))));
    }

    #[test]
    fn test_compile_empty_source() {
        assert_eq!(compile("").unwrap(), "");
    }
}
