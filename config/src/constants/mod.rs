//! Centralized configuration values shared across the tiny compiler pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// RENDERING CONSTANTS
// =============================================================================

/// Text placed between rendered top-level statements.
///
/// # Examples
/// ```
/// use config::constants::STATEMENT_SEPARATOR;
/// assert_eq!(STATEMENT_SEPARATOR, "\n");
/// ```
pub const STATEMENT_SEPARATOR: &str = "\n";

/// Text placed between rendered call arguments.
///
/// # Examples
/// ```
/// use config::constants::ARGUMENT_SEPARATOR;
/// assert_eq!(["1", "2"].join(ARGUMENT_SEPARATOR), "1, 2");
/// ```
pub const ARGUMENT_SEPARATOR: &str = ", ";

/// Text appended after an expression statement.
pub const STATEMENT_TERMINATOR: &str = ";";

/// Delimiter around string literals, in both the source and target language.
///
/// # Examples
/// ```
/// use config::constants::STRING_QUOTE;
/// assert_eq!(STRING_QUOTE, '"');
/// ```
pub const STRING_QUOTE: char = '"';

// =============================================================================
// RECURSION CONSTANTS
// =============================================================================

/// Remaining stack below which recursive stages allocate a new segment
/// through the `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::{STACK_GROWTH_BYTES, STACK_RED_ZONE_BYTES};
/// assert!(STACK_RED_ZONE_BYTES < STACK_GROWTH_BYTES);
/// ```
pub const STACK_RED_ZONE_BYTES: usize = 64 * 1024;

/// Size of each stack segment allocated once the red zone is reached.
pub const STACK_GROWTH_BYTES: usize = 1024 * 1024;

// =============================================================================
// OUTPUT STYLE
// =============================================================================

/// Immutable snapshot of the punctuation used by the code generator.
///
/// The default reproduces the canonical target syntax, `add(2, subtract(4, 2));`.
///
/// # Examples
/// ```
/// use config::constants::OutputStyle;
/// let style = OutputStyle::default();
/// assert_eq!(style.statement_separator, "\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStyle {
    /// Joins rendered top-level statements.
    pub statement_separator: &'static str,
    /// Joins rendered call arguments.
    pub argument_separator: &'static str,
    /// Terminates each expression statement.
    pub statement_terminator: &'static str,
}

impl OutputStyle {
    /// Builds a style, rejecting punctuation that would collide with the
    /// call syntax itself (parentheses or string quotes).
    ///
    /// # Examples
    /// ```
    /// use config::constants::OutputStyle;
    /// let style = OutputStyle::new(" ", ",", ";").expect("valid style");
    /// assert_eq!(style.argument_separator, ",");
    /// assert!(OutputStyle::new("\n", "(", ";").is_err());
    /// ```
    pub fn new(
        statement_separator: &'static str,
        argument_separator: &'static str,
        statement_terminator: &'static str,
    ) -> Result<Self, ConfigError> {
        for value in [statement_separator, argument_separator, statement_terminator] {
            if value.contains(['(', ')', STRING_QUOTE]) {
                return Err(ConfigError::ReservedPunctuation(value));
            }
        }
        if argument_separator.is_empty() {
            return Err(ConfigError::EmptyArgumentSeparator);
        }
        Ok(Self {
            statement_separator,
            argument_separator,
            statement_terminator,
        })
    }
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            statement_separator: STATEMENT_SEPARATOR,
            argument_separator: ARGUMENT_SEPARATOR,
            statement_terminator: STATEMENT_TERMINATOR,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when punctuation contains a parenthesis or a string quote.
    ReservedPunctuation(&'static str),
    /// Raised when arguments would be rendered with nothing between them.
    EmptyArgumentSeparator,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ReservedPunctuation(value) => {
                write!(f, "punctuation {value:?} contains a reserved character")
            }
            ConfigError::EmptyArgumentSeparator => {
                write!(f, "argument_separator must not be empty")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
