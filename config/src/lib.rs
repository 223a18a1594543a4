//! # Config Crate
//!
//! Centralized configuration constants for the tiny compiler pipeline.
//! Output punctuation and recursion tuning live here so the tokenizer,
//! parser, traverser and code generator never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{OutputStyle, ARGUMENT_SEPARATOR, STATEMENT_TERMINATOR};
//!
//! let style = OutputStyle::default();
//! assert_eq!(style.argument_separator, ARGUMENT_SEPARATOR);
//! assert_eq!(style.statement_terminator, STATEMENT_TERMINATOR);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Immutable**: Configuration is passed by value, never stored globally

pub mod constants;
