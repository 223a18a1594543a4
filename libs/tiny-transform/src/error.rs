//! # Traversal Errors
//!
//! Structural faults between the stage that built a tree and the stage
//! walking it. These indicate a malformed AST, not bad user input.

use thiserror::Error;
use tiny_ast::source::NodeKind;

/// Errors that can occur while traversing or transforming a source AST.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraverseError {
    /// Node kind with no traversal rule in this position.
    #[error("no traversal rule for {kind} inside {parent}")]
    UnexpectedNode { kind: NodeKind, parent: NodeKind },

    /// Transformed node has no enclosing output slot to append into.
    #[error("{kind} has no output slot; traversal must start at a Program")]
    MissingSlot { kind: NodeKind },
}

// =============================================================================
// TESTS
// =============================================================================
