//! # Traverser
//!
//! Depth-first walk over a source AST. Children are visited in stored
//! order; a visitor's `enter_*` hook runs before a node's children and its
//! `exit_*` hook after them.
//!
//! Every node kind has an explicit rule in [`traverse`]. A `Program` is only
//! valid as the root; one found anywhere else is reported as
//! [`TraverseError::UnexpectedNode`] rather than walked as a leaf.

use crate::error::TraverseError;
use config::constants::{STACK_GROWTH_BYTES, STACK_RED_ZONE_BYTES};
use stacker::maybe_grow;
use tiny_ast::source::{CallExpression, Node, NodeKind, NumberLiteral, Program, StringLiteral};

// =============================================================================
// VISITOR
// =============================================================================

/// Per-node-kind hooks invoked by [`traverse`].
///
/// Every hook receives the node and its parent (`None` for the root) and
/// defaults to doing nothing. Returning an error stops the walk.
///
/// ## Example
///
/// ```rust
/// use tiny_ast::source::{CallExpression, Node};
/// use tiny_transform::{traverse, TraverseError, Visitor};
///
/// #[derive(Default)]
/// struct CallNames(Vec<String>);
///
/// impl Visitor for CallNames {
///     fn enter_call_expression(
///         &mut self,
///         call: &CallExpression,
///         _parent: Option<&Node>,
///     ) -> Result<(), TraverseError> {
///         self.0.push(call.name.clone());
///         Ok(())
///     }
/// }
///
/// let ast = Node::program(vec![Node::call("add", vec![Node::call("neg", vec![])])]);
/// let mut names = CallNames::default();
/// traverse(&ast, &mut names).unwrap();
/// assert_eq!(names.0, ["add", "neg"]);
/// ```
pub trait Visitor {
    fn enter_program(&mut self, _program: &Program, _parent: Option<&Node>) -> Result<(), TraverseError> {
        Ok(())
    }

    fn exit_program(&mut self, _program: &Program, _parent: Option<&Node>) -> Result<(), TraverseError> {
        Ok(())
    }

    fn enter_call_expression(
        &mut self,
        _call: &CallExpression,
        _parent: Option<&Node>,
    ) -> Result<(), TraverseError> {
        Ok(())
    }

    fn exit_call_expression(
        &mut self,
        _call: &CallExpression,
        _parent: Option<&Node>,
    ) -> Result<(), TraverseError> {
        Ok(())
    }

    fn enter_number_literal(
        &mut self,
        _literal: &NumberLiteral,
        _parent: Option<&Node>,
    ) -> Result<(), TraverseError> {
        Ok(())
    }

    fn exit_number_literal(
        &mut self,
        _literal: &NumberLiteral,
        _parent: Option<&Node>,
    ) -> Result<(), TraverseError> {
        Ok(())
    }

    fn enter_string_literal(
        &mut self,
        _literal: &StringLiteral,
        _parent: Option<&Node>,
    ) -> Result<(), TraverseError> {
        Ok(())
    }

    fn exit_string_literal(
        &mut self,
        _literal: &StringLiteral,
        _parent: Option<&Node>,
    ) -> Result<(), TraverseError> {
        Ok(())
    }
}

// =============================================================================
// TRAVERSAL
// =============================================================================

/// Walk `root` depth-first, dispatching to `visitor`.
pub fn traverse<V: Visitor + ?Sized>(root: &Node, visitor: &mut V) -> Result<(), TraverseError> {
    traverse_node(root, None, visitor)
}

fn traverse_array<V: Visitor + ?Sized>(
    nodes: &[Node],
    parent: &Node,
    visitor: &mut V,
) -> Result<(), TraverseError> {
    for node in nodes {
        traverse_node(node, Some(parent), visitor)?;
    }
    Ok(())
}

fn traverse_node<V: Visitor + ?Sized>(
    node: &Node,
    parent: Option<&Node>,
    visitor: &mut V,
) -> Result<(), TraverseError> {
    maybe_grow(STACK_RED_ZONE_BYTES, STACK_GROWTH_BYTES, || match node {
        Node::Program(program) => {
            if let Some(parent) = parent {
                return Err(TraverseError::UnexpectedNode {
                    kind: NodeKind::Program,
                    parent: parent.kind(),
                });
            }
            visitor.enter_program(program, parent)?;
            traverse_array(&program.body, node, visitor)?;
            visitor.exit_program(program, parent)
        }
        Node::CallExpression(call) => {
            visitor.enter_call_expression(call, parent)?;
            traverse_array(&call.params, node, visitor)?;
            visitor.exit_call_expression(call, parent)
        }
        Node::NumberLiteral(literal) => {
            visitor.enter_number_literal(literal, parent)?;
            visitor.exit_number_literal(literal, parent)
        }
        Node::StringLiteral(literal) => {
            visitor.enter_string_literal(literal, parent)?;
            visitor.exit_string_literal(literal, parent)
        }
    })
}

// =============================================================================
// TESTS
// =============================================================================
