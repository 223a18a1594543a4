//! # Transformer
//!
//! Rewrites a source `Program` into a target `Program` in one traversal.
//!
//! Every node appends its rewritten form into an output slot owned by its
//! nearest enclosing `Program` or `CallExpression`. Slots live on an
//! explicit stack beside the walk rather than on the source nodes, so the
//! source tree is only ever borrowed.
//!
//! | source | target |
//! |---|---|
//! | top-level `CallExpression` | `ExpressionStatement(CallExpression)` |
//! | nested `CallExpression` | `CallExpression` |
//! | `name` | `callee: Identifier` |
//! | `NumberLiteral` / `StringLiteral` | same leaf |

use crate::error::TraverseError;
use crate::traverser::{traverse, Visitor};
use log::{debug, trace};
use tiny_ast::source::{self, NodeKind};
use tiny_ast::target;

/// Build the target AST for a source `Program`.
///
/// Fails with [`TraverseError::MissingSlot`] when `ast` is not rooted at a
/// `Program`.
pub fn transform(ast: &source::Node) -> Result<target::Node, TraverseError> {
    let mut transformer = Transformer::default();
    traverse(ast, &mut transformer)?;

    let body = transformer
        .slots
        .pop()
        .ok_or(TraverseError::MissingSlot { kind: ast.kind() })?;

    debug!("transformed {} top-level statements", body.len());
    Ok(target::Node::program(body))
}

/// Visitor holding one output slot per open `Program` or `CallExpression`.
#[derive(Default)]
struct Transformer {
    slots: Vec<Vec<target::Node>>,
}

impl Transformer {
    /// Output slot of the innermost open container.
    fn slot(&mut self, kind: NodeKind) -> Result<&mut Vec<target::Node>, TraverseError> {
        self.slots.last_mut().ok_or(TraverseError::MissingSlot { kind })
    }
}

impl Visitor for Transformer {
    fn enter_program(
        &mut self,
        _program: &source::Program,
        _parent: Option<&source::Node>,
    ) -> Result<(), TraverseError> {
        self.slots.push(Vec::new());
        Ok(())
    }

    fn enter_call_expression(
        &mut self,
        _call: &source::CallExpression,
        _parent: Option<&source::Node>,
    ) -> Result<(), TraverseError> {
        // Collects this call's arguments.
        self.slots.push(Vec::new());
        Ok(())
    }

    fn exit_call_expression(
        &mut self,
        call: &source::CallExpression,
        parent: Option<&source::Node>,
    ) -> Result<(), TraverseError> {
        let arguments = self
            .slots
            .pop()
            .ok_or(TraverseError::MissingSlot { kind: NodeKind::CallExpression })?;

        trace!("call {} with {} arguments", call.name, arguments.len());
        let expression = target::Node::CallExpression(target::CallExpression {
            callee: target::Identifier::new(call.name.as_str()),
            arguments,
        });

        let node = match parent {
            Some(parent) if parent.is_call() => expression,
            _ => target::Node::statement(expression),
        };
        self.slot(NodeKind::CallExpression)?.push(node);
        Ok(())
    }

    fn enter_number_literal(
        &mut self,
        literal: &source::NumberLiteral,
        _parent: Option<&source::Node>,
    ) -> Result<(), TraverseError> {
        self.slot(NodeKind::NumberLiteral)?
            .push(target::Node::number(literal.value.as_str()));
        Ok(())
    }

    fn enter_string_literal(
        &mut self,
        literal: &source::StringLiteral,
        _parent: Option<&source::Node>,
    ) -> Result<(), TraverseError> {
        self.slot(NodeKind::StringLiteral)?
            .push(target::Node::string(literal.value.as_str()));
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
