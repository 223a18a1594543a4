//! Target-language AST produced by the transformer and rendered by the
//! code generator.
//!
//! Unlike the source tree, a call's name is a typed [`Identifier`] node and
//! calls at the top of a program are wrapped in an
//! [`Node::ExpressionStatement`].

use crate::depth;
use serde::{Deserialize, Serialize};
use std::{fmt, mem};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Node {
    Program(Program),
    ExpressionStatement(ExpressionStatement),
    CallExpression(CallExpression),
    Identifier(Identifier),
    NumberLiteral(NumberLiteral),
    StringLiteral(StringLiteral),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Program {
    #[serde(serialize_with = "depth::serialize_nodes")]
    pub body: Vec<Node>,
}

/// A call evaluated for its effect at the top level of a program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpressionStatement {
    #[serde(serialize_with = "depth::serialize_boxed")]
    pub expression: Box<Node>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallExpression {
    pub callee: Identifier,
    #[serde(serialize_with = "depth::serialize_nodes")]
    pub arguments: Vec<Node>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NumberLiteral {
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
}

/// Type tag of a target node, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Program,
    ExpressionStatement,
    CallExpression,
    Identifier,
    NumberLiteral,
    StringLiteral,
}

impl Node {
    pub fn program(body: Vec<Node>) -> Self {
        Node::Program(Program { body })
    }

    /// Wraps `expression` in an expression statement.
    pub fn statement(expression: Node) -> Self {
        Node::ExpressionStatement(ExpressionStatement {
            expression: Box::new(expression),
        })
    }

    pub fn call(callee: impl Into<String>, arguments: Vec<Node>) -> Self {
        Node::CallExpression(CallExpression {
            callee: Identifier::new(callee),
            arguments,
        })
    }

    pub fn number(value: impl Into<String>) -> Self {
        Node::NumberLiteral(NumberLiteral { value: value.into() })
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::StringLiteral(StringLiteral { value: value.into() })
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Program(_) => NodeKind::Program,
            Node::ExpressionStatement(_) => NodeKind::ExpressionStatement,
            Node::CallExpression(_) => NodeKind::CallExpression,
            Node::Identifier(_) => NodeKind::Identifier,
            Node::NumberLiteral(_) => NodeKind::NumberLiteral,
            Node::StringLiteral(_) => NodeKind::StringLiteral,
        }
    }
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl NodeKind {
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::Identifier => "Identifier",
            NodeKind::NumberLiteral => "NumberLiteral",
            NodeKind::StringLiteral => "StringLiteral",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// DROP
// =============================================================================

// Same worklist release as the source tree. A detached statement leaves an
// empty identifier behind, which owns no allocation.

impl Drop for Program {
    fn drop(&mut self) {
        release(mem::take(&mut self.body));
    }
}

impl Drop for ExpressionStatement {
    fn drop(&mut self) {
        let expression = detach(&mut self.expression);
        if !matches!(
            expression,
            Node::Identifier(_) | Node::NumberLiteral(_) | Node::StringLiteral(_)
        ) {
            release(vec![expression]);
        }
    }
}

impl Drop for CallExpression {
    fn drop(&mut self) {
        release(mem::take(&mut self.arguments));
    }
}

fn detach(expression: &mut Node) -> Node {
    mem::replace(expression, Node::Identifier(Identifier { name: String::new() }))
}

fn release(mut pending: Vec<Node>) {
    while let Some(mut node) = pending.pop() {
        match &mut node {
            Node::Program(program) => pending.append(&mut program.body),
            Node::ExpressionStatement(statement) => pending.push(detach(&mut statement.expression)),
            Node::CallExpression(call) => pending.append(&mut call.arguments),
            Node::Identifier(_) | Node::NumberLiteral(_) | Node::StringLiteral(_) => {}
        }
    }
}
