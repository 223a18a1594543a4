//! Source-language AST produced by the parser.

use crate::depth;
use serde::{Deserialize, Serialize};
use std::{fmt, mem};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Node {
    Program(Program),
    CallExpression(CallExpression),
    NumberLiteral(NumberLiteral),
    StringLiteral(StringLiteral),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Program {
    #[serde(serialize_with = "depth::serialize_nodes")]
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallExpression {
    pub name: String,
    #[serde(serialize_with = "depth::serialize_nodes")]
    pub params: Vec<Node>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NumberLiteral {
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
}

/// Type tag of a source node, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Program,
    CallExpression,
    NumberLiteral,
    StringLiteral,
}

impl Node {
    pub fn program(body: Vec<Node>) -> Self {
        Node::Program(Program { body })
    }

    pub fn call(name: impl Into<String>, params: Vec<Node>) -> Self {
        Node::CallExpression(CallExpression { name: name.into(), params })
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
            Node::CallExpression(_) => NodeKind::CallExpression,
            Node::NumberLiteral(_) => NodeKind::NumberLiteral,
            Node::StringLiteral(_) => NodeKind::StringLiteral,
        }
    }

    pub fn is_call(&self) -> bool {
        matches!(self, Node::CallExpression(_))
    }
}

impl NodeKind {
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::CallExpression => "CallExpression",
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

// Trees are released through a worklist so nesting depth never reaches the
// native stack. A node's children are detached before the node itself drops.

impl Drop for Program {
    fn drop(&mut self) {
        release(mem::take(&mut self.body));
    }
}

impl Drop for CallExpression {
    fn drop(&mut self) {
        release(mem::take(&mut self.params));
    }
}

fn release(mut pending: Vec<Node>) {
    while let Some(mut node) = pending.pop() {
        match &mut node {
            Node::Program(program) => pending.append(&mut program.body),
            Node::CallExpression(call) => pending.append(&mut call.params),
            Node::NumberLiteral(_) | Node::StringLiteral(_) => {}
        }
    }
}
