use crate::error::GenError;
use config::constants::{OutputStyle, STACK_GROWTH_BYTES, STACK_RED_ZONE_BYTES, STRING_QUOTE};
use log::debug;
use stacker::maybe_grow;
use tiny_ast::target::{CallExpression, Node, NodeKind};

/// Render `ast` as text using `style` punctuation.
///
/// A `Program` is only rendered at the root; a nested one is
/// [`GenError::UnexpectedNode`].
pub fn generate(ast: &Node, style: &OutputStyle) -> Result<String, GenError> {
    let mut code = String::new();
    match ast {
        Node::Program(program) => {
            for (i, node) in program.body.iter().enumerate() {
                if i > 0 {
                    code.push_str(style.statement_separator);
                }
                generate_node(node, style, &mut code)?;
            }
        }
        node => generate_node(node, style, &mut code)?,
    }
    debug!("generated {} bytes", code.len());
    Ok(code)
}

/// Append the rendering of `node` to `out`.
fn generate_node(node: &Node, style: &OutputStyle, out: &mut String) -> Result<(), GenError> {
    maybe_grow(STACK_RED_ZONE_BYTES, STACK_GROWTH_BYTES, || {
        match node {
            Node::Program(_) => return Err(GenError::UnexpectedNode { kind: NodeKind::Program }),
            Node::ExpressionStatement(statement) => {
                generate_node(&statement.expression, style, out)?;
                out.push_str(style.statement_terminator);
            }
            Node::CallExpression(call) => generate_call(call, style, out)?,
            Node::Identifier(identifier) => out.push_str(&identifier.name),
            Node::NumberLiteral(literal) => out.push_str(&literal.value),
            Node::StringLiteral(literal) => {
                out.push(STRING_QUOTE);
                out.push_str(&literal.value);
                out.push(STRING_QUOTE);
            }
        }
        Ok(())
    })
}

fn generate_call(call: &CallExpression, style: &OutputStyle, out: &mut String) -> Result<(), GenError> {
    out.push_str(&call.callee.name);
    out.push('(');
    for (i, argument) in call.arguments.iter().enumerate() {
        if i > 0 {
            out.push_str(style.argument_separator);
        }
        generate_node(argument, style, out)?;
    }
    out.push(')');
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
