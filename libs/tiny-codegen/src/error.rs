use thiserror::Error;
use tiny_ast::target::NodeKind;

/// Errors raised while rendering a target AST.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    /// Node kind with no rendering rule in this position.
    #[error("no code generation rule for {kind} below the root")]
    UnexpectedNode { kind: NodeKind },
}
