use crate::{source, target};
use serde_json::json;

#[test]
fn source_node_kinds() {
    assert_eq!(source::Node::program(vec![]).kind(), source::NodeKind::Program);
    assert_eq!(source::Node::call("add", vec![]).kind(), source::NodeKind::CallExpression);
    assert_eq!(source::Node::number("1").kind(), source::NodeKind::NumberLiteral);
    assert_eq!(source::Node::string("a").kind(), source::NodeKind::StringLiteral);
}

#[test]
fn target_node_kinds() {
    let call = target::Node::call("add", vec![]);
    assert_eq!(call.kind(), target::NodeKind::CallExpression);
    assert_eq!(target::Node::statement(call).kind(), target::NodeKind::ExpressionStatement);
    assert_eq!(
        target::Node::Identifier(target::Identifier::new("add")).kind(),
        target::NodeKind::Identifier
    );
}

#[test]
fn kind_display_uses_type_names() {
    assert_eq!(source::NodeKind::CallExpression.to_string(), "CallExpression");
    assert_eq!(target::NodeKind::ExpressionStatement.to_string(), "ExpressionStatement");
}

#[test]
fn source_tree_serializes_with_type_tags() {
    let ast = source::Node::program(vec![source::Node::call(
        "add",
        vec![source::Node::number("2"), source::Node::string("x")],
    )]);
    let value = serde_json::to_value(&ast).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "Program",
            "body": [{
                "type": "CallExpression",
                "name": "add",
                "params": [
                    { "type": "NumberLiteral", "value": "2" },
                    { "type": "StringLiteral", "value": "x" }
                ]
            }]
        })
    );
}

#[test]
fn target_statement_serializes_callee_by_name() {
    let ast = target::Node::statement(target::Node::call("add", vec![target::Node::number("2")]));
    let value = serde_json::to_value(&ast).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "ExpressionStatement",
            "expression": {
                "type": "CallExpression",
                "callee": { "name": "add" },
                "arguments": [{ "type": "NumberLiteral", "value": "2" }]
            }
        })
    );
}

#[test]
fn target_tree_deserializes_from_tagged_json() {
    let value = json!({
        "type": "Program",
        "body": [{
            "type": "ExpressionStatement",
            "expression": {
                "type": "CallExpression",
                "callee": { "name": "concat" },
                "arguments": [{ "type": "StringLiteral", "value": "foo" }]
            }
        }]
    });
    let ast: target::Node = serde_json::from_value(value).unwrap();
    assert_eq!(
        ast,
        target::Node::program(vec![target::Node::statement(target::Node::call(
            "concat",
            vec![target::Node::string("foo")]
        ))])
    );
}

// =============================================================================
// DEPTH TESTS
// =============================================================================

fn deep_source(depth: usize) -> source::Node {
    let mut node = source::Node::number("1");
    for _ in 0..depth {
        node = source::Node::call("id", vec![node]);
    }
    source::Node::program(vec![node])
}

fn deep_target(depth: usize) -> target::Node {
    let mut node = target::Node::number("1");
    for _ in 0..depth {
        node = target::Node::call("id", vec![node]);
    }
    target::Node::program(vec![target::Node::statement(node)])
}

#[test]
fn deep_source_tree_drops() {
    let ast = deep_source(200_000);
    drop(ast);
}

#[test]
fn deep_target_tree_drops() {
    let ast = deep_target(200_000);
    drop(ast);
}

#[test]
fn nested_statements_drop() {
    let mut node = target::Node::number("1");
    for _ in 0..100_000 {
        node = target::Node::statement(node);
    }
    drop(node);
}

#[test]
fn deep_source_tree_serializes() {
    let depth = 20_000;
    let json = serde_json::to_string(&deep_source(depth)).unwrap();
    assert!(json.starts_with(r#"{"type":"Program","body":[{"type":"CallExpression""#));
    assert_eq!(json.matches(r#""name":"id""#).count(), depth);
}

#[test]
fn deep_target_tree_serializes() {
    let depth = 20_000;
    let json = serde_json::to_string(&deep_target(depth)).unwrap();
    assert!(json.contains("ExpressionStatement"));
    assert_eq!(json.matches(r#""CallExpression""#).count(), depth);
}
