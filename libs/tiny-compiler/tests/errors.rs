//! The first failing stage ends the compile; nothing partial comes back.

use tiny_compiler::{
    compile, generate, source, target, transform, CompileError, GenError, LexError,
    OutputStyle, ParseError, TraverseError,
};

#[test]
fn unrecognized_character_is_lex_error() {
    assert_eq!(
        compile("(add 2 #)").unwrap_err(),
        CompileError::Lex(LexError::UnexpectedCharacter { character: '#', position: 7 })
    );
}

#[test]
fn unterminated_string_is_lex_error() {
    assert!(matches!(
        compile(r#"(concat "foo)"#),
        Err(CompileError::Lex(LexError::UnterminatedString { position: 8 }))
    ));
}

#[test]
fn unbalanced_input_is_parse_error() {
    assert_eq!(
        compile("(add 1 2").unwrap_err(),
        CompileError::Parse(ParseError::UnexpectedEof { expected: "')'" })
    );
}

#[test]
fn lex_error_wins_over_later_parse_error() {
    // Unbalanced and containing a bad character: lexing fails first.
    assert!(matches!(compile("(add 1 ?"), Err(CompileError::Lex(_))));
}

#[test]
fn missing_name_is_parse_error() {
    assert!(matches!(
        compile("(1 2)"),
        Err(CompileError::Parse(ParseError::UnexpectedToken { expected: "name", .. }))
    ));
}

#[test]
fn stray_close_paren_is_parse_error() {
    assert!(matches!(
        compile("(a))"),
        Err(CompileError::Parse(ParseError::UnexpectedToken { index: 3, .. }))
    ));
}

#[test]
fn nested_source_program_is_traverse_error() {
    let ast = source::Node::program(vec![source::Node::call(
        "f",
        vec![source::Node::program(vec![])],
    )]);
    assert!(matches!(
        transform(&ast),
        Err(TraverseError::UnexpectedNode { .. })
    ));
}

#[test]
fn nested_target_program_is_gen_error() {
    let ast = target::Node::program(vec![target::Node::program(vec![])]);
    assert!(matches!(
        generate(&ast, &OutputStyle::default()),
        Err(GenError::UnexpectedNode { .. })
    ));
}
