//! End-to-end behaviour of `compile`.

use tiny_compiler::{compile, compile_with, generate, parse, tokenize, transform, OutputStyle};

#[test]
fn compiles_flat_call() {
    assert_eq!(compile("(add 2 2)").unwrap(), "add(2, 2);");
}

#[test]
fn compiles_nested_call() {
    assert_eq!(
        compile("(add 2 (subtract 4 2))").unwrap(),
        "add(2, subtract(4, 2));"
    );
}

#[test]
fn compiles_string_arguments() {
    assert_eq!(
        compile(r#"(concat "foo" "bar")"#).unwrap(),
        r#"concat("foo", "bar");"#
    );
}

#[test]
fn compiles_multiple_statements_in_source_order() {
    assert_eq!(
        compile("(add 1 2)(subtract 3 1)").unwrap(),
        "add(1, 2);\nsubtract(3, 1);"
    );
}

#[test]
fn whitespace_does_not_change_output() {
    let expected = compile("(add 2 2)").unwrap();
    assert_eq!(compile("( add  2   2 )").unwrap(), expected);
    assert_eq!(compile("\n(add\t2\n 2)\n").unwrap(), expected);
    assert_eq!(tokenize("(add 2 2)").unwrap(), tokenize("( add  2   2 )").unwrap());
}

#[test]
fn number_text_is_kept_verbatim() {
    assert_eq!(compile("(pad 007 10)").unwrap(), "pad(007, 10);");
}

#[test]
fn zero_argument_calls() {
    assert_eq!(compile("(now)").unwrap(), "now();");
    assert_eq!(compile("(f (g))").unwrap(), "f(g());");
}

#[test]
fn deep_nesting_compiles() {
    let depth = 100_000;
    let source = format!("{}1{}", "(id ".repeat(depth), ")".repeat(depth));
    let expected = format!("{}1{};", "id(".repeat(depth), ")".repeat(depth));
    assert_eq!(compile(&source).unwrap(), expected);
}

#[test]
fn deep_nesting_through_each_stage() {
    let depth = 150_000;
    let source = format!("{}\"x\"{}", "(wrap ".repeat(depth), ")".repeat(depth));

    let ast = parse(tokenize(&source).unwrap()).unwrap();
    let target = transform(&ast).unwrap();
    drop(ast);

    let code = generate(&target, &OutputStyle::default()).unwrap();
    drop(target);

    assert_eq!(code.len(), depth * 6 + 4);
    assert!(code.starts_with("wrap(wrap("));
    assert!(code.contains("wrap(\"x\"))"));
    assert!(code.ends_with(")));"));
}

#[test]
fn custom_style_changes_only_punctuation() {
    let style = OutputStyle::new("\n\n", ",", ";").unwrap();
    assert_eq!(
        compile_with("(add 1 (neg 2))(f)", &style).unwrap(),
        "add(1,neg(2));\n\nf();"
    );
}

#[test]
fn independent_compiles_run_in_parallel() {
    let inputs: Vec<(String, String)> = (0..16)
        .map(|i| (format!("(add {i} (mul {i} \"x\"))"), format!("add({i}, mul({i}, \"x\"));")))
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|(source, expected)| {
                scope.spawn(move || {
                    for _ in 0..50 {
                        assert_eq!(&compile(source).unwrap(), expected);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    });
}
