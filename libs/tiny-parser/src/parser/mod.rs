//! # S-expression Parser
//!
//! Recursive descent parser producing a source-language AST.
//!
//! ## Grammar
//!
//! ```text
//! program := node*
//! node    := NUMBER | STRING | '(' NAME node* ')'
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::lexer::Lexer;
//! use tiny_parser::parser::Parser;
//!
//! let tokens = Lexer::new("(add 2 2)").tokenize().unwrap();
//! let program = Parser::new(tokens).parse().unwrap();
//! ```

use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};
use config::constants::{STACK_GROWTH_BYTES, STACK_RED_ZONE_BYTES};
use log::debug;
use stacker::maybe_grow;
use tiny_ast::source::{CallExpression, Node, NumberLiteral, StringLiteral};

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser over an owned token sequence.
///
/// The first grammar violation aborts parsing; there is no recovery.
pub struct Parser {
    /// Token stream.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
}

impl Parser {
    /// Create a new parser.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse every token into a `Program` node.
    ///
    /// ## Returns
    ///
    /// `Node::Program` whose body holds the top-level nodes in encounter order.
    pub fn parse(mut self) -> Result<Node, ParseError> {
        let mut body = Vec::new();

        while !self.is_at_end() {
            body.push(self.parse_node()?);
        }

        debug!("parsed {} top-level nodes", body.len());
        Ok(Node::program(body))
    }

    /// Parse one node at the cursor, recursing into call parameters.
    fn parse_node(&mut self) -> Result<Node, ParseError> {
        maybe_grow(STACK_RED_ZONE_BYTES, STACK_GROWTH_BYTES, || {
            let (kind, opens_call) = match self.peek() {
                Some(token) => (token.kind, token.is_open_paren()),
                None => return Err(ParseError::UnexpectedEof { expected: "expression" }),
            };

            match kind {
                TokenKind::Number => {
                    let value = self.advance_value();
                    Ok(Node::NumberLiteral(NumberLiteral { value }))
                }
                TokenKind::String => {
                    let value = self.advance_value();
                    Ok(Node::StringLiteral(StringLiteral { value }))
                }
                TokenKind::Paren if opens_call => self.parse_call(),
                _ => Err(self.unexpected("expression")),
            }
        })
    }

    /// Parse `'(' NAME node* ')'`. The cursor sits on the opening paren.
    fn parse_call(&mut self) -> Result<Node, ParseError> {
        self.current += 1; // (

        let name = self.expect(TokenKind::Name, "name")?;
        let mut params = Vec::new();

        loop {
            match self.peek() {
                Some(token) if token.is_close_paren() => break,
                Some(_) => {}
                None => return Err(ParseError::UnexpectedEof { expected: "')'" }),
            }
            params.push(self.parse_node()?);
        }
        self.current += 1; // )

        Ok(Node::CallExpression(CallExpression { name, params }))
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token, if any remain.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    /// Check if every token has been consumed.
    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Consume the current token and take its text.
    fn advance_value(&mut self) -> String {
        let value = std::mem::take(&mut self.tokens[self.current].value);
        self.current += 1;
        value
    }

    /// Consume the current token's text if it matches `kind`.
    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<String, ParseError> {
        if self.peek().map(|token| token.kind) == Some(kind) {
            Ok(self.advance_value())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Build an error for the current token.
    fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                found: token.clone(),
                index: self.current,
                expected,
            },
            None => ParseError::UnexpectedEof { expected },
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn parse(source: &str) -> Result<Node, ParseError> {
        let tokens = Lexer::new(source).tokenize().expect("source should lex");
        Parser::new(tokens).parse()
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse("").unwrap(), Node::program(vec![]));
    }

    #[test]
    fn test_parse_nested_call() {
        let program = parse("(add 2 (subtract 4 2))").unwrap();
        assert_eq!(
            program,
            Node::program(vec![Node::call(
                "add",
                vec![
                    Node::number("2"),
                    Node::call("subtract", vec![Node::number("4"), Node::number("2")]),
                ],
            )])
        );
    }

    #[test]
    fn test_parse_call_without_params() {
        assert_eq!(
            parse("(now)").unwrap(),
            Node::program(vec![Node::call("now", vec![])])
        );
    }

    #[test]
    fn test_parse_string_params() {
        assert_eq!(
            parse(r#"(concat "foo" "bar")"#).unwrap(),
            Node::program(vec![Node::call(
                "concat",
                vec![Node::string("foo"), Node::string("bar")],
            )])
        );
    }

    #[test]
    fn test_parse_top_level_literals() {
        assert_eq!(
            parse(r#"1 "a""#).unwrap(),
            Node::program(vec![Node::number("1"), Node::string("a")])
        );
    }

    #[test]
    fn test_parse_preserves_top_level_order() {
        let Node::Program(program) = parse("(b)(a)(c)").unwrap() else {
            panic!("expected program root");
        };
        let names: Vec<_> = program
            .body
            .iter()
            .map(|node| match node {
                Node::CallExpression(call) => call.name.as_str(),
                other => panic!("unexpected node {:?}", other),
            })
            .collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_missing_name_after_open_paren() {
        let err = parse("(2 3)").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                found: Token::new(TokenKind::Number, "2"),
                index: 1,
                expected: "name",
            }
        );
    }

    #[test]
    fn test_nested_open_paren_is_not_a_name() {
        assert!(matches!(
            parse("((add 1 2))"),
            Err(ParseError::UnexpectedToken { index: 1, expected: "name", .. })
        ));
    }

    #[test]
    fn test_unterminated_call() {
        assert_eq!(
            parse("(add 1 2").unwrap_err(),
            ParseError::UnexpectedEof { expected: "')'" }
        );
        assert_eq!(
            parse("(add (subtract 1 2)").unwrap_err(),
            ParseError::UnexpectedEof { expected: "')'" }
        );
    }

    #[test]
    fn test_lone_open_paren() {
        assert_eq!(
            parse("(").unwrap_err(),
            ParseError::UnexpectedEof { expected: "name" }
        );
    }

    #[test]
    fn test_stray_close_paren_at_top_level() {
        assert_eq!(
            parse("(add 1 2))").unwrap_err(),
            ParseError::UnexpectedToken {
                found: Token::paren(')'),
                index: 5,
                expected: "expression",
            }
        );
    }

    #[test]
    fn test_name_in_param_position() {
        assert!(matches!(
            parse("(add x 1)"),
            Err(ParseError::UnexpectedToken { index: 2, expected: "expression", .. })
        ));
    }
}
