//! # S-expression Lexer
//!
//! Tokenizes source text in a single forward scan.
//!
//! ## Token classes
//!
//! | input | token |
//! |---|---|
//! | `(` `)` | `Paren` |
//! | whitespace | skipped |
//! | digit run | `Number` |
//! | `"`-delimited run | `String` (quotes dropped, no escapes) |
//! | letter run | `Name` |
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("(add 2 2)").tokenize().unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Paren);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::error::LexError;
use config::constants::STRING_QUOTE;
use log::{debug, trace};

// =============================================================================
// LEXER
// =============================================================================

/// S-expression lexer.
///
/// Converts source text into a sequence of tokens. No end-of-input token is
/// emitted; the parser detects exhaustion itself.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// Tokens in source order, or the first lexical error.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while !self.cursor.is_eof() {
            self.cursor.advance_while(char::is_whitespace);
            if self.cursor.is_eof() {
                break;
            }
            self.scan_token()?;
        }

        debug!("lexed {} tokens", self.tokens.len());
        Ok(self.tokens)
    }

    /// Scan a single token.
    fn scan_token(&mut self) -> Result<(), LexError> {
        let c = match self.cursor.peek() {
            Some(c) => c,
            None => return Ok(()),
        };

        let token = match c {
            '(' | ')' => {
                self.cursor.advance();
                Token::paren(c)
            }
            '0'..='9' => {
                let digits = self.cursor.advance_while(|c| c.is_ascii_digit());
                Token::new(TokenKind::Number, digits)
            }
            'a'..='z' | 'A'..='Z' => {
                let name = self.cursor.advance_while(|c| c.is_ascii_alphabetic());
                Token::new(TokenKind::Name, name)
            }
            STRING_QUOTE => self.scan_string()?,
            _ => {
                return Err(LexError::UnexpectedCharacter {
                    character: c,
                    position: self.cursor.position(),
                })
            }
        };

        trace!("token {} {:?}", token.kind, token.value);
        self.tokens.push(token);
        Ok(())
    }

    /// Scan a string literal. The cursor sits on the opening quote.
    fn scan_string(&mut self) -> Result<Token, LexError> {
        let position = self.cursor.position();
        self.cursor.advance(); // Opening quote

        let value = self.cursor.advance_while(|c| c != STRING_QUOTE);

        if self.cursor.advance() != Some(STRING_QUOTE) {
            return Err(LexError::UnterminatedString { position });
        }

        Ok(Token::new(TokenKind::String, value))
    }
}

// =============================================================================
// TESTS
// =============================================================================
