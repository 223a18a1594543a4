//! # Character Cursor
//!
//! Forward-only character cursor for the lexer.
//! Tracks the byte offset internally (for slicing) and exposes the
//! character index (for error positions).
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("add");
//! assert_eq!(cursor.peek(), Some('a'));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('d'));
//! ```

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor over source text.
///
/// ## Example
///
/// ```rust
/// use tiny_parser::lexer::Cursor;
///
/// let mut cursor = Cursor::new("add");
/// assert_eq!(cursor.advance(), Some('a'));
/// assert_eq!(cursor.position(), 1);
/// ```
pub struct Cursor<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    byte: usize,
    /// Current character index.
    index: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte: 0,
            index: 0,
        }
    }

    /// Character index of the next character to be consumed.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Check if at end of input.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use tiny_parser::lexer::Cursor;
    ///
    /// assert!(Cursor::new("").is_eof());
    /// ```
    pub fn is_eof(&self) -> bool {
        self.byte >= self.source.len()
    }

    /// Peek at current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.source[self.byte..].chars().next()
    }

    /// Consume the current character.
    ///
    /// ## Returns
    ///
    /// Character that was consumed, or None if at EOF
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.byte += c.len_utf8();
        self.index += 1;
        Some(c)
    }

    /// Advance while predicate is true.
    ///
    /// ## Returns
    ///
    /// The consumed run as a slice of the source.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use tiny_parser::lexer::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// assert_eq!(cursor.advance_while(|c| c.is_ascii_digit()), "123");
    /// assert_eq!(cursor.peek(), Some('a'));
    /// ```
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let source = self.source;
        let start = self.byte;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
        &source[start..self.byte]
    }
}

// =============================================================================
// TESTS
// =============================================================================
