//! Parser state and token-cursor helpers.
//!
//! The parser owns the lexer and buffers exactly one token of lookahead.
//! Grammar functions live in the sibling `expr` and `decl` modules and
//! drive the cursor through the methods here.

use crate::lexer::lexer::Lexer;
use crate::lexer::tokens::TokenKind;

use super::precedence::{PrecedenceTable, NOT_AN_OPERATOR};

/// The parser structure holding the token cursor.
///
/// Each instance is fully self-contained sequential state, so parsers can
/// be created freely (one per input, one per test). The precedence table
/// is borrowed from the embedding application; the parser consults it and
/// never mutates it.
pub struct Parser<'a, I> {
    lexer: Lexer<I>,
    current: TokenKind,
    precedence: &'a PrecedenceTable,
}

impl<'a, I: Iterator<Item = char>> Parser<'a, I> {
    /// Creates a parser over a character source.
    ///
    /// The first token is pulled immediately so that `current_token` is
    /// valid from the start; on a blocking stream this blocks until one
    /// token is available.
    pub fn new(input: I, precedence: &'a PrecedenceTable) -> Parser<'a, I> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();

        Parser {
            lexer,
            current,
            precedence,
        }
    }

    /// Returns the buffered lookahead token without consuming it.
    pub fn current_token(&self) -> TokenKind {
        self.current
    }

    /// Consumes the current token and buffers the next one, returning it.
    pub fn advance(&mut self) -> TokenKind {
        self.current = self.lexer.next_token();
        self.current
    }

    /// Text payload of the current identifier or keyword token.
    ///
    /// Only meaningful while `current_token` is the token the payload
    /// belongs to; advancing overwrites it.
    pub fn identifier(&self) -> &str {
        self.lexer.identifier()
    }

    /// Numeric payload of the current number token.
    pub fn number(&self) -> f64 {
        self.lexer.number()
    }

    /// Precedence of the current token as an infix operator.
    ///
    /// [`NOT_AN_OPERATOR`] for anything that is not a registered
    /// punctuation character, which makes it ineligible in the
    /// precedence-climbing loop.
    pub fn current_precedence(&self) -> i32 {
        match self.current {
            TokenKind::Char(op) => self.precedence.precedence(op),
            _ => NOT_AN_OPERATOR,
        }
    }
}
