use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Def);
        map.insert("extern", TokenKind::Extern);
        map
    };
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[A-Za-z][A-Za-z0-9]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9.]").unwrap();
}

/// Token discriminant produced by the lexer.
///
/// Identifier text and number values are not carried here; they live on
/// the lexer as the payload of the most recently returned token. `Char`
/// carries any character outside the other classes verbatim, which keeps
/// the set of usable operators open-ended.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TokenKind {
    Eof,
    Def,
    Extern,
    Identifier,
    Number,
    Char(char),
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Char(c) => write!(f, "'{}'", c),
            _ => write!(f, "{:?}", self),
        }
    }
}

/// Re-derives the token class a text fragment would lex to, without
/// consuming a stream.
///
/// Applies the identifier and number rules of the lexer to a plain string:
/// a leading identifier-shaped prefix is checked against the reserved
/// words, a leading digit or dot classifies as a number, anything else is
/// none-of-these. Used for secondary reporting of already-parsed fragments
/// such as parameter names.
pub fn classify(fragment: &str) -> Option<TokenKind> {
    if let Some(ident) = IDENTIFIER_PATTERN.find(fragment) {
        return Some(
            RESERVED_LOOKUP
                .get(ident.as_str())
                .copied()
                .unwrap_or(TokenKind::Identifier),
        );
    }

    if NUMBER_PATTERN.is_match(fragment) {
        return Some(TokenKind::Number);
    }

    None
}

/// Wire name of a token class, as used in report documents.
pub fn describe(class: Option<TokenKind>) -> &'static str {
    match class {
        Some(TokenKind::Eof) => "tok_eof",
        Some(TokenKind::Def) => "tok_def",
        Some(TokenKind::Extern) => "tok_extern",
        Some(TokenKind::Identifier) => "tok_identifier",
        Some(TokenKind::Number) => "tok_number",
        Some(TokenKind::Char(_)) | None => "none",
    }
}
