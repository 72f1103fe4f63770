use super::tokens::{TokenKind, RESERVED_LOOKUP};

/// Streaming lexer over any character source.
///
/// Keeps exactly one character of lookahead across calls. The identifier
/// and number payloads belong to the most recently returned token and are
/// overwritten on every call; callers must copy them out before advancing.
pub struct Lexer<I> {
    input: I,
    // One character of lookahead. None once the stream is exhausted;
    // never refilled after that, so end of input is reported forever.
    lookahead: Option<char>,
    identifier: String,
    number: f64,
}

impl<I: Iterator<Item = char>> Lexer<I> {
    pub fn new(input: I) -> Lexer<I> {
        Lexer {
            input,
            // Seeded with a blank so the first call starts by reading.
            lookahead: Some(' '),
            identifier: String::new(),
            number: 0.0,
        }
    }

    /// Text of the most recent identifier or keyword token.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Value of the most recent number token.
    pub fn number(&self) -> f64 {
        self.number
    }

    fn bump(&mut self) {
        self.lookahead = self.input.next();
    }

    /// Returns the next token from the input stream.
    ///
    /// Never fails: anything that is not whitespace, an identifier, a
    /// number, a comment, or end of input comes back verbatim as a
    /// single-character token.
    pub fn next_token(&mut self) -> TokenKind {
        while matches!(self.lookahead, Some(c) if c.is_whitespace()) {
            self.bump();
        }

        let current = match self.lookahead {
            Some(c) => c,
            // Don't eat the EOF: repeated calls keep reporting it.
            None => return TokenKind::Eof,
        };

        // identifier: [a-zA-Z][a-zA-Z0-9]*
        if current.is_ascii_alphabetic() {
            self.identifier.clear();
            self.identifier.push(current);
            self.bump();
            while let Some(c) = self.lookahead {
                if !c.is_ascii_alphanumeric() {
                    break;
                }
                self.identifier.push(c);
                self.bump();
            }

            return RESERVED_LOOKUP
                .get(self.identifier.as_str())
                .copied()
                .unwrap_or(TokenKind::Identifier);
        }

        // number: [0-9.]+ taken permissively; malformed digit placement is
        // left to the permissive conversion below rather than rejected
        if current.is_ascii_digit() || current == '.' {
            let mut text = String::new();
            while let Some(c) = self.lookahead {
                if !c.is_ascii_digit() && c != '.' {
                    break;
                }
                text.push(c);
                self.bump();
            }

            self.number = permissive_f64(&text);
            return TokenKind::Number;
        }

        // '#' starts a comment running to end of line
        if current == '#' {
            while let Some(c) = self.lookahead {
                if c == '\n' || c == '\r' {
                    break;
                }
                self.bump();
            }

            if self.lookahead.is_some() {
                return self.next_token();
            }
            return TokenKind::Eof;
        }

        // Anything else is handed back verbatim.
        self.bump();
        TokenKind::Char(current)
    }
}

/// Converts numeric text the way `strtod` does: the longest leading
/// portion that forms a valid float wins, and text with no valid leading
/// portion converts to 0.
fn permissive_f64(text: &str) -> f64 {
    (0..=text.len())
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())
        .unwrap_or(0.0)
}
