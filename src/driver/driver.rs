use crate::ast::ast::{Function, Prototype};
use crate::errors::errors::SyntaxError;
use crate::lexer::tokens::TokenKind;
use crate::parser::decl::{parse_definition, parse_extern, parse_top_level_expr};
use crate::parser::parser::Parser;

/// Receiver for completed top-level units.
///
/// The driver owns nothing it parses: each fully built value is handed
/// over immediately and discarded before the next unit is requested.
/// Errors arrive through the same interface, exactly once per failure.
pub trait Handler {
    /// A successfully parsed `def`.
    fn handle_definition(&mut self, function: &Function);
    /// A successfully parsed `extern` declaration.
    fn handle_extern(&mut self, prototype: &Prototype);
    /// A successfully parsed bare expression, wrapped anonymously.
    fn handle_top_level(&mut self, function: &Function);
    /// A syntax error; the driver will skip one token and resume.
    fn handle_error(&mut self, error: &SyntaxError);
}

/// Runs the top-level dispatch loop until end of input.
///
/// Dispatches on the lookahead token: `;` is a statement separator and
/// produces nothing, `def` and `extern` run their declaration parsers,
/// anything else is treated as a bare expression. On a parse failure the
/// error is reported once and the parser advances exactly one token.
/// This recovery is coarse: malformed multi-token input may take several
/// error/skip cycles to resynchronize.
pub fn run<I: Iterator<Item = char>>(parser: &mut Parser<'_, I>, handler: &mut dyn Handler) {
    loop {
        match parser.current_token() {
            TokenKind::Eof => return,
            TokenKind::Char(';') => {
                // ignore top-level semicolons
                parser.advance();
            }
            TokenKind::Def => match parse_definition(parser) {
                Ok(function) => handler.handle_definition(&function),
                Err(error) => {
                    handler.handle_error(&error);
                    parser.advance();
                }
            },
            TokenKind::Extern => match parse_extern(parser) {
                Ok(prototype) => handler.handle_extern(&prototype),
                Err(error) => {
                    handler.handle_error(&error);
                    parser.advance();
                }
            },
            _ => match parse_top_level_expr(parser) {
                Ok(function) => handler.handle_top_level(&function),
                Err(error) => {
                    handler.handle_error(&error);
                    parser.advance();
                }
            },
        }
    }
}
