use crate::ast::ast::{Function, Prototype};
use crate::errors::errors::SyntaxError;
use crate::lexer::tokens::TokenKind;

use super::expr::parse_expression;
use super::parser::Parser;

/// Parses a prototype: a function name, `(`, zero or more parameter
/// identifiers with no separators, then `)`.
///
/// Duplicate parameter names are accepted; validating bindings is a
/// downstream concern.
pub fn parse_prototype<I: Iterator<Item = char>>(
    parser: &mut Parser<'_, I>,
) -> Result<Prototype, SyntaxError> {
    if parser.current_token() != TokenKind::Identifier {
        return Err(SyntaxError::ExpectedFunctionName);
    }
    let name = parser.identifier().to_string();

    if parser.advance() != TokenKind::Char('(') {
        return Err(SyntaxError::ExpectedPrototypeOpen);
    }

    let mut params = vec![];
    while parser.advance() == TokenKind::Identifier {
        params.push(parser.identifier().to_string());
    }
    if parser.current_token() != TokenKind::Char(')') {
        return Err(SyntaxError::ExpectedPrototypeClose);
    }

    parser.advance(); // eat ')'

    Ok(Prototype::new(name, params))
}

/// Parses `def prototype expression`.
///
/// A failure anywhere discards everything already parsed for this
/// definition, prototype included.
pub fn parse_definition<I: Iterator<Item = char>>(
    parser: &mut Parser<'_, I>,
) -> Result<Function, SyntaxError> {
    parser.advance(); // eat 'def'
    let prototype = parse_prototype(parser)?;
    let body = parse_expression(parser)?;

    Ok(Function::new(prototype, body))
}

/// Parses `extern prototype`, a declaration with no body.
pub fn parse_extern<I: Iterator<Item = char>>(
    parser: &mut Parser<'_, I>,
) -> Result<Prototype, SyntaxError> {
    parser.advance(); // eat 'extern'

    parse_prototype(parser)
}

/// Parses a bare top-level expression, wrapped in the synthesized
/// anonymous, parameterless function so every top-level unit is uniformly
/// representable.
pub fn parse_top_level_expr<I: Iterator<Item = char>>(
    parser: &mut Parser<'_, I>,
) -> Result<Function, SyntaxError> {
    let body = parse_expression(parser)?;

    Ok(Function::anonymous(body))
}
