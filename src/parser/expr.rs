use crate::ast::ast::Expr;
use crate::errors::errors::SyntaxError;
use crate::lexer::tokens::TokenKind;

use super::parser::Parser;

/// Parses a full expression: one primary, optionally extended by binary
/// operators at any precedence.
pub fn parse_expression<I: Iterator<Item = char>>(
    parser: &mut Parser<'_, I>,
) -> Result<Expr, SyntaxError> {
    let lhs = parse_primary(parser)?;

    parse_binop_rhs(parser, 0, lhs)
}

/// Parses a primary expression, dispatching on the current token.
pub fn parse_primary<I: Iterator<Item = char>>(
    parser: &mut Parser<'_, I>,
) -> Result<Expr, SyntaxError> {
    match parser.current_token() {
        TokenKind::Number => parse_number_expr(parser),
        TokenKind::Identifier => parse_identifier_expr(parser),
        TokenKind::Char('(') => parse_paren_expr(parser),
        found => Err(SyntaxError::ExpectedExpression { found }),
    }
}

fn parse_number_expr<I: Iterator<Item = char>>(
    parser: &mut Parser<'_, I>,
) -> Result<Expr, SyntaxError> {
    let value = parser.number();
    parser.advance(); // consume the number

    Ok(Expr::Number(value))
}

fn parse_paren_expr<I: Iterator<Item = char>>(
    parser: &mut Parser<'_, I>,
) -> Result<Expr, SyntaxError> {
    parser.advance(); // eat '('
    let inner = parse_expression(parser)?;

    if parser.current_token() != TokenKind::Char(')') {
        return Err(SyntaxError::UnclosedParen);
    }
    parser.advance(); // eat ')'

    Ok(inner)
}

/// Parses an identifier expression: a bare variable reference, or a call
/// when the identifier is immediately followed by `(`.
fn parse_identifier_expr<I: Iterator<Item = char>>(
    parser: &mut Parser<'_, I>,
) -> Result<Expr, SyntaxError> {
    let name = parser.identifier().to_string();
    parser.advance(); // eat the identifier

    if parser.current_token() != TokenKind::Char('(') {
        return Ok(Expr::Variable(name));
    }

    parser.advance(); // eat '('
    let mut args = vec![];
    if parser.current_token() != TokenKind::Char(')') {
        loop {
            // Arguments run through the full expression grammar, so they
            // may themselves contain operators and nested calls.
            args.push(parse_expression(parser)?);

            if parser.current_token() == TokenKind::Char(')') {
                break;
            }
            if parser.current_token() != TokenKind::Char(',') {
                return Err(SyntaxError::BadArgumentList);
            }
            parser.advance();
        }
    }

    parser.advance(); // eat ')'

    Ok(Expr::Call { callee: name, args })
}

/// Precedence-climbing loop for binary operator chains.
///
/// Folds every operator whose precedence is at least `min_precedence`
/// into `lhs`. After each right-hand primary, the following operator is
/// peeked: if it binds strictly tighter than the operator just consumed,
/// the right-hand side is resolved recursively at `consumed + 1` first.
/// Equal precedences therefore fold left-associatively.
pub fn parse_binop_rhs<I: Iterator<Item = char>>(
    parser: &mut Parser<'_, I>,
    min_precedence: i32,
    mut lhs: Expr,
) -> Result<Expr, SyntaxError> {
    loop {
        let precedence = parser.current_precedence();
        if precedence < min_precedence {
            return Ok(lhs);
        }

        // current_precedence is non-negative only for punctuation tokens
        let TokenKind::Char(op) = parser.current_token() else {
            return Ok(lhs);
        };
        parser.advance(); // eat the operator

        let mut rhs = parse_primary(parser)?;

        let next_precedence = parser.current_precedence();
        if precedence < next_precedence {
            rhs = parse_binop_rhs(parser, precedence + 1, rhs)?;
        }

        lhs = Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        };
    }
}
