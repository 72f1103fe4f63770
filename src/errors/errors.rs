use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// Syntax errors raised by the parser.
///
/// One variant per violated expectation. Parse functions return these
/// through `Result` and every caller forwards the failure unchanged; the
/// top-level driver is the only place an error is reported, exactly once.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("unknown token {found} when expecting an expression")]
    ExpectedExpression { found: TokenKind },
    #[error("expected ')'")]
    UnclosedParen,
    #[error("expected ')' or ',' in argument list")]
    BadArgumentList,
    #[error("expected function name in prototype")]
    ExpectedFunctionName,
    #[error("expected '(' in prototype")]
    ExpectedPrototypeOpen,
    #[error("expected ')' in prototype")]
    ExpectedPrototypeClose,
}

impl SyntaxError {
    /// Short machine-friendly name of the violated expectation.
    pub fn name(&self) -> &'static str {
        match self {
            SyntaxError::ExpectedExpression { .. } => "ExpectedExpression",
            SyntaxError::UnclosedParen => "UnclosedParen",
            SyntaxError::BadArgumentList => "BadArgumentList",
            SyntaxError::ExpectedFunctionName => "ExpectedFunctionName",
            SyntaxError::ExpectedPrototypeOpen => "ExpectedPrototypeOpen",
            SyntaxError::ExpectedPrototypeClose => "ExpectedPrototypeClose",
        }
    }
}
