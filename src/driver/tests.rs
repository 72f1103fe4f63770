//! Unit tests for the top-level driver.
//!
//! These tests run the dispatch loop over small sources with a recording
//! handler and assert on the exact sequence of delivered values and
//! errors, including the one-token error recovery contract.

use crate::ast::ast::{Expr, Function, Prototype};
use crate::errors::errors::SyntaxError;
use crate::lexer::tokens::TokenKind;
use crate::parser::parser::Parser;
use crate::parser::precedence::PrecedenceTable;

use super::driver::{run, Handler};

#[derive(Debug, PartialEq)]
enum Event {
    Definition(Function),
    Extern(Prototype),
    TopLevel(Function),
    Error(SyntaxError),
}

#[derive(Default)]
struct RecordingHandler {
    events: Vec<Event>,
}

impl Handler for RecordingHandler {
    fn handle_definition(&mut self, function: &Function) {
        self.events.push(Event::Definition(function.clone()));
    }
    fn handle_extern(&mut self, prototype: &Prototype) {
        self.events.push(Event::Extern(prototype.clone()));
    }
    fn handle_top_level(&mut self, function: &Function) {
        self.events.push(Event::TopLevel(function.clone()));
    }
    fn handle_error(&mut self, error: &SyntaxError) {
        self.events.push(Event::Error(error.clone()));
    }
}

fn standard_table() -> PrecedenceTable {
    PrecedenceTable::from_iter([('<', 10), ('+', 20), ('-', 20), ('*', 40)])
}

fn drive(source: &str) -> Vec<Event> {
    let table = standard_table();
    let mut parser = Parser::new(source.chars(), &table);
    let mut handler = RecordingHandler::default();
    run(&mut parser, &mut handler);

    handler.events
}

#[test]
fn test_delivers_units_in_input_order() {
    let events = drive("def a(x) x extern b() 7");

    assert_eq!(
        events,
        vec![
            Event::Definition(Function::new(
                Prototype::new("a".to_string(), vec!["x".to_string()]),
                Expr::Variable("x".to_string()),
            )),
            Event::Extern(Prototype::new("b".to_string(), vec![])),
            Event::TopLevel(Function::anonymous(Expr::Number(7.0))),
        ]
    );
}

#[test]
fn test_semicolons_produce_nothing() {
    let events = drive("1;;2");

    assert_eq!(
        events,
        vec![
            Event::TopLevel(Function::anonymous(Expr::Number(1.0))),
            Event::TopLevel(Function::anonymous(Expr::Number(2.0))),
        ]
    );
}

#[test]
fn test_empty_input_delivers_nothing() {
    assert_eq!(drive(""), vec![]);
    assert_eq!(drive("# only a comment"), vec![]);
}

#[test]
fn test_error_skips_exactly_one_token() {
    // The bad definition fails at the `5`; the driver skips only that
    // token, so the following extern parses normally.
    let events = drive("def 5 extern foo(a)");

    assert_eq!(
        events,
        vec![
            Event::Error(SyntaxError::ExpectedFunctionName),
            Event::Extern(Prototype::new("foo".to_string(), vec!["a".to_string()])),
        ]
    );
}

#[test]
fn test_coarse_recovery_may_take_several_cycles() {
    // `def foo( 1 ) 2; 3`: the prototype fails on `1`, the skipped-to `)`
    // fails again as an expression, and only then does dispatch land on a
    // valid construct boundary.
    let events = drive("def foo( 1 ) 2; 3");

    assert_eq!(
        events,
        vec![
            Event::Error(SyntaxError::ExpectedPrototypeClose),
            Event::Error(SyntaxError::ExpectedExpression {
                found: TokenKind::Char(')')
            }),
            Event::TopLevel(Function::anonymous(Expr::Number(2.0))),
            Event::TopLevel(Function::anonymous(Expr::Number(3.0))),
        ]
    );
}

#[test]
fn test_failed_definition_discards_prototype() {
    // The prototype of the failed `def` is never delivered.
    let events = drive("def foo(x y");

    assert_eq!(
        events,
        vec![Event::Error(SyntaxError::ExpectedPrototypeClose)]
    );
}

#[test]
fn test_resumes_after_bad_body() {
    let events = drive("def foo(x) ) extern cos(t)");

    assert_eq!(
        events,
        vec![
            Event::Error(SyntaxError::ExpectedExpression {
                found: TokenKind::Char(')')
            }),
            Event::Extern(Prototype::new("cos".to_string(), vec!["t".to_string()])),
        ]
    );
}
