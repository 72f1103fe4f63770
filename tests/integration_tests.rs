//! Integration tests for end-to-end front-end runs.
//!
//! These tests verify the complete pipeline from source text through
//! tokenization, parsing, and top-level dispatch to the JSON reports.

use serde_json::Value;

use kaleido::driver::driver::run;
use kaleido::parser::parser::Parser;
use kaleido::parser::precedence::PrecedenceTable;
use kaleido::report::report::JsonReporter;

fn standard_table() -> PrecedenceTable {
    PrecedenceTable::from_iter([('<', 10), ('+', 20), ('-', 20), ('*', 40)])
}

fn run_source(source: &str) -> String {
    let table = standard_table();
    let mut parser = Parser::new(source.chars(), &table);
    let mut reporter = JsonReporter::new(Vec::new());

    run(&mut parser, &mut reporter);

    String::from_utf8(reporter.into_inner()).unwrap()
}

fn documents(output: &str) -> Vec<Value> {
    serde_json::Deserializer::from_str(output)
        .into_iter::<Value>()
        .collect::<Result<_, _>>()
        .unwrap()
}

#[test]
fn test_reports_definitions_and_externs_in_order() {
    let source = r#"
        # utility definitions
        def add(a b) a+b
        extern sin(angle);
        add(1, 2)
    "#;

    let output = run_source(source);
    let docs = documents(&output);

    assert_eq!(docs.len(), 2);

    assert_eq!(docs[0]["type"], "tok_def");
    assert_eq!(docs[0]["prototype"]["name"]["type"], "tok_identifier");
    assert_eq!(docs[0]["prototype"]["name"]["value"], "add");
    assert_eq!(docs[0]["prototype"]["args"][0]["value"], "a");
    assert_eq!(docs[0]["prototype"]["args"][1]["value"], "b");

    assert_eq!(docs[1]["type"], "tok_extern");
    assert_eq!(docs[1]["prototype"]["name"]["value"], "sin");
    assert_eq!(docs[1]["prototype"]["args"][0]["value"], "angle");
}

#[test]
fn test_top_level_expressions_are_silent() {
    let output = run_source("1+2*3; foo(bar)");

    assert!(output.is_empty());
}

#[test]
fn test_comments_and_separators_produce_nothing() {
    let output = run_source("# nothing but comments\n;;;\n# and separators");

    assert!(output.is_empty());
}

#[test]
fn test_error_is_reported_once_and_parsing_resumes() {
    let output = run_source("def 42 extern cos(t)");

    assert_eq!(
        output.matches("Error:").count(),
        1,
        "one failure, one report"
    );
    assert!(output.contains("Error: expected function name in prototype\n"));

    // Everything after the error line is the recovered extern's document.
    let json_start = output.find('{').unwrap();
    let docs = documents(&output[json_start..]);
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["type"], "tok_extern");
    assert_eq!(docs[0]["prototype"]["name"]["value"], "cos");
}

#[test]
fn test_malformed_numbers_flow_through() {
    // `1.2.3` lexes permissively; the definition still parses and reports.
    let output = run_source("def c() 1.2.3");
    let docs = documents(&output);

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["prototype"]["name"]["value"], "c");
    assert_eq!(docs[0]["prototype"]["args"], serde_json::json!([]));
}
