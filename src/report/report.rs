use std::io::Write;

use serde_json::{json, Value};

use crate::ast::ast::{Function, Prototype};
use crate::driver::driver::Handler;
use crate::errors::errors::SyntaxError;
use crate::lexer::tokens::{classify, describe};

/// Handler that writes one pretty-printed JSON document per declaration.
///
/// `def` and `extern` produce a document; successful bare top-level
/// expressions produce nothing. Errors are written as plain `Error:`
/// lines on the same writer.
pub struct JsonReporter<W> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> JsonReporter<W> {
        JsonReporter { out }
    }

    /// Consumes the reporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, document: &Value) {
        // report output is best-effort; write failures are not surfaced
        let _ = writeln!(self.out, "{:#}", document);
    }
}

/// Builds the report document for one declaration.
///
/// Every name travels with the token class it would lex to, re-derived
/// from the text fragment alone.
pub fn prototype_document(kind: &str, prototype: &Prototype) -> Value {
    let args: Vec<Value> = prototype
        .params
        .iter()
        .map(|param| {
            json!({
                "type": describe(classify(param)),
                "value": param,
            })
        })
        .collect();

    json!({
        "type": kind,
        "prototype": {
            "name": {
                "type": describe(classify(&prototype.name)),
                "value": prototype.name,
            },
            "args": args,
        }
    })
}

impl<W: Write> Handler for JsonReporter<W> {
    fn handle_definition(&mut self, function: &Function) {
        self.emit(&prototype_document("tok_def", &function.prototype));
    }

    fn handle_extern(&mut self, prototype: &Prototype) {
        self.emit(&prototype_document("tok_extern", prototype));
    }

    fn handle_top_level(&mut self, _function: &Function) {
        // Bare expressions are consumed without a report.
    }

    fn handle_error(&mut self, error: &SyntaxError) {
        let _ = writeln!(self.out, "Error: {}", error);
    }
}
