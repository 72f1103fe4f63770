use std::env;
use std::fs;
use std::io::{self, Read};

use kaleido::driver::driver::run;
use kaleido::parser::parser::Parser;
use kaleido::parser::precedence::PrecedenceTable;
use kaleido::report::report::JsonReporter;

fn main() {
    // The operator set lives here, not in the parser: 1 is the weakest
    // binding strength and '*' binds tightest.
    let mut precedence = PrecedenceTable::new();
    precedence.set('<', 10);
    precedence.set('+', 20);
    precedence.set('-', 20);
    precedence.set('*', 40);

    let args: Vec<String> = env::args().collect();
    let mut reporter = JsonReporter::new(io::stdout());

    match args.as_slice() {
        [_] => {
            let stdin = io::stdin();
            let chars = stdin.lock().bytes().filter_map(Result::ok).map(char::from);
            let mut parser = Parser::new(chars, &precedence);
            run(&mut parser, &mut reporter);
        }
        [_, path] => {
            let source = fs::read_to_string(path).expect("failed to read source file");
            let mut parser = Parser::new(source.chars(), &precedence);
            run(&mut parser, &mut reporter);
        }
        _ => panic!("Incorrect arguments provided!"),
    }
}
