// monkey-rs: lexer and parser front end for the Monkey language

mod parser;
mod repl;

use std::fs;
use std::io;
use std::path::Path;

use parser::lexer::Lexer;
use parser::parser::Parser;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1) {
        // No file: interactive token REPL on stdin.
        None => {
            println!("Monkey programming language front end.");
            println!("Type some source code to see its tokens (Ctrl-D to exit).");

            let stdin = io::stdin();
            let stdout = io::stdout();
            repl::start(&mut stdin.lock(), &mut stdout.lock())
        }
        Some(path) => run_file(path),
    }
}

/// Parses a source file and reports diagnostics on stderr.
fn run_file(path: &str) -> io::Result<()> {
    if !Path::new(path).exists() {
        eprintln!("Error: File '{}' not found", path);
        eprintln!("Usage: monkey-rs [file.monkey]");
        std::process::exit(1);
    }

    let source = fs::read_to_string(path)?;

    let mut parser = Parser::new(Lexer::new(&source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        eprintln!("Parser errors in {}:", path);
        for error in parser.errors() {
            eprintln!("  {}", error);
        }
        std::process::exit(1);
    }

    println!(
        "Parsed {} successfully: {} statement(s).",
        path,
        program.statements.len()
    );
    Ok(())
}
