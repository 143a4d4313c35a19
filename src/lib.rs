//! # Introduction
//!
//! monkey-rs is the front end of a small interpreter for the Monkey
//! programming language: a lexer that turns source text into classified
//! tokens, and a statement parser that builds a partial AST while collecting
//! syntax errors instead of halting on the first one.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST + diagnostics
//! ```
//!
//! 1. [`parser::lexer`] — pull-based tokenizer; one token per call, one byte
//!    of lookahead, never fails (unrecognized bytes become `ILLEGAL` tokens).
//! 2. [`parser::parser`] — recursive-descent statement parser with a
//!    two-token window; malformed statements are dropped and recorded as
//!    diagnostics, and parsing continues.
//! 3. [`repl`] — line-oriented read-lex-print loop; not part of the core
//!    library API.
//!
//! ## Supported grammar
//!
//! The lexer covers the full Monkey token set: identifiers, integers, the
//! operators `= + - ! * / == != < >`, delimiters, and the keywords
//! `fn let true false if else return`. The parser recognizes `let` binding
//! declarations only; the right-hand side of a binding is skipped up to the
//! terminating semicolon rather than parsed into an expression.

pub mod parser;
pub mod repl;
