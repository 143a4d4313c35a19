//! Monkey source code front end
//!
//! This module transforms Monkey source text into a partial Abstract Syntax
//! Tree (AST):
//! - [`token`]: Token kinds and the keyword table
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parser`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Coverage
//!
//! The lexer covers the full Monkey token set. The parser currently
//! recognizes exactly one statement form (the `let` binding declaration)
//! and skips everything else token by token. Malformed statements are
//! recorded as diagnostics instead of aborting the parse.
//!
//! # Implementation
//!
//! Hand-written: a byte-oriented scanner with one character of lookahead,
//! and a recursive-descent parser with a two-token window. No parser
//! generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;
