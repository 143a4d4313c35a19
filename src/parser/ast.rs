//! AST (Abstract Syntax Tree) node definitions.
//!
//! The statement set is a closed enum rather than a trait object: the parser
//! and every later pass get exhaustive matching over the variants, so adding
//! a statement kind is a compile-checked change everywhere it matters.
//!
//! Every node keeps the token that introduced it, so diagnostics and tooling
//! can always point back at the source text.

use super::token::Token;

/// Root node of every parsed program.
///
/// Statements appear in source order and contain no placeholder entries:
/// a statement that failed to parse is simply absent.
#[derive(Debug, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    /// Literal of the token that introduced the first statement, or the
    /// empty string for an empty program.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(Statement::token_literal)
            .unwrap_or("")
    }
}

/// A single parsed statement.
///
/// Only binding declarations are recognized so far; the variant set grows
/// with the grammar.
#[derive(Debug)]
pub enum Statement {
    Let(LetStatement),
}

impl Statement {
    /// Literal of the token that introduced this statement.
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => &stmt.token.literal,
        }
    }
}

/// A `let <name> = <value>;` binding declaration.
///
/// The bound value is deliberately absent: the parser currently skips the
/// right-hand side up to the terminating semicolon without building an
/// expression for it.
#[derive(Debug)]
pub struct LetStatement {
    /// The `let` keyword token.
    pub token: Token,
    /// The bound name.
    pub name: Identifier,
}

/// A name, carrying its originating token and the literal text.
#[derive(Debug)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}
