//! Recursive-descent parser for Monkey statements.
//!
//! The parser pulls tokens from a [`Lexer`] on demand, keeping a two-token
//! window (`cur_token` plus one token of lookahead in `peek_token`). It
//! never fails outright: a statement that does not match the expected token
//! sequence is dropped, a diagnostic is recorded, and parsing resumes at the
//! next token. [`Parser::parse_program`] always returns a [`Program`];
//! callers inspect [`Parser::errors`] afterwards to decide whether the
//! result is usable.

use crate::parser::ast::{Identifier, LetStatement, Program, Statement};
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};

/// Statement parser over a pull-based token stream.
pub struct Parser {
    lexer: Lexer,
    /// Token under examination.
    cur_token: Token,
    /// One token ahead of `cur_token`.
    peek_token: Token,
    /// Diagnostics in the order they were recorded.
    errors: Vec<String>,
}

impl Parser {
    /// Creates a parser and primes both lookahead tokens from the lexer.
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Self {
            lexer,
            cur_token: Token::new(TokenKind::Eof, ""),
            peek_token: Token::new(TokenKind::Eof, ""),
            errors: Vec::new(),
        };

        // Fill cur_token and peek_token.
        parser.next_token();
        parser.next_token();

        parser
    }

    /// Diagnostics collected so far, in source order. Reading them has no
    /// side effects; repeated calls return the same list.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Shifts the window: `peek_token` becomes current and a fresh token is
    /// pulled from the lexer.
    fn next_token(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    /// Parses the whole token stream into a [`Program`].
    ///
    /// Consumes every token exactly once and always terminates, even on
    /// malformed input; syntax mismatches end up in [`Parser::errors`]
    /// rather than aborting the parse.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        program
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            // Anything that does not start a known statement is skipped
            // without a diagnostic, one token per outer-loop iteration.
            _ => None,
        }
    }

    /// Parses `let <ident> = ... ;`.
    ///
    /// On a mismatch at the identifier or the `=`, records a diagnostic and
    /// aborts this statement; the outer loop's unconditional advance resumes
    /// scanning past the failure point.
    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }

        let name = Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        // The right-hand side is skipped up to and including the terminating
        // semicolon; no expression is attached to the statement yet. The Eof
        // check keeps an unterminated statement from looping forever.
        while !self.cur_token_is(TokenKind::Semicolon) && !self.cur_token_is(TokenKind::Eof) {
            self.next_token();
        }

        Some(LetStatement { token, name })
    }

    fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances only if the peek token has the expected kind; otherwise
    /// records a diagnostic and leaves the window untouched.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.errors.push(format!(
            "expected next token to be {}, got {} instead",
            expected, self.peek_token.kind
        ));
    }
}
