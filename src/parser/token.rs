//! Token definitions for the Monkey lexer.
//!
//! Every token pairs a [`TokenKind`] with the exact source substring it was
//! matched from. Keyword recognition also lives here: [`lookup_ident`] checks
//! a fixed keyword table before a scanned word falls back to
//! [`TokenKind::Ident`].

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// All token kinds produced by the lexer.
///
/// The set is closed: the grammar only grows by adding variants here, and
/// every consumer matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A byte the lexer does not recognize; the literal is that single byte.
    Illegal,
    /// End of input. Its literal is always empty.
    Eof,

    // Identifiers + literals
    Ident,
    Int,

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    Eq,
    NotEq,

    Lt,
    Gt,

    // Delimiters
    Comma,
    Semicolon,

    LParen,
    RParen,
    LBrace,
    RBrace,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// Returns true if this kind is a reserved word.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }
}

impl fmt::Display for TokenKind {
    /// Renders the kind the way diagnostics spell it: keywords and synthetic
    /// kinds as upper-case names, operators and delimiters as themselves.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        };
        f.write_str(name)
    }
}

/// A classified lexical unit: kind plus the exact matched substring.
///
/// Tokens are produced by the lexer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }
}

/// Reserved words, initialized once and never written afterwards.
static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    FxHashMap::from_iter([
        ("fn", TokenKind::Function),
        ("let", TokenKind::Let),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("return", TokenKind::Return),
    ])
});

/// Returns the keyword kind for `ident`, or [`TokenKind::Ident`] when it is
/// not a reserved word. Keyword recognition is exact-match: `letx` is an
/// identifier, not `let` plus trailing characters.
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS.get(ident).copied().unwrap_or(TokenKind::Ident)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(lookup_ident("let"), TokenKind::Let);
        assert_eq!(lookup_ident("fn"), TokenKind::Function);
        assert_eq!(lookup_ident("return"), TokenKind::Return);
        assert_eq!(lookup_ident("letx"), TokenKind::Ident);
        assert_eq!(lookup_ident("Let"), TokenKind::Ident);
        assert_eq!(lookup_ident(""), TokenKind::Ident);
    }

    #[test]
    fn test_kind_display_matches_diagnostic_spelling() {
        assert_eq!(TokenKind::Ident.to_string(), "IDENT");
        assert_eq!(TokenKind::Assign.to_string(), "=");
        assert_eq!(TokenKind::Eq.to_string(), "==");
        assert_eq!(TokenKind::Let.to_string(), "LET");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }
}
