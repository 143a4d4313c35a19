//! Lexer (tokenizer) for Monkey source code.
//!
//! A single-pass, on-demand scanner: each call to [`Lexer::next_token`]
//! returns exactly one token and advances past it, with one byte of
//! lookahead for the two-character operators `==` and `!=`. The lexer never
//! fails - bytes it does not recognize come back as [`TokenKind::Illegal`]
//! tokens and the scan continues, leaving the caller to decide whether they
//! are fatal.

use super::token::{lookup_ident, Token, TokenKind};

/// Scanner over an immutable source buffer.
///
/// Scanning is byte-oriented: only ASCII letters, digits, and `_` form
/// identifiers and numbers, and any other byte (including each byte of a
/// multi-byte sequence) is emitted as its own `Illegal` token.
pub struct Lexer {
    input: Vec<u8>,
    /// Index of the byte held in `ch`.
    position: usize,
    /// Index of the next byte to read.
    read_position: usize,
    /// Byte under examination; 0 once the input is exhausted.
    ch: u8,
}

impl Lexer {
    /// Creates a lexer positioned at the first byte of `input`.
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.as_bytes().to_vec(),
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Returns the next token and advances past it.
    ///
    /// Once the input is exhausted this keeps returning `Eof` tokens with an
    /// empty literal; calling it again is harmless.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==")
                } else {
                    Token::new(TokenKind::Assign, "=")
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            b'+' => Token::new(TokenKind::Plus, "+"),
            b'-' => Token::new(TokenKind::Minus, "-"),
            b'*' => Token::new(TokenKind::Asterisk, "*"),
            b'/' => Token::new(TokenKind::Slash, "/"),
            b'<' => Token::new(TokenKind::Lt, "<"),
            b'>' => Token::new(TokenKind::Gt, ">"),
            b',' => Token::new(TokenKind::Comma, ","),
            b';' => Token::new(TokenKind::Semicolon, ";"),
            b'(' => Token::new(TokenKind::LParen, "("),
            b')' => Token::new(TokenKind::RParen, ")"),
            b'{' => Token::new(TokenKind::LBrace, "{"),
            b'}' => Token::new(TokenKind::RBrace, "}"),
            0 => Token::new(TokenKind::Eof, ""),
            ch if is_letter(ch) => {
                // read_identifier already advanced past the word, so return
                // here to skip the shared read_char below.
                let literal = self.read_identifier();
                let kind = lookup_ident(&literal);
                return Token::new(kind, literal);
            }
            ch if ch.is_ascii_digit() => {
                // Same early return as identifiers: the cursor already sits
                // on the byte after the number.
                return Token::new(TokenKind::Int, self.read_number());
            }
            ch => Token::new(TokenKind::Illegal, (ch as char).to_string()),
        };

        self.read_char();
        token
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// Loads the next byte into `ch` and advances both positions.
    fn read_char(&mut self) {
        self.ch = if self.read_position >= self.input.len() {
            0
        } else {
            self.input[self.read_position]
        };
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Looks at the next byte without consuming it.
    fn peek_char(&self) -> u8 {
        if self.read_position >= self.input.len() {
            0
        } else {
            self.input[self.read_position]
        }
    }

    /// Scans forward while the letter/underscore class holds and returns the
    /// matched word.
    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }
        // The scanned range is ASCII letters and underscores only.
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    /// Scans forward while the digit class holds and returns the raw digit
    /// string. No sign, no decimal point, no separators.
    fn read_number(&mut self) -> String {
        let start = self.position;
        while self.ch.is_ascii_digit() {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }
}

/// Identifier constituents: ASCII letters and underscore.
fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}
