//! Interactive read-lex-print loop.
//!
//! Each input line gets a fresh [`Lexer`]; its tokens are printed one per
//! line, kind first and literal after, until end of input. Token kinds are
//! colour-coded so keywords, literals, and illegal bytes stand out in a
//! terminal session.

use std::io::{self, BufRead, Write};

use crossterm::style::{StyledContent, Stylize};

use crate::parser::lexer::Lexer;
use crate::parser::token::TokenKind;

/// Prompt printed before every input line.
pub const PROMPT: &str = ">> ";

/// Runs the loop until `input` is exhausted (Ctrl-D on a terminal).
pub fn start(input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut lexer = Lexer::new(&line);
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            writeln!(output, "{} {:?}", styled_kind(token.kind), token.literal)?;
        }
    }
}

/// Pads the kind to a fixed column and colours it by category.
fn styled_kind(kind: TokenKind) -> StyledContent<String> {
    // Pad before styling: ANSI escape bytes would confuse width formatting.
    let text = format!("{:<9}", kind.to_string());
    match kind {
        TokenKind::Illegal => text.red(),
        TokenKind::Ident => text.yellow(),
        TokenKind::Int => text.magenta(),
        kind if kind.is_keyword() => text.cyan(),
        _ => text.stylize(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repl_echoes_tokens_per_line() {
        let mut input = "let x = 5;\n".as_bytes();
        let mut output = Vec::new();

        start(&mut input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        // One line per token, plus the prompts.
        assert_eq!(text.matches('\n').count(), 5);
        assert!(text.contains("LET"));
        assert!(text.contains("\"x\""));
        assert!(text.contains("\"5\""));
        assert!(text.contains(";"));
    }

    #[test]
    fn test_repl_exits_on_end_of_input() {
        let mut input = "".as_bytes();
        let mut output = Vec::new();

        start(&mut input, &mut output).unwrap();

        // Only the first prompt was written.
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, PROMPT);
    }
}
