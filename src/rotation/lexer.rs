//! Tokenizer for rotation specifications using logos

use logos::Logos;

/// A single rotation specification token.
///
/// Keywords match case-insensitively. No whitespace is skipped: a padded
/// specification such as `" left"` does not lex as a single token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[token("none", ignore(ascii_case))]
    #[token("null", ignore(ascii_case))]
    Unset,

    #[token("left", ignore(ascii_case))]
    Left,

    #[token("right", ignore(ascii_case))]
    Right,

    /// Optionally signed integer or decimal, e.g. `-12`, `+.5`, `45.25`
    #[regex(r"[-+]?([0-9]+|[0-9]*\.[0-9]+)")]
    Number,
}

/// Lex `input` as exactly one token spanning the whole string.
///
/// Returns `None` for empty input, unknown characters, or input that splits
/// into more than one token (`"1.5.3"`, `"90deg"`).
pub fn lex_single(input: &str) -> Option<Token> {
    let mut lexer = Token::lexer(input);
    let token = lexer.next()?.ok()?;
    (lexer.span() == (0..input.len())).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_ignore_case() {
        assert_eq!(lex_single("LEFT"), Some(Token::Left));
        assert_eq!(lex_single("Right"), Some(Token::Right));
        assert_eq!(lex_single("nOnE"), Some(Token::Unset));
        assert_eq!(lex_single("NULL"), Some(Token::Unset));
    }

    #[test]
    fn test_number_forms() {
        for input in ["0", "90", "-90", "+45", "12.5", ".5", "-.25", "007"] {
            assert_eq!(lex_single(input), Some(Token::Number), "input {:?}", input);
        }
    }

    #[test]
    fn test_rejects_partial_matches() {
        for input in ["", " 90", "90 ", "1.", "1.5.3", "90deg", "leftish", "--5", "1e3"] {
            assert_eq!(lex_single(input), None, "input {:?}", input);
        }
    }
}
