//! Lexer (tokenizer) for the conductor catalog.

use crate::error::{Result, SagTensionError};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text (without quotes for strings)
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A parameter or keyword name
    Identifier,
    /// A number, possibly with an SI suffix
    Number,
    /// A double-quoted string
    String,
    /// A directive (starts with '.')
    Directive,
    /// Open parenthesis '('
    OpenParen,
    /// Close parenthesis ')'
    CloseParen,
    /// Equals sign '='
    Equals,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing catalog input.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let line = self.line;
        let column = self.column;
        let token = |kind, text: String| Token {
            kind,
            text,
            line,
            column,
        };

        let ch = match self.chars.peek() {
            Some(&(_, ch)) => ch,
            None => return Ok(token(TokenKind::Eof, String::new())),
        };

        let tok = match ch {
            '\n' => {
                self.advance();
                token(TokenKind::Newline, "\n".to_string())
            }
            '.' => {
                self.advance();
                let name = self.read_identifier();
                if name.is_empty() {
                    return Err(SagTensionError::lexer(line, column, "empty directive"));
                }
                token(TokenKind::Directive, format!(".{}", name))
            }
            '(' => {
                self.advance();
                token(TokenKind::OpenParen, "(".to_string())
            }
            ')' => {
                self.advance();
                token(TokenKind::CloseParen, ")".to_string())
            }
            '=' => {
                self.advance();
                token(TokenKind::Equals, "=".to_string())
            }
            '"' => {
                self.advance();
                let text = self.read_string(line, column)?;
                token(TokenKind::String, text)
            }
            '-' | '+' | '0'..='9' => token(TokenKind::Number, self.read_number()),
            _ if ch.is_alphabetic() || ch == '_' => {
                token(TokenKind::Identifier, self.read_identifier())
            }
            _ => {
                return Err(SagTensionError::lexer(
                    line,
                    column,
                    format!("unexpected character '{}'", ch),
                ));
            }
        };

        Ok(tok)
    }

    fn advance(&mut self) -> Option<char> {
        let (_, ch) = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.advance();
            } else if ch == '#' || ch == ';' {
                // Skip comment until end of line
                while let Some(&(_, c)) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut text = String::new();
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        text
    }

    fn read_string(&mut self, line: usize, column: usize) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.advance() {
                Some('"') => return Ok(text),
                Some('\n') | None => {
                    return Err(SagTensionError::lexer(line, column, "unterminated string"));
                }
                Some(ch) => text.push(ch),
            }
        }
    }

    fn read_digits(&mut self, text: &mut String) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> String {
        let mut text = String::new();

        // Optional sign
        if let Some(&(_, ch)) = self.chars.peek() {
            if ch == '-' || ch == '+' {
                text.push(ch);
                self.advance();
            }
        }

        self.read_digits(&mut text);

        // Decimal part
        if let Some(&(_, '.')) = self.chars.peek() {
            text.push('.');
            self.advance();
            self.read_digits(&mut text);
        }

        // Exponent part
        if let Some(&(_, ch)) = self.chars.peek() {
            if ch == 'e' || ch == 'E' {
                text.push(ch);
                self.advance();
                if let Some(&(_, sign)) = self.chars.peek() {
                    if sign == '-' || sign == '+' {
                        text.push(sign);
                        self.advance();
                    }
                }
                self.read_digits(&mut text);
            }
        }

        // Unit suffix
        if let Some(&(_, ch)) = self.chars.peek() {
            if is_suffix(ch) {
                text.push(ch);
                self.advance();
            }
        }

        text
    }
}

fn is_suffix(ch: char) -> bool {
    matches!(ch, 'p' | 'n' | 'u' | 'µ' | 'm' | 'k' | 'K' | 'M' | 'G')
}

/// Parse a number string with optional SI suffix.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    let last = text.chars().last()?;

    let multiplier = match last {
        'p' => 1e-12,
        'n' => 1e-9,
        'u' | 'µ' => 1e-6,
        'm' => 1e-3,
        'k' | 'K' => 1e3,
        'M' => 1e6,
        'G' => 1e9,
        _ => 1.0,
    };
    let num_str = if is_suffix(last) {
        &text[..text.len() - last.len_utf8()]
    } else {
        text
    };

    num_str
        .parse::<f64>()
        .ok()
        .map(|v| v * multiplier)
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_value() {
        assert_relative_eq!(parse_value("6.9k").unwrap(), 6900.0);
        assert_relative_eq!(parse_value("19.3u").unwrap(), 19.3e-6, max_relative = 1e-12);
        assert_relative_eq!(parse_value("19.3µ").unwrap(), 19.3e-6, max_relative = 1e-12);
        assert_relative_eq!(parse_value("1.93e-5").unwrap(), 1.93e-5);
        assert_relative_eq!(parse_value("932").unwrap(), 932.0);
        assert_relative_eq!(parse_value("-5").unwrap(), -5.0);
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("k"), None);
        assert_eq!(parse_value("abc"), None);
    }

    #[test]
    fn test_lexer_conductor_line() {
        let mut lexer = Lexer::new(".conductor \"LA 380\" legacy=\"LA-380\" (mass=932)");

        let expected = [
            (TokenKind::Directive, ".conductor"),
            (TokenKind::String, "LA 380"),
            (TokenKind::Identifier, "legacy"),
            (TokenKind::Equals, "="),
            (TokenKind::String, "LA-380"),
            (TokenKind::OpenParen, "("),
            (TokenKind::Identifier, "mass"),
            (TokenKind::Equals, "="),
            (TokenKind::Number, "932"),
            (TokenKind::CloseParen, ")"),
            (TokenKind::Eof, ""),
        ];
        for (kind, text) in expected {
            let tok = lexer.next_token().unwrap();
            assert_eq!(tok.kind, kind);
            assert_eq!(tok.text, text);
        }
    }

    #[test]
    fn test_lexer_tracks_lines() {
        let mut lexer = Lexer::new("# header\n\n  mass=1");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Newline);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Newline);
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.text, "mass");
        assert_eq!(tok.line, 3);
        assert_eq!(tok.column, 3);
    }

    #[test]
    fn test_lexer_unterminated_string() {
        let mut lexer = Lexer::new(".conductor \"LA 380\n");
        lexer.next_token().unwrap();
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, SagTensionError::LexerError { line: 1, column: 12, .. }));
    }

    #[test]
    fn test_lexer_unexpected_character() {
        let mut lexer = Lexer::new("mass @ 1");
        lexer.next_token().unwrap();
        assert!(lexer.next_token().is_err());
    }
}
