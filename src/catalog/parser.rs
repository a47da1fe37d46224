//! Parser for the conductor catalog.

use std::collections::HashMap;

use super::ast::*;
use super::lexer::{parse_value, Lexer, Token, TokenKind};
use crate::error::{Result, SagTensionError};

/// Parser for catalog text.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire catalog.
    pub fn parse(&mut self) -> Result<CatalogAst> {
        let mut ast = CatalogAst::new();

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                TokenKind::Newline => {
                    self.advance()?;
                    continue;
                }
                TokenKind::Directive => {
                    let def = self.parse_directive()?;
                    ast.conductors.push(def);
                }
                _ => {
                    return Err(SagTensionError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }

            // Each entry ends its line
            match self.current.kind {
                TokenKind::Newline => self.advance()?,
                TokenKind::Eof => {}
                _ => {
                    return Err(SagTensionError::parse(
                        self.current.line,
                        format!("unexpected token after entry: {:?}", self.current.text),
                    ));
                }
            }
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(SagTensionError::parse(
                self.current.line,
                format!("expected {:?}, got {:?}", kind, self.current.kind),
            ))
        }
    }

    fn skip_newlines(&mut self) -> Result<()> {
        while self.current.kind == TokenKind::Newline {
            self.advance()?;
        }
        Ok(())
    }

    fn parse_directive(&mut self) -> Result<ConductorDef> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        match directive.to_lowercase().as_str() {
            ".conductor" => self.parse_conductor_def(line),
            _ => Err(SagTensionError::parse(
                line,
                format!("unknown directive: {}", directive),
            )),
        }
    }

    fn parse_conductor_def(&mut self, line: usize) -> Result<ConductorDef> {
        let designation = self.expect(TokenKind::String)?.text;
        if designation.trim().is_empty() {
            return Err(SagTensionError::parse(line, "empty conductor designation"));
        }

        let mut legacy_code = None;
        if self.current.kind == TokenKind::Identifier {
            let key = self.expect(TokenKind::Identifier)?.text;
            if !key.eq_ignore_ascii_case("legacy") {
                return Err(SagTensionError::parse(
                    line,
                    format!("expected 'legacy' or '(', got '{}'", key),
                ));
            }
            self.expect(TokenKind::Equals)?;
            legacy_code = Some(self.expect(TokenKind::String)?.text);
        }

        // Parameters in parentheses, possibly spread over several lines
        self.expect(TokenKind::OpenParen)?;
        let mut params = HashMap::new();
        self.skip_newlines()?;

        while self.current.kind != TokenKind::CloseParen {
            let name_tok = self.expect(TokenKind::Identifier)?;
            let name = name_tok.text.to_lowercase();
            if !CONDUCTOR_PARAMS.contains(&name.as_str()) {
                return Err(SagTensionError::parse(
                    name_tok.line,
                    format!("unknown conductor parameter: {}", name_tok.text),
                ));
            }
            self.expect(TokenKind::Equals)?;

            let value_tok = self.expect(TokenKind::Number)?;
            let value = parse_value(&value_tok.text).ok_or_else(|| {
                SagTensionError::parse(
                    value_tok.line,
                    format!("invalid number: {}", value_tok.text),
                )
            })?;

            if params.insert(name, value).is_some() {
                return Err(SagTensionError::parse(
                    name_tok.line,
                    format!("parameter '{}' given twice", name_tok.text),
                ));
            }
            self.skip_newlines()?;
        }
        self.expect(TokenKind::CloseParen)?;

        Ok(ConductorDef {
            designation,
            legacy_code,
            params,
            line,
        })
    }
}
