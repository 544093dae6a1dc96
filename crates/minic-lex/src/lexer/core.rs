//! Core lexer: whitespace/comment skipping and per-character dispatch.

use minic_util::{Handler, Span};

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Punct, Token, TokenKind};

/// Lexer for the minic language.
///
/// Transforms source text into a stream of [`Token`]s. Whitespace and
/// comments are skipped entirely; they never surface as tokens.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    handler: &'a Handler,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
        }
    }

    /// Lex the entire source into a token stream terminated by `Eof`.
    ///
    /// Stops at the first lexical error: that error is both emitted to the
    /// handler and returned, since spec.md §7 requires all front-end
    /// errors to abort compilation before any later phase runs.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            let is_eof = matches!(tok.kind, TokenKind::Eof);
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        log::debug!("lexed {} tokens", tokens.len());
        Ok(tokens)
    }

    fn start_span(&self) -> (usize, u32, u32) {
        (
            self.cursor.position(),
            self.cursor.line(),
            self.cursor.column(),
        )
    }

    fn span_from(&self, start: (usize, u32, u32)) -> Span {
        Span::new(start.0, self.cursor.position(), start.1, start.2)
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments()?;

        let start = self.start_span();
        if self.cursor.is_at_end() {
            return Ok(Token::new(TokenKind::Eof, self.span_from(start)));
        }

        let c = self.cursor.current() as char;
        let kind = match c {
            '(' => {
                self.cursor.advance();
                TokenKind::Punct(Punct::LParen)
            }
            ')' => {
                self.cursor.advance();
                TokenKind::Punct(Punct::RParen)
            }
            '{' => {
                self.cursor.advance();
                TokenKind::Punct(Punct::LBrace)
            }
            '}' => {
                self.cursor.advance();
                TokenKind::Punct(Punct::RBrace)
            }
            ':' => {
                self.cursor.advance();
                TokenKind::Punct(Punct::Colon)
            }
            ',' => {
                self.cursor.advance();
                TokenKind::Punct(Punct::Comma)
            }
            '0'..='9' => self.lex_number(start)?,
            c if is_ident_start(c) => self.lex_identifier(),
            c if is_operator_char(c) => self.lex_operator(),
            other => {
                let span = self.span_from(start);
                let err = LexError::UnknownChar { ch: other, span };
                self.handler.error(err.to_string(), span);
                return Err(err);
            }
        };

        Ok(Token::new(kind, self.span_from(start)))
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | b'\r' | b'\n' => {
                    self.cursor.advance();
                }
                b'#' => self.skip_line_comment(),
                b'\'' | b'"' => self.skip_block_comment()?,
                _ => break,
            }
        }
        Ok(())
    }

    pub(crate) fn cursor(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    pub(crate) fn handler(&self) -> &'a Handler {
        self.handler
    }

    pub(crate) fn span_here(&self, start: (usize, u32, u32)) -> Span {
        self.span_from(start)
    }

    pub(crate) fn start(&self) -> (usize, u32, u32) {
        self.start_span()
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '<' | '>' | '=' | '!' | '&' | '|' | '^' | '~'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        let lexer = Lexer::new(source, &handler);
        lexer
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn skips_whitespace_and_line_comments() {
        let kinds = lex("  # a comment\n  ( )  ");
        assert_eq!(
            kinds,
            vec![
                TokenKind::Punct(Punct::LParen),
                TokenKind::Punct(Punct::RParen),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn unknown_character_is_an_error() {
        let handler = Handler::new();
        let lexer = Lexer::new("@", &handler);
        let err = lexer.tokenize().unwrap_err();
        assert!(matches!(err, LexError::UnknownChar { ch: '@', .. }));
        assert!(handler.has_errors());
    }
}
