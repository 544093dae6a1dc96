//! Comment skipping: `#` line comments and `'…'`/`"…"` block comments.

use crate::error::LexError;
use crate::lexer::core::Lexer;

impl<'a> Lexer<'a> {
    /// `#` runs to the next newline or end of input.
    pub(crate) fn skip_line_comment(&mut self) {
        debug_assert_eq!(self.cursor().current(), b'#');
        self.cursor().advance();
        while !self.cursor().is_at_end() && self.cursor().current() != b'\n' {
            self.cursor().advance();
        }
    }

    /// `'…'` or `"…"` extends to the matching closing quote of the same
    /// kind; nesting is not supported. Reaching end of input first is a
    /// lex error.
    pub(crate) fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start = self.start();
        let quote = self.cursor().current();
        self.cursor().advance();
        loop {
            if self.cursor().is_at_end() {
                let span = self.span_here(start);
                let err = LexError::UnterminatedBlockComment { span };
                self.handler().error(err.to_string(), span);
                return Err(err);
            }
            if self.cursor().current() == quote {
                self.cursor().advance();
                return Ok(());
            }
            self.cursor().advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minic_util::Handler;

    #[test]
    fn unterminated_block_comment_is_an_error() {
        let handler = Handler::new();
        let lexer = Lexer::new("'never closed", &handler);
        let err = lexer.tokenize().unwrap_err();
        assert!(matches!(err, LexError::UnterminatedBlockComment { .. }));
    }

    #[test]
    fn block_comment_does_not_nest() {
        let handler = Handler::new();
        // The inner quote closes the comment; the trailing "still open"
        // text is then lexed as bare identifiers, not comment body.
        let lexer = Lexer::new("'a' still", &handler);
        let tokens = lexer.tokenize().unwrap();
        // "still" lexes as an identifier token plus Eof.
        assert_eq!(tokens.len(), 2);
    }
}
