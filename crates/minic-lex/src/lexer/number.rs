//! Numeric literal lexing: decimal, and `0x`/`0o`/`0b` prefixed bases.
//!
//! Every literal is non-negative; `-5` lexes as a unary minus operator
//! applied to the literal `5`, never as a signed literal (spec.md §4.1).

use num_bigint::BigInt;

use crate::error::LexError;
use crate::lexer::core::Lexer;
use crate::token::TokenKind;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_number(
        &mut self,
        start: (usize, u32, u32),
    ) -> Result<TokenKind, LexError> {
        let text_start = self.cursor().position();

        let radix = if self.cursor().current() == b'0' {
            match self.cursor().peek_at(1) {
                b'x' | b'X' => Some(16),
                b'o' | b'O' => Some(8),
                b'b' | b'B' => Some(2),
                _ => None,
            }
        } else {
            None
        };

        let digits_start = if radix.is_some() {
            self.cursor().advance(); // '0'
            self.cursor().advance(); // prefix letter
            self.cursor().position()
        } else {
            text_start
        };

        while !self.cursor().is_at_end() && is_literal_continue(self.cursor().current() as char) {
            self.cursor().advance();
        }

        let digits_end = self.cursor().position();
        let digits = self.cursor().slice(digits_start, digits_end);
        let full_text = self.cursor().slice(text_start, digits_end);

        let radix = radix.unwrap_or(10);
        if digits.is_empty() {
            let span = self.span_here(start);
            let err = LexError::MalformedNumber {
                text: full_text.to_string(),
                span,
            };
            self.handler().error(err.to_string(), span);
            return Err(err);
        }

        match BigInt::parse_bytes(digits.as_bytes(), radix) {
            Some(value) => Ok(TokenKind::Number(value)),
            None => {
                let span = self.span_here(start);
                let err = LexError::MalformedNumber {
                    text: full_text.to_string(),
                    span,
                };
                self.handler().error(err.to_string(), span);
                Err(err)
            }
        }
    }
}

/// Accepts every character that could plausibly belong to the literal
/// being scanned (any base's digit alphabet), letting `BigInt::parse_bytes`
/// reject anything actually invalid for the chosen radix with a single
/// error path.
fn is_literal_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::TokenKind;
    use minic_util::Handler;
    use num_bigint::BigInt;

    fn lex_one(source: &str) -> TokenKind {
        let handler = Handler::new();
        let lexer = Lexer::new(source, &handler);
        lexer.tokenize().unwrap().into_iter().next().unwrap().kind
    }

    #[test]
    fn decimal_literal() {
        assert_eq!(lex_one("12345"), TokenKind::Number(BigInt::from(12345)));
    }

    #[test]
    fn hex_literal() {
        assert_eq!(lex_one("0xFF"), TokenKind::Number(BigInt::from(255)));
    }

    #[test]
    fn octal_literal() {
        assert_eq!(lex_one("0o17"), TokenKind::Number(BigInt::from(15)));
    }

    #[test]
    fn binary_literal() {
        assert_eq!(lex_one("0b1010"), TokenKind::Number(BigInt::from(10)));
    }

    #[test]
    fn big_integer_beyond_64_bits() {
        let expected: BigInt = "20000000000000000000000".parse().unwrap();
        assert_eq!(lex_one("20000000000000000000000"), TokenKind::Number(expected));
    }

    #[test]
    fn malformed_hex_is_an_error() {
        let handler = Handler::new();
        let lexer = Lexer::new("0xGG", &handler);
        let err = lexer.tokenize().unwrap_err();
        assert!(matches!(err, crate::error::LexError::MalformedNumber { .. }));
    }
}
