//! Identifier and keyword lexing.

use minic_util::Symbol;

use crate::lexer::core::{is_ident_continue, Lexer};
use crate::token::{Keyword, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_identifier(&mut self) -> TokenKind {
        let start = self.cursor().position();
        while !self.cursor().is_at_end() && is_ident_continue(self.cursor().current() as char) {
            self.cursor().advance();
        }
        let end = self.cursor().position();
        let text = self.cursor().slice(start, end);

        match Keyword::from_str(text) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Ident(Symbol::intern(text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::{Keyword, TokenKind};
    use minic_util::{Handler, Symbol};

    fn lex_one(source: &str) -> TokenKind {
        let handler = Handler::new();
        let lexer = Lexer::new(source, &handler);
        lexer.tokenize().unwrap().into_iter().next().unwrap().kind
    }

    #[test]
    fn recognizes_keywords() {
        assert_eq!(lex_one("func"), TokenKind::Keyword(Keyword::Func));
        assert_eq!(lex_one("while"), TokenKind::Keyword(Keyword::While));
        assert_eq!(lex_one("Int"), TokenKind::Keyword(Keyword::Int));
    }

    #[test]
    fn plain_identifier_is_not_a_keyword() {
        assert_eq!(lex_one("funky"), TokenKind::Ident(Symbol::intern("funky")));
    }

    #[test]
    fn underscore_prefixed_identifiers_are_allowed() {
        assert_eq!(lex_one("_x1"), TokenKind::Ident(Symbol::intern("_x1")));
    }
}
