//! Operator lexing: greedily takes the longest run of operator characters
//! as one token (spec.md §4.1). The set of valid multi-character operators
//! is fixed; a longer run, or a two-character run outside that fixed set,
//! is still emitted as a single token but flagged `UnknownOperator` for the
//! parser to reject.

use crate::lexer::core::Lexer;
use crate::token::{Op, TokenKind};

const MULTI_CHAR_OPS: &[(&str, Op)] = &[
    ("<<", Op::Shl),
    (">>", Op::Shr),
    (">=", Op::Ge),
    ("<=", Op::Le),
    ("==", Op::EqEq),
    ("!=", Op::Ne),
    ("&&", Op::AndAnd),
    ("||", Op::OrOr),
];

fn single_char_op(c: char) -> Option<Op> {
    Some(match c {
        '+' => Op::Plus,
        '-' => Op::Minus,
        '*' => Op::Star,
        '/' => Op::Slash,
        '%' => Op::Percent,
        '<' => Op::Lt,
        '>' => Op::Gt,
        '=' => Op::Eq,
        '!' => Op::Bang,
        '&' => Op::Amp,
        '|' => Op::Pipe,
        '^' => Op::Caret,
        '~' => Op::Tilde,
        _ => return None,
    })
}

impl<'a> Lexer<'a> {
    pub(crate) fn lex_operator(&mut self) -> TokenKind {
        let start = self.cursor().position();
        while is_operator_char(self.cursor().current() as char) {
            self.cursor().advance();
        }
        let end = self.cursor().position();
        let run = self.cursor().slice(start, end);

        if run.len() == 1 {
            let c = run.chars().next().unwrap();
            return TokenKind::Operator(single_char_op(c).expect("scanned an operator char"));
        }

        for (spelling, op) in MULTI_CHAR_OPS {
            if *spelling == run {
                return TokenKind::Operator(*op);
            }
        }

        TokenKind::UnknownOperator(run.to_string())
    }
}

fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '<' | '>' | '=' | '!' | '&' | '|' | '^' | '~'
    )
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::{Op, TokenKind};
    use minic_util::Handler;

    fn lex_one(source: &str) -> TokenKind {
        let handler = Handler::new();
        let lexer = Lexer::new(source, &handler);
        lexer.tokenize().unwrap().into_iter().next().unwrap().kind
    }

    #[test]
    fn single_char_operators() {
        assert_eq!(lex_one("+"), TokenKind::Operator(Op::Plus));
        assert_eq!(lex_one("~"), TokenKind::Operator(Op::Tilde));
    }

    #[test]
    fn multi_char_operators() {
        assert_eq!(lex_one("<<"), TokenKind::Operator(Op::Shl));
        assert_eq!(lex_one("=="), TokenKind::Operator(Op::EqEq));
        assert_eq!(lex_one("&&"), TokenKind::Operator(Op::AndAnd));
    }

    #[test]
    fn adjacent_operators_become_one_unknown_token() {
        // "+-" is a single maximal run, not two tokens.
        assert_eq!(
            lex_one("+-"),
            TokenKind::UnknownOperator("+-".to_string())
        );
    }

    #[test]
    fn overlong_run_is_unknown() {
        assert_eq!(
            lex_one("<<<"),
            TokenKind::UnknownOperator("<<<".to_string())
        );
    }
}
