//! Token definitions.

use minic_util::{Span, Symbol};
use num_bigint::BigInt;

/// A keyword recognized by the lexer. Keywords are never lexed as plain
/// identifiers, even if they match the identifier grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyword {
    Func,
    Var,
    If,
    Else,
    While,
    Return,
    Pass,
    Int,
}

impl Keyword {
    /// Look up a keyword by its exact spelling, if any.
    pub fn from_str(s: &str) -> Option<Keyword> {
        Some(match s {
            "func" => Keyword::Func,
            "var" => Keyword::Var,
            "if" => Keyword::If,
            "else" => Keyword::Else,
            "while" => Keyword::While,
            "return" => Keyword::Return,
            "pass" => Keyword::Pass,
            "Int" => Keyword::Int,
            _ => return None,
        })
    }
}

/// Single- or multi-character punctuation/operator spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Punct {
    LParen,
    RParen,
    LBrace,
    RBrace,
    Colon,
    Comma,
}

/// The operator spellings the parser actually knows about. Any other
/// maximal run of operator characters the lexer emits as [`TokenKind::Operator`]
/// with a spelling that is not one of these — and is not a bare
/// single-character operator either — is rejected by the parser, since the
/// lexer treats a run of adjacent operator characters as one token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Shl,
    Shr,
    Lt,
    Le,
    Gt,
    Ge,
    EqEq,
    Ne,
    Amp,
    Caret,
    Pipe,
    AndAnd,
    OrOr,
    Eq,
    Tilde,
    Bang,
}

impl Op {
    /// Spelling this operator was lexed from, used only for diagnostics.
    pub fn spelling(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Star => "*",
            Op::Slash => "/",
            Op::Percent => "%",
            Op::Shl => "<<",
            Op::Shr => ">>",
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Gt => ">",
            Op::Ge => ">=",
            Op::EqEq => "==",
            Op::Ne => "!=",
            Op::Amp => "&",
            Op::Caret => "^",
            Op::Pipe => "|",
            Op::AndAnd => "&&",
            Op::OrOr => "||",
            Op::Eq => "=",
            Op::Tilde => "~",
            Op::Bang => "!",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Ident(Symbol),
    Number(BigInt),
    Keyword(Keyword),
    Punct(Punct),
    /// A recognized operator spelling.
    Operator(Op),
    /// A maximal run of operator characters that does not match any known
    /// spelling (e.g. `+-`, `<<<`). Carried through to the parser, which is
    /// the layer that reports it as an error.
    UnknownOperator(String),
    Eof,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
