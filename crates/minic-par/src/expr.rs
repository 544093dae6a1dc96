//! Expression parsing: precedence climbing over a binding-power table, with
//! a separate tight-binding prefix layer for unary operators.

use minic_lex::{Op, Punct, TokenKind};

use crate::ast::{BinOp, Expr, UnOp};
use crate::error::ParseError;
use crate::Parser;

/// `(associativity-aware left bp, right bp)` for each binary operator. Left
/// bp must beat the caller's minimum for the operator to be consumed at
/// all; right bp is what the right-hand side is parsed against. Giving an
/// operator `right_bp < left_bp` makes it right-associative, since a
/// further occurrence of the same operator on the right still clears that
/// lower bar.
fn infix_binding_power(op: Op) -> Option<(BinOp, u8, u8)> {
    Some(match op {
        Op::Eq => (BinOp::Assign, 1, 0),
        Op::OrOr => (BinOp::Or, 10, 11),
        Op::AndAnd => (BinOp::And, 20, 21),
        Op::Pipe => (BinOp::BitOr, 30, 31),
        Op::Caret => (BinOp::BitXor, 40, 41),
        Op::Amp => (BinOp::BitAnd, 50, 51),
        Op::EqEq => (BinOp::Eq, 60, 61),
        Op::Ne => (BinOp::Ne, 60, 61),
        Op::Lt => (BinOp::Lt, 70, 71),
        Op::Le => (BinOp::Le, 70, 71),
        Op::Gt => (BinOp::Gt, 70, 71),
        Op::Ge => (BinOp::Ge, 70, 71),
        Op::Shl => (BinOp::Shl, 80, 81),
        Op::Shr => (BinOp::Shr, 80, 81),
        Op::Plus => (BinOp::Add, 90, 91),
        Op::Minus => (BinOp::Sub, 90, 91),
        Op::Star => (BinOp::Mul, 100, 101),
        Op::Slash => (BinOp::Div, 100, 101),
        Op::Percent => (BinOp::Mod, 100, 101),
        Op::Tilde | Op::Bang => return None,
    })
}

fn prefix_op(op: Op) -> Option<UnOp> {
    match op {
        Op::Plus => Some(UnOp::Pos),
        Op::Minus => Some(UnOp::Neg),
        Op::Tilde => Some(UnOp::BitNot),
        Op::Bang => Some(UnOp::Not),
        _ => None,
    }
}

impl<'a> Parser<'a> {
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_expr_bp(0)
    }

    fn parse_expr_bp(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_unary()?;

        loop {
            let op = match self.current() {
                TokenKind::Operator(op) => *op,
                _ => break,
            };
            let Some((binop, l_bp, r_bp)) = infix_binding_power(op) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }

            let start = lhs.span();
            self.advance();
            let rhs = self.parse_expr_bp(r_bp)?;
            let span = start.to(rhs.span());
            lhs = Expr::Binary {
                op: binop,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                span,
            };
        }

        Ok(lhs)
    }

    /// Unary prefix operators bind tighter than every binary operator, so
    /// they are parsed in their own layer rather than given a binding power
    /// in the infix table.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if let TokenKind::Operator(op) = self.current() {
            if let Some(unop) = prefix_op(*op) {
                let start = self.current_span();
                self.advance();
                let arg = self.parse_unary()?;
                let span = start.to(arg.span());
                return Ok(Expr::Unary {
                    op: unop,
                    arg: Box::new(arg),
                    span,
                });
            }
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.current().clone() {
            TokenKind::Number(value) => {
                let span = self.current_span();
                self.advance();
                Ok(Expr::Number { value, span })
            }
            TokenKind::Ident(name) => {
                let span = self.current_span();
                self.advance();
                if matches!(self.current(), TokenKind::Punct(Punct::LParen)) {
                    self.parse_call(name, span)
                } else {
                    let id = self.fresh_node_id();
                    Ok(Expr::Var { id, name, span })
                }
            }
            TokenKind::Punct(Punct::LParen) => {
                self.advance();
                let inner = self.parse_expr_bp(0)?;
                self.expect_punct(Punct::RParen)?;
                Ok(inner)
            }
            TokenKind::Operator(op) => {
                let span = self.current_span();
                let err = ParseError::UnknownOperator {
                    spelling: op.spelling().to_string(),
                    span,
                };
                self.handler.error(err.to_string(), span);
                Err(err)
            }
            TokenKind::UnknownOperator(spelling) => {
                let span = self.current_span();
                let err = ParseError::UnknownOperator { spelling, span };
                self.handler.error(err.to_string(), span);
                Err(err)
            }
            _ => Err(self.error("an expression")),
        }
    }

    /// `callee(name: expr {, name: expr}*)`. Call-site argument order is
    /// source order here; the code generator is what reorders arguments to
    /// match the callee's declared parameter order.
    fn parse_call(&mut self, callee: minic_util::Symbol, start: minic_util::Span) -> Result<Expr, ParseError> {
        self.expect_punct(Punct::LParen)?;
        let mut args = Vec::new();
        if !matches!(self.current(), TokenKind::Punct(Punct::RParen)) {
            args.push(self.parse_call_arg()?);
            while matches!(self.current(), TokenKind::Punct(Punct::Comma)) {
                self.advance();
                args.push(self.parse_call_arg()?);
            }
        }
        self.expect_punct(Punct::RParen)?;
        let id = self.fresh_node_id();
        let span = start.to(self.prev_span());
        Ok(Expr::Call {
            id,
            callee,
            args,
            span,
        })
    }

    fn parse_call_arg(&mut self) -> Result<(minic_util::Symbol, Expr), ParseError> {
        let name = self.expect_ident()?;
        self.expect_punct(Punct::Colon)?;
        let value = self.parse_expr_bp(0)?;
        Ok((name, value))
    }
}
