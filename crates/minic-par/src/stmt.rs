//! Statement grammar: if/else, while, block, return, bare expressions, pass.

use minic_lex::{Keyword, Punct, TokenKind};

use crate::ast::{BinOp, Expr, Stmt};
use crate::error::ParseError;
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.current() {
            TokenKind::Keyword(Keyword::If) => self.parse_if(),
            TokenKind::Keyword(Keyword::While) => self.parse_while(),
            TokenKind::Keyword(Keyword::Return) => self.parse_return(),
            TokenKind::Keyword(Keyword::Pass) => self.parse_pass(),
            TokenKind::Punct(Punct::LBrace) => self.parse_block(),
            _ => self.parse_expr_stmt(),
        }
    }

    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        self.expect_keyword(Keyword::If)?;
        let cond = self.parse_expr()?;
        let then_branch = Box::new(self.parse_block()?);

        let else_branch = if matches!(self.current(), TokenKind::Keyword(Keyword::Else)) {
            self.advance();
            match self.current() {
                TokenKind::Keyword(Keyword::If) => Some(Box::new(self.parse_if()?)),
                TokenKind::Punct(Punct::LBrace) => Some(Box::new(self.parse_block()?)),
                _ => {
                    let span = self.current_span();
                    let err = ParseError::MissingElseBody { span };
                    self.handler.error(err.to_string(), span);
                    return Err(err);
                }
            }
        } else {
            None
        };

        Ok(Stmt::If {
            cond,
            then_branch,
            else_branch,
            span: start.to(self.prev_span()),
        })
    }

    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        self.expect_keyword(Keyword::While)?;
        let cond = self.parse_expr()?;
        let body = Box::new(self.parse_block()?);
        Ok(Stmt::While {
            cond,
            body,
            span: start.to(self.prev_span()),
        })
    }

    fn parse_block(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        self.expect_punct(Punct::LBrace)?;
        let mut stmts = Vec::new();
        while !matches!(
            self.current(),
            TokenKind::Punct(Punct::RBrace) | TokenKind::Eof
        ) {
            stmts.push(self.parse_stmt()?);
        }
        self.expect_punct(Punct::RBrace)?;
        Ok(Stmt::Block {
            stmts,
            span: start.to(self.prev_span()),
        })
    }

    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        self.expect_keyword(Keyword::Return)?;
        let expr = self.parse_expr()?;
        Ok(Stmt::Return {
            expr,
            span: start.to(self.prev_span()),
        })
    }

    fn parse_pass(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        self.expect_keyword(Keyword::Pass)?;
        Ok(Stmt::Pass { span: start })
    }

    /// A bare expression statement. Assignment (`x = expr`) is just the
    /// lowest-precedence binary operator, parsed the same way any other
    /// expression is; the lvalue check below rejects anything but a bare
    /// identifier on the left of `=`.
    fn parse_expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        let expr = self.parse_expr()?;

        if let Expr::Binary {
            op: BinOp::Assign,
            ref lhs,
            ..
        } = expr
        {
            if !matches!(**lhs, Expr::Var { .. }) {
                let span = lhs.span();
                let err = ParseError::NonLvalueAssignTarget { span };
                self.handler.error(err.to_string(), span);
                return Err(err);
            }
        }

        Ok(Stmt::ExprStmt {
            expr,
            span: start.to(self.prev_span()),
        })
    }
}
