//! Top-level and body-level declaration parsing.

use minic_lex::{Keyword, Punct, TokenKind};
use minic_util::Symbol;

use crate::ast::{Body, FuncDecl, Param, Program, Type, VarDecl};
use crate::error::ParseError;
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_program_inner(&mut self) -> Result<Program, ParseError> {
        let mut globals = Vec::new();
        let mut funcs = Vec::new();

        while matches!(self.current(), TokenKind::Keyword(Keyword::Var)) {
            globals.push(self.parse_var_decl()?);
        }

        if !matches!(self.current(), TokenKind::Keyword(Keyword::Func)) {
            return Err(self.error("`func`"));
        }

        while matches!(self.current(), TokenKind::Keyword(Keyword::Func)) {
            funcs.push(self.parse_func_decl()?);
        }

        if matches!(self.current(), TokenKind::Keyword(Keyword::Var)) {
            let span = self.current_span();
            let err = ParseError::VarOutOfPosition {
                reason: "`var` must appear before every `func` declaration".to_string(),
                span,
            };
            self.handler.error(err.to_string(), span);
            return Err(err);
        }

        if !self.is_eof() {
            return Err(self.error("end of input"));
        }

        Ok(Program { globals, funcs })
    }

    /// `var NAME : TYPE`
    fn parse_var_decl(&mut self) -> Result<VarDecl, ParseError> {
        let start = self.current_span();
        self.expect_keyword(Keyword::Var)?;
        let name = self.expect_ident()?;
        self.expect_punct(Punct::Colon)?;
        let ty = self.parse_type()?;
        Ok(VarDecl {
            name,
            ty,
            span: start.to(self.prev_span()),
        })
    }

    /// `func NAME ( NAME : TYPE {, NAME : TYPE}* ) : TYPE { BODY }`
    fn parse_func_decl(&mut self) -> Result<FuncDecl, ParseError> {
        let start = self.current_span();
        self.expect_keyword(Keyword::Func)?;
        let name = self.expect_ident()?;
        self.expect_punct(Punct::LParen)?;

        let mut params = Vec::new();
        if !matches!(self.current(), TokenKind::Punct(Punct::RParen)) {
            params.push(self.parse_param()?);
            while matches!(self.current(), TokenKind::Punct(Punct::Comma)) {
                self.advance();
                params.push(self.parse_param()?);
            }
        }
        self.expect_punct(Punct::RParen)?;
        self.expect_punct(Punct::Colon)?;
        let ret_ty = self.parse_type()?;

        self.expect_punct(Punct::LBrace)?;
        let body = self.parse_body()?;
        self.expect_punct(Punct::RBrace)?;

        Ok(FuncDecl {
            name,
            params,
            ret_ty,
            body,
            span: start.to(self.prev_span()),
        })
    }

    fn parse_param(&mut self) -> Result<Param, ParseError> {
        let start = self.current_span();
        let name = self.expect_ident()?;
        self.expect_punct(Punct::Colon)?;
        let ty = self.parse_type()?;
        Ok(Param {
            name,
            ty,
            span: start.to(self.prev_span()),
        })
    }

    /// `var*` then `stmt*`; a `var` after the first statement is an error.
    pub(crate) fn parse_body(&mut self) -> Result<Body, ParseError> {
        let mut locals = Vec::new();
        while matches!(self.current(), TokenKind::Keyword(Keyword::Var)) {
            locals.push(self.parse_var_decl()?);
        }

        let mut stmts = Vec::new();
        while !matches!(
            self.current(),
            TokenKind::Punct(Punct::RBrace) | TokenKind::Eof
        ) {
            if matches!(self.current(), TokenKind::Keyword(Keyword::Var)) {
                let span = self.current_span();
                let err = ParseError::VarOutOfPosition {
                    reason: "locals must precede all statements in a body".to_string(),
                    span,
                };
                self.handler.error(err.to_string(), span);
                return Err(err);
            }
            stmts.push(self.parse_stmt()?);
        }

        Ok(Body { locals, stmts })
    }

    pub(crate) fn parse_type(&mut self) -> Result<Type, ParseError> {
        self.expect_keyword(Keyword::Int)?;
        Ok(Type::Int)
    }

    // -- small shared helpers -------------------------------------------------

    pub(crate) fn expect_keyword(&mut self, kw: Keyword) -> Result<(), ParseError> {
        if matches!(self.current(), TokenKind::Keyword(k) if *k == kw) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(format!("keyword `{kw:?}`")))
        }
    }

    pub(crate) fn expect_punct(&mut self, p: Punct) -> Result<(), ParseError> {
        if matches!(self.current(), TokenKind::Punct(cur) if *cur == p) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(format!("`{p:?}`")))
        }
    }

    pub(crate) fn expect_ident(&mut self) -> Result<Symbol, ParseError> {
        if let TokenKind::Ident(name) = self.current() {
            let name = *name;
            self.advance();
            Ok(name)
        } else {
            Err(self.error("identifier"))
        }
    }

    /// Span of the token just consumed, used to build spans that cover a
    /// whole production.
    pub(crate) fn prev_span(&self) -> minic_util::Span {
        let idx = self.pos.saturating_sub(1);
        self.tokens[idx].span
    }
}
