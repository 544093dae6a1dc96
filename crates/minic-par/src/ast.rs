//! AST node definitions.
//!
//! Nodes are closed sum types matched exhaustively by the binder, code
//! generator, and dumpers — no virtual dispatch, one pattern match per
//! pass.

use minic_util::{Span, Symbol};
use num_bigint::BigInt;

/// A unique id assigned to every [`Expr::Var`] and [`Expr::Call`] node at
/// parse time. The binder resolves each id to a slot/callee independently
/// of the AST shape, instead of mutating the AST in place.
pub type NodeId = u32;

/// The language has exactly one type today; the variant exists so adding a
/// second type later does not require renaming every call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Type {
    Int,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VarDecl {
    pub name: Symbol,
    pub ty: Type,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: Symbol,
    pub ty: Type,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: Symbol,
    pub params: Vec<Param>,
    pub ret_ty: Type,
    pub body: Body,
    pub span: Span,
}

/// A function body or block: local declarations, then statements, in that
/// order. Locals must precede all statements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Body {
    pub locals: Vec<VarDecl>,
    pub stmts: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    pub globals: Vec<VarDecl>,
    pub funcs: Vec<FuncDecl>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
        span: Span,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
        span: Span,
    },
    Block {
        stmts: Vec<Stmt>,
        span: Span,
    },
    Return {
        expr: Expr,
        span: Span,
    },
    ExprStmt {
        expr: Expr,
        span: Span,
    },
    Pass {
        span: Span,
    },
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::If { span, .. }
            | Stmt::While { span, .. }
            | Stmt::Block { span, .. }
            | Stmt::Return { span, .. }
            | Stmt::ExprStmt { span, .. }
            | Stmt::Pass { span } => *span,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Shl,
    Shr,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    BitAnd,
    BitXor,
    BitOr,
    And,
    Or,
    Assign,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnOp {
    Pos,
    Neg,
    BitNot,
    Not,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Number {
        value: BigInt,
        span: Span,
    },
    Var {
        id: NodeId,
        name: Symbol,
        span: Span,
    },
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        span: Span,
    },
    Unary {
        op: UnOp,
        arg: Box<Expr>,
        span: Span,
    },
    /// `callee(name: expr, ...)`. Argument order at the call site carries
    /// no semantic meaning; the code generator evaluates arguments in the
    /// callee's declared parameter order.
    Call {
        id: NodeId,
        callee: Symbol,
        args: Vec<(Symbol, Expr)>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Number { span, .. }
            | Expr::Var { span, .. }
            | Expr::Binary { span, .. }
            | Expr::Unary { span, .. }
            | Expr::Call { span, .. } => *span,
        }
    }
}
