//! minic-sem — scope and call resolution.
//!
//! Walks a parsed [`Program`] once, builds a globals table and, per
//! function, separate parameter and local tables, and resolves every
//! `Var`/`Call` node to a slot or callee. Resolutions are recorded in side
//! tables keyed by the parser's `NodeId` rather than written back into the
//! AST, so the AST types stay free of binder-owned fields.

mod builtins;
mod scope;

pub mod error;

use std::collections::HashMap;

use minic_par::{BinOp, Body, Expr, FuncDecl, NodeId, Program, Stmt};
use minic_util::{Handler, Symbol};

pub use builtins::Builtin;
pub use error::BindError;
pub use scope::SymbolTable;

/// Which of the three disjoint per-function namespaces a `Var` resolved
/// into. Lookup order is `Local` then `Param` then `Global`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeKind {
    Global,
    Param,
    Local,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VarRef {
    pub scope: ScopeKind,
    pub slot: usize,
}

/// What a `Call` node invokes: a user-declared function, reached through
/// `Instr::Call`, or one of the three builtins lowered straight to an
/// opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallTarget {
    User(usize),
    Builtin(Builtin),
}

/// Resolution of one `Call` node: which function it targets, and, for each
/// of the callee's declared parameters in order, the index into the call's
/// own `args` vector that supplies it. Codegen evaluates arguments by
/// walking `eval_order`, never the call site's source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallRef {
    pub target: CallTarget,
    pub eval_order: Vec<usize>,
}

#[derive(Clone, Debug)]
pub struct FuncSignature {
    pub name: Symbol,
    pub params: Vec<Symbol>,
}

pub struct BoundProgram {
    pub program: Program,
    pub functions: Vec<FuncSignature>,
    pub globals: SymbolTable,
    pub main_index: usize,
    pub var_refs: HashMap<NodeId, VarRef>,
    pub call_refs: HashMap<NodeId, CallRef>,
}

pub struct Binder<'a> {
    handler: &'a Handler,
    var_refs: HashMap<NodeId, VarRef>,
    call_refs: HashMap<NodeId, CallRef>,
}

impl<'a> Binder<'a> {
    pub fn new(handler: &'a Handler) -> Self {
        Self {
            handler,
            var_refs: HashMap::new(),
            call_refs: HashMap::new(),
        }
    }

    pub fn bind(mut self, program: Program) -> Result<BoundProgram, BindError> {
        let globals = self.build_globals(&program)?;
        let (functions, func_index) = self.build_function_table(&program)?;

        let main_name = Symbol::intern("main");
        let main_index = *func_index
            .get(&main_name)
            .ok_or(BindError::MissingMain)?;
        let main_decl = &program.funcs[main_index];
        if !main_decl.params.is_empty() {
            let err = BindError::WrongMainSignature {
                span: main_decl.span,
            };
            self.handler.error(err.to_string(), err.span());
            return Err(err);
        }

        for func in &program.funcs {
            self.bind_function(func, &globals, &func_index, &functions)?;
        }

        log::debug!(
            "bound {} globals, {} functions",
            globals.len(),
            functions.len()
        );

        Ok(BoundProgram {
            program,
            functions,
            globals,
            main_index,
            var_refs: self.var_refs,
            call_refs: self.call_refs,
        })
    }

    fn build_globals(&mut self, program: &Program) -> Result<SymbolTable, BindError> {
        let mut globals = SymbolTable::new();
        for decl in &program.globals {
            if globals.contains(decl.name) {
                let err = BindError::DuplicateName {
                    name: decl.name,
                    span: decl.span,
                };
                self.handler.error(err.to_string(), err.span());
                return Err(err);
            }
            globals.declare(decl.name);
        }
        Ok(globals)
    }

    fn build_function_table(
        &mut self,
        program: &Program,
    ) -> Result<(Vec<FuncSignature>, HashMap<Symbol, usize>), BindError> {
        let mut functions = Vec::with_capacity(program.funcs.len());
        let mut index = HashMap::new();

        for (i, func) in program.funcs.iter().enumerate() {
            if index.contains_key(&func.name) || Builtin::from_name(func.name).is_some() {
                let err = BindError::DuplicateName {
                    name: func.name,
                    span: func.span,
                };
                self.handler.error(err.to_string(), err.span());
                return Err(err);
            }
            index.insert(func.name, i);

            let mut seen = SymbolTable::new();
            for param in &func.params {
                if seen.contains(param.name) {
                    let err = BindError::DuplicateName {
                        name: param.name,
                        span: param.span,
                    };
                    self.handler.error(err.to_string(), err.span());
                    return Err(err);
                }
                seen.declare(param.name);
            }

            functions.push(FuncSignature {
                name: func.name,
                params: func.params.iter().map(|p| p.name).collect(),
            });
        }

        Ok((functions, index))
    }

    fn bind_function(
        &mut self,
        func: &FuncDecl,
        globals: &SymbolTable,
        func_index: &HashMap<Symbol, usize>,
        functions: &[FuncSignature],
    ) -> Result<(), BindError> {
        let mut params = SymbolTable::new();
        for param in &func.params {
            params.declare(param.name);
        }

        let mut locals = SymbolTable::new();
        for local in &func.body.locals {
            if locals.contains(local.name) {
                let err = BindError::DuplicateName {
                    name: local.name,
                    span: local.span,
                };
                self.handler.error(err.to_string(), err.span());
                return Err(err);
            }
            locals.declare(local.name);
        }

        self.bind_body(&func.body, &locals, &params, globals, func_index, functions)
    }

    fn bind_body(
        &mut self,
        body: &Body,
        locals: &SymbolTable,
        params: &SymbolTable,
        globals: &SymbolTable,
        func_index: &HashMap<Symbol, usize>,
        functions: &[FuncSignature],
    ) -> Result<(), BindError> {
        for stmt in &body.stmts {
            self.bind_stmt(stmt, locals, params, globals, func_index, functions)?;
        }
        Ok(())
    }

    fn bind_stmt(
        &mut self,
        stmt: &Stmt,
        locals: &SymbolTable,
        params: &SymbolTable,
        globals: &SymbolTable,
        func_index: &HashMap<Symbol, usize>,
        functions: &[FuncSignature],
    ) -> Result<(), BindError> {
        match stmt {
            Stmt::If {
                cond,
                then_branch,
                else_branch,
                ..
            } => {
                self.bind_expr(cond, locals, params, globals, func_index, functions)?;
                self.bind_stmt(then_branch, locals, params, globals, func_index, functions)?;
                if let Some(else_branch) = else_branch {
                    self.bind_stmt(else_branch, locals, params, globals, func_index, functions)?;
                }
            }
            Stmt::While { cond, body, .. } => {
                self.bind_expr(cond, locals, params, globals, func_index, functions)?;
                self.bind_stmt(body, locals, params, globals, func_index, functions)?;
            }
            Stmt::Block { stmts, .. } => {
                for s in stmts {
                    self.bind_stmt(s, locals, params, globals, func_index, functions)?;
                }
            }
            Stmt::Return { expr, .. } | Stmt::ExprStmt { expr, .. } => {
                self.bind_expr(expr, locals, params, globals, func_index, functions)?;
            }
            Stmt::Pass { .. } => {}
        }
        Ok(())
    }

    fn bind_expr(
        &mut self,
        expr: &Expr,
        locals: &SymbolTable,
        params: &SymbolTable,
        globals: &SymbolTable,
        func_index: &HashMap<Symbol, usize>,
        functions: &[FuncSignature],
    ) -> Result<(), BindError> {
        match expr {
            Expr::Number { .. } => Ok(()),
            Expr::Var { id, name, span } => {
                let var_ref = if let Some(slot) = locals.get(*name) {
                    VarRef {
                        scope: ScopeKind::Local,
                        slot,
                    }
                } else if let Some(slot) = params.get(*name) {
                    VarRef {
                        scope: ScopeKind::Param,
                        slot,
                    }
                } else if let Some(slot) = globals.get(*name) {
                    VarRef {
                        scope: ScopeKind::Global,
                        slot,
                    }
                } else {
                    let err = BindError::UnknownIdentifier {
                        name: *name,
                        span: *span,
                    };
                    self.handler.error(err.to_string(), err.span());
                    return Err(err);
                };
                self.var_refs.insert(*id, var_ref);
                Ok(())
            }
            Expr::Binary { op, lhs, rhs, span } => {
                if *op == BinOp::Assign && !matches!(**lhs, Expr::Var { .. }) {
                    // The parser already rejects non-lvalue assignment
                    // targets; this is only reachable if a future caller
                    // constructs the AST by hand.
                    let err = BindError::UnknownIdentifier {
                        name: Symbol::intern("<non-lvalue>"),
                        span: *span,
                    };
                    self.handler.error(err.to_string(), err.span());
                    return Err(err);
                }
                self.bind_expr(lhs, locals, params, globals, func_index, functions)?;
                self.bind_expr(rhs, locals, params, globals, func_index, functions)
            }
            Expr::Unary { arg, .. } => {
                self.bind_expr(arg, locals, params, globals, func_index, functions)
            }
            Expr::Call {
                id,
                callee,
                args,
                span,
            } => {
                let (target, param_names): (CallTarget, Vec<Symbol>) =
                    if let Some(builtin) = Builtin::from_name(*callee) {
                        (
                            CallTarget::Builtin(builtin),
                            builtin
                                .param_names()
                                .iter()
                                .map(|n| Symbol::intern(n))
                                .collect(),
                        )
                    } else if let Some(&func_idx) = func_index.get(callee) {
                        (CallTarget::User(func_idx), functions[func_idx].params.clone())
                    } else {
                        let err = BindError::UnknownFunction {
                            name: *callee,
                            span: *span,
                        };
                        self.handler.error(err.to_string(), err.span());
                        return Err(err);
                    };

                if args.len() != param_names.len() {
                    let err = BindError::ArgumentMismatch {
                        func: *callee,
                        reason: format!(
                            "expected {} argument(s), found {}",
                            param_names.len(),
                            args.len()
                        ),
                        span: *span,
                    };
                    self.handler.error(err.to_string(), err.span());
                    return Err(err);
                }

                let mut eval_order = Vec::with_capacity(param_names.len());
                for param_name in &param_names {
                    let Some(arg_idx) = args.iter().position(|(name, _)| name == param_name) else {
                        let err = BindError::ArgumentMismatch {
                            func: *callee,
                            reason: format!("missing argument `{param_name}`"),
                            span: *span,
                        };
                        self.handler.error(err.to_string(), err.span());
                        return Err(err);
                    };
                    eval_order.push(arg_idx);
                }

                for (_, value) in args {
                    self.bind_expr(value, locals, params, globals, func_index, functions)?;
                }

                self.call_refs.insert(*id, CallRef { target, eval_order });
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minic_lex::Lexer;
    use minic_par::Parser;

    fn bind_source(source: &str) -> Result<BoundProgram, BindError> {
        let handler = Handler::new();
        let lexer = Lexer::new(source, &handler);
        let tokens = lexer.tokenize().expect("lex ok");
        let mut parser = Parser::new(tokens, &handler);
        let program = parser.parse_program().expect("parse ok");
        Binder::new(&handler).bind(program)
    }

    #[test]
    fn missing_main_is_an_error() {
        let err = bind_source("func helper(): Int { return 0 }").unwrap_err();
        assert_eq!(err, BindError::MissingMain);
    }

    #[test]
    fn main_with_params_is_rejected() {
        let err = bind_source("func main(x: Int): Int { return x }").unwrap_err();
        assert!(matches!(err, BindError::WrongMainSignature { .. }));
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = bind_source("func main(): Int { return missing }").unwrap_err();
        assert!(matches!(err, BindError::UnknownIdentifier { .. }));
    }

    #[test]
    fn named_arguments_resolve_out_of_source_order() {
        let bound = bind_source(
            "func sub(a: Int, b: Int): Int { return a - b }\n\
             func main(): Int { return sub(b: 3, a: 10) }",
        )
        .unwrap();
        let call_ref = bound.call_refs.values().next().unwrap();
        // sub's declared order is [a, b]; the call wrote b first, a second,
        // so evaluating in declared order must read call-site arg 1 then 0.
        assert_eq!(call_ref.eval_order, vec![1, 0]);
    }

    #[test]
    fn locals_shadow_globals() {
        let bound = bind_source(
            "var x: Int\n\
             func main(): Int { var x: Int\n x = 1\n return x }",
        )
        .unwrap();
        let local_ref = bound
            .var_refs
            .values()
            .find(|r| matches!(r.scope, ScopeKind::Local))
            .unwrap();
        assert_eq!(local_ref.slot, 0);
    }

    #[test]
    fn print_resolves_as_a_builtin_not_a_call_to_a_user_function() {
        let bound =
            bind_source("func main(): Int { print(val: 1) return 0 }").unwrap();
        let call_ref = bound.call_refs.values().next().unwrap();
        assert_eq!(call_ref.target, CallTarget::Builtin(Builtin::Print));
    }

    #[test]
    fn input_and_exit_take_no_arguments() {
        let bound =
            bind_source("func main(): Int { var x: Int\n x = input()\n exit()\n return x }")
                .unwrap();
        let targets: Vec<_> = bound.call_refs.values().map(|c| c.target).collect();
        assert!(targets.contains(&CallTarget::Builtin(Builtin::Input)));
        assert!(targets.contains(&CallTarget::Builtin(Builtin::Exit)));
    }

    #[test]
    fn print_with_wrong_argument_name_is_rejected() {
        let err = bind_source("func main(): Int { print(x: 1) return 0 }").unwrap_err();
        assert!(matches!(err, BindError::ArgumentMismatch { .. }));
    }

    #[test]
    fn a_user_function_cannot_be_named_like_a_builtin() {
        let err = bind_source("func print(val: Int): Int { return val }\nfunc main(): Int { return 0 }").unwrap_err();
        assert!(matches!(err, BindError::DuplicateName { .. }));
    }
}
