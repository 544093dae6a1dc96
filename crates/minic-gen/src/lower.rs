//! Lowers a bound program to a flat `Instr` stream.
//!
//! Structured control flow and named-argument calls are both lowered away
//! here: `if`/`while` become `Jz`/`Jmp` pairs over symbolic labels, and a
//! call's arguments are emitted in the callee's declared parameter order
//! rather than the order they were written at the call site.

use std::collections::HashMap;

use minic_par::{BinOp, Body, Expr, Stmt, UnOp};
use minic_sem::{BoundProgram, Builtin, CallTarget, ScopeKind};

use crate::bytecode::{FuncEntry, Instr, Program};

type LabelId = usize;

struct PendingJump {
    instr_index: usize,
    label: LabelId,
}

pub struct Codegen<'a> {
    bound: &'a BoundProgram,
    instrs: Vec<Instr>,
    label_offsets: HashMap<LabelId, usize>,
    next_label: LabelId,
    pending: Vec<PendingJump>,
    /// Number of parameter slots in the function currently being lowered;
    /// local-table slots are offset by this so they land after the
    /// parameters in the one contiguous frame.
    current_arity: usize,
}

impl<'a> Codegen<'a> {
    pub fn new(bound: &'a BoundProgram) -> Self {
        Self {
            bound,
            instrs: Vec::new(),
            label_offsets: HashMap::new(),
            next_label: 0,
            pending: Vec::new(),
            current_arity: 0,
        }
    }

    pub fn generate(mut self) -> Program {
        let mut functions = Vec::with_capacity(self.bound.program.funcs.len());

        for (i, func) in self.bound.program.funcs.iter().enumerate() {
            let entry = self.instrs.len();
            self.current_arity = func.params.len();

            self.lower_body(&func.body);
            // Implicit epilogue: if control falls off the end, return 0.
            self.instrs.push(Instr::PushImm(0.into()));
            self.instrs.push(Instr::Ret);

            functions.push(FuncEntry {
                name: self.bound.functions[i].name,
                entry,
                arity: func.params.len(),
                frame_size: func.params.len() + func.body.locals.len(),
            });
        }

        self.resolve_labels();

        log::debug!(
            "generated {} instructions across {} functions",
            self.instrs.len(),
            functions.len()
        );

        Program {
            instrs: self.instrs,
            globals_count: self.bound.globals.len(),
            functions,
            main_index: self.bound.main_index,
        }
    }

    fn new_label(&mut self) -> LabelId {
        let id = self.next_label;
        self.next_label += 1;
        id
    }

    fn mark_label(&mut self, label: LabelId) {
        self.label_offsets.insert(label, self.instrs.len());
    }

    fn emit(&mut self, instr: Instr) {
        self.instrs.push(instr);
    }

    fn emit_jump(&mut self, make: impl FnOnce(usize) -> Instr, label: LabelId) {
        let idx = self.instrs.len();
        self.instrs.push(make(label));
        self.pending.push(PendingJump {
            instr_index: idx,
            label,
        });
    }

    fn resolve_labels(&mut self) {
        for p in &self.pending {
            let target = self.label_offsets[&p.label];
            match &mut self.instrs[p.instr_index] {
                Instr::Jmp(t) | Instr::Jz(t) | Instr::Jnz(t) => *t = target,
                other => unreachable!("pending fixup on non-jump instruction {other:?}"),
            }
        }
    }

    fn lower_body(&mut self, body: &Body) {
        for stmt in &body.stmts {
            self.lower_stmt(stmt);
        }
    }

    fn lower_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::If {
                cond,
                then_branch,
                else_branch,
                ..
            } => {
                let else_lbl = self.new_label();
                let end_lbl = self.new_label();
                self.lower_expr(cond);
                self.emit_jump(Instr::Jz, else_lbl);
                self.lower_stmt(then_branch);
                self.emit_jump(Instr::Jmp, end_lbl);
                self.mark_label(else_lbl);
                if let Some(else_branch) = else_branch {
                    self.lower_stmt(else_branch);
                }
                self.mark_label(end_lbl);
            }
            Stmt::While { cond, body, .. } => {
                let top_lbl = self.new_label();
                let end_lbl = self.new_label();
                self.mark_label(top_lbl);
                self.lower_expr(cond);
                self.emit_jump(Instr::Jz, end_lbl);
                self.lower_stmt(body);
                self.emit_jump(Instr::Jmp, top_lbl);
                self.mark_label(end_lbl);
            }
            Stmt::Block { stmts, .. } => {
                for s in stmts {
                    self.lower_stmt(s);
                }
            }
            Stmt::Return { expr, .. } => {
                self.lower_expr(expr);
                self.emit(Instr::Ret);
            }
            Stmt::ExprStmt { expr, .. } => {
                self.lower_expr(expr);
                self.emit(Instr::Pop);
            }
            Stmt::Pass { .. } => {}
        }
    }

    fn lower_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Number { value, .. } => self.emit(Instr::PushImm(value.clone())),
            Expr::Var { id, .. } => {
                let var_ref = self.bound.var_refs[id];
                match var_ref.scope {
                    ScopeKind::Global => self.emit(Instr::LoadGlobal(var_ref.slot)),
                    ScopeKind::Param => self.emit(Instr::LoadLocal(var_ref.slot)),
                    ScopeKind::Local => {
                        self.emit(Instr::LoadLocal(var_ref.slot + self.current_arity))
                    }
                }
            }
            Expr::Binary {
                op: BinOp::Assign,
                lhs,
                rhs,
                ..
            } => self.lower_assign(lhs, rhs),
            Expr::Binary {
                op: BinOp::And,
                lhs,
                rhs,
                ..
            } => self.lower_short_circuit_and(lhs, rhs),
            Expr::Binary {
                op: BinOp::Or,
                lhs,
                rhs,
                ..
            } => self.lower_short_circuit_or(lhs, rhs),
            Expr::Binary { op, lhs, rhs, .. } => {
                self.lower_expr(lhs);
                self.lower_expr(rhs);
                self.emit(binop_instr(*op));
            }
            Expr::Unary { op, arg, .. } => {
                self.lower_expr(arg);
                self.emit(unop_instr(*op));
            }
            Expr::Call {
                id, callee: _, args, ..
            } => {
                let call_ref = self.bound.call_refs[id].clone();
                for &arg_idx in &call_ref.eval_order {
                    self.lower_expr(&args[arg_idx].1);
                }
                match call_ref.target {
                    CallTarget::User(func_index) => {
                        self.emit(Instr::Call(func_index, call_ref.eval_order.len()));
                    }
                    CallTarget::Builtin(Builtin::Input) => self.emit(Instr::ReadInt),
                    CallTarget::Builtin(Builtin::Print) => self.emit(Instr::PrintInt),
                    CallTarget::Builtin(Builtin::Exit) => self.emit(Instr::Halt),
                }
            }
        }
    }

    /// `lhs = rhs` compiles as: evaluate rhs, store into lhs's slot, then
    /// load the slot back. There is no dedicated stack-duplicate opcode, so
    /// the reload stands in for one; it reads back exactly what was just
    /// written.
    fn lower_assign(&mut self, lhs: &Expr, rhs: &Expr) {
        self.lower_expr(rhs);
        let Expr::Var { id, .. } = lhs else {
            unreachable!("parser guarantees the left of `=` is a bare variable");
        };
        let var_ref = self.bound.var_refs[id];
        let (store, load) = match var_ref.scope {
            ScopeKind::Global => (
                Instr::StoreGlobal(var_ref.slot),
                Instr::LoadGlobal(var_ref.slot),
            ),
            ScopeKind::Param => (
                Instr::StoreLocal(var_ref.slot),
                Instr::LoadLocal(var_ref.slot),
            ),
            ScopeKind::Local => {
                let slot = var_ref.slot + self.current_arity;
                (Instr::StoreLocal(slot), Instr::LoadLocal(slot))
            }
        };
        self.emit(store);
        self.emit(load);
    }

    /// `lhs && rhs`: short-circuits on a falsy `lhs` without evaluating
    /// `rhs`; the truthy path normalizes `rhs` to strictly 0 or 1 via a
    /// double logical-not.
    fn lower_short_circuit_and(&mut self, lhs: &Expr, rhs: &Expr) {
        let false_lbl = self.new_label();
        let end_lbl = self.new_label();
        self.lower_expr(lhs);
        self.emit_jump(Instr::Jz, false_lbl);
        self.lower_expr(rhs);
        self.emit(Instr::Lnot);
        self.emit(Instr::Lnot);
        self.emit_jump(Instr::Jmp, end_lbl);
        self.mark_label(false_lbl);
        self.emit(Instr::PushImm(0.into()));
        self.mark_label(end_lbl);
    }

    /// `lhs || rhs`: mirror image of `&&`, short-circuiting on a truthy
    /// `lhs`.
    fn lower_short_circuit_or(&mut self, lhs: &Expr, rhs: &Expr) {
        let true_lbl = self.new_label();
        let end_lbl = self.new_label();
        self.lower_expr(lhs);
        self.emit_jump(Instr::Jnz, true_lbl);
        self.lower_expr(rhs);
        self.emit(Instr::Lnot);
        self.emit(Instr::Lnot);
        self.emit_jump(Instr::Jmp, end_lbl);
        self.mark_label(true_lbl);
        self.emit(Instr::PushImm(1.into()));
        self.mark_label(end_lbl);
    }
}

fn binop_instr(op: BinOp) -> Instr {
    match op {
        BinOp::Add => Instr::Add,
        BinOp::Sub => Instr::Sub,
        BinOp::Mul => Instr::Mul,
        BinOp::Div => Instr::Div,
        BinOp::Mod => Instr::Mod,
        BinOp::Shl => Instr::Shl,
        BinOp::Shr => Instr::Shr,
        BinOp::Lt => Instr::Lt,
        BinOp::Le => Instr::Le,
        BinOp::Gt => Instr::Gt,
        BinOp::Ge => Instr::Ge,
        BinOp::Eq => Instr::Eq,
        BinOp::Ne => Instr::Ne,
        BinOp::BitAnd => Instr::And,
        BinOp::BitXor => Instr::Xor,
        BinOp::BitOr => Instr::Or,
        BinOp::And | BinOp::Or | BinOp::Assign => {
            unreachable!("short-circuit and assignment ops are lowered separately")
        }
    }
}

fn unop_instr(op: UnOp) -> Instr {
    match op {
        UnOp::Pos => Instr::Pos,
        UnOp::Neg => Instr::Neg,
        UnOp::BitNot => Instr::Not,
        UnOp::Not => Instr::Lnot,
    }
}
