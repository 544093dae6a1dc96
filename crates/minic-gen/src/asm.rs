//! A disassembler for `--dump-assembly`. Presentation only; never consulted
//! by the virtual machine.

use std::fmt::Write as _;

use crate::bytecode::{Instr, Program};

impl Program {
    pub fn disassemble(&self) -> String {
        let mut out = String::new();
        for func in &self.functions {
            let _ = writeln!(
                out,
                "func {} @ {:04} (arity {}, frame {})",
                func.name, func.entry, func.arity, func.frame_size
            );
        }
        let _ = writeln!(out, "globals: {}", self.globals_count);
        out.push('\n');

        for (offset, instr) in self.instrs.iter().enumerate() {
            let _ = writeln!(out, "{:04}  {}", offset, format_instr(instr));
        }
        out
    }
}

fn format_instr(instr: &Instr) -> String {
    match instr {
        Instr::PushImm(n) => format!("PUSH_IMM {n}"),
        Instr::LoadGlobal(slot) => format!("LOAD_GLOBAL {slot}"),
        Instr::StoreGlobal(slot) => format!("STORE_GLOBAL {slot}"),
        Instr::LoadLocal(slot) => format!("LOAD_LOCAL {slot}"),
        Instr::StoreLocal(slot) => format!("STORE_LOCAL {slot}"),
        Instr::Add => "ADD".to_string(),
        Instr::Sub => "SUB".to_string(),
        Instr::Mul => "MUL".to_string(),
        Instr::Div => "DIV".to_string(),
        Instr::Mod => "MOD".to_string(),
        Instr::Shl => "SHL".to_string(),
        Instr::Shr => "SHR".to_string(),
        Instr::And => "AND".to_string(),
        Instr::Or => "OR".to_string(),
        Instr::Xor => "XOR".to_string(),
        Instr::Not => "NOT".to_string(),
        Instr::Lt => "LT".to_string(),
        Instr::Le => "LE".to_string(),
        Instr::Gt => "GT".to_string(),
        Instr::Ge => "GE".to_string(),
        Instr::Eq => "EQ".to_string(),
        Instr::Ne => "NE".to_string(),
        Instr::Land => "LAND".to_string(),
        Instr::Lor => "LOR".to_string(),
        Instr::Lnot => "LNOT".to_string(),
        Instr::Neg => "NEG".to_string(),
        Instr::Pos => "POS".to_string(),
        Instr::Jmp(addr) => format!("JMP {addr:04}"),
        Instr::Jz(addr) => format!("JZ {addr:04}"),
        Instr::Jnz(addr) => format!("JNZ {addr:04}"),
        Instr::Call(func, argc) => format!("CALL {func}, {argc}"),
        Instr::Ret => "RET".to_string(),
        Instr::Pop => "POP".to_string(),
        Instr::ReadInt => "READ_INT".to_string(),
        Instr::PrintInt => "PRINT_INT".to_string(),
        Instr::Halt => "HALT".to_string(),
    }
}
