//! minic-gen — lowers a bound program to a flat bytecode stream.

mod asm;
mod bytecode;
mod lower;

pub use bytecode::{FuncEntry, Instr, Program};
pub use lower::Codegen;

#[cfg(test)]
mod tests {
    use super::*;
    use minic_lex::Lexer;
    use minic_par::Parser as SourceParser;
    use minic_sem::Binder;
    use minic_util::Handler;

    fn compile(source: &str) -> Program {
        let handler = Handler::new();
        let lexer = Lexer::new(source, &handler);
        let tokens = lexer.tokenize().expect("lex ok");
        let mut parser = SourceParser::new(tokens, &handler);
        let ast = parser.parse_program().expect("parse ok");
        let bound = Binder::new(&handler).bind(ast).expect("bind ok");
        Codegen::new(&bound).generate()
    }

    #[test]
    fn named_arguments_are_emitted_in_declared_order() {
        let program = compile(
            "func sub(a: Int, b: Int): Int { return a - b }\n\
             func main(): Int { return sub(b: 3, a: 10) }",
        );
        // sub's params are [a, b]; the call site wrote b then a, so the
        // declared-order evaluation must push the value for `a` (10) right
        // before `b` (3), immediately ahead of the CALL instruction.
        let call_idx = program
            .instrs
            .iter()
            .position(|i| matches!(i, Instr::Call(..)))
            .expect("a call instruction was emitted");
        assert_eq!(program.instrs[call_idx - 2], Instr::PushImm(10.into()));
        assert_eq!(program.instrs[call_idx - 1], Instr::PushImm(3.into()));
    }

    #[test]
    fn jumps_are_resolved_to_absolute_offsets() {
        let program = compile("func main(): Int { if 1 { return 1 } return 0 }");
        for instr in &program.instrs {
            match instr {
                Instr::Jmp(addr) | Instr::Jz(addr) | Instr::Jnz(addr) => {
                    assert!(*addr <= program.instrs.len());
                }
                _ => {}
            }
        }
    }

    #[test]
    fn falling_off_the_end_returns_zero() {
        let program = compile("func main(): Int { pass }");
        let main = &program.functions[program.main_index];
        let body = &program.instrs[main.entry..];
        assert_eq!(body[0], Instr::PushImm(0.into()));
        assert_eq!(body[1], Instr::Ret);
    }

    #[test]
    fn disassembly_lists_every_function() {
        let program = compile("func main(): Int { return 0 }");
        let text = program.disassemble();
        assert!(text.contains("func main"));
    }
}
