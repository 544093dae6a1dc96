//! The three builtin pseudo-functions (spec.md §4.5): `input()`, `print(val:
//! Int)`, `exit()`. These are opcodes in the generated bytecode, not callable
//! user functions, but they are spelled and resolved like ordinary calls at
//! the source level, so the binder recognizes their names here before
//! falling back to the user function table.

use minic_util::Symbol;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Builtin {
    Input,
    Print,
    Exit,
}

impl Builtin {
    pub fn from_name(name: Symbol) -> Option<Builtin> {
        match name.as_str().as_str() {
            "input" => Some(Builtin::Input),
            "print" => Some(Builtin::Print),
            "exit" => Some(Builtin::Exit),
            _ => None,
        }
    }

    /// Declared parameter names, in order. Empty for `input`/`exit`; a
    /// single `val` for `print`.
    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            Builtin::Input | Builtin::Exit => &[],
            Builtin::Print => &["val"],
        }
    }
}
