//! minic-drv — compiler driver and CLI entry point.
//!
//! Thin orchestration over the five library crates: read the source file,
//! run it through lex/parse/bind/codegen, then either dump an intermediate
//! artifact (`--dump-ast`, `--dump-assembly`) or execute it against the
//! process's real standard streams.

pub mod error;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use minic_gen::Codegen;
use minic_lex::Lexer;
use minic_par::Parser as SourceParser;
use minic_sem::Binder;
use minic_util::Handler;
use minic_vm::{ExitReason, Vm};

pub use error::{DriverError, Result};

/// A small imperative language with one unbounded-precision integer type.
#[derive(Parser, Debug)]
#[command(name = "minic")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compiler and runtime for the minic toy language", long_about = None)]
pub struct Cli {
    /// Path to a minic source file.
    pub path: PathBuf,

    /// Print a structural view of the parsed AST and exit.
    #[arg(long)]
    pub dump_ast: bool,

    /// Print a disassembly of the generated bytecode and exit.
    #[arg(long)]
    pub dump_assembly: bool,
}

/// Entry point called by `main.rs`. Returns the process exit code on
/// success; any front-end or runtime error is returned to the caller to
/// print and map to a nonzero code.
pub fn main() -> Result<i32> {
    env_logger::init();
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<i32> {
    let source = std::fs::read_to_string(&cli.path).map_err(|source| DriverError::ReadSource {
        path: cli.path.display().to_string(),
        source,
    })?;

    let handler = Handler::new();

    let tokens = Lexer::new(&source, &handler).tokenize()?;
    let ast = SourceParser::new(tokens, &handler).parse_program()?;

    if cli.dump_ast {
        println!("{ast:#?}");
        return Ok(0);
    }

    let bound = Binder::new(&handler).bind(ast)?;
    let program = Codegen::new(&bound).generate();

    if cli.dump_assembly {
        print!("{}", program.disassemble());
        return Ok(0);
    }

    let stdin = io::BufReader::new(io::stdin());
    let stdout = io::stdout();
    let mut vm = Vm::new(&program, stdin, stdout.lock());
    let (result, reason) = vm.run(None)?;

    Ok(match reason {
        ExitReason::Exited => 0,
        ExitReason::Returned => exit_code_from(&result),
        ExitReason::StepLimitReached => {
            unreachable!("the driver never passes a step budget to Vm::run")
        }
    })
}

/// `main`'s return value, reduced into the implementation-defined exit-code
/// range (spec.md §5: "modulo an implementation-defined range"). Matches
/// the conventional 0..=255 range of a process exit status.
fn exit_code_from(value: &BigInt) -> i32 {
    let modulus = BigInt::from(256);
    let mut remainder = value % &modulus;
    if remainder < BigInt::from(0) {
        remainder += &modulus;
    }
    remainder.to_i32().expect("reduced mod 256, fits in i32")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_wraps_negative_values() {
        assert_eq!(exit_code_from(&BigInt::from(-1)), 255);
        assert_eq!(exit_code_from(&BigInt::from(300)), 44);
        assert_eq!(exit_code_from(&BigInt::from(0)), 0);
    }

    #[test]
    fn cli_parses_positional_path_and_flags() {
        let cli = Cli::parse_from(["minic", "prog.mc", "--dump-ast"]);
        assert_eq!(cli.path, PathBuf::from("prog.mc"));
        assert!(cli.dump_ast);
        assert!(!cli.dump_assembly);
    }
}
