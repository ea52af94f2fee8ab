//! Tree-walking execution of SLPY programs.
//!
//! Statements execute against a mutable environment and the console streams;
//! expressions evaluate to `i64`. Add, subtract, and multiply wrap on
//! overflow; `//` divides with truncation toward zero, so `7 // 2` is `3`
//! and `-7 // 2` is `-3`.

use crate::runtime::{Env, Io, RuntimeError};
use slpy_ast::{BinOp, Block, Expr, Program, Stmt};
use std::io::{BufRead, Write};

/// Runs a program against a fresh, empty environment, reading from `input`
/// and writing to `output`. The first failure aborts the run and propagates;
/// output already written and environment mutations already made are not
/// rolled back. Each call is independent, so re-running a program twice with
/// the same input produces the same output.
pub fn run(
    program: &Program,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), RuntimeError> {
    let mut env = Env::new();
    let mut io = Io::new(input, output);
    exec_block(&program.main, &mut env, &mut io)
}

/// Executes a single statement for its side effects.
pub fn exec(stmt: &Stmt, env: &mut Env, io: &mut Io<'_>) -> Result<(), RuntimeError> {
    match stmt {
        Stmt::Assign(name, expr) => {
            let value = eval(expr, env, io)?;
            env.set(name.clone(), value);
            Ok(())
        }
        Stmt::Print(expr) => {
            let value = eval(expr, env, io)?;
            writeln!(io.output, "{}", value)?;
            Ok(())
        }
        Stmt::Pass => Ok(()),
        Stmt::Block(block) => exec_block(block, env, io),
    }
}

/// Executes each statement of a block in order, stopping at the first
/// failure.
pub fn exec_block(block: &Block, env: &mut Env, io: &mut Io<'_>) -> Result<(), RuntimeError> {
    for stmt in &block.stmts {
        exec(stmt, env, io)?;
    }
    Ok(())
}

/// Evaluates an expression to an integer. The left operand of a binary node
/// is evaluated fully (including any `input` side effects) before the right.
pub fn eval(expr: &Expr, env: &Env, io: &mut Io<'_>) -> Result<i64, RuntimeError> {
    match expr {
        Expr::Num(n) => Ok(*n),
        Expr::Var(name) => env
            .get(name)
            .ok_or_else(|| RuntimeError::UnboundName(name.clone())),
        Expr::Input(prompt) => {
            write!(io.output, "{}", prompt)?;
            io.output.flush()?;
            let token = io.read_token()?;
            token
                .parse()
                .map_err(|_| RuntimeError::MalformedInput(token))
        }
        Expr::Binary(op, left, right) => {
            let lv = eval(left, env, io)?;
            let rv = eval(right, env, io)?;
            match op {
                BinOp::Add => Ok(lv.wrapping_add(rv)),
                BinOp::Sub => Ok(lv.wrapping_sub(rv)),
                BinOp::Mul => Ok(lv.wrapping_mul(rv)),
                BinOp::IDiv => {
                    if rv == 0 {
                        Err(RuntimeError::DivisionByZero)
                    } else {
                        // wrapping_div keeps i64::MIN // -1 from trapping.
                        Ok(lv.wrapping_div(rv))
                    }
                }
            }
        }
    }
}
