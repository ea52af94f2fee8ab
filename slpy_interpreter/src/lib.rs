pub mod interpreter;
pub mod runtime;

use runtime::RuntimeError;
use slpy_parser::SyntaxError;
use std::fmt;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Any failure from loading, parsing, or running a program.
#[derive(Debug)]
pub enum Error {
    Syntax(SyntaxError),
    Runtime(RuntimeError),
    /// The source file could not be read.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(e) => write!(f, "syntax error: {}", e),
            Error::Runtime(e) => write!(f, "runtime error: {}", e),
            Error::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Syntax(e) => Some(e),
            Error::Runtime(e) => Some(e),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Error::Syntax(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Error::Runtime(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

/// Parses and runs SLPY source text against the given console streams.
pub fn run_source(
    source: &str,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), Error> {
    let program = slpy_parser::parse(source)?;
    interpreter::run(&program, input, output)?;
    Ok(())
}

/// Reads, parses, and runs a SLPY source file.
pub fn run_file(
    path: &Path,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), Error> {
    let source = fs::read_to_string(path)?;
    run_source(&source, input, output)
}
