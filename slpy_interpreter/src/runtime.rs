//! Runtime state for one program execution: the variable environment, the
//! console streams, and the error taxonomy.

use std::collections::HashMap;
use std::fmt;
use std::io::{self, BufRead, Write};

/// A fatal error raised while executing a program. The first failure aborts
/// the run and propagates to the caller of `run`; nothing is caught or
/// retried inside the interpreter.
#[derive(Debug)]
pub enum RuntimeError {
    /// A variable was read before any assignment bound it.
    UnboundName(String),
    /// The right operand of `//` evaluated to zero.
    DivisionByZero,
    /// `input` read a token that does not parse as an integer.
    MalformedInput(String),
    /// A console stream failed, including running out of input entirely.
    Io(io::Error),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::UnboundName(name) => write!(f, "unbound name '{}'", name),
            RuntimeError::DivisionByZero => write!(f, "division by zero"),
            RuntimeError::MalformedInput(token) => {
                write!(f, "input is not an integer: '{}'", token)
            }
            RuntimeError::Io(e) => write!(f, "console error: {}", e),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuntimeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RuntimeError {
    fn from(e: io::Error) -> Self {
        RuntimeError::Io(e)
    }
}

// --- Environment ---

/// The variable environment for one run: a single flat namespace mapping
/// names to integer values. Created empty by `run` and discarded with it.
#[derive(Debug, Clone, Default)]
pub struct Env {
    bindings: HashMap<String, i64>,
}

impl Env {
    pub fn new() -> Self {
        Env::default()
    }

    /// Looks a name up; `None` if it was never assigned.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.bindings.get(name).copied()
    }

    /// Binds or rebinds a name. Always succeeds.
    pub fn set(&mut self, name: String, value: i64) {
        self.bindings.insert(name, value);
    }
}

// --- Console streams ---

/// The console streams a program runs against. They are passed in explicitly
/// so tests can substitute in-memory buffers for stdin and stdout.
pub struct Io<'a> {
    pub input: &'a mut dyn BufRead,
    pub output: &'a mut dyn Write,
}

impl<'a> Io<'a> {
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Io { input, output }
    }

    /// Reads one whitespace-delimited token from the input stream. Running
    /// out of input before any token starts is an `UnexpectedEof` error.
    pub fn read_token(&mut self) -> Result<String, RuntimeError> {
        let mut token = Vec::new();
        loop {
            let (used, done) = {
                let buf = self.input.fill_buf()?;
                if buf.is_empty() {
                    break;
                }
                let mut used = 0;
                let mut done = false;
                for &byte in buf {
                    used += 1;
                    if byte.is_ascii_whitespace() {
                        if !token.is_empty() {
                            done = true;
                            break;
                        }
                    } else {
                        token.push(byte);
                    }
                }
                (used, done)
            };
            self.input.consume(used);
            if done {
                break;
            }
        }
        if token.is_empty() {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no input left to read").into());
        }
        Ok(String::from_utf8_lossy(&token).into_owned())
    }
}
