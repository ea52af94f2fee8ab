//! Core AST definitions for the SLPY language.
//!
//! This crate contains the node hierarchy shared between the parser and the
//! interpreter: expressions, statements, blocks, and the program root. It
//! covers the two side-effect-free traversals over that hierarchy, rendering
//! back to source text (via `Display`) and structural dumping for
//! diagnostics, but excludes runtime concerns like environments and console
//! I/O.

use std::fmt;

// --- AST (Abstract Syntax Tree) Nodes ---

/// The arithmetic operator of a binary expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    /// Integer division, written `//` in source.
    IDiv,
}

impl BinOp {
    /// The operator's source spelling.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::IDiv => "//",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            BinOp::Add => "Add",
            BinOp::Sub => "Sub",
            BinOp::Mul => "Mul",
            BinOp::IDiv => "IDiv",
        }
    }
}

/// An expression node. Evaluation (in `slpy_interpreter`) produces an `i64`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal.
    Num(i64),
    /// A variable lookup by name.
    Var(String),
    /// A console read with a prompt, e.g. `input("n? ")`. The prompt is
    /// stored unescaped.
    Input(String),
    /// Binary arithmetic; the left operand is evaluated first.
    Binary(BinOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Convenience constructor for a binary node.
    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary(op, Box::new(left), Box::new(right))
    }
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `name = expr`: bind or rebind a variable.
    Assign(String, Expr),
    /// `print(expr)`: write the value and a newline.
    Print(Expr),
    /// `pass`: do nothing.
    Pass,
    /// A nested sequence of statements.
    Block(Block),
}

/// An ordered sequence of statements, executed top to bottom.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

/// The root of a parsed SLPY program: a single top-level block. The tree is
/// immutable after construction and exclusively owns its children.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub main: Block,
}

// --- Rendering back to source text ---

/// Escapes prompt text for source-form rendering: `\n`, `\t`, `\\`, and `"`
/// get a backslash; every other character passes through unchanged.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

impl fmt::Display for Expr {
    /// Fully parenthesized infix form, e.g. `((1 + 2) * 3)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(n) => write!(f, "{}", n),
            Expr::Var(name) => f.write_str(name),
            Expr::Input(prompt) => write!(f, "input(\"{}\")", escape(prompt)),
            Expr::Binary(op, left, right) => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
        }
    }
}

impl Stmt {
    /// Writes the statement as source text, one line per simple statement,
    /// prefixing each line with `indent`.
    pub fn render(&self, out: &mut dyn fmt::Write, indent: &str) -> fmt::Result {
        match self {
            Stmt::Assign(name, expr) => writeln!(out, "{}{} = {}", indent, name, expr),
            Stmt::Print(expr) => writeln!(out, "{}print({})", indent, expr),
            Stmt::Pass => writeln!(out, "{}pass", indent),
            Stmt::Block(block) => block.render(out, indent),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, "")
    }
}

impl Block {
    pub fn render(&self, out: &mut dyn fmt::Write, indent: &str) -> fmt::Result {
        for stmt in &self.stmts {
            stmt.render(out, indent)?;
        }
        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, "")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.main.render(f, "")
    }
}

// --- Structural dumping ---

const INDENT_STEP: &str = "    ";

impl Expr {
    /// Writes an indented structural listing of the node and its children,
    /// each child one level deeper than its parent.
    pub fn dump(&self, out: &mut dyn fmt::Write, indent: &str) -> fmt::Result {
        let deeper = format!("{}{}", indent, INDENT_STEP);
        match self {
            Expr::Num(n) => {
                writeln!(out, "{}Num", indent)?;
                writeln!(out, "{}{}", deeper, n)
            }
            Expr::Var(name) => {
                writeln!(out, "{}Var", indent)?;
                writeln!(out, "{}{}", deeper, name)
            }
            Expr::Input(prompt) => {
                writeln!(out, "{}Input", indent)?;
                writeln!(out, "{}\"{}\"", deeper, prompt)
            }
            Expr::Binary(op, left, right) => {
                writeln!(out, "{}{}", indent, op.tag())?;
                left.dump(out, &deeper)?;
                right.dump(out, &deeper)
            }
        }
    }
}

impl Stmt {
    pub fn dump(&self, out: &mut dyn fmt::Write, indent: &str) -> fmt::Result {
        let deeper = format!("{}{}", indent, INDENT_STEP);
        match self {
            Stmt::Assign(name, expr) => {
                writeln!(out, "{}Assign", indent)?;
                writeln!(out, "{}{}", deeper, name)?;
                expr.dump(out, &deeper)
            }
            Stmt::Print(expr) => {
                writeln!(out, "{}Print", indent)?;
                expr.dump(out, &deeper)
            }
            Stmt::Pass => writeln!(out, "{}Pass", indent),
            Stmt::Block(block) => block.dump(out, indent),
        }
    }
}

impl Block {
    pub fn dump(&self, out: &mut dyn fmt::Write, indent: &str) -> fmt::Result {
        writeln!(out, "{}Block", indent)?;
        let deeper = format!("{}{}", indent, INDENT_STEP);
        for stmt in &self.stmts {
            stmt.dump(out, &deeper)?;
        }
        Ok(())
    }
}

impl Program {
    pub fn dump(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "Program")?;
        self.main.dump(out, INDENT_STEP)
    }

    /// Renders the structural dump into a fresh string.
    pub fn dump_to_string(&self) -> String {
        let mut text = String::new();
        // Writing into a String cannot fail.
        let _ = self.dump(&mut text);
        text
    }
}
