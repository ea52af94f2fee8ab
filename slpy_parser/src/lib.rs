//! Parser for the SLPY language.
//!
//! This crate converts line-oriented SLPY source code into the AST structures
//! defined in `slpy_ast`. A hand-written lexer splits the source into tokens
//! and a recursive-descent parser assembles statements and expressions, with
//! `*` and `//` binding tighter than `+` and `-` and all operators left
//! associative.

use slpy_ast::{BinOp, Block, Expr, Program, Stmt};
use std::fmt;

/// A syntax error, reported with the source line it was detected on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for SyntaxError {}

fn err<T>(line: usize, message: impl Into<String>) -> Result<T, SyntaxError> {
    Err(SyntaxError {
        line,
        message: message.into(),
    })
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Name(String),
    Number(i64),
    /// A string literal with its escapes already resolved.
    Text(String),
    Print,
    Pass,
    Input,
    Equals,
    Plus,
    Minus,
    Star,
    DoubleSlash,
    LParen,
    RParen,
    Newline,
}

fn describe(token: &Token) -> String {
    match token {
        Token::Name(name) => format!("name '{}'", name),
        Token::Number(n) => format!("number {}", n),
        Token::Text(_) => "a string literal".to_string(),
        Token::Print => "'print'".to_string(),
        Token::Pass => "'pass'".to_string(),
        Token::Input => "'input'".to_string(),
        Token::Equals => "'='".to_string(),
        Token::Plus => "'+'".to_string(),
        Token::Minus => "'-'".to_string(),
        Token::Star => "'*'".to_string(),
        Token::DoubleSlash => "'//'".to_string(),
        Token::LParen => "'('".to_string(),
        Token::RParen => "')'".to_string(),
        Token::Newline => "end of line".to_string(),
    }
}

/// Parses SLPY source text into a `Program`.
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    let tokens = lex(source)?;
    let mut parser = Parser { tokens, pos: 0 };
    let main = parser.block()?;
    Ok(Program { main })
}

// --- Lexer ---

fn lex(source: &str) -> Result<Vec<(Token, usize)>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();
    let mut line = 1;

    while let Some(&c) = chars.peek() {
        match c {
            ' ' | '\t' | '\r' => {
                chars.next();
            }
            '#' => {
                // Comment to end of line.
                while let Some(&c) = chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '\n' => {
                chars.next();
                tokens.push((Token::Newline, line));
                line += 1;
            }
            '(' => {
                chars.next();
                tokens.push((Token::LParen, line));
            }
            ')' => {
                chars.next();
                tokens.push((Token::RParen, line));
            }
            '=' => {
                chars.next();
                tokens.push((Token::Equals, line));
            }
            '+' => {
                chars.next();
                tokens.push((Token::Plus, line));
            }
            '-' => {
                chars.next();
                tokens.push((Token::Minus, line));
            }
            '*' => {
                chars.next();
                tokens.push((Token::Star, line));
            }
            '/' => {
                chars.next();
                if chars.peek() == Some(&'/') {
                    chars.next();
                    tokens.push((Token::DoubleSlash, line));
                } else {
                    return err(line, "single '/' is not an operator; did you mean '//'?");
                }
            }
            '"' => {
                chars.next();
                let text = lex_string(&mut chars, line)?;
                tokens.push((Token::Text(text), line));
            }
            c if c.is_ascii_digit() => {
                let mut digits = String::new();
                while let Some(&c) = chars.peek() {
                    if !c.is_ascii_digit() {
                        break;
                    }
                    digits.push(c);
                    chars.next();
                }
                match digits.parse::<i64>() {
                    Ok(n) => tokens.push((Token::Number(n), line)),
                    Err(_) => return err(line, format!("integer literal too large: {}", digits)),
                }
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut word = String::new();
                while let Some(&c) = chars.peek() {
                    if !c.is_ascii_alphanumeric() && c != '_' {
                        break;
                    }
                    word.push(c);
                    chars.next();
                }
                let token = match word.as_str() {
                    "print" => Token::Print,
                    "pass" => Token::Pass,
                    "input" => Token::Input,
                    _ => Token::Name(word),
                };
                tokens.push((token, line));
            }
            c => return err(line, format!("unexpected character '{}'", c)),
        }
    }

    Ok(tokens)
}

fn lex_string(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    line: usize,
) -> Result<String, SyntaxError> {
    let mut text = String::new();
    loop {
        match chars.next() {
            None => return err(line, "unterminated string literal"),
            Some('"') => return Ok(text),
            Some('\n') => return err(line, "newline in string literal"),
            Some('\\') => match chars.next() {
                Some('n') => text.push('\n'),
                Some('t') => text.push('\t'),
                Some('\\') => text.push('\\'),
                Some('"') => text.push('"'),
                Some(other) => return err(line, format!("unknown escape '\\{}'", other)),
                None => return err(line, "unterminated string literal"),
            },
            Some(c) => text.push(c),
        }
    }
}

// --- Recursive-descent parser ---

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    /// Line of the current token, or of the last token once input runs out.
    fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|(_, line)| *line)
            .unwrap_or(1)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|(token, _)| token.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, want: Token, what: &str) -> Result<(), SyntaxError> {
        let line = self.line();
        match self.next() {
            Some(token) if token == want => Ok(()),
            Some(token) => err(line, format!("expected {}, found {}", what, describe(&token))),
            None => err(line, format!("expected {}, found end of input", what)),
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn skip_newlines(&mut self) {
        while matches!(self.peek(), Some(Token::Newline)) {
            self.pos += 1;
        }
    }

    fn block(&mut self) -> Result<Block, SyntaxError> {
        let mut stmts = Vec::new();
        loop {
            self.skip_newlines();
            if self.at_end() {
                break;
            }
            stmts.push(self.stmt()?);
        }
        Ok(Block { stmts })
    }

    fn stmt(&mut self) -> Result<Stmt, SyntaxError> {
        let line = self.line();
        match self.next() {
            Some(Token::Name(name)) => {
                self.expect(Token::Equals, "'='")?;
                let expr = self.expr()?;
                self.end_of_stmt()?;
                Ok(Stmt::Assign(name, expr))
            }
            Some(Token::Print) => {
                self.expect(Token::LParen, "'('")?;
                let expr = self.expr()?;
                self.expect(Token::RParen, "')'")?;
                self.end_of_stmt()?;
                Ok(Stmt::Print(expr))
            }
            Some(Token::Pass) => {
                self.end_of_stmt()?;
                Ok(Stmt::Pass)
            }
            Some(token) => err(line, format!("expected a statement, found {}", describe(&token))),
            None => err(line, "expected a statement"),
        }
    }

    fn end_of_stmt(&mut self) -> Result<(), SyntaxError> {
        let line = self.line();
        match self.next() {
            Some(Token::Newline) | None => Ok(()),
            Some(token) => err(
                line,
                format!("expected end of line after statement, found {}", describe(&token)),
            ),
        }
    }

    fn expr(&mut self) -> Result<Expr, SyntaxError> {
        self.addition()
    }

    fn addition(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.multiplication()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinOp::Add,
                Some(Token::Minus) => BinOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let right = self.multiplication()?;
            expr = Expr::binary(op, expr, right);
        }
        Ok(expr)
    }

    fn multiplication(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.leaf()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinOp::Mul,
                Some(Token::DoubleSlash) => BinOp::IDiv,
                _ => break,
            };
            self.pos += 1;
            let right = self.leaf()?;
            expr = Expr::binary(op, expr, right);
        }
        Ok(expr)
    }

    fn leaf(&mut self) -> Result<Expr, SyntaxError> {
        let line = self.line();
        match self.next() {
            Some(Token::Number(n)) => Ok(Expr::Num(n)),
            Some(Token::Name(name)) => Ok(Expr::Var(name)),
            Some(Token::Input) => {
                self.expect(Token::LParen, "'('")?;
                let prompt = match self.next() {
                    Some(Token::Text(text)) => text,
                    Some(token) => {
                        return err(
                            line,
                            format!("input expects a quoted prompt, found {}", describe(&token)),
                        )
                    }
                    None => return err(line, "input expects a quoted prompt"),
                };
                self.expect(Token::RParen, "')'")?;
                Ok(Expr::Input(prompt))
            }
            Some(Token::LParen) => {
                let expr = self.expr()?;
                self.expect(Token::RParen, "')'")?;
                Ok(expr)
            }
            Some(token) => err(line, format!("expected an expression, found {}", describe(&token))),
            None => err(line, "expected an expression"),
        }
    }
}
