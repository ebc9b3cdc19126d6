//! Sandboxed algebraic expressions usable as a derivative.
//!
//! Text such as `x + y/x` or `sin(x) * exp(-y^2)` is tokenised, parsed into
//! a typed [`Expr`] tree and evaluated by walking the tree. Only the
//! variables `x` and `y`, the constants `pi` and `e`, and the functions
//! listed in [`Func`] are recognised; nothing is compiled or executed.
//!
//! ```rust
//! use milne::prelude::*;
//!
//! let f: Expression = "x + y/x".parse().unwrap();
//! assert_eq!(f.ode(2.0, 4.0), 4.0);
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::{BinOp, Expr, Func, Var};

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{Float, core::ode::ODE};

/// Errors produced while parsing an expression. Positions are byte offsets
/// into the source text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character '{ch}' at {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("invalid number '{text}' at {pos}")]
    InvalidNumber { text: String, pos: usize },
    #[error("unexpected {found} at {pos}")]
    UnexpectedToken { found: String, pos: usize },
    #[error("unknown identifier '{name}' at {pos}")]
    UnknownIdentifier { name: String, pos: usize },
    #[error("unknown function '{name}' at {pos}")]
    UnknownFunction { name: String, pos: usize },
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("expression nested deeper than {0} levels")]
    TooDeep(usize),
}

/// A parsed right-hand side f(x, y).
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    source: String,
    ast: Expr,
}

impl Expression {
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let tokens = lexer::tokenize(source)?;
        let ast = parser::parse(&tokens)?;
        Ok(Self {
            source: source.to_string(),
            ast,
        })
    }

    /// Evaluate at `(x, y)`. Domain errors follow IEEE semantics and yield
    /// NaN or infinities rather than failing.
    pub fn eval(&self, x: Float, y: Float) -> Float {
        self.ast.eval(x, y)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn ast(&self) -> &Expr {
        &self.ast
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl ODE for Expression {
    fn ode(&self, x: Float, y: Float) -> Float {
        self.eval(x, y)
    }
}
