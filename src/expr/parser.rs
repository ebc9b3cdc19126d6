//! Recursive-descent parser producing an [`Expr`] tree.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('^' unary)?
//! primary := number | 'x' | 'y' | 'pi' | 'e' | func '(' expr ')' | '(' expr ')'
//! ```

use crate::Float;

use super::{
    ParseError,
    ast::{BinOp, Expr, Func, Var},
    lexer::{Token, TokenKind},
};

/// Maximum nesting of parentheses, calls and unary operators.
pub(crate) const MAX_DEPTH: usize = 256;

pub(crate) fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.expr()?;
    match parser.peek() {
        None => Ok(expr),
        Some(tok) => Err(unexpected(tok)),
    }
}

fn unexpected(tok: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        found: tok.kind.describe(),
        pos: tok.pos,
    }
}

struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    depth: usize,
}

impl<'t> Parser<'t> {
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Result<&'t Token, ParseError> {
        let tok = self.tokens.get(self.pos).ok_or(ParseError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(tok)
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek().is_some_and(|t| &t.kind == kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        let tok = self.next()?;
        if &tok.kind == kind {
            Ok(())
        } else {
            Err(unexpected(tok))
        }
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::TooDeep(MAX_DEPTH));
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.term()?;
        loop {
            let op = if self.eat(&TokenKind::Plus) {
                BinOp::Add
            } else if self.eat(&TokenKind::Minus) {
                BinOp::Sub
            } else {
                return Ok(lhs);
            };
            let rhs = self.term()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.unary()?;
        loop {
            let op = if self.eat(&TokenKind::Star) {
                BinOp::Mul
            } else if self.eat(&TokenKind::Slash) {
                BinOp::Div
            } else {
                return Ok(lhs);
            };
            let rhs = self.unary()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        self.descend()?;
        let expr = if self.eat(&TokenKind::Minus) {
            Expr::Neg(Box::new(self.unary()?))
        } else if self.eat(&TokenKind::Plus) {
            self.unary()?
        } else {
            self.power()?
        };
        self.depth -= 1;
        Ok(expr)
    }

    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.primary()?;
        if self.eat(&TokenKind::Caret) {
            // Right associative; the exponent may carry its own sign.
            let exponent = self.unary()?;
            return Ok(Expr::Binary(BinOp::Pow, Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let tok = self.next()?;
        match &tok.kind {
            TokenKind::Num(v) => Ok(Expr::Num(*v)),
            TokenKind::LParen => {
                let inner = self.expr()?;
                self.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::Ident(name) => {
                if self.eat(&TokenKind::LParen) {
                    let func = Func::from_name(name).ok_or_else(|| ParseError::UnknownFunction {
                        name: name.clone(),
                        pos: tok.pos,
                    })?;
                    let arg = self.expr()?;
                    self.expect(&TokenKind::RParen)?;
                    return Ok(Expr::Call(func, Box::new(arg)));
                }
                match name.as_str() {
                    "x" => Ok(Expr::Var(Var::X)),
                    "y" => Ok(Expr::Var(Var::Y)),
                    "pi" => Ok(Expr::Num(std::f64::consts::PI as Float)),
                    "e" => Ok(Expr::Num(std::f64::consts::E as Float)),
                    _ => Err(ParseError::UnknownIdentifier {
                        name: name.clone(),
                        pos: tok.pos,
                    }),
                }
            }
            _ => Err(unexpected(tok)),
        }
    }
}
