use crate::ast::Ast;
use crate::error::CalcError;

/// Recursive-descent parser that reads the formula one character at a time.
///
/// There is no separate token stream: each grammar rule inspects the current
/// character, consumes what it recognizes and skips the whitespace after it.
pub struct Parser<'a> {
    src: &'a str,
    i: usize,
}

fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r')
}

fn is_formula_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || is_space(c) || matches!(c, b'(' | b')' | b'+' | b'-' | b'*' | b'/')
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { src: s, i: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.i).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let ch = self.peek();
        if ch.is_some() {
            self.i += 1;
        }
        ch
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if is_space(c) {
                self.i += 1;
            } else {
                break;
            }
        }
    }

    fn current_char(&self) -> Option<char> {
        self.src[self.i..].chars().next()
    }

    fn unexpected(&self) -> CalcError {
        match self.current_char() {
            Some(found) => CalcError::UnexpectedCharacter { found, pos: self.i },
            None => CalcError::UnexpectedEnd,
        }
    }

    /// Error for a leftover character where an operator (or the end) was expected.
    fn stray(&self, otherwise: CalcError) -> CalcError {
        match self.peek() {
            Some(c) if !is_formula_char(c) => self.unexpected(),
            _ => otherwise,
        }
    }

    pub fn parse(mut self) -> Result<Ast, CalcError> {
        self.skip_ws();
        if self.peek().is_none() {
            return Err(CalcError::EmptyExpression);
        }
        let expr = self.expr()?;
        if self.peek().is_some() {
            return Err(self.stray(CalcError::TrailingInput { pos: self.i }));
        }
        Ok(expr)
    }

    fn expr(&mut self) -> Result<Ast, CalcError> {
        let mut node = self.term()?;
        loop {
            match self.peek() {
                Some(b'+') => {
                    self.bump();
                    self.skip_ws();
                    let rhs = self.term()?;
                    node = Ast::Add(Box::new(node), Box::new(rhs));
                }
                Some(b'-') => {
                    self.bump();
                    self.skip_ws();
                    let rhs = self.term()?;
                    node = Ast::Sub(Box::new(node), Box::new(rhs));
                }
                _ => break,
            }
        }
        Ok(node)
    }

    fn term(&mut self) -> Result<Ast, CalcError> {
        let mut node = self.unary()?;
        loop {
            match self.peek() {
                Some(b'*') => {
                    self.bump();
                    self.skip_ws();
                    let rhs = self.unary()?;
                    node = Ast::Mul(Box::new(node), Box::new(rhs));
                }
                Some(b'/') => {
                    self.bump();
                    self.skip_ws();
                    let rhs = self.unary()?;
                    node = Ast::Div(Box::new(node), Box::new(rhs));
                }
                _ => break,
            }
        }
        Ok(node)
    }

    fn unary(&mut self) -> Result<Ast, CalcError> {
        if self.peek() == Some(b'-') {
            self.bump();
            self.skip_ws();
            return Ok(Ast::Neg(Box::new(self.unary()?)));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Ast, CalcError> {
        match self.peek() {
            Some(c) if c.is_ascii_digit() => self.number(),
            Some(c) if c.is_ascii_alphabetic() => {
                // Only one letter: `ab` is the variable `a` followed by stray input.
                self.bump();
                self.skip_ws();
                Ok(Ast::Var(c as char))
            }
            Some(b'(') => {
                self.bump();
                self.skip_ws();
                let e = self.expr()?;
                if self.peek() != Some(b')') {
                    return Err(self.stray(CalcError::MissingCloseParen { pos: self.i }));
                }
                self.bump();
                self.skip_ws();
                Ok(e)
            }
            _ => Err(self.unexpected()),
        }
    }

    fn number(&mut self) -> Result<Ast, CalcError> {
        let start = self.i;
        let mut value: Option<i64> = Some(0);
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            value = value
                .and_then(|v| v.checked_mul(10))
                .and_then(|v| v.checked_add(i64::from(c - b'0')));
            self.i += 1;
        }
        let text = &self.src[start..self.i];
        let v = value.ok_or_else(|| CalcError::LiteralOutOfRange(text.to_string()))?;
        self.skip_ws();
        Ok(Ast::Num(v))
    }
}

/// Parses formula text into a fresh expression tree.
pub fn parse(text: &str) -> Result<Ast, CalcError> {
    Parser::new(text).parse()
}
