use super::ast::{Expr, Function, Node, Prototype};
use super::error::{Error, ErrorKind, Result};
use super::token::{Token, TokenKind};

const MAX_DEPTH: usize = 256;

fn precedence(op: char) -> Option<i32> {
    match op {
        '<' => Some(5),
        '+' | '-' => Some(10),
        '*' => Some(20),
        _ => None,
    }
}

/// Recursive-descent parser over a fully tokenized buffer.
///
/// The cursor only moves forward. Reaching the `End` token, or the end of the
/// list, where a production still needs input is reported as
/// `UnexpectedEndOfInput`.
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            index: 0,
            depth: 0,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.peek_kind() == TokenKind::End
    }

    fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.index)
            .map_or(TokenKind::End, |t| t.kind)
    }

    fn current(&self) -> Result<&Token> {
        match self.tokens.get(self.index) {
            Some(t) if t.kind != TokenKind::End => Ok(t),
            _ => Err(Error::from(ErrorKind::UnexpectedEndOfInput)),
        }
    }

    fn advance(&mut self) -> Result<Token> {
        let token = self.current()?.clone();
        self.index += 1;
        Ok(token)
    }

    fn expect(&mut self, expected: TokenKind) -> Result<Token> {
        let token = self.current()?;
        if token.kind != expected {
            return Err(Error::from(ErrorKind::UnexpectedToken {
                expected,
                found: token.clone(),
            }));
        }
        self.advance()
    }

    fn current_operator(&self) -> Option<(char, i32)> {
        let op = self.tokens.get(self.index)?.operator()?;
        precedence(op).map(|prec| (op, prec))
    }

    fn ident(&mut self) -> Result<String> {
        self.expect(TokenKind::Identifier).map(|t| t.lexeme)
    }

    /// Parses one top-level unit: a definition, an extern, a conditional or a
    /// bare expression wrapped in an anonymous function.
    pub fn parse_top_level(&mut self) -> Result<Node> {
        match self.peek_kind() {
            TokenKind::Def => self.parse_definition().map(Node::Function),
            TokenKind::Extern => self.parse_extern().map(Node::Prototype),
            TokenKind::If => self.parse_if().map(Node::Expr),
            _ => self.parse_top_level_expr().map(Node::Function),
        }
    }

    /// Parses top-level units until the end of input. Stray `;` between units
    /// are skipped.
    pub fn parse_program(&mut self) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();
        while !self.is_at_end() {
            if self.peek_kind() == TokenKind::Semicolon {
                self.index += 1;
                continue;
            }
            nodes.push(self.parse_top_level()?);
        }
        Ok(nodes)
    }

    pub fn parse_definition(&mut self) -> Result<Function> {
        self.expect(TokenKind::Def)?;
        let proto = self.prototype()?;
        let body = self.parse_expression()?;
        Ok(Function::new(proto, body))
    }

    pub fn parse_extern(&mut self) -> Result<Prototype> {
        self.expect(TokenKind::Extern)?;
        self.prototype()
    }

    pub fn parse_top_level_expr(&mut self) -> Result<Function> {
        let body = self.parse_expression()?;
        Ok(Function::new(Prototype::anonymous(), body))
    }

    pub fn parse_expression(&mut self) -> Result<Expr> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::from(ErrorKind::NestingTooDeep { limit: MAX_DEPTH }));
        }
        self.depth += 1;
        let e = self.expression();
        self.depth -= 1;
        e
    }

    fn expression(&mut self) -> Result<Expr> {
        if self.peek_kind() == TokenKind::If {
            return self.parse_if();
        }
        let lhs = self.primary()?;
        self.binary_rhs(0, lhs)
    }

    // identifier '(' (identifier (',' identifier)*)? ')'
    fn prototype(&mut self) -> Result<Prototype> {
        let name = self.ident()?;
        self.expect(TokenKind::LeftParen)?;

        let mut params = Vec::new();
        if self.peek_kind() != TokenKind::RightParen {
            loop {
                params.push(self.ident()?);
                if self.peek_kind() != TokenKind::Comma {
                    break;
                }
                self.index += 1;
            }
        }
        self.expect(TokenKind::RightParen)?;

        Ok(Prototype::new(name, params))
    }

    fn parse_if(&mut self) -> Result<Expr> {
        self.expect(TokenKind::If)?;
        let cond = self.parse_expression()?;
        self.expect(TokenKind::Then)?;
        let then = self.parse_expression()?;
        self.expect(TokenKind::Else)?;
        let otherwise = self.parse_expression()?;

        Ok(Expr::If(Box::new(cond), Box::new(then), Box::new(otherwise)))
    }

    fn primary(&mut self) -> Result<Expr> {
        match self.current()?.kind {
            TokenKind::Identifier => {
                let name = self.advance()?.lexeme;
                if self.peek_kind() == TokenKind::LeftParen {
                    let args = self.args()?;
                    Ok(Expr::Call(name, args))
                } else {
                    Ok(Expr::Variable(name))
                }
            }
            TokenKind::Number => {
                let lexeme = self.advance()?.lexeme;
                lexeme
                    .parse::<f64>()
                    .map(Expr::Number)
                    .map_err(|_| Error::from(ErrorKind::InvalidNumber { lexeme }))
            }
            TokenKind::LeftParen => self.paren(),
            _ => Err(Error::from(ErrorKind::InvalidPrimary {
                found: self.current()?.clone(),
            })),
        }
    }

    fn paren(&mut self) -> Result<Expr> {
        self.expect(TokenKind::LeftParen)?;
        let e = self.parse_expression()?;
        self.expect(TokenKind::RightParen)?;
        Ok(e)
    }

    // '(' (expression (',' expression)*)? ')'
    fn args(&mut self) -> Result<Vec<Expr>> {
        self.expect(TokenKind::LeftParen)?;

        let mut args = Vec::new();
        if self.peek_kind() != TokenKind::RightParen {
            loop {
                args.push(self.parse_expression()?);
                if self.peek_kind() != TokenKind::Comma {
                    break;
                }
                self.index += 1;
            }
        }
        self.expect(TokenKind::RightParen)?;

        Ok(args)
    }

    fn binary_rhs(&mut self, min_prec: i32, mut lhs: Expr) -> Result<Expr> {
        loop {
            let (op, prec) = match self.current_operator() {
                Some((op, prec)) if prec >= min_prec => (op, prec),
                _ => return Ok(lhs),
            };
            self.index += 1;

            let mut rhs = self.primary()?;
            if let Some((_, next_prec)) = self.current_operator() {
                if prec < next_prec {
                    rhs = self.binary_rhs(prec + 1, rhs)?;
                }
            }

            lhs = Expr::binary(op, lhs, rhs);
        }
    }
}
