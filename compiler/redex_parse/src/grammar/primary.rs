//! Primary expressions.

use redex_eval::errors::EvalResult;
use redex_eval::{Expression, Object};
use redex_ir::{Identifier, Position, TokenKind};

use crate::Parser;

/// Parameters of a function literal.
struct Params {
    positional: Vec<Identifier>,
    variadic: Option<Identifier>,
}

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> EvalResult<Expression> {
        let pos = self.cursor.current_pos();
        match self.cursor.current_kind() {
            TokenKind::Int(n) => {
                let n = *n;
                self.cursor.advance();
                Ok(Expression::number(n))
            }
            TokenKind::Str(text) => {
                let text = text.as_str();
                self.cursor.advance();
                Ok(Expression::string(text))
            }
            TokenKind::Ident(name) => {
                let id = Identifier::new(name.clone(), pos);
                self.cursor.advance();
                Ok(Expression::identifier(id))
            }
            TokenKind::LParen => self.parse_paren(),
            TokenKind::LBracket => self.parse_object(),
            TokenKind::If => self.parse_if(),
            _ => Err(self.cursor.unexpected()),
        }
    }

    /// `(params){ body }` or a parenthesized expression.
    fn parse_paren(&mut self) -> EvalResult<Expression> {
        let pos = self.cursor.current_pos();
        let snapshot = self.cursor.position();
        if let Some(params) = self.try_parse_params() {
            let body = self.parse_block()?;
            return Ok(Expression::function(
                params.positional,
                params.variadic,
                body,
                pos,
            ));
        }
        self.cursor.set_position(snapshot);

        self.cursor.expect(&TokenKind::LParen)?;
        self.cursor.skip_newlines();
        let inner = self.parse_expr()?;
        self.cursor.skip_newlines();
        self.cursor.expect(&TokenKind::RParen)?;
        Ok(inner)
    }

    /// `(a, b, rest...)` followed by `{`. Leaves the cursor anywhere on failure.
    fn try_parse_params(&mut self) -> Option<Params> {
        if !self.cursor.eat(&TokenKind::LParen) {
            return None;
        }
        let mut params = Params {
            positional: Vec::new(),
            variadic: None,
        };
        self.cursor.skip_newlines();
        while !self.cursor.check(&TokenKind::RParen) {
            let id = self.expect_ident().ok()?;
            if self.cursor.eat(&TokenKind::Ellipsis) {
                params.variadic = Some(id);
                self.cursor.skip_newlines();
                break;
            }
            params.positional.push(id);
            self.cursor.skip_newlines();
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
            self.cursor.skip_newlines();
        }
        if !self.cursor.eat(&TokenKind::RParen) {
            return None;
        }
        self.cursor.check(&TokenKind::LBrace).then_some(params)
    }

    /// `[e0, e1, key: value]`.
    fn parse_object(&mut self) -> EvalResult<Expression> {
        self.cursor.expect(&TokenKind::LBracket)?;
        let mut object = Object::new();
        self.cursor.skip_newlines();
        while !self.cursor.check(&TokenKind::RBracket) {
            let named = matches!(self.cursor.current_kind(), TokenKind::Ident(_))
                && matches!(self.cursor.peek_kind_at(1), TokenKind::Colon);
            if named {
                let key = self.expect_ident()?;
                self.cursor.advance();
                self.cursor.skip_newlines();
                let value = self.parse_expr()?;
                object.named.insert(key.name, value);
            } else {
                object.push(self.parse_expr()?);
            }
            self.cursor.skip_newlines();
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
            self.cursor.skip_newlines();
        }
        self.cursor.expect(&TokenKind::RBracket)?;
        Ok(Expression::object(object))
    }

    /// `if(c, t)`, `if(c, t, e)` or `if c { ... } else { ... }`.
    fn parse_if(&mut self) -> EvalResult<Expression> {
        let pos = self.cursor.current_pos();
        self.cursor.expect(&TokenKind::If)?;

        if self.cursor.check(&TokenKind::LParen) {
            let snapshot = self.cursor.position();
            self.cursor.advance();
            let mut args = self.parse_comma_list(&TokenKind::RParen)?;
            if (2..=3).contains(&args.len()) {
                let else_branch = if args.len() == 3 { args.pop() } else { None };
                let then_branch = args.pop().unwrap_or(Expression::Null);
                let condition = args.pop().unwrap_or(Expression::Null);
                return Ok(Expression::condition(condition, then_branch, else_branch, pos));
            }
            // `if (c) { ... }`: the parentheses belong to the condition.
            if args.len() == 1 && self.cursor.check(&TokenKind::LBrace) {
                let condition = args.pop().unwrap_or(Expression::Null);
                return self.finish_block_if(condition, pos);
            }
            self.cursor.set_position(snapshot);
        }

        let condition = self.parse_expr()?;
        self.finish_block_if(condition, pos)
    }

    /// Branches of the block form, after the condition.
    fn finish_block_if(&mut self, condition: Expression, pos: Position) -> EvalResult<Expression> {
        let then_branch = self.parse_block()?;
        let else_branch = if self.eat_else() {
            if self.cursor.check(&TokenKind::If) {
                Some(self.parse_if()?)
            } else {
                Some(self.parse_block()?)
            }
        } else {
            None
        };
        Ok(Expression::condition(condition, then_branch, else_branch, pos))
    }

    /// Consume `else`, possibly on a following line.
    fn eat_else(&mut self) -> bool {
        let mut ahead = 0;
        while matches!(self.cursor.peek_kind_at(ahead), TokenKind::Newline) {
            ahead += 1;
        }
        if !matches!(self.cursor.peek_kind_at(ahead), TokenKind::Else) {
            return false;
        }
        self.cursor.skip_newlines();
        self.cursor.advance();
        true
    }
}
