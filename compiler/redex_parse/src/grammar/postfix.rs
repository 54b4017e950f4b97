//! Postfix forms: call, method call, field access and index.
//!
//! Newlines end an expression, so a postfix operator must start on the
//! same line as its operand.

use redex_eval::errors::EvalResult;
use redex_eval::Expression;
use redex_ir::builtin_names::{FIELD_GET, INDEX_GET, METHOD_CALL};
use redex_ir::{Identifier, TokenKind};

use super::expr::builtin_call;
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn parse_postfix(&mut self) -> EvalResult<Expression> {
        let start = self.cursor.current_pos();
        let mut expr = self.parse_primary()?;
        loop {
            match self.cursor.current_kind() {
                TokenKind::LParen => {
                    self.cursor.advance();
                    let args = self.parse_comma_list(&TokenKind::RParen)?;
                    expr = Expression::call(expr, args, start.clone());
                }
                TokenKind::Dot => {
                    self.cursor.advance();
                    let key = Expression::identifier(self.expect_ident()?);
                    if self.cursor.eat(&TokenKind::LParen) {
                        // The receiver is evaluated once and passed as `self`.
                        let mut args = vec![expr, key];
                        args.extend(self.parse_comma_list(&TokenKind::RParen)?);
                        expr = builtin_call(METHOD_CALL, args, &start);
                    } else {
                        expr = builtin_call(FIELD_GET, vec![expr, key], &start);
                    }
                }
                TokenKind::LBracket => {
                    self.cursor.advance();
                    self.cursor.skip_newlines();
                    let index = self.parse_expr()?;
                    self.cursor.skip_newlines();
                    self.cursor.expect(&TokenKind::RBracket)?;
                    expr = builtin_call(INDEX_GET, vec![expr, index], &start);
                }
                _ => return Ok(expr),
            }
        }
    }

    /// A plain identifier token.
    pub(crate) fn expect_ident(&mut self) -> EvalResult<Identifier> {
        let pos = self.cursor.current_pos();
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                let id = Identifier::new(name.clone(), pos);
                self.cursor.advance();
                Ok(id)
            }
            _ => Err(self.cursor.unexpected()),
        }
    }
}
