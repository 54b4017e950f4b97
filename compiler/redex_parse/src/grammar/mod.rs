//! Grammar rules, as `Parser` methods.
//!
//! - `mod.rs`: expression sequences (programs and blocks)
//! - `expr.rs`: assignment and the binary/unary precedence chain
//! - `postfix.rs`: call, method call, field and index
//! - `primary.rs`: literals, identifiers, groups, function and object
//!   literals, conditions

mod expr;
mod postfix;
mod primary;

use redex_eval::errors::EvalResult;
use redex_eval::Expression;
use redex_ir::TokenKind;

use crate::Parser;

impl Parser<'_> {
    /// Separated expressions up to `end`, or up to `Eof` when `end` is `None`.
    ///
    /// The terminator itself is left for the caller.
    pub(crate) fn parse_sequence(&mut self, end: Option<&TokenKind>) -> EvalResult<Vec<Expression>> {
        let mut items = Vec::new();
        self.cursor.skip_separators();
        while !self.at_sequence_end(end) {
            items.push(self.parse_expr()?);
            if self.at_sequence_end(end) {
                break;
            }
            if !self.cursor.check_separator() {
                return Err(self.cursor.unexpected());
            }
            self.cursor.skip_separators();
        }
        if end.is_some() && self.cursor.is_at_end() {
            return Err(self.cursor.unexpected());
        }
        Ok(items)
    }

    fn at_sequence_end(&self, end: Option<&TokenKind>) -> bool {
        match end {
            Some(kind) => self.cursor.check(kind) || self.cursor.is_at_end(),
            None => self.cursor.is_at_end(),
        }
    }

    /// `{ sequence }` as a single expression list.
    pub(crate) fn parse_block(&mut self) -> EvalResult<Expression> {
        self.cursor.expect(&TokenKind::LBrace)?;
        let items = self.parse_sequence(Some(&TokenKind::RBrace))?;
        self.cursor.expect(&TokenKind::RBrace)?;
        Ok(Expression::list(items))
    }

    /// Comma separated expressions up to `end`, consuming `end`.
    ///
    /// Newlines are insignificant inside the delimiters and a trailing
    /// comma is allowed.
    pub(crate) fn parse_comma_list(&mut self, end: &TokenKind) -> EvalResult<Vec<Expression>> {
        let mut items = Vec::new();
        self.cursor.skip_newlines();
        while !self.cursor.check(end) {
            items.push(self.parse_expr()?);
            self.cursor.skip_newlines();
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
            self.cursor.skip_newlines();
        }
        self.cursor.expect(end)?;
        Ok(items)
    }
}
