//! Token cursor for navigating the token stream.

use redex_eval::errors::{syntax_error, EvalError};
use redex_ir::{Position, Token, TokenKind, TokenList};

/// Cursor over a `TokenList` that ends with `Eof`.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current index in the token stream, for snapshots.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Roll back to a position taken with `position()`.
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.tokens.len().saturating_sub(1));
    }

    /// The current token. Past the end this is the trailing `Eof`.
    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get_or_last(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        self.current().map_or(&TokenKind::Eof, |t| &t.kind)
    }

    /// Position of the current token.
    pub fn current_pos(&self) -> Position {
        self.current().map_or_else(Position::builtin, |t| t.pos.clone())
    }

    /// Kind of the token `n` ahead of the current one.
    pub fn peek_kind_at(&self, n: usize) -> &'a TokenKind {
        self.tokens
            .get_or_last(self.pos + n)
            .map_or(&TokenKind::Eof, |t| &t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Whether the current token has the same kind as `kind`, ignoring payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    #[inline]
    pub fn check_separator(&self) -> bool {
        self.current_kind().is_separator()
    }

    /// Consume the current token. `Eof` is never consumed.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the kind of `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the kind of `kind` or fail at the current token.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<(), EvalError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    pub fn skip_newlines(&mut self) {
        while self.check(&TokenKind::Newline) {
            self.advance();
        }
    }

    /// Skip newlines and semicolons.
    pub fn skip_separators(&mut self) {
        while self.check_separator() {
            self.advance();
        }
    }

    /// Syntax error at the current token.
    #[cold]
    #[inline(never)]
    pub fn unexpected(&self) -> EvalError {
        syntax_error(&self.current_pos(), self.current_kind().to_string())
    }
}
