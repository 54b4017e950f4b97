//! Tokens produced by the lexer and consumed by the parser.

use std::fmt;

use crate::{Name, Position, Span};

/// A token with its source location.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, pos: Position) -> Self {
        Token { kind, span, pos }
    }
}

/// Token kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // Literals
    Int(i64),
    Str(String),

    /// Plain (`foo`) or operator (`:+:`) identifier.
    Ident(Name),

    // Keywords
    If,
    Else,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    Dot,
    Colon,
    Ellipsis,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Bang,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    ColonEq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,

    Newline,
    Eof,
}

impl TokenKind {
    /// Whether this token separates expressions in a list.
    pub fn is_separator(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Semicolon)
    }
}

impl fmt::Display for TokenKind {
    /// Renders the token the way it is written in source, for syntax errors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Int(n) => return write!(f, "{n}"),
            TokenKind::Str(s) => return write!(f, "{s:?}"),
            TokenKind::Ident(name) => return write!(f, "{name}"),
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Dot => ".",
            TokenKind::Colon => ":",
            TokenKind::Ellipsis => "...",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Bang => "!",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Eq => "=",
            TokenKind::ColonEq => ":=",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::SlashEq => "/=",
            TokenKind::Newline => "\\n",
            TokenKind::Eof => "EOF",
        };
        f.write_str(text)
    }
}

/// Token list in source order, always terminated by `TokenKind::Eof`
/// once produced by the lexer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Token at `index`, or the last token (`Eof`) when out of range.
    #[inline]
    pub fn get_or_last(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index).or_else(|| self.tokens.last())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn kinds(&self) -> impl Iterator<Item = &TokenKind> {
        self.tokens.iter().map(|t| &t.kind)
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_matches_source_text() {
        assert_eq!(TokenKind::ColonEq.to_string(), ":=");
        assert_eq!(TokenKind::Int(42).to_string(), "42");
        assert_eq!(TokenKind::Str("a\"b".into()).to_string(), "\"a\\\"b\"");
        assert_eq!(TokenKind::Ident(Name::new(":+:")).to_string(), ":+:");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn get_or_last_falls_back_to_eof() {
        let mut list = TokenList::new();
        let pos = Position::builtin();
        list.push(Token::new(TokenKind::Int(1), Span::new(0, 1), pos.clone()));
        list.push(Token::new(TokenKind::Eof, Span::new(1, 1), pos));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get_or_last(9).map(|t| &t.kind), Some(&TokenKind::Eof));
    }

    #[test]
    fn separators() {
        assert!(TokenKind::Newline.is_separator());
        assert!(TokenKind::Semicolon.is_separator());
        assert!(!TokenKind::Comma.is_separator());
    }
}
