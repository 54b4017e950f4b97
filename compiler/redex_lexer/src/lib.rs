//! Lexer for redex using logos.
//!
//! Produces a `TokenList` terminated by `TokenKind::Eof`. Line comments are
//! dropped; newlines are kept because they separate expressions.

mod escape;
mod lex_error;
mod raw_token;

use logos::Logos;
use redex_ir::{LineIndex, Name, Span, Token, TokenKind, TokenList};

pub use lex_error::LexError;
use raw_token::RawToken;

/// Lex source code into a `TokenList`.
///
/// `file` names the source in token positions. Fails on the first
/// unrecognized character sequence.
#[tracing::instrument(level = "trace", skip(source))]
pub fn lex(source: &str, file: &str) -> Result<TokenList, LexError> {
    let index = LineIndex::new(Name::new(file), source);
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();
        let pos = index.span_start(span);

        let raw = token_result.map_err(|()| LexError {
            pos: pos.clone(),
            literal: slice.to_string(),
        })?;
        if let Some(kind) = convert_token(raw, slice) {
            result.push(Token::new(kind, span, pos));
        }
    }

    let end = u32::try_from(source.len()).unwrap_or(u32::MAX);
    result.push(Token::new(TokenKind::Eof, Span::new(end, end), index.position(end)));

    tracing::trace!(tokens = result.len(), "lexed");
    Ok(result)
}

/// Convert a raw token; trivia converts to `None`.
fn convert_token(raw: RawToken, slice: &str) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::LineComment => return None,
        RawToken::Newline => TokenKind::Newline,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Ellipsis => TokenKind::Ellipsis,
        RawToken::Dot => TokenKind::Dot,
        RawToken::ColonEq => TokenKind::ColonEq,
        RawToken::Colon => TokenKind::Colon,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::PlusEq => TokenKind::PlusEq,
        RawToken::MinusEq => TokenKind::MinusEq,
        RawToken::StarEq => TokenKind::StarEq,
        RawToken::SlashEq => TokenKind::SlashEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Str(s) => TokenKind::Str(s),
        RawToken::OpIdent | RawToken::Ident => TokenKind::Ident(Name::new(slice)),
    };
    Some(kind)
}
