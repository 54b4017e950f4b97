//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! conversion into `redex_ir::TokenKind`.

use logos::Logos;

use crate::escape::unescape_string;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("\n")]
    Newline,

    #[token("if")]
    If,
    #[token("else")]
    Else,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("...")]
    Ellipsis,
    #[token(".")]
    Dot,
    #[token(":=")]
    ColonEq,
    #[token(":")]
    Colon,

    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("!")]
    Bang,

    // Integer; literals that do not fit in i64 are lex errors
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    // String literals (no unescaped newlines allowed)
    #[regex(r#""([^"\\\n\r]|\\.)*""#, |lex| unescape_quoted(lex.slice()))]
    #[regex(r"'([^'\\\n\r]|\\.)*'", |lex| unescape_quoted(lex.slice()))]
    Str(String),

    // Operator identifiers bound by the builtin library
    #[regex(r":(\+|-|\*|/|==|!=|<|<=|>|>=|=|\.|\[\]|\.=|\.:=|\[\]=|\[\]:=|\.\(\)):")]
    #[token("::=:")]
    #[token("-:")]
    #[token("!:")]
    OpIdent,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Strip the surrounding quotes and resolve escapes.
fn unescape_quoted(slice: &str) -> String {
    let inner = slice.get(1..slice.len().saturating_sub(1)).unwrap_or("");
    unescape_string(inner)
}
