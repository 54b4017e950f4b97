//! Identifiers bound in the root environment.
//!
//! The parser desugars operator syntax into calls of these identifiers, and
//! programs may call them directly (`:+:(1, 2)`).

pub const NULL: &str = "null";
pub const TRUE: &str = "true";
pub const FALSE: &str = "false";

pub const ADD: &str = ":+:";
pub const SUB: &str = ":-:";
pub const MUL: &str = ":*:";
pub const DIV: &str = ":/:";
pub const NEG: &str = "-:";
pub const NOT: &str = "!:";

pub const EQ: &str = ":==:";
pub const NE: &str = ":!=:";
pub const LT: &str = ":<:";
pub const LE: &str = ":<=:";
pub const GT: &str = ":>:";
pub const GE: &str = ":>=:";

pub const ASSIGN: &str = ":=:";
pub const DEFINE: &str = "::=:";

pub const FIELD_GET: &str = ":.:";
pub const INDEX_GET: &str = ":[]:";
pub const FIELD_SET: &str = ":.=:";
pub const FIELD_DEFINE: &str = ":.:=:";
pub const INDEX_SET: &str = ":[]=:";
pub const INDEX_DEFINE: &str = ":[]:=:";
/// `o.m(a...)`: the receiver is evaluated once and passed as `self`.
pub const METHOD_CALL: &str = ":.():";

pub const PRINT: &str = "print";
pub const PRINTLN: &str = "println";

/// Object methods, reachable only through field access on an object.
pub const METHOD_LENGTH: &str = "length";
pub const METHOD_SIZE: &str = "size";
pub const METHOD_PUSH: &str = "push";
pub const METHOD_POP: &str = "pop";

/// Every operator identifier, for the lexer and for tests.
pub const OPERATORS: &[&str] = &[
    ADD,
    SUB,
    MUL,
    DIV,
    NEG,
    NOT,
    EQ,
    NE,
    LT,
    LE,
    GT,
    GE,
    ASSIGN,
    DEFINE,
    FIELD_GET,
    INDEX_GET,
    FIELD_SET,
    FIELD_DEFINE,
    INDEX_SET,
    INDEX_DEFINE,
    METHOD_CALL,
];
