//! Redex IR - shared vocabulary of the redex workspace.
//!
//! This crate contains the small, dependency-free types every other crate
//! agrees on:
//! - `Span` byte ranges and `Position` (file, line, column) source locations
//! - `LineIndex` for turning byte offsets into positions
//! - `Name` identifiers and `Identifier` (a name at a position)
//! - `Token`/`TokenKind`/`TokenList` produced by the lexer
//! - `builtin_names`, the operator identifiers bound in the root environment
//!
//! The expression model itself lives in `redex_eval`: unevaluated syntax and
//! reduced values share one type there, and values need the environment.

/// Compile-time assertion that a type has a specific size.
///
/// Used to keep frequently-copied types from growing by accident.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod builtin_names;
mod identifier;
mod name;
mod position;
mod span;
mod token;

pub use identifier::Identifier;
pub use name::Name;
pub use position::{LineIndex, Position};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
