//! Identifiers: a name at a source position.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{Name, Position};

/// A reference to a binding, as written in the source.
///
/// Equality and hashing consider only the name; the position is carried
/// for error reporting.
#[derive(Clone, Debug)]
pub struct Identifier {
    pub name: Name,
    pub pos: Position,
}

impl Identifier {
    pub fn new(name: impl Into<Name>, pos: Position) -> Self {
        Identifier {
            name: name.into(),
            pos,
        }
    }

    /// An identifier defined by the builtin library.
    pub fn builtin(name: impl Into<Name>) -> Self {
        Identifier::new(name, Position::builtin())
    }

    pub fn as_str(&self) -> &str {
        self.name.as_str()
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn equality_ignores_position() {
        let a = Identifier::new("x", Position::new(Name::new("a.rdx"), 0, 0));
        let b = Identifier::new("x", Position::new(Name::new("b.rdx"), 3, 7));
        assert_eq!(a, b);
        assert_ne!(a, Identifier::builtin("y"));
    }

    #[test]
    fn display_is_the_name() {
        assert_eq!(Identifier::builtin("::=:").to_string(), "::=:");
    }
}
