//! Human-readable source positions.

use std::cell::Cell;
use std::fmt;

use crate::{Name, Span};

/// File name carried by positions of builtin definitions.
pub const BUILTIN_FILE: &str = "builtin";

/// A location in a source file.
///
/// `line` and `column` are zero-based; `Display` renders them one-based as
/// `file:line:column`. Columns count characters, not bytes.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub file: Name,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(file: Name, line: u32, column: u32) -> Self {
        Position { file, line, column }
    }

    /// Position attached to identifiers created by the builtin library.
    pub fn builtin() -> Self {
        Position::new(Name::new(BUILTIN_FILE), 0, 0)
    }

    pub fn is_builtin(&self) -> bool {
        self.file.as_str() == BUILTIN_FILE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line + 1, self.column + 1)
    }
}

/// Maps byte offsets of one source text to `Position`s.
#[derive(Clone, Debug)]
pub struct LineIndex<'src> {
    file: Name,
    source: &'src str,
    /// Byte offset of the first character of every line.
    line_starts: Vec<u32>,
    /// Last resolved `(line, offset, column)`. The lexer asks for offsets in
    /// ascending order, so columns are counted from here instead of from
    /// the line start.
    last: Cell<(usize, u32, u32)>,
}

impl<'src> LineIndex<'src> {
    pub fn new(file: Name, source: &'src str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| u32::try_from(i + 1).unwrap_or(u32::MAX)),
        );
        LineIndex {
            file,
            source,
            line_starts,
            last: Cell::new((0, 0, 0)),
        }
    }

    pub fn file(&self) -> &Name {
        &self.file
    }

    /// Position of a byte offset. Offsets past the end clamp to the end.
    pub fn position(&self, offset: u32) -> Position {
        let offset = offset.min(u32::try_from(self.source.len()).unwrap_or(u32::MAX));
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let (last_line, last_offset, last_column) = self.last.get();
        let (start, base) = if last_line == line && last_offset <= offset {
            (last_offset, last_column)
        } else {
            (self.line_starts[line], 0)
        };
        let line_number = u32::try_from(line).unwrap_or(u32::MAX);
        let Some(text) = self.source.get(start as usize..offset as usize) else {
            return Position::new(self.file.clone(), line_number, base);
        };
        let counted = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        let column = base.saturating_add(counted);
        self.last.set((line, offset, column));
        Position::new(self.file.clone(), line_number, column)
    }

    /// Position of the start of a span.
    pub fn span_start(&self, span: Span) -> Position {
        self.position(span.start)
    }
}
