/// Line and column of a character in the source, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Tracks the scan position as (byte offset, line, column).
///
/// The position only ever moves through [`Cursor::bump`], so line and
/// column stay consistent with the characters actually consumed.
#[derive(Debug, Clone)]
pub struct Cursor {
    offset: usize,
    line: usize,
    column: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn bump(&mut self, c: char) {
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Move past every character of `consumed`.
    pub fn bump_str(&mut self, consumed: &str) {
        for c in consumed.chars() {
            self.bump(c);
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
