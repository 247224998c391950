//! Grid cursor
//!
//! The cursor points at the next editable cell of the 6×5 grid. `col == 5`
//! means the current row is complete and awaiting submit. All movement is
//! index arithmetic, and the cursor never crosses a row boundary backwards.

use super::word::WORD_LEN;
use serde::{Deserialize, Serialize};

/// Number of guess rows in a game
pub const MAX_ROWS: usize = 6;

/// Position of the next editable cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    row: usize,
    col: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    /// Cursor at the first cell of the first row
    #[must_use]
    pub const fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Current row index (0-5)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Current column index (0-5; 5 = row complete)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// True when the current row holds 5 letters and awaits submit
    #[inline]
    #[must_use]
    pub const fn row_full(self) -> bool {
        self.col == WORD_LEN
    }

    /// True when this is the last row of the grid
    #[inline]
    #[must_use]
    pub const fn last_row(self) -> bool {
        self.row == MAX_ROWS - 1
    }

    /// Advance one column after a letter is accepted
    ///
    /// Returns `false` (unchanged) when the row is already full.
    pub const fn advance(&mut self) -> bool {
        if self.row_full() {
            return false;
        }
        self.col += 1;
        true
    }

    /// Move back one column after a backspace
    ///
    /// Returns `false` (unchanged) at the start of a row; the cursor never
    /// re-enters a submitted row.
    pub const fn retreat(&mut self) -> bool {
        if self.col == 0 {
            return false;
        }
        self.col -= 1;
        true
    }

    /// Jump to the start of the next row after a validated submit
    pub const fn next_row(&mut self) {
        debug_assert!(self.row < MAX_ROWS - 1, "cannot advance past the last row");
        self.row += 1;
        self.col = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_starts_at_origin() {
        let cursor = Cursor::new();
        assert_eq!(cursor.row(), 0);
        assert_eq!(cursor.col(), 0);
        assert!(!cursor.row_full());
    }

    #[test]
    fn cursor_advances_to_row_full() {
        let mut cursor = Cursor::new();
        for expected in 1..=WORD_LEN {
            assert!(cursor.advance());
            assert_eq!(cursor.col(), expected);
        }
        assert!(cursor.row_full());
        // Full row: no further advance
        assert!(!cursor.advance());
        assert_eq!(cursor.col(), WORD_LEN);
    }

    #[test]
    fn cursor_retreat_stops_at_row_start() {
        let mut cursor = Cursor::new();
        assert!(!cursor.retreat());
        assert_eq!(cursor.col(), 0);

        cursor.advance();
        cursor.advance();
        assert!(cursor.retreat());
        assert!(cursor.retreat());
        assert!(!cursor.retreat());
        assert_eq!(cursor.col(), 0);
        assert_eq!(cursor.row(), 0);
    }

    #[test]
    fn cursor_next_row_resets_column() {
        let mut cursor = Cursor::new();
        for _ in 0..WORD_LEN {
            cursor.advance();
        }
        cursor.next_row();
        assert_eq!(cursor.row(), 1);
        assert_eq!(cursor.col(), 0);
        // Retreat in the new row stays in the new row
        assert!(!cursor.retreat());
        assert_eq!(cursor.row(), 1);
    }

    #[test]
    fn cursor_last_row_detection() {
        let mut cursor = Cursor::new();
        for _ in 0..MAX_ROWS - 1 {
            assert!(!cursor.last_row());
            for _ in 0..WORD_LEN {
                cursor.advance();
            }
            cursor.next_row();
        }
        assert!(cursor.last_row());
    }
}
