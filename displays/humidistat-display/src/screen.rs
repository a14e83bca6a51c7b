//! Screen buffer types
//!
//! Provides a character grid with HD44780 cursor semantics.

use humidistat_core::traits::{CharDisplay, DisplayError};

/// Character shown for anything outside printable ASCII
const REPLACEMENT: u8 = b'?';

/// 16x2 LCD (the common keypad shield)
pub type Lcd1602 = Screen<16, 2>;

/// 20x4 LCD
pub type Lcd2004 = Screen<20, 4>;

/// Character grid of `COLS` columns by `ROWS` rows
///
/// Text written past the right edge is dropped, as on the LCD where it lands
/// in off-screen DDRAM. A cursor column past the edge is accepted for the
/// same reason; a row outside the grid is rejected.
#[derive(Clone)]
pub struct Screen<const COLS: usize, const ROWS: usize> {
    /// Current display content, printable ASCII only
    cells: [[u8; COLS]; ROWS],
    /// Cursor (col, row)
    cursor: (usize, usize),
    /// Whether the screen needs to be flushed to the LCD
    dirty: bool,
    clears: u32,
    writes: u32,
}

impl<const COLS: usize, const ROWS: usize> Default for Screen<COLS, ROWS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const COLS: usize, const ROWS: usize> Screen<COLS, ROWS> {
    /// Create a new blank screen
    pub fn new() -> Self {
        Self {
            cells: [[b' '; COLS]; ROWS],
            cursor: (0, 0),
            dirty: true,
            clears: 0,
            writes: 0,
        }
    }

    /// Get the content of a row, padded with spaces
    pub fn line(&self, row: usize) -> Option<&str> {
        self.cells
            .get(row)
            .and_then(|cells| core::str::from_utf8(cells).ok())
    }

    /// Get all rows as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        (0..ROWS).filter_map(|row| self.line(row))
    }

    /// Text at a position, `len` characters wide (clipped to the row)
    pub fn text_at(&self, col: usize, row: usize, len: usize) -> Option<&str> {
        let line = self.line(row)?;
        let start = col.min(COLS);
        let end = col.saturating_add(len).min(COLS);
        line.get(start..end)
    }

    /// Check if every cell is blank
    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c == b' ')
    }

    /// Current cursor position as (col, row)
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Check if screen needs flushing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after flushing)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Number of `clear` calls since creation
    pub fn clear_count(&self) -> u32 {
        self.clears
    }

    /// Number of `write_text` calls since creation
    pub fn write_count(&self) -> u32 {
        self.writes
    }

    /// Get number of rows
    pub const fn rows(&self) -> usize {
        ROWS
    }

    /// Get number of columns
    pub const fn cols(&self) -> usize {
        COLS
    }
}

impl<const COLS: usize, const ROWS: usize> CharDisplay for Screen<COLS, ROWS> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for row in &mut self.cells {
            row.fill(b' ');
        }
        self.cursor = (0, 0);
        self.clears += 1;
        self.dirty = true;
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        let row = usize::from(row);
        if row >= ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.cursor = (usize::from(col), row);
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        let (mut col, row) = self.cursor;
        self.writes += 1;

        for ch in text.chars() {
            if let Some(cell) = self.cells[row].get_mut(col) {
                *cell = if ch.is_ascii_graphic() || ch == ' ' {
                    ch as u8
                } else {
                    REPLACEMENT
                };
                self.dirty = true;
            }
            col = col.saturating_add(1);
        }

        self.cursor = (col, row);
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (
            u8::try_from(COLS).unwrap_or(u8::MAX),
            u8::try_from(ROWS).unwrap_or(u8::MAX),
        )
    }
}

#[cfg(feature = "defmt")]
impl<const COLS: usize, const ROWS: usize> defmt::Format for Screen<COLS, ROWS> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line);
        }
        defmt::write!(f, "]");
    }
}
