//! Character display trait for HD44780-style LCDs

/// Errors that can occur when writing to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus or controller did not acknowledge
    Communication,
    /// Cursor position outside the character grid
    InvalidCoordinates,
    /// Text could not be buffered
    BufferOverflow,
}

/// Trait for a fixed-size character grid
///
/// The UI only ever positions the cursor and writes short ASCII fields,
/// so this is the whole surface it needs from an LCD driver.
pub trait CharDisplay {
    /// Blank the whole display and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor
    ///
    /// - `col`: Column number (0-based)
    /// - `row`: Row number (0-based)
    ///
    /// A column past the right edge is accepted; text written there is
    /// dropped. A row outside the grid is `InvalidCoordinates`.
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Write text at the cursor, advancing it
    ///
    /// Text running past the end of the row is dropped.
    fn write_text(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Display dimensions as (columns, rows)
    fn dimensions(&self) -> (u8, u8);

    /// Write text starting at a position
    fn write_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError> {
        self.set_cursor(col, row)?;
        self.write_text(text)
    }
}

impl<T: CharDisplay + ?Sized> CharDisplay for &mut T {
    fn clear(&mut self) -> Result<(), DisplayError> {
        T::clear(self)
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        T::set_cursor(self, col, row)
    }

    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        T::write_text(self, text)
    }

    fn dimensions(&self) -> (u8, u8) {
        T::dimensions(self)
    }

    fn write_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError> {
        T::write_at(self, col, row, text)
    }
}
