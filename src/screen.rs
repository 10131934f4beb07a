//! The in-memory character grid backends draw into before anything reaches the display.

use core::{iter::FusedIterator, ops::Range};

use crate::{fmt::Cell, pos::Pos};

/// An iterator over the rows of cells in a [`Screen`].
pub struct ScreenRows<'s> {
    screen: &'s Screen,
    rem: Range<usize>,
}

impl<'s> ScreenRows<'s> {
    fn new(screen: &'s Screen) -> Self {
        Self {
            screen,
            rem: 0..screen.size.y() as usize,
        }
    }
    fn abs_row(&self, row: usize) -> &'s [Cell] {
        let width = self.screen.size.x() as usize;
        let start = row * width;
        &self.screen.cells[start..start + width]
    }
}

impl<'s> Iterator for ScreenRows<'s> {
    type Item = &'s [Cell];
    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rem.next()?;
        Some(self.abs_row(row))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rem.size_hint()
    }
}
impl<'s> DoubleEndedIterator for ScreenRows<'s> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let row = self.rem.next_back()?;
        Some(self.abs_row(row))
    }
}
impl<'s> ExactSizeIterator for ScreenRows<'s> {}
impl<'s> FusedIterator for ScreenRows<'s> {}

/// A text framebuffer.
///
/// Cells are written into it one at a time, then the whole thing is shown on the display at once. Writes which land
/// outside of the grid are dropped, so callers can draw partially off-screen without checking bounds themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    cells: Vec<Cell>,
    size: Pos,
}

impl Screen {
    /// Create a new blank `Screen` in the given size.
    pub fn new(size: Pos) -> Self {
        let mut res = Self {
            cells: vec![],
            size: Pos(0, 0),
        };
        res.resize(size);
        res
    }

    /// How big this Screen is, in characters.
    pub fn size(&self) -> Pos {
        self.size
    }

    /// All of the cells of this screen, in rows.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns an iterator over the rows in a screen.
    pub fn rows(&self) -> ScreenRows {
        ScreenRows::new(self)
    }

    /// Clear this screen's contents, filling it with blank cells.
    pub fn clear(&mut self) {
        self.resize(self.size())
    }

    /// Resize the screen, clearing its contents at the same time. Does not reallocate unless the screen is growing.
    pub fn resize(&mut self, size: Pos) {
        let size = Pos(size.x().max(0), size.y().max(0));
        self.cells.truncate(0);
        self.cells
            .resize(size.x() as usize * size.y() as usize, Cell::BLANK);
        self.size = size;
    }

    /// The cell at a position, if it's on the screen.
    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        pos.index_in(self.size).map(|i| &self.cells[i])
    }

    /// Set a single cell. Returns whether the position was on the screen.
    pub fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        match pos.index_in(self.size) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// The characters of one row, `None` if the row is off the screen.
    pub fn row_text(&self, row: isize) -> Option<String> {
        if row < 0 || row >= self.size.y() {
            return None;
        }
        self.rows()
            .nth(row as usize)
            .map(|r| r.iter().map(|c| c.ch).collect())
    }
}
