//! The terminal backend trait itself.

use crate::{fmt::Format, Pos, Result};

/// A character-grid display which fields get drawn onto.
///
/// Implementations own whatever process-wide terminal state they need. They're driven entirely through a
/// [`Session`](crate::Session), which checks [`Self::is_init`] before every drawing operation, so backends don't need
/// to guard `set_cell` or `flush` against being called early.
///
/// # Terminology
///
/// * cell: One character position in the grid, with its formatting.
/// * pending: Cells written with `set_cell` but not yet flushed.
/// * display: The actual output, e.g. characters in a terminal. Only changes on `flush`.
pub trait Backend {
    /// Take over the display and get ready to accept cell writes.
    ///
    /// If this fails, the backend must be left uninitialized.
    fn init(&mut self) -> Result<()>;

    /// Release the display and any resources held for it. After this, [`Self::is_init`] returns `false`.
    ///
    /// Must be harmless to call on a backend that isn't initialized.
    fn close(&mut self);

    /// Whether [`Self::init`] has succeeded and [`Self::close`] hasn't been called since.
    fn is_init(&self) -> bool;

    /// Write one character into a cell.
    ///
    /// Positions outside of the display must be ignored, not clipped to the edge and not panicked on.
    fn set_cell(&mut self, pos: Pos, ch: char, fmt: &Format);

    /// Move the cursor to a position, or hide it with `None`. Takes effect on the next flush (or close).
    fn set_cursor(&mut self, pos: Option<Pos>);

    /// Commit all pending cell writes to the display.
    fn flush(&mut self) -> Result<()>;

    /// Get the size of the display, in characters.
    fn size(&self) -> Pos;
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn init(&mut self) -> Result<()> {
        (**self).init()
    }
    fn close(&mut self) {
        (**self).close()
    }
    fn is_init(&self) -> bool {
        (**self).is_init()
    }
    fn set_cell(&mut self, pos: Pos, ch: char, fmt: &Format) {
        (**self).set_cell(pos, ch, fmt)
    }
    fn set_cursor(&mut self, pos: Option<Pos>) {
        (**self).set_cursor(pos)
    }
    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
    fn size(&self) -> Pos {
        (**self).size()
    }
}
