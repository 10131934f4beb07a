//! The [`Session`]: the one place fields get drawn from.

use core::ops::RangeInclusive;

use crate::{
    fmt::{Color, Format},
    BorderStyle, Direction, Error, Field, Pos, Result,
    traits::Backend,
};

/// A live terminal, and the service which draws fields onto it.
///
/// The session owns its [`Backend`], but not the fields: those are plain values. Every operation takes a `&Field`
/// and returns the updated field, so if anything fails the caller still has the old one, untouched. (What's on the
/// screen isn't rolled back, though. Multi-step operations flush between steps.)
///
/// Every operation needs the backend to be initialized, with [`Self::init`]. Until then, and again after
/// [`Self::close`], they all fail with [`Error::NotInitialized`] without drawing anything.
///
/// Dropping an initialized session closes it.
pub struct Session<B: Backend> {
    backend: B,
    fmt: Format,
}

impl<B: Backend> Session<B> {
    /// Wrap a backend. This doesn't initialize it; see [`Self::init`].
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            fmt: Format::NONE,
        }
    }

    crate::util::setters! {
        format(f: Format) => fmt = f,
        fg(c: Color) => fmt.fg = c,
        bg(c: Color) => fmt.bg = c,
    }

    /// Initialize the backend. Must be called, and succeed, before anything gets drawn.
    ///
    /// Backend failures come back exactly as the backend reported them. Initializing an already initialized session
    /// does nothing.
    pub fn init(&mut self) -> Result<()> {
        if self.backend.is_init() {
            tracing::trace!("session already initialized");
            return Ok(());
        }
        self.backend.init()?;
        tracing::debug!(size = %self.backend.size(), "session initialized");
        Ok(())
    }

    /// Put the cursor back at the origin and release the backend. Does nothing if it's not initialized.
    pub fn close(&mut self) {
        if !self.backend.is_init() {
            return;
        }
        self.backend.set_cursor(Some(Pos(0, 0)));
        self.backend.close();
        tracing::debug!("session closed");
    }

    pub fn is_init(&self) -> bool {
        self.backend.is_init()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// The size of the display, in characters.
    pub fn size(&self) -> Pos {
        self.backend.size()
    }

    /// Create a field whose text starts at `row`, `column`, with `width` cells reserved, and draw `text` into it.
    ///
    /// The new field has no border; draw one with [`Self::draw_box`].
    pub fn create_field(&mut self, row: isize, column: isize, width: usize, text: &str) -> Result<Field> {
        self.update(&Field::new(row, column, width), text)
    }

    /// Draw new text into a field.
    ///
    /// Characters go into consecutive cells, one per cell, starting at the field's position. The text isn't padded or
    /// cut to the field's width, so shorter text leaves whatever was after it on screen.
    pub fn update(&mut self, field: &Field, text: &str) -> Result<Field> {
        self.check_init("update")?;
        tracing::trace!(pos = %field.pos, text, "updating field");
        self.put_text(field, text)?;
        let mut next = field.clone();
        next.text = text.to_owned();
        Ok(next)
    }

    /// Draw a border around a field, replacing whatever border it had.
    ///
    /// The border sits on the rows just above and below the text. Its left corners are at `column - 1` and its right
    /// corners at `column + width + 1`, leaving one blank cell between the text area and the right edge.
    ///
    /// ```text
    ///  +-----+
    ///  |abcd |
    ///  +-----+
    /// ```
    ///
    /// Drawing [`BorderStyle::Clear`] erases the border, and the returned field has [`BorderStyle::None`].
    pub fn draw_box(&mut self, field: &Field, style: BorderStyle) -> Result<Field> {
        self.check_init("draw_box")?;
        tracing::trace!(pos = %field.pos, %style, "drawing border");
        self.put_border(field, style)?;
        let mut next = field.clone();
        next.border = style.settled();
        Ok(next)
    }

    /// Move a field somewhere else, keeping its border and text.
    ///
    /// The old text and border are blanked out first, so nothing's left behind.
    pub fn move_to(&mut self, field: &Field, row: isize, column: isize) -> Result<Field> {
        self.check_init("move_to")?;
        tracing::trace!(from = %field.pos, to = %Pos(column, row), "moving field");
        self.put_blank(field)?;
        self.put_border(field, BorderStyle::Clear)?;
        let mut next = field.clone();
        next.pos = Pos(column, row);
        self.put_border(&next, next.border)?;
        self.put_text(&next, &next.text)?;
        Ok(next)
    }

    /// Move a field one cell over, keeping its border and text.
    ///
    /// Only the old border is erased. Text in cells the field no longer covers is left on screen.
    pub fn shift(&mut self, field: &Field, dir: Direction) -> Result<Field> {
        self.check_init("shift")?;
        tracing::trace!(pos = %field.pos, %dir, "shifting field");
        self.put_border(field, BorderStyle::Clear)?;
        let mut next = field.clone();
        next.pos += dir.offset();
        self.put_border(&next, next.border)?;
        self.put_text(&next, &next.text)?;
        Ok(next)
    }

    /// Blank out a field's text area and border, e.g. before forgetting about it.
    ///
    /// The returned field keeps its position and text but has no border; updating it draws the text again.
    pub fn clear(&mut self, field: &Field) -> Result<Field> {
        self.check_init("clear")?;
        tracing::trace!(pos = %field.pos, "clearing field");
        self.put_blank(field)?;
        self.put_border(field, BorderStyle::Clear)?;
        let mut next = field.clone();
        next.border = BorderStyle::None;
        Ok(next)
    }

    fn check_init(&self, op: &'static str) -> Result<()> {
        if self.backend.is_init() {
            Ok(())
        } else {
            tracing::warn!(op, "refusing to draw to an uninitialized terminal");
            Err(Error::NotInitialized)
        }
    }

    fn put_text(&mut self, field: &Field, text: &str) -> Result<()> {
        let mut pos = field.pos;
        for ch in text.chars() {
            self.backend.set_cell(pos, ch, &self.fmt);
            pos += (1, 0);
        }
        self.backend.flush()
    }

    /// Overwrite the field's whole text area with spaces, whatever text it holds.
    fn put_blank(&mut self, field: &Field) -> Result<()> {
        let Pos(x, y) = field.pos;
        let last = x.saturating_add(width_of(field)).saturating_sub(1);
        for col in visible(x, last, self.backend.size()) {
            self.backend.set_cell(Pos(col, y), ' ', &self.fmt);
        }
        self.backend.flush()
    }

    fn put_border(&mut self, field: &Field, style: BorderStyle) -> Result<()> {
        let g = style.glyphs();
        let Pos(x, y) = field.pos;
        let (left, up, down) = (x.saturating_sub(1), y.saturating_sub(1), y.saturating_add(1));
        let right = x.saturating_add(width_of(field)).saturating_add(1);
        let sweep = visible(x, x.saturating_add(width_of(field)), self.backend.size());
        let fmt = self.fmt;
        let mut set = |pos: Pos, ch: char| self.backend.set_cell(pos, ch, &fmt);

        set(Pos(left, up), g.top_left);
        set(Pos(right, up), g.top_right);
        set(Pos(left, down), g.bottom_left);
        set(Pos(right, down), g.bottom_right);

        set(Pos(left, y), g.vertical);
        set(Pos(right, y), g.vertical);

        for col in sweep {
            set(Pos(col, up), g.horizontal);
            set(Pos(col, down), g.horizontal);
        }
        self.backend.flush()
    }
}

/// A field's width as a signed offset, saturating for widths no screen could show.
fn width_of(field: &Field) -> isize {
    isize::try_from(field.width).unwrap_or(isize::MAX)
}

/// The columns from `first` to `last` inclusive which are actually on a screen of `size`.
fn visible(first: isize, last: isize, size: Pos) -> RangeInclusive<isize> {
    first.max(0)..=last.min(size.x() - 1)
}

impl<B: Backend> Drop for Session<B> {
    fn drop(&mut self) {
        self.close();
    }
}
