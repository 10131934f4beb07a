#![cfg(any(test, feature = "memory"))]

use crate::{
    fmt::{Cell, Format},
    screen::Screen,
    traits::Backend,
    Pos, Result,
};

const DEFAULT_SIZE: Pos = Pos(80, 24);

/// An implementation of [`Backend`] which draws into memory instead of a terminal. Used for testing, or for
/// rendering fields somewhere other than a live terminal.
///
/// It keeps two grids: the pending one which `set_cell` writes into, and the displayed one, which is what a real
/// terminal would be showing and only changes on `flush`.
#[derive(Clone, Debug)]
pub struct MemoryBackend {
    pending: Screen,
    displayed: Screen,
    cursor: Option<Pos>,
    init: bool,
    fail_init: bool,
    flushes: usize,
}

impl MemoryBackend {
    /// Create a [`MemoryBackend`] the size of a classic terminal, 80x24.
    pub fn new() -> Self {
        Self::sized(DEFAULT_SIZE)
    }

    /// Create a [`MemoryBackend`] with a specific size.
    pub fn sized(size: Pos) -> Self {
        Self {
            pending: Screen::new(size),
            displayed: Screen::new(size),
            cursor: None,
            init: false,
            fail_init: false,
            flushes: 0,
        }
    }

    /// Make every call to `init` fail, as a terminal which can't be taken over would.
    pub fn failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    /// What's currently on the "display", i.e. as of the last flush.
    pub fn displayed(&self) -> &Screen {
        &self.displayed
    }

    /// What will be on the display after the next flush.
    pub fn pending(&self) -> &Screen {
        &self.pending
    }

    /// The displayed character at a position, if it's on screen.
    pub fn char_at(&self, pos: Pos) -> Option<char> {
        self.displayed.get(pos).map(|c| c.ch)
    }

    /// The displayed characters in a span of one row, with off-screen cells skipped.
    pub fn text_at(&self, pos: Pos, len: usize) -> String {
        (0..len as isize)
            .filter_map(|i| self.char_at(pos + (i, 0)))
            .collect()
    }

    /// Where the cursor was last put.
    pub fn cursor(&self) -> Option<Pos> {
        self.cursor
    }

    /// How many times the backend has been flushed since it was created.
    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for MemoryBackend {
    fn init(&mut self) -> Result<()> {
        if self.fail_init {
            return Err("memory backend set to fail initialization".into());
        }
        self.init = true;
        Ok(())
    }

    fn close(&mut self) {
        self.init = false;
        self.pending.clear();
        self.displayed.clear();
    }

    fn is_init(&self) -> bool {
        self.init
    }

    fn set_cell(&mut self, pos: Pos, ch: char, fmt: &Format) {
        self.pending.set(pos, Cell::of(ch).fmt(*fmt));
    }

    fn set_cursor(&mut self, pos: Option<Pos>) {
        self.cursor = pos;
    }

    fn flush(&mut self) -> Result<()> {
        self.displayed.clone_from(&self.pending);
        self.flushes += 1;
        Ok(())
    }

    fn size(&self) -> Pos {
        self.pending.size()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn writes_show_up_only_after_flush() {
        let mut mb = MemoryBackend::sized(Pos(10, 3));
        mb.init().expect("init failed");
        mb.set_cell(Pos(2, 1), 'q', &Format::NONE);
        assert_eq!(mb.char_at(Pos(2, 1)), Some(' '));
        assert_eq!(mb.pending().get(Pos(2, 1)).map(|c| c.ch), Some('q'));
        mb.flush().expect("flush failed");
        assert_eq!(mb.char_at(Pos(2, 1)), Some('q'));
        assert_eq!(mb.flushes(), 1);
    }

    #[test]
    fn off_screen_writes_are_ignored() {
        let mut mb = MemoryBackend::sized(Pos(4, 2));
        mb.init().expect("init failed");
        mb.set_cell(Pos(-1, 0), 'x', &Format::NONE);
        mb.set_cell(Pos(0, 5), 'x', &Format::NONE);
        mb.flush().expect("flush failed");
        assert!(mb.displayed().cells().iter().all(|c| c.ch == ' '));
        assert_eq!(mb.text_at(Pos(-2, 0), 4), "  ");
    }

    #[test]
    fn failing_init_stays_uninitialized() {
        let mut mb = MemoryBackend::new().failing_init();
        assert!(mb.init().is_err());
        assert!(!mb.is_init());
    }

    #[test]
    fn close_resets() {
        let mut mb = MemoryBackend::new();
        mb.init().expect("init failed");
        mb.set_cell(Pos(0, 0), 'x', &Format::NONE);
        mb.flush().expect("flush failed");
        mb.close();
        assert!(!mb.is_init());
        assert_eq!(mb.char_at(Pos(0, 0)), Some(' '));
        assert_eq!(mb.size(), DEFAULT_SIZE);
    }
}
