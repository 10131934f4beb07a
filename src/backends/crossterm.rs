//! Implements the (crossterm-based) rendering to a real terminal.

#![cfg(feature = "cli_crossterm")]

use std::{
    io::Write,
    sync::{
        atomic::{AtomicBool, Ordering},
        Once,
    },
};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color as CrosstermColor, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use crate::{
    fmt::{Cell, Color, Format},
    screen::Screen,
    traits::Backend,
    Pos, Result,
};

fn init_term() -> Result<()> {
    terminal::enable_raw_mode()?;
    execute!(
        std::io::stdout(),
        EnterAlternateScreen,
        DisableLineWrap,
        Hide,
        Clear(ClearType::All),
    )?;
    Ok(())
}

fn clean_term() -> Result<()> {
    execute!(
        std::io::stdout(),
        ResetColor,
        Clear(ClearType::All),
        Show,
        EnableLineWrap,
        LeaveAlternateScreen,
    )?;
    terminal::disable_raw_mode()?;
    Ok(())
}

/// Whether a backend currently has the terminal in raw mode on the alternate screen.
static TERM_TAKEN: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK: Once = Once::new();

/// Mark the terminal as given back. Returns whether it had been taken, i.e. whether it still needs cleaning up.
fn release_term() -> bool {
    TERM_TAKEN.swap(false, Ordering::SeqCst)
}

/// Make panics restore the terminal before the message is printed, but only while it's taken. Installed at most
/// once per process, wrapping whatever hook was there before.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let prev = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |i| {
            if release_term() {
                let _ = clean_term();
            }
            prev(i);
        }));
    });
}

/// Crossterm color for our colors
fn ct_color(c: Color) -> CrosstermColor {
    match c {
        Color::Default => CrosstermColor::Reset,
        Color::BrightBlack => CrosstermColor::DarkGrey,
        Color::Black => CrosstermColor::Black,
        Color::BrightRed => CrosstermColor::Red,
        Color::Red => CrosstermColor::DarkRed,
        Color::BrightGreen => CrosstermColor::Green,
        Color::Green => CrosstermColor::DarkGreen,
        Color::BrightYellow => CrosstermColor::Yellow,
        Color::Yellow => CrosstermColor::DarkYellow,
        Color::BrightBlue => CrosstermColor::Blue,
        Color::Blue => CrosstermColor::DarkBlue,
        Color::BrightMagenta => CrosstermColor::Magenta,
        Color::Magenta => CrosstermColor::DarkMagenta,
        Color::BrightCyan => CrosstermColor::Cyan,
        Color::Cyan => CrosstermColor::DarkCyan,
        Color::BrightWhite => CrosstermColor::White,
        Color::White => CrosstermColor::Grey,
    }
}

/// Terminal coordinate for a position, saturating at the edges crossterm can express.
fn ct_coord(v: isize) -> u16 {
    v.clamp(0, u16::MAX as isize) as u16
}

/// Control characters (including the NUL of an invisible border) would mangle the terminal, so they're shown blank.
fn printable(ch: char) -> char {
    if ch.is_control() {
        ' '
    } else {
        ch
    }
}

/// Queue the commands to bring the display from `front` to `back`, touching only the cells which changed.
fn render_diff(front: &Screen, back: &Screen, out: &mut Vec<u8>) -> Result<()> {
    let width = back.size().x();
    let mut ch_b = [0u8; 4];
    let mut fmt: Option<Format> = None;
    // where the terminal's cursor will be after the last character we printed
    let mut next: Option<Pos> = None;
    for (i, (new, old)) in back.cells().iter().zip(front.cells()).enumerate() {
        if new == old {
            continue;
        }
        let pos = Pos(i as isize % width, i as isize / width);
        if next != Some(pos) {
            queue!(out, MoveTo(ct_coord(pos.x()), ct_coord(pos.y())))?;
        }
        if fmt != Some(new.fmt) {
            queue!(
                out,
                SetForegroundColor(ct_color(new.fmt.fg)),
                SetBackgroundColor(ct_color(new.fmt.bg)),
            )?;
            fmt = Some(new.fmt);
        }
        out.extend_from_slice(printable(new.ch).encode_utf8(&mut ch_b).as_bytes());
        next = Some(pos + (1, 0));
    }
    if fmt.is_some() {
        queue!(out, ResetColor)?;
    }
    Ok(())
}

/// A [`Backend`] drawing to the process's terminal through crossterm.
///
/// Cell writes go to a back buffer; flushing sends the terminal only the cells which differ from what it's already
/// showing. The terminal's size is sampled on `init`, and cells outside of it are dropped.
pub struct CrosstermBackend {
    front: Screen,
    back: Screen,
    cursor: Option<Pos>,
    init: bool,
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self {
            front: Screen::new(Pos(0, 0)),
            back: Screen::new(Pos(0, 0)),
            cursor: None,
            init: false,
        }
    }
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        self.close();
    }
}

impl Backend for CrosstermBackend {
    fn init(&mut self) -> Result<()> {
        if self.init {
            return Ok(());
        }
        let (x, y) = terminal::size()?;
        if let Err(e) = init_term() {
            let _ = clean_term();
            return Err(e);
        }
        install_panic_hook();
        TERM_TAKEN.store(true, Ordering::SeqCst);
        let size = Pos(x as isize, y as isize);
        self.front.resize(size);
        self.back.resize(size);
        self.cursor = None;
        self.init = true;
        tracing::debug!(%size, "crossterm backend initialized");
        Ok(())
    }

    fn close(&mut self) {
        if !self.init {
            return;
        }
        if let Some(pos) = self.cursor {
            let _ = execute!(std::io::stdout(), MoveTo(ct_coord(pos.x()), ct_coord(pos.y())));
        }
        release_term();
        if let Err(e) = clean_term() {
            tracing::warn!("failed to restore terminal: {}", e);
        }
        self.init = false;
    }

    fn is_init(&self) -> bool {
        self.init
    }

    fn set_cell(&mut self, pos: Pos, ch: char, fmt: &Format) {
        self.back.set(pos, Cell::of(ch).fmt(*fmt));
    }

    fn set_cursor(&mut self, pos: Option<Pos>) {
        self.cursor = pos;
    }

    fn flush(&mut self) -> Result<()> {
        let mut out = vec![];
        render_diff(&self.front, &self.back, &mut out)?;
        match self.cursor {
            Some(pos) => queue!(&mut out, MoveTo(ct_coord(pos.x()), ct_coord(pos.y())), Show)?,
            None => queue!(&mut out, Hide)?,
        }
        let stdout = std::io::stdout();
        let mut stdout = stdout.lock();
        stdout.write_all(&out)?;
        stdout.flush()?;
        self.front.clone_from(&self.back);
        Ok(())
    }

    fn size(&self) -> Pos {
        self.back.size()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unchanged_screens_render_nothing() {
        let s = Screen::new(Pos(4, 2));
        let mut out = vec![];
        render_diff(&s, &s.clone(), &mut out).expect("render failed");
        assert!(out.is_empty());
    }

    #[test]
    fn only_changed_cells_are_printed() {
        let front = Screen::new(Pos(4, 2));
        let mut back = front.clone();
        back.set(Pos(1, 1), Cell::of('x'));
        back.set(Pos(2, 1), Cell::of('y'));
        let mut out = vec![];
        render_diff(&front, &back, &mut out).expect("render failed");
        let out = String::from_utf8(out).expect("non-utf8 output");
        assert!(out.contains("xy"));
        // MoveTo is 1-based on the wire
        assert!(out.contains("\x1b[2;2H"));
        assert_eq!(out.matches('H').count(), 1);
    }

    #[test]
    fn nul_is_blank() {
        assert_eq!(printable('\0'), ' ');
        assert_eq!(printable('┌'), '┌');
    }

    #[test]
    fn panics_leave_a_released_terminal_alone() {
        install_panic_hook();
        install_panic_hook();
        assert!(PANIC_HOOK.is_completed());

        // nothing has the terminal, so the hook must not try to restore it (or claim it)
        let res = std::panic::catch_unwind(|| panic!("unrelated panic"));
        assert!(res.is_err());
        assert!(!TERM_TAKEN.load(Ordering::SeqCst));

        TERM_TAKEN.store(true, Ordering::SeqCst);
        assert!(release_term());
        assert!(!release_term());
    }

    #[test]
    fn coords_saturate() {
        assert_eq!(ct_coord(-5), 0);
        assert_eq!(ct_coord(12), 12);
        assert_eq!(ct_coord(isize::MAX), u16::MAX);
    }
}
