//! Cell formatting: the colors a field's characters are drawn in.
//!
//! This is deliberately the 'lowest common subset' of what terminals support: the terminal's own default colors,
//! plus the 16 basic ANSI colors. Fields are drawn in [`Format::NONE`] unless the session says otherwise.

/// The color of a cell. The numeric values are the ANSI color codes for each color; that's also where the actual
/// colors are from. [`Color::Default`] leaves the terminal's own choice alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Color {
    #[default]
    Default = 9,
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 60,
    BrightRed = 61,
    BrightGreen = 62,
    BrightYellow = 63,
    BrightBlue = 64,
    BrightMagenta = 65,
    BrightCyan = 66,
    BrightWhite = 67,
}

impl Color {
    /// The name of the color as a string
    pub fn name(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Black => "black",
            Color::BrightBlack => "bright black",
            Color::Red => "red",
            Color::BrightRed => "bright red",
            Color::Green => "green",
            Color::BrightGreen => "bright green",
            Color::Yellow => "yellow",
            Color::BrightYellow => "bright yellow",
            Color::Blue => "blue",
            Color::BrightBlue => "bright blue",
            Color::Magenta => "magenta",
            Color::BrightMagenta => "bright magenta",
            Color::Cyan => "cyan",
            Color::BrightCyan => "bright cyan",
            Color::White => "white",
            Color::BrightWhite => "bright white",
        }
    }
}

/// The format of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Format {
    /// The foreground color of the cell
    pub fg: Color,
    /// The background color of the cell
    pub bg: Color,
}

impl Format {
    /// Whatever the terminal does by default.
    pub const NONE: Self = Format {
        fg: Color::Default,
        bg: Color::Default,
    };

    crate::util::setters! {
        fg(c: Color) => fg = c,
        bg(c: Color) => bg = c,
    }
}

/// A single formatted character. This is really only meant to be used in [`Screen`](crate::screen::Screen).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fmt: Format,
}

impl Cell {
    /// A blank cell with default formatting.
    pub const BLANK: Cell = Cell::of(' ');

    pub const fn of(ch: char) -> Self {
        Self {
            ch,
            fmt: Format::NONE,
        }
    }

    #[must_use]
    pub fn fmt(mut self, fmt: Format) -> Self {
        self.fmt = fmt;
        self
    }
}
