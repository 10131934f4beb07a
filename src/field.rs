//! Fields themselves, and which way they can be shifted.

use core::{fmt, str::FromStr};

use crate::{BorderStyle, Error, Pos};

/// One labeled, bordered text region on the screen.
///
/// A `Field` is only a record of what was last drawn: where its text starts, how wide it is, what its border looks
/// like, and what it says. Drawing happens through a [`Session`](crate::Session), which takes a `Field` and hands
/// back an updated copy, so a failed operation never leaves a half-changed field behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub(crate) pos: Pos,
    pub(crate) width: usize,
    pub(crate) border: BorderStyle,
    pub(crate) text: String,
}

impl Field {
    pub(crate) fn new(row: isize, column: isize, width: usize) -> Self {
        Self {
            pos: Pos(column, row),
            width,
            border: BorderStyle::None,
            text: String::new(),
        }
    }

    /// The row the text is on. The border is on the rows above and below.
    pub fn row(&self) -> isize {
        self.pos.y()
    }

    /// The column the text starts in.
    pub fn column(&self) -> isize {
        self.pos.x()
    }

    /// The top-left of the text, as a (column, row) position.
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// How many cells are reserved for the text. Fixed when the field is created.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The border currently drawn around the field.
    pub fn border(&self) -> BorderStyle {
        self.border
    }

    /// The last text successfully drawn into the field.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Which way to [`shift`](crate::Session::shift) a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// How far one shift in this direction moves a field.
    pub const fn offset(&self) -> Pos {
        match self {
            Self::Left => Pos(-1, 0),
            Self::Right => Pos(1, 0),
            Self::Up => Pos(0, -1),
            Self::Down => Pos(0, 1),
        }
    }

    pub const fn opposite(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u16> for Direction {
    type Error = Error;
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            2 => Ok(Self::Up),
            3 => Ok(Self::Down),
            other => Err(Error::UnknownDirection(other.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(Error::UnknownDirection(s.into())),
        }
    }
}
