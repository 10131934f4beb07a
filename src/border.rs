//! Border styles, and the glyphs each one draws with.

use core::{fmt, str::FromStr};

use crate::Error;

/// The six characters a border is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl Glyphs {
    const fn all(ch: char) -> Self {
        Self::of([ch; 6])
    }

    /// In the order: corners (top left, top right, bottom left, bottom right), then horizontal, then vertical.
    const fn of(c: [char; 6]) -> Self {
        Self {
            top_left: c[0],
            top_right: c[1],
            bottom_left: c[2],
            bottom_right: c[3],
            horizontal: c[4],
            vertical: c[5],
        }
    }
}

const CLEAR: Glyphs = Glyphs::all(' ');
const NONE: Glyphs = Glyphs::all('\0');
const ASCII: Glyphs = Glyphs::of(['+', '+', '+', '+', '-', '|']);
const UNICODE: Glyphs = Glyphs::of(['┌', '┐', '└', '┘', '─', '│']);

/// How to draw the border around a field.
///
/// The numeric values match the constants older callers may have stored, and are accepted through `TryFrom<u16>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    /// Blank. Drawing with this overwrites a visible border with spaces; the field is then considered to have no
    /// border, so a field never reports `Clear` as its style.
    Clear = 0,
    /// No border. Writes invisible (NUL) glyphs rather than spaces.
    #[default]
    None = 1,
    /// `+`, `-`, and `|`.
    Ascii = 2,
    /// Box-drawing characters, e.g. `┌─┐`.
    Unicode = 3,
}

impl BorderStyle {
    /// The styles a field can report having.
    pub const VISIBLE: [BorderStyle; 3] = [BorderStyle::None, BorderStyle::Ascii, BorderStyle::Unicode];

    pub const fn glyphs(&self) -> Glyphs {
        match self {
            Self::Clear => CLEAR,
            Self::None => NONE,
            Self::Ascii => ASCII,
            Self::Unicode => UNICODE,
        }
    }

    /// The style a field has after being drawn with this one.
    pub(crate) const fn settled(self) -> Self {
        match self {
            Self::Clear => Self::None,
            other => other,
        }
    }

    /// The next style in [`Self::VISIBLE`], wrapping around.
    pub fn next(&self) -> Self {
        match self {
            Self::Clear | Self::None => Self::Ascii,
            Self::Ascii => Self::Unicode,
            Self::Unicode => Self::None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::None => "none",
            Self::Ascii => "ascii",
            Self::Unicode => "unicode",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u16> for BorderStyle {
    type Error = Error;
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Clear),
            1 => Ok(Self::None),
            2 => Ok(Self::Ascii),
            3 => Ok(Self::Unicode),
            other => Err(Error::UnknownBorderStyle(other.to_string())),
        }
    }
}

impl FromStr for BorderStyle {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clear" | "blank" => Ok(Self::Clear),
            "none" => Ok(Self::None),
            "ascii" => Ok(Self::Ascii),
            "unicode" => Ok(Self::Unicode),
            _ => Err(Error::UnknownBorderStyle(s.into())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn glyph_tables() {
        let a = BorderStyle::Ascii.glyphs();
        assert_eq!(
            [a.top_left, a.top_right, a.bottom_left, a.bottom_right, a.horizontal, a.vertical],
            ['+', '+', '+', '+', '-', '|'],
        );
        let u = BorderStyle::Unicode.glyphs();
        assert_eq!(
            [u.top_left, u.top_right, u.bottom_left, u.bottom_right, u.horizontal, u.vertical],
            ['\u{250c}', '\u{2510}', '\u{2514}', '\u{2518}', '\u{2500}', '\u{2502}'],
        );
        assert_eq!(BorderStyle::Clear.glyphs(), Glyphs::all(' '));
        assert_eq!(BorderStyle::None.glyphs(), Glyphs::all('\0'));
    }

    #[test]
    fn raw_values_validate() {
        assert_eq!(BorderStyle::try_from(0).ok(), Some(BorderStyle::Clear));
        assert_eq!(BorderStyle::try_from(3).ok(), Some(BorderStyle::Unicode));
        assert!(matches!(
            BorderStyle::try_from(4),
            Err(Error::UnknownBorderStyle(s)) if s == "4"
        ));
    }

    #[test]
    fn names_parse() {
        assert_eq!("ASCII".parse::<BorderStyle>().ok(), Some(BorderStyle::Ascii));
        assert_eq!(" unicode ".parse::<BorderStyle>().ok(), Some(BorderStyle::Unicode));
        assert_eq!("blank".parse::<BorderStyle>().ok(), Some(BorderStyle::Clear));
        assert!(matches!("double".parse::<BorderStyle>(), Err(Error::UnknownBorderStyle(_))));
        for style in BorderStyle::VISIBLE {
            assert_eq!(style.name().parse::<BorderStyle>().ok(), Some(style));
        }
    }

    #[test]
    fn clear_settles_to_none() {
        assert_eq!(BorderStyle::Clear.settled(), BorderStyle::None);
        assert_eq!(BorderStyle::Ascii.settled(), BorderStyle::Ascii);
        assert_eq!(BorderStyle::Clear.next(), BorderStyle::Ascii);
        assert_eq!(BorderStyle::Unicode.next(), BorderStyle::None);
    }
}
