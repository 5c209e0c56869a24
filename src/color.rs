//! The fixed color palette.

use std::fmt;
use std::str::FromStr;

/// One of the six colors a cell can take.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Blue,
    Green,
    Red,
    Yellow,
    Magenta,
    Orange,
}

impl Color {
    /// Every palette color, in letter order `B G R Y M O`.
    pub const ALL: [Color; 6] = [
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Yellow,
        Color::Magenta,
        Color::Orange,
    ];

    /// Single-letter code used by the text rendering and the command driver.
    pub fn letter(self) -> char {
        match self {
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Magenta => 'M',
            Color::Orange => 'O',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Magenta => "magenta",
            Color::Orange => "orange",
        }
    }

    /// Look a color up by its letter, ignoring case.
    pub fn from_letter(c: char) -> Option<Color> {
        let c = c.to_ascii_uppercase();
        Color::ALL.into_iter().find(|color| color.letter() == c)
    }

    /// Pick a uniformly random palette color.
    pub fn random(rng: &mut fastrand::Rng) -> Color {
        Color::ALL[rng.usize(..Color::ALL.len())]
    }
}

/// Error returned when a string names no palette color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color: {}", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts either the letter (`r`) or the full name (`Red`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Color::from_letter(c).ok_or_else(|| ParseColorError(s.to_string()));
        }
        Color::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
