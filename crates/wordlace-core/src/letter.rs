//! Puzzle letter representation.

use std::fmt::{self, Display};

/// An uppercase ASCII letter `A`-`Z`.
///
/// Both answer cells and user-entered cells hold values of this type, so any
/// letter stored in a grid is already case-normalized.
///
/// # Examples
///
/// ```
/// use wordlace_core::Letter;
///
/// let letter = Letter::from_char('q').unwrap();
/// assert_eq!(letter.as_char(), 'Q');
/// assert_eq!(letter.to_string(), "Q");
///
/// assert_eq!(Letter::from_char('7'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// The letter `A`.
    pub const A: Self = Self(b'A');
    /// The letter `Z`.
    pub const Z: Self = Self(b'Z');

    /// Creates a letter from an ASCII character of either case.
    ///
    /// Returns `None` for anything that is not an ASCII letter, including
    /// non-ASCII alphabetic characters.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        u8::try_from(ch)
            .ok()
            .filter(u8::is_ascii_alphabetic)
            .map(|byte| Self(byte.to_ascii_uppercase()))
    }

    /// Returns the last ASCII letter in `text`, uppercased.
    ///
    /// Every other character is ignored. This is how raw keystrokes and
    /// clipboard contents collapse into a single cell value.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::Letter;
    ///
    /// assert_eq!(Letter::last_in("catdog"), Letter::from_char('G'));
    /// assert_eq!(Letter::last_in("a1"), Letter::from_char('A'));
    /// assert_eq!(Letter::last_in("42!"), None);
    /// assert_eq!(Letter::last_in(""), None);
    /// ```
    #[must_use]
    pub fn last_in(text: &str) -> Option<Self> {
        text.chars().rev().find_map(Self::from_char)
    }

    /// Returns the uppercase character.
    #[must_use]
    #[inline]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}
