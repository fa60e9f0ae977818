//! The 25-pair color code identifying the wire pairs of
//! telecommunication cables.
//!
//! - [`PairNumber`] ↔ [`ColorPair`]
//! - [`Palette`]s of [`Color`]s
//!
//! A pair number in 1..=25 maps to a major color (changing every five
//! pairs) and a minor color (cycling within each group of five).  See
//! [`manual`] for a printable reference table and [`harness`] for a
//! runtime check of the conversions.
//!
//! ```
//! use pair_color_code::{color_from_pair_number, pair_number_from_colors};
//! let pair = color_from_pair_number(12)?;
//! assert_eq!(pair.names(), ("Black", "Orange"));
//! assert_eq!(pair_number_from_colors("Black", "Orange")?.get(), 12);
//! # Ok::<(), pair_color_code::Error>(())
//! ```

use std::fmt;
use log::trace;
use rgb::RGB8;

mod error;
pub mod harness;
pub mod manual;
mod palettes;
use palettes::ty::PaletteData;
pub use palettes::ty::Role;
pub use error::{Error, Result};

/// Number of pairs in the code (5 major × 5 minor colors).
pub const PAIR_COUNT: usize = 25;

/// One of the two fixed palettes of the code.
#[derive(Clone, Copy)]
pub struct Palette {
    palette: &'static PaletteData,
}

impl Palette {
    /// The major colors: White, Red, Black, Yellow, Violet.
    #[inline]
    pub fn major() -> Self { Palette { palette: &palettes::MAJOR } }

    /// The minor colors: Blue, Orange, Green, Brown, Slate.
    #[inline]
    pub fn minor() -> Self { Palette { palette: &palettes::MINOR } }

    /// The palette for colors playing `role`.
    pub fn of(role: Role) -> Self {
        match role {
            Role::Major => Self::major(),
            Role::Minor => Self::minor(),
        }
    }

    pub fn role(&self) -> Role { self.palette.role }

    /// Returns the number of colors in the palette.
    pub fn len(&self) -> usize { self.palette.colors.len() }

    /// Returns the color at position `index`, if any.
    pub fn get(&self, index: usize) -> Option<Color> {
        if index < self.len() { Some(self.color(index)) } else { None }
    }

    /// Returns the position of the color named `name`.  Names are
    /// case sensitive ("White", not "white").
    pub fn position(&self, name: &str) -> Option<usize> {
        self.palette.index.get(name).copied()
    }

    /// Returns the color named `name` or an [`Error::UnknownColor`]
    /// naming this palette's role.
    pub fn find(&self, name: &str) -> Result<Color> {
        match self.position(name) {
            Some(i) => Ok(self.color(i)),
            None => Err(Error::UnknownColor {
                color: name.to_string(),
                role: self.role(),
            }),
        }
    }

    /// Iterate over the colors of the palette in order.
    pub fn colors(&self)
        -> impl ExactSizeIterator<Item = Color> + DoubleEndedIterator {
        let palette = self.palette;
        (0 .. palette.colors.len()).map(move |index| Color { palette, index })
    }

    /// Width (in characters) of the longest color name.
    pub fn name_width(&self) -> usize {
        self.palette.colors.iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Assumes `index < self.len()`.
    #[inline]
    fn color(&self, index: usize) -> Color {
        Color { palette: self.palette, index }
    }
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.palette.colors.iter().map(|c| c.name))
            .finish()
    }
}

/// A color of one of the palettes.
#[derive(Clone, Copy)]
pub struct Color {
    palette: &'static PaletteData,
    index: usize, // Invariant: index < palette.colors.len()
}

impl Color {
    /// The name of the color, e.g. "Slate".
    pub fn name(&self) -> &'static str { self.palette.colors[self.index].name }

    /// A representative RGB value, for display purposes.
    pub fn rgb(&self) -> RGB8 { self.palette.colors[self.index].rgb }

    pub fn role(&self) -> Role { self.palette.role }

    /// Position of the color in its palette (starting at 0).
    pub fn index(&self) -> usize { self.index }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.role() == other.role() && self.index == other.index
    }
}

impl Eq for Color {}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Color")
            .field("role", &self.role())
            .field("name", &self.name())
            .finish()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A pair number, guaranteed to be in 1..=25.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairNumber(u8);

impl PairNumber {
    pub const MIN: PairNumber = PairNumber(1);
    pub const MAX: PairNumber = PairNumber(PAIR_COUNT as u8);

    /// Return the pair number `n` or [`Error::OutOfRange`] if `n` is
    /// not in 1..=25.
    pub fn new(n: i64) -> Result<Self> {
        if (1 ..= PAIR_COUNT as i64).contains(&n) {
            Ok(PairNumber(n as u8))
        } else {
            Err(Error::OutOfRange(n))
        }
    }

    #[inline]
    pub fn get(self) -> u8 { self.0 }

    /// The color pair identified by this number.
    pub fn colors(self) -> ColorPair {
        let minor = Palette::minor();
        let zero_based = (self.0 - 1) as usize;
        ColorPair {
            major: Palette::major().color(zero_based / minor.len()),
            minor: minor.color(zero_based % minor.len()),
        }
    }
}

impl TryFrom<i64> for PairNumber {
    type Error = Error;

    fn try_from(n: i64) -> Result<Self> { Self::new(n) }
}

impl From<PairNumber> for u8 {
    fn from(n: PairNumber) -> u8 { n.0 }
}

impl fmt::Display for PairNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A (major, minor) combination identifying one wire pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPair {
    major: Color, // Invariant: major.role() == Role::Major
    minor: Color, // Invariant: minor.role() == Role::Minor
}

impl ColorPair {
    /// Look up the colors named `major` and `minor` in their
    /// respective palettes.  The major color is checked first.
    pub fn new(major: &str, minor: &str) -> Result<Self> {
        Ok(ColorPair {
            major: Palette::major().find(major)?,
            minor: Palette::minor().find(minor)?,
        })
    }

    pub fn major(&self) -> Color { self.major }

    pub fn minor(&self) -> Color { self.minor }

    /// The (major, minor) color names.
    pub fn names(&self) -> (&'static str, &'static str) {
        (self.major.name(), self.minor.name())
    }

    /// The pair number identifying these colors.
    pub fn pair_number(&self) -> PairNumber {
        let n = self.major.index * Palette::minor().len() + self.minor.index + 1;
        PairNumber(n as u8)
    }
}

impl fmt::Display for ColorPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.major, self.minor)
    }
}

/// Return the color pair of the pair number `n`.
///
/// # Example
///
/// ```
/// use pair_color_code::{color_from_pair_number, Error};
/// assert_eq!(color_from_pair_number(25)?.names(), ("Violet", "Slate"));
/// assert_eq!(color_from_pair_number(26), Err(Error::OutOfRange(26)));
/// # Ok::<(), Error>(())
/// ```
pub fn color_from_pair_number(n: i64) -> Result<ColorPair> {
    let pair = PairNumber::new(n)?.colors();
    trace!("pair number {n} → {pair}");
    Ok(pair)
}

/// Return the pair number of the colors named `major` and `minor`.
pub fn pair_number_from_colors(major: &str, minor: &str) -> Result<PairNumber> {
    let n = ColorPair::new(major, minor)?.pair_number();
    trace!("{major} {minor} → pair number {n}");
    Ok(n)
}

/// Return an iterator over all pairs, by increasing pair number.
pub fn pairs() -> Pairs {
    Pairs { i: PairNumber::MIN.0, j: PairNumber::MAX.0 + 1 }
}

/// An exact size iterator over the pair numbers and their colors.
///
/// Created by [`pairs`].
#[derive(Clone, Debug)]
pub struct Pairs {
    i: u8, // first number to be consumed (i <= j)
    j: u8, // number after the last one to be consumed
}

impl Iterator for Pairs {
    type Item = (PairNumber, ColorPair);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.j { return None }
        let n = PairNumber(self.i);
        self.i += 1;
        Some((n, n.colors()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.j - self.i) as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Pairs {}

impl DoubleEndedIterator for Pairs {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i >= self.j { return None }
        self.j -= 1;
        let n = PairNumber(self.j);
        Some((n, n.colors()))
    }
}
