use std::collections::HashMap;
use std::fmt;

pub(crate) use rgb::RGB8;

/// A named color of the 25-pair code.
pub(crate) struct ColorData {
    pub(crate) name: &'static str,
    pub(crate) rgb: RGB8,
}

/// One of the two palettes with a name → position index.
pub(crate) struct PaletteData {
    pub(crate) role: Role,
    pub(crate) colors: Vec<ColorData>, // Invariant: distinct names
    pub(crate) index: HashMap<&'static str, usize>,
}

impl PaletteData {
    pub(crate) fn new(role: Role, colors: Vec<ColorData>) -> Self {
        let index = colors.iter().enumerate()
            .map(|(i, c)| (c.name, i))
            .collect();
        PaletteData { role, colors, index }
    }
}

/// Role a color plays in a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// The first color of a pair.  It changes every five pairs.
    Major,
    /// The second color of a pair.  It cycles through its palette
    /// within each group of five pairs.
    Minor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Major => f.write_str("major"),
            Role::Minor => f.write_str("minor"),
        }
    }
}
