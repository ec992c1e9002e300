// ── Horizontal alignment ────────────────────────────────────────────

/// Horizontal text alignment, which decides the kerning anchor.
///
/// - `Left`: the first character stays put, the string grows rightward.
/// - `Right`: the last character stays put, the string grows leftward.
/// - `Center`: the string fans out symmetrically around its middle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl HorizontalAlign {
    /// All variants, in left-to-right order.
    pub const ALL: [HorizontalAlign; 3] = [Self::Left, Self::Center, Self::Right];

    /// Index of the character that never moves for a string of `count`
    /// characters, or `None` when the anchor falls between two characters
    /// (center alignment with an even count) or the string is empty.
    pub fn anchor_index(self, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        match self {
            Self::Left => Some(0),
            Self::Right => Some(count - 1),
            Self::Center if count % 2 == 1 => Some((count - 1) / 2),
            Self::Center => None,
        }
    }
}
