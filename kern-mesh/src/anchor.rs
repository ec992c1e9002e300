use kern_core::HorizontalAlign;
use serde::{Deserialize, Serialize};

/// Where a text block is pinned inside its rectangle.
///
/// Only the horizontal component matters for kerning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    #[default]
    UpperLeft,
    UpperCenter,
    UpperRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

impl TextAnchor {
    pub const ALL: [TextAnchor; 9] = [
        Self::UpperLeft,
        Self::UpperCenter,
        Self::UpperRight,
        Self::MiddleLeft,
        Self::MiddleCenter,
        Self::MiddleRight,
        Self::LowerLeft,
        Self::LowerCenter,
        Self::LowerRight,
    ];

    pub fn horizontal(self) -> HorizontalAlign {
        match self {
            Self::UpperLeft | Self::MiddleLeft | Self::LowerLeft => HorizontalAlign::Left,
            Self::UpperCenter | Self::MiddleCenter | Self::LowerCenter => HorizontalAlign::Center,
            Self::UpperRight | Self::MiddleRight | Self::LowerRight => HorizontalAlign::Right,
        }
    }
}

impl From<TextAnchor> for HorizontalAlign {
    fn from(anchor: TextAnchor) -> Self {
        anchor.horizontal()
    }
}
