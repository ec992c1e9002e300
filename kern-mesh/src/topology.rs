use kern_core::VertexStride;
use serde::{Deserialize, Serialize};

/// How each glyph rectangle is tessellated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// Four corner vertices per glyph (TL, TR, BR, BL), drawn with an index buffer.
    Quad,
    /// Two triangles per glyph (TL, TR, BR, BR, BL, TL), no index buffer.
    #[default]
    TriangleList,
}

impl Topology {
    pub fn stride(self) -> VertexStride {
        match self {
            Self::Quad => VertexStride::QUAD,
            Self::TriangleList => VertexStride::TRIANGULATED_QUAD,
        }
    }

    /// Corner indices (0 = TL, 1 = TR, 2 = BR, 3 = BL) emitted per glyph.
    pub fn corner_order(self) -> &'static [usize] {
        match self {
            Self::Quad => &[0, 1, 2, 3],
            Self::TriangleList => &[0, 1, 2, 2, 3, 0],
        }
    }
}
