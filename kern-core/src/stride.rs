//! Number of vertices the tessellator emits per character.

use std::num::NonZeroUsize;

use crate::error::KerningError;

/// Vertices per character block. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VertexStride(NonZeroUsize);

impl VertexStride {
    /// One quad per glyph: top-left, top-right, bottom-right, bottom-left.
    pub const QUAD: Self = Self::from_const(4);

    /// Two triangles per glyph, no index buffer.
    pub const TRIANGULATED_QUAD: Self = Self::from_const(6);

    const fn from_const(n: usize) -> Self {
        match NonZeroUsize::new(n) {
            Some(n) => Self(n),
            None => panic!("vertex stride must be non-zero"),
        }
    }

    /// Validate a stride supplied at runtime.
    pub fn new(vertices_per_char: usize) -> Result<Self, KerningError> {
        NonZeroUsize::new(vertices_per_char)
            .map(Self)
            .ok_or(KerningError::InvalidStride)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for VertexStride {
    fn default() -> Self {
        Self::TRIANGULATED_QUAD
    }
}

impl TryFrom<usize> for VertexStride {
    type Error = KerningError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
