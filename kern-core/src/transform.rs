//! Kerning transform — displaces glyph vertices horizontally.
//!
//! Every character block of `stride` consecutive vertices moves by one
//! signed offset. The offset depends on the alignment:
//!
//! | Alignment | Anchor                 | Offset of character `j`                 |
//! |-----------|------------------------|-----------------------------------------|
//! | Left      | `j == 0`               | `j * k`                                 |
//! | Right     | `j == n - 1`           | `-(n - 1 - j) * k`                      |
//! | Center    | middle (odd `n`)       | `(j - m) * k`                           |
//! | Center    | between two (even `n`) | `±(d * k - k / 2)`, `d` = rank from mid |
//!
//! Running the transform on already-kerned vertices kerns them twice, so it
//! must only be fed freshly tessellated geometry.

use std::cmp::Ordering;

use crate::align::HorizontalAlign;
use crate::error::KerningError;
use crate::stride::VertexStride;
use crate::vertex::KernVertex;

/// Signed x offset of character `index` in a string of `count` characters.
///
/// Anchor characters return exactly `0.0` whatever the kerning value.
pub fn character_offset(
    align: HorizontalAlign,
    index: usize,
    count: usize,
    kerning: f32,
) -> f32 {
    match align {
        HorizontalAlign::Left => left_offset(index, kerning),
        HorizontalAlign::Right => right_offset(index, count, kerning),
        HorizontalAlign::Center => center_offset(index, count, kerning),
    }
}

fn left_offset(index: usize, kerning: f32) -> f32 {
    if index == 0 {
        return 0.0;
    }
    index as f32 * kerning
}

fn right_offset(index: usize, count: usize, kerning: f32) -> f32 {
    let last = count.saturating_sub(1);
    if index >= last {
        return 0.0;
    }
    -((last - index) as f32 * kerning)
}

fn center_offset(index: usize, count: usize, kerning: f32) -> f32 {
    if count % 2 == 1 {
        let mid = (count - 1) / 2;
        return match index.cmp(&mid) {
            Ordering::Equal => 0.0,
            Ordering::Less => -((mid - index) as f32 * kerning),
            Ordering::Greater => (index - mid) as f32 * kerning,
        };
    }

    // Even count: the two characters flanking the centre sit half a step
    // out, every further character one full step beyond its neighbour.
    let half = count / 2;
    let half_step = kerning / 2.0;
    if index < half {
        let rank = half - index;
        -(rank as f32 * kerning - half_step)
    } else {
        let rank = index + 1 - half;
        rank as f32 * kerning - half_step
    }
}

/// Extra horizontal extent a string of `count` characters gains.
pub fn kerned_width(count: usize, kerning: f32) -> f32 {
    if count < 2 {
        return 0.0;
    }
    (count - 1) as f32 * kerning
}

/// Apply uniform kerning to a vertex stream in place.
///
/// Streams shorter than one character block (including empty ones) are left
/// alone and reported as success. Otherwise the stream must hold exactly
/// `character_count` blocks of `stride` vertices; on any mismatch nothing is
/// modified and the violation is returned.
pub fn apply<V: KernVertex>(
    vertices: &mut [V],
    stride: VertexStride,
    character_count: usize,
    align: HorizontalAlign,
    kerning: f32,
) -> Result<(), KerningError> {
    let block = stride.get();
    if vertices.len() < block {
        return Ok(());
    }
    if vertices.len() % block != 0 {
        return Err(KerningError::LengthMismatch {
            vertices: vertices.len(),
            stride: block,
        });
    }
    let actual = vertices.len() / block;
    if actual != character_count {
        return Err(KerningError::CharacterCountMismatch {
            expected: character_count,
            actual,
        });
    }

    for (index, chunk) in vertices.chunks_exact_mut(block).enumerate() {
        let offset = character_offset(align, index, character_count, kerning);
        if offset == 0.0 {
            continue;
        }
        for vertex in chunk {
            vertex.set_x(vertex.x() + offset);
        }
    }

    log::trace!(
        "Kerned {character_count} characters ({} vertices, {align:?}, k={kerning})",
        vertices.len()
    );
    Ok(())
}

/// Per-text kerning parameters bundled for repeated mesh rebuilds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KerningTransform {
    pub stride: VertexStride,
    pub align: HorizontalAlign,
    pub kerning: f32,
}

impl KerningTransform {
    /// Bundle the parameters for one text element.
    pub fn new(stride: VertexStride, align: HorizontalAlign, kerning: f32) -> Self {
        Self {
            stride,
            align,
            kerning,
        }
    }

    /// Replace the alignment.
    pub fn with_align(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }

    /// Replace the kerning value.
    pub fn with_kerning(mut self, kerning: f32) -> Self {
        self.kerning = kerning;
        self
    }

    /// See [`apply`].
    pub fn apply<V: KernVertex>(
        &self,
        vertices: &mut [V],
        character_count: usize,
    ) -> Result<(), KerningError> {
        apply(vertices, self.stride, character_count, self.align, self.kerning)
    }

    /// Offset of one character under these parameters.
    pub fn offset(&self, index: usize, count: usize) -> f32 {
        character_offset(self.align, index, count, self.kerning)
    }
}

// ===================================================================
// Tests
// ===================================================================
