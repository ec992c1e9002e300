//! Glyph quads and the text mesh built from them.
//!
//! A [`TextMesh`] keeps the laid-out glyph rectangles as its source of
//! truth and derives the vertex stream from them. Every `rebuild` starts
//! from untouched geometry, so kerning is applied exactly once per build.

use kern_core::UiVertex;

use crate::topology::Topology;

/// A laid-out glyph rectangle, as produced by the layout stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphQuad {
    /// Top-left position in text-local coordinates (pixels).
    pub x: f32,
    pub y: f32,
    /// Width/height of the glyph box (pixels).
    pub width: f32,
    pub height: f32,
    /// Atlas UV top-left.
    pub uv_min: [f32; 2],
    /// Atlas UV bottom-right.
    pub uv_max: [f32; 2],
    /// RGBA color.
    pub color: [f32; 4],
}

impl GlyphQuad {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            uv_min: [0.0, 0.0],
            uv_max: [1.0, 1.0],
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }

    /// Corners in TL, TR, BR, BL order.
    pub fn corners(&self) -> [UiVertex; 4] {
        let (x0, y0) = (self.x, self.y);
        let (x1, y1) = (self.x + self.width, self.y + self.height);
        let [u0, v0] = self.uv_min;
        let [u1, v1] = self.uv_max;
        [
            UiVertex::new(x0, y0).with_uv([u0, v0]).with_color(self.color),
            UiVertex::new(x1, y0).with_uv([u1, v0]).with_color(self.color),
            UiVertex::new(x1, y1).with_uv([u1, v1]).with_color(self.color),
            UiVertex::new(x0, y1).with_uv([u0, v1]).with_color(self.color),
        ]
    }
}

/// Lay out `text` on a fixed advance, one glyph box per character.
///
/// Whitespace still gets a box so the glyph count always equals the
/// character count.
pub fn monospace_run(text: &str, advance: f32, width: f32, height: f32) -> Vec<GlyphQuad> {
    text.chars()
        .enumerate()
        .map(|(i, _)| GlyphQuad::new(i as f32 * advance, 0.0, width, height))
        .collect()
}

/// Vertex mesh for one block of text.
#[derive(Clone, Debug)]
pub struct TextMesh {
    glyphs: Vec<GlyphQuad>,
    topology: Topology,
    vertices: Vec<UiVertex>,
    /// True until the stream is replaced by a post-process pass.
    fresh: bool,
}

impl TextMesh {
    pub fn new(glyphs: Vec<GlyphQuad>, topology: Topology) -> Self {
        let mut mesh = Self {
            glyphs,
            topology,
            vertices: Vec::new(),
            fresh: false,
        };
        mesh.rebuild();
        mesh
    }

    /// Regenerate the vertex stream from the glyph quads.
    pub fn rebuild(&mut self) {
        let order = self.topology.corner_order();
        self.vertices.clear();
        self.vertices.reserve(self.glyphs.len() * order.len());
        for glyph in &self.glyphs {
            let corners = glyph.corners();
            self.vertices.extend(order.iter().map(|&c| corners[c]));
        }
        self.fresh = true;
    }

    /// Swap in new glyphs and rebuild.
    pub fn set_glyphs(&mut self, glyphs: Vec<GlyphQuad>) {
        self.glyphs = glyphs;
        self.rebuild();
    }

    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;
        self.rebuild();
    }

    pub fn glyphs(&self) -> &[GlyphQuad] {
        &self.glyphs
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Whether the stream is exactly what the last rebuild produced.
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    pub fn vertex_stream(&self) -> &[UiVertex] {
        &self.vertices
    }

    /// Replace the vertex stream with a post-processed one.
    pub fn replace_stream(&mut self, vertices: Vec<UiVertex>) {
        self.vertices = vertices;
        self.fresh = false;
    }

    /// Drop all geometry (glyphs and vertices).
    pub fn clear(&mut self) {
        self.glyphs.clear();
        self.vertices.clear();
        self.fresh = true;
    }

    /// Raw vertex bytes, ready for a vertex buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Horizontal extent `(min_x, max_x)` of the stream, `None` when empty.
    pub fn x_extent(&self) -> Option<(f32, f32)> {
        let mut xs = self.vertices.iter().map(|v| v.position[0]);
        let first = xs.next()?;
        Some(xs.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))))
    }
}

// ===================================================================
// Tests
// ===================================================================
