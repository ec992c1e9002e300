//! Vertex types the kerning transform can operate on.
//!
//! The transform only ever reads and writes the x coordinate, so it is
//! generic over [`KernVertex`]. [`UiVertex`] is the layout emitted by the
//! glyph tessellator and derives `bytemuck::Pod` + `Zeroable` for zero-copy
//! upload once kerning is done.

use bytemuck::{Pod, Zeroable};

// ───────────────────────────────────────────────────────────────────
// Trait
// ───────────────────────────────────────────────────────────────────

/// Anything with a horizontal position the transform may shift.
pub trait KernVertex {
    fn x(&self) -> f32;
    fn set_x(&mut self, x: f32);
}

impl KernVertex for [f32; 2] {
    fn x(&self) -> f32 {
        self[0]
    }

    fn set_x(&mut self, x: f32) {
        self[0] = x;
    }
}

impl KernVertex for [f32; 3] {
    fn x(&self) -> f32 {
        self[0]
    }

    fn set_x(&mut self, x: f32) {
        self[0] = x;
    }
}

// ───────────────────────────────────────────────────────────────────
// UI vertex
// ───────────────────────────────────────────────────────────────────

/// A single text-mesh vertex.
///
/// 36 bytes per vertex — a 6-vertex glyph costs 216 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct UiVertex {
    /// Text-local position in pixels (z is carried through untouched).
    pub position: [f32; 3],
    /// RGBA color, each channel in [0.0, 1.0].
    pub color: [f32; 4],
    /// Atlas UV coordinate.
    pub uv: [f32; 2],
}

impl UiVertex {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: [x, y, 0.0],
            color: [1.0, 1.0, 1.0, 1.0],
            uv: [0.0, 0.0],
        }
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    pub fn with_uv(mut self, uv: [f32; 2]) -> Self {
        self.uv = uv;
        self
    }
}

impl KernVertex for UiVertex {
    fn x(&self) -> f32 {
        self.position[0]
    }

    fn set_x(&mut self, x: f32) {
        self.position[0] = x;
    }
}

// ===================================================================
// Tests
// ===================================================================
