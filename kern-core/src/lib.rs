//! # kern-core
//!
//! Uniform kerning for tessellated text. Shifts the x coordinate of every
//! vertex in a glyph vertex stream according to the character it belongs to
//! and the horizontal alignment of the text.
//!
//! ## Architecture
//!
//! ```text
//!  tessellator (quads / triangle list)
//!       │
//!       ▼
//!  &mut [V: KernVertex]  ── stride ──▸ character index j = i / stride
//!       │
//!       ▼
//!  character_offset(align, j, count, kerning)
//!       │
//!       ▼
//!  x += offset   (all other attributes untouched)
//! ```
//!
//! - **`align`** — three-way horizontal alignment.
//! - **`stride`** — validated vertices-per-character count.
//! - **`vertex`** — the `KernVertex` trait and the `UiVertex` layout.
//! - **`transform`** — the offset rules and the `apply` entry point.
//! - **`error`** — contract violations reported by `apply`.

pub mod align;
pub mod error;
pub mod stride;
pub mod transform;
pub mod vertex;

#[cfg(test)]
mod proptests;

// Re-exports for ergonomic use.
pub use align::HorizontalAlign;
pub use error::KerningError;
pub use stride::VertexStride;
pub use transform::{apply, character_offset, kerned_width, KerningTransform};
pub use vertex::{KernVertex, UiVertex};
