//! # kern-mesh
//!
//! Text-mesh side of the kerning pipeline. Turns laid-out glyph rectangles
//! into a vertex stream, then runs the `kern-core` transform over it once
//! per rebuild.
//!
//! ## Architecture
//!
//! ```text
//! layout stage ──► Vec<GlyphQuad>
//!                      │
//!                      ▼
//!            TextMesh::rebuild(topology)   ── 4 or 6 vertices per glyph
//!                      │
//!                      ▼
//!   KerningEffect::modify_mesh(mesh, text, anchor)
//!        │  enabled?  ── no ──► untouched
//!        │  copy stream, kern_core::apply(...)
//!        │  ok  ──► replace stream
//!        ▼  err ──► warn, keep prior geometry
//!   bytes for GPU upload
//! ```
//!
//! - **`anchor`** — nine-way text anchor reduced to horizontal alignment.
//! - **`topology`** — quad vs triangle-list tessellation.
//! - **`mesh`** — glyph quads and the derived vertex stream.
//! - **`config`** — serialized kerning settings.
//! - **`effect`** — the per-rebuild kerning pass.

pub mod anchor;
pub mod config;
pub mod effect;
pub mod mesh;
pub mod topology;

// Re-exports for ergonomic use.
pub use anchor::TextAnchor;
pub use config::{ConfigError, KerningConfig};
pub use effect::KerningEffect;
pub use mesh::{monospace_run, GlyphQuad, TextMesh};
pub use topology::Topology;
