use thiserror::Error;

/// Contract violations detected before any vertex is touched.
///
/// A rejected call leaves the vertex stream exactly as it was, so a host can
/// drop the update and keep the previous frame's geometry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KerningError {
    #[error("vertex stride must be at least 1")]
    InvalidStride,
    #[error("vertex stream of {vertices} vertices is not a multiple of stride {stride}")]
    LengthMismatch { vertices: usize, stride: usize },
    #[error("caller reported {expected} characters but the vertex stream holds {actual}")]
    CharacterCountMismatch { expected: usize, actual: usize },
}
