//! Kerning pass run after every text-mesh rebuild.

use kern_core::{apply, KerningError};

use crate::anchor::TextAnchor;
use crate::config::{ConfigError, KerningConfig};
use crate::mesh::TextMesh;

/// Applies the configured kerning to a freshly rebuilt [`TextMesh`].
///
/// The kerning value is always finite: both construction and
/// `set_kerning` run [`KerningConfig::validate`].
#[derive(Clone, Debug, Default)]
pub struct KerningEffect {
    config: KerningConfig,
}

impl KerningEffect {
    pub fn new(config: KerningConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &KerningConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.config.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    pub fn kerning(&self) -> f32 {
        self.config.kerning
    }

    /// Change the kerning value; a non-finite value is rejected and the
    /// previous one kept.
    pub fn set_kerning(&mut self, kerning: f32) -> Result<(), ConfigError> {
        let candidate = KerningConfig {
            kerning,
            ..self.config.clone()
        };
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }

    /// Kern `mesh`, whose glyphs were laid out from `text`.
    ///
    /// The core transform works on a private copy of the stream; the mesh
    /// only sees the result if the whole pass succeeds. A mesh that was
    /// already post-processed since its last rebuild is skipped so vertices
    /// are never kerned twice.
    pub fn modify_mesh(
        &self,
        mesh: &mut TextMesh,
        text: &str,
        anchor: TextAnchor,
    ) -> Result<(), KerningError> {
        if !self.is_active() {
            return Ok(());
        }
        if !mesh.is_fresh() {
            log::debug!("Skipping kerning: mesh already modified since last rebuild");
            return Ok(());
        }

        let stride = mesh.topology().stride();
        let mut stream = mesh.vertex_stream().to_vec();
        let character_count = text.chars().count();
        let align = anchor.horizontal();

        match apply(&mut stream, stride, character_count, align, self.config.kerning) {
            Ok(()) => {
                log::debug!(
                    "Kerned {character_count} chars ({align:?}, k={})",
                    self.config.kerning
                );
                mesh.replace_stream(stream);
                Ok(())
            }
            Err(e) => {
                log::warn!("Kerning skipped for {text:?}, keeping previous geometry: {e}");
                Err(e)
            }
        }
    }
}

// ===================================================================
// Tests
// ===================================================================
