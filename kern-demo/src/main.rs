//! Kerning demo: lays out a string on a fixed advance, kerns it for each
//! horizontal anchor and logs where every glyph ends up.
//!
//! ```text
//! kern-demo [TEXT] [CONFIG.json]
//! RUST_LOG=debug kern-demo "Logos" kerning.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use kern_core::kerned_width;
use kern_mesh::{monospace_run, KerningConfig, KerningEffect, TextAnchor, TextMesh};
use log::{error, info};

const ADVANCE: f32 = 10.0;
const GLYPH_WIDTH: f32 = 8.0;
const GLYPH_HEIGHT: f32 = 16.0;

/// Lay out a string, kern it for each horizontal anchor and log the result
#[derive(Parser, Debug)]
#[command(name = "kern-demo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Text to lay out and kern
    #[arg(default_value = "Kerning")]
    text: String,

    /// JSON kerning config (defaults to kerning 4.0)
    config: Option<PathBuf>,
}

fn run(text: &str, config: KerningConfig) -> Result<(), Box<dyn std::error::Error>> {
    let count = text.chars().count();
    info!(
        "Kerning {text:?}: {count} chars, k={}, {:?}, +{:.2}px",
        config.kerning,
        config.topology,
        kerned_width(count, config.kerning),
    );

    let effect = KerningEffect::new(config.clone())?;
    let mut mesh = TextMesh::new(
        monospace_run(text, ADVANCE, GLYPH_WIDTH, GLYPH_HEIGHT),
        config.topology,
    );

    for anchor in [TextAnchor::MiddleLeft, TextAnchor::MiddleCenter, TextAnchor::MiddleRight] {
        mesh.rebuild();
        effect.modify_mesh(&mut mesh, text, anchor)?;

        let stride = mesh.topology().stride().get();
        let xs: Vec<String> = mesh
            .vertex_stream()
            .chunks(stride)
            .map(|block| format!("{:.2}", block[0].position[0]))
            .collect();
        let (lo, hi) = mesh.x_extent().unwrap_or((0.0, 0.0));
        info!(
            "{:?}: glyph x = [{}], extent {lo:.2}..{hi:.2}",
            anchor.horizontal(),
            xs.join(", ")
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => match KerningConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Could not load {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => KerningConfig {
            kerning: 4.0,
            ..Default::default()
        },
    };

    match run(&args.text, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Kerning failed: {e}");
            ExitCode::FAILURE
        }
    }
}

// ===================================================================
// Tests
// ===================================================================
