//! Command-line flags.  Anything given here overrides the config file.

use std::path::PathBuf;

use clap::Parser;
use cloud_morph::Rgb;
use cloud_shapes::ShapeKind;

use crate::config::AppConfig;
use crate::error::AppError;

#[derive(Parser, Debug, Clone)]
#[command(name = "leap_cloud", version, about = "Gesture-driven particle cloud with hidden photo memories")]
pub struct Args {
    /// TOML config file; a missing file means built-in defaults
    #[arg(long, default_value = "leap_cloud.toml")]
    pub config: PathBuf,

    /// Start-up shape: heart, flower, saturn, buddha, firework or helix
    #[arg(long)]
    pub shape: Option<String>,

    /// Theme colour, e.g. "#00d2ff"
    #[arg(long)]
    pub theme: Option<String>,

    /// Seed for a reproducible cloud
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of particles
    #[arg(long)]
    pub particles: Option<usize>,

    /// Number of photo sprites
    #[arg(long)]
    pub photos: Option<usize>,

    /// Debug-level logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Fold the overrides into `cfg`.  Shape names and theme colours are
    /// checked here so a typo fails before the window opens.
    pub fn apply(&self, cfg: &mut AppConfig) -> Result<(), AppError> {
        if let Some(shape) = &self.shape {
            cfg.shape = shape.parse::<ShapeKind>()?;
        }
        if let Some(theme) = &self.theme {
            Rgb::from_hex(theme)?;
            cfg.theme = theme.clone();
        }
        if let Some(seed) = self.seed {
            cfg.seed = Some(seed);
        }
        if let Some(n) = self.particles {
            cfg.morph.particle_count = n;
        }
        if let Some(n) = self.photos {
            cfg.morph.photo_count = n;
        }
        Ok(())
    }

    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
