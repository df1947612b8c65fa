//! Application configuration loaded from a TOML file.
//!
//! ```toml
//! shape = "saturn"
//! theme = "#ff4fa3"
//! seed  = 42
//!
//! [morph]
//! particle-count = 12000
//! photo-count    = 30
//! ```
//!
//! Every key is optional.  A missing file means all defaults; a file that
//! exists but does not parse is an error.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use cloud_morph::{MorphConfig, Rgb};
use cloud_shapes::ShapeKind;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::AppError;

pub const DEFAULT_THEME: &str = "#00d2ff";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub morph: MorphConfig,

    /// Shape shown at start-up.
    #[serde(default = "default_shape")]
    pub shape: ShapeKind,

    /// Theme colour as `#rrggbb`.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Seed for reproducible clouds; absent means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_shape() -> ShapeKind {
    ShapeKind::Heart
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            morph: MorphConfig::default(),
            shape: default_shape(),
            theme: default_theme(),
            seed:  None,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(AppConfig::default());
            }
            Err(source) => {
                return Err(AppError::ConfigFile { path: path.to_path_buf(), source });
            }
        };
        let cfg = Self::parse(&text)
            .map_err(|source| AppError::ConfigParse { path: path.to_path_buf(), source })?;
        info!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn theme_color(&self) -> Result<Rgb, AppError> {
        Ok(Rgb::from_hex(&self.theme)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(AppConfig::parse("").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_file() {
        let cfg = AppConfig::parse(
            r#"
            shape = "firework"
            seed = 9

            [morph]
            photo-count = 12
            "#,
        )
        .unwrap();
        assert_eq!(cfg.shape, ShapeKind::Firework);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.morph.photo_count, 12);
        assert_eq!(cfg.morph.particle_count, MorphConfig::default().particle_count);
        assert_eq!(cfg.theme, DEFAULT_THEME);
    }

    #[test]
    fn unknown_shape_is_a_parse_error() {
        assert!(AppConfig::parse(r#"shape = "torus""#).is_err());
    }

    #[test]
    fn unknown_key_is_a_parse_error() {
        assert!(AppConfig::parse("colour = 3").is_err());
    }

    #[test]
    fn missing_file_means_defaults() {
        let cfg = AppConfig::load(Path::new("/definitely/not/here/leap_cloud.toml")).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn malformed_file_is_fatal() {
        let path = std::env::temp_dir().join(format!("leap_cloud_bad_{}.toml", std::process::id()));
        fs::write(&path, "shape = [").unwrap();
        let err = AppConfig::load(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, AppError::ConfigParse { .. }));
    }

    #[test]
    fn theme_color_parses_default() {
        let rgb = AppConfig::default().theme_color().unwrap();
        assert_eq!(rgb.to_hex(), "#00D2FF");
    }

    #[test]
    fn bad_theme_is_reported() {
        let cfg = AppConfig { theme: "blue".into(), ..Default::default() };
        assert!(matches!(cfg.theme_color(), Err(AppError::Config(_))));
    }
}
