//! Errors that can stop the application before or during the render loop.

use std::path::PathBuf;

use cloud_morph::ConfigError;
use cloud_shapes::UnknownShape;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot read config file {}: {source}", path.display())]
    ConfigFile {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file {}: {source}", path.display())]
    ConfigParse {
        path:   PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("window error: {0}")]
    Window(String),

    #[error(transparent)]
    Shape(#[from] UnknownShape),
}
