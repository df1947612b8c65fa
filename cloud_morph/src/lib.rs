//! # cloud_morph
//!
//! Morph and reveal engine for a gesture-driven particle cloud.
//!
//! A single scalar, the hand's openness, drives everything:
//!
//! 1. The gesture pipeline maps each hand reading to a target scale
//!    ([`map_reading`]) and publishes it into a [`ScaleCell`].
//! 2. Every frame, [`AnimationState::tick`] eases the current scale toward
//!    that target, eases every particle toward `base · scale`, and updates
//!    the photo sprites ([`update_sprite`]).
//! 3. Once the scale passes [`REVEAL_SCALE`] the sprites push outward and
//!    fade from faint theme-tinted specks to full photos.
//!
//! Shape changes resample all base positions at once through
//! [`cloud_shapes`]; the smoothing then carries the cloud across.
//!
//! ```rust
//! use cloud_morph::{AnimationState, MorphConfig, Rgb, HandState};
//! use cloud_shapes::ShapeKind;
//!
//! let cfg = MorphConfig { particle_count: 500, photo_count: 5, ..Default::default() };
//! let mut cloud = AnimationState::seeded(cfg, ShapeKind::Heart, Rgb::WHITE, 1).unwrap();
//!
//! cloud.target_handle().store(2.0);   // fully open hand
//! let status = cloud.advance(60);
//! assert_eq!(status.hand_state, HandState::Open);
//! ```

pub mod cell;
pub mod color;
pub mod config;
pub mod error;
pub mod gesture;
pub mod particles;
pub mod reveal;
pub mod signal;
pub mod state;

pub use cell::ScaleCell;
pub use color::Rgb;
pub use config::MorphConfig;
pub use error::{ConfigError, Result};
pub use gesture::{map_reading, scale_for_ratio, GestureReading, Point2};
pub use particles::ParticleSet;
pub use reveal::{is_revealing, update_sprite, PhotoSprite, SpriteSet};
pub use signal::{AppSignal, HandState, CLOSED_SCALE, REVEAL_SCALE};
pub use state::{AnimationState, MorphState};
