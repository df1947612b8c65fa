//! Engine configuration, fixed for the lifetime of one particle/sprite set.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Sizes and smoothing rates for one engine instance.
///
/// Changing `particle_count` or `photo_count` means rebuilding both sets;
/// see [`AnimationState::reconfigure`](crate::AnimationState::reconfigure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MorphConfig {
    #[serde(default = "MorphConfig::default_particle_count")]
    pub particle_count: usize,
    /// World-space point size.  Only the renderer reads it.
    #[serde(default = "MorphConfig::default_particle_size")]
    pub particle_size: f32,
    #[serde(default = "MorphConfig::default_photo_count")]
    pub photo_count: usize,
    /// Per-tick fraction of the remaining gap closed by particles and sprites.
    #[serde(default = "MorphConfig::default_transition_speed")]
    pub transition_speed: f32,
    /// Per-tick fraction of the remaining gap closed by the scale factor.
    #[serde(default = "MorphConfig::default_hand_sensitivity")]
    pub hand_sensitivity: f32,
}

impl MorphConfig {
    fn default_particle_count() -> usize {
        20_000
    }
    fn default_particle_size() -> f32 {
        0.08
    }
    fn default_photo_count() -> usize {
        50
    }
    fn default_transition_speed() -> f32 {
        0.08
    }
    fn default_hand_sensitivity() -> f32 {
        0.1
    }

    /// Reject any configuration the engine cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(ConfigError::ParticleCount);
        }
        if !(self.particle_size > 0.0 && self.particle_size.is_finite()) {
            return Err(ConfigError::ParticleSize(self.particle_size));
        }
        if self.photo_count > self.particle_count {
            return Err(ConfigError::PhotoCount {
                photo_count:    self.photo_count,
                particle_count: self.particle_count,
            });
        }
        if !open_unit(self.transition_speed) {
            return Err(ConfigError::TransitionSpeed(self.transition_speed));
        }
        if !open_unit(self.hand_sensitivity) {
            return Err(ConfigError::HandSensitivity(self.hand_sensitivity));
        }
        Ok(())
    }
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            particle_count:   Self::default_particle_count(),
            particle_size:    Self::default_particle_size(),
            photo_count:      Self::default_photo_count(),
            transition_speed: Self::default_transition_speed(),
            hand_sensitivity: Self::default_hand_sensitivity(),
        }
    }
}

fn open_unit(v: f32) -> bool {
    v > 0.0 && v < 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(MorphConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_particles_rejected() {
        let cfg = MorphConfig { particle_count: 0, photo_count: 0, ..Default::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::ParticleCount));
    }

    #[test]
    fn more_photos_than_particles_rejected() {
        let cfg = MorphConfig { particle_count: 10, photo_count: 11, ..Default::default() };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::PhotoCount { photo_count: 11, particle_count: 10 })
        );
    }

    #[test]
    fn photo_count_may_be_zero_or_equal() {
        for photos in [0, 10] {
            let cfg = MorphConfig { particle_count: 10, photo_count: photos, ..Default::default() };
            assert!(cfg.validate().is_ok());
        }
    }

    #[test]
    fn rates_must_be_strictly_inside_unit_interval() {
        for bad in [0.0, 1.0, -0.1, 1.5, f32::NAN] {
            let cfg = MorphConfig { transition_speed: bad, ..Default::default() };
            assert!(matches!(cfg.validate(), Err(ConfigError::TransitionSpeed(_))));
            let cfg = MorphConfig { hand_sensitivity: bad, ..Default::default() };
            assert!(matches!(cfg.validate(), Err(ConfigError::HandSensitivity(_))));
        }
    }

    #[test]
    fn non_positive_particle_size_rejected() {
        for bad in [0.0, -1.0, f32::INFINITY] {
            let cfg = MorphConfig { particle_size: bad, ..Default::default() };
            assert!(matches!(cfg.validate(), Err(ConfigError::ParticleSize(_))));
        }
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg: MorphConfig = toml::from_str("particle-count = 500\nphoto-count = 5\n").unwrap();
        assert_eq!(cfg.particle_count, 500);
        assert_eq!(cfg.photo_count, 5);
        assert_eq!(cfg.transition_speed, 0.08);
        assert_eq!(cfg.hand_sensitivity, 0.1);
    }
}
