//! Top-level engine state.
//!
//! `AnimationState` owns the particle set, the photo sprites, the morph
//! scalars and the sampler RNG.  The render loop calls [`tick`] once per
//! frame; shape, theme and configuration changes arrive between ticks.
//!
//! [`tick`]: AnimationState::tick

use std::f32::consts::TAU;
use std::sync::Arc;

use cloud_shapes::{generate, generate_at, scattered_indices, Point3D, ShapeKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::cell::ScaleCell;
use crate::color::Rgb;
use crate::config::MorphConfig;
use crate::error::Result;
use crate::gesture::NEUTRAL_SCALE;
use crate::particles::ParticleSet;
use crate::reveal::{PhotoSprite, SpriteSet};
use crate::signal::AppSignal;

/// Rotation of the whole cloud about the vertical axis, per tick.
pub const ROTATION_STEP: f32 = 0.001;

// ════════════════════════════════════════════════════════════════════════════
// MorphState
// ════════════════════════════════════════════════════════════════════════════

/// The scale the hand asks for and the smoothed scale actually shown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphState {
    pub target_scale:  f32,
    pub current_scale: f32,
}

impl MorphState {
    /// Move `current_scale` a fraction `hand_sensitivity` of the way toward
    /// `target_scale`.  After `n` steps the error is `(1 - h)^n` of the
    /// starting error.
    pub fn step(self, hand_sensitivity: f32) -> Self {
        MorphState {
            target_scale:  self.target_scale,
            current_scale: self.current_scale
                + (self.target_scale - self.current_scale) * hand_sensitivity,
        }
    }
}

impl Default for MorphState {
    fn default() -> Self {
        MorphState { target_scale: NEUTRAL_SCALE, current_scale: NEUTRAL_SCALE }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// AnimationState
// ════════════════════════════════════════════════════════════════════════════

pub struct AnimationState<R = StdRng> {
    config:    MorphConfig,
    shape:     ShapeKind,
    theme:     Rgb,
    morph:     MorphState,
    target:    Arc<ScaleCell>,
    particles: ParticleSet,
    sprites:   SpriteSet,
    rotation:  f32,
    signal:    AppSignal,
    ticks:     u64,
    rng:       R,
}

impl AnimationState<StdRng> {
    /// Build with an OS-seeded generator.
    pub fn new(config: MorphConfig, shape: ShapeKind, theme: Rgb) -> Result<Self> {
        Self::with_rng(config, shape, theme, StdRng::from_os_rng())
    }

    /// Build with a fixed seed; identical seeds give identical clouds.
    pub fn seeded(config: MorphConfig, shape: ShapeKind, theme: Rgb, seed: u64) -> Result<Self> {
        Self::with_rng(config, shape, theme, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AnimationState<R> {
    /// Build with a caller-supplied generator.  Fails if `config` does not
    /// validate.
    pub fn with_rng(config: MorphConfig, shape: ShapeKind, theme: Rgb, mut rng: R) -> Result<Self> {
        config.validate()?;

        let particles = ParticleSet::scattered(
            generate(shape, config.particle_count, &mut rng),
            &mut rng,
        );
        let sprites = SpriteSet::new(sprite_bases(shape, &config, &mut rng), theme);

        info!(
            shape = shape.name(),
            particles = config.particle_count,
            photos = config.photo_count,
            "particle cloud built"
        );

        Ok(AnimationState {
            config,
            shape,
            theme,
            morph:    MorphState::default(),
            target:   Arc::new(ScaleCell::default()),
            particles,
            sprites,
            rotation: 0.0,
            signal:   AppSignal::waiting(),
            ticks:    0,
            rng,
        })
    }

    // ── per-frame ─────────────────────────────────────────────────────────

    /// Advance everything by one frame and return the fresh status.
    pub fn tick(&mut self) -> AppSignal {
        self.morph.target_scale = self.target.load();
        self.morph = self.morph.step(self.config.hand_sensitivity);
        let scale = self.morph.current_scale;

        self.particles.step(scale, self.config.transition_speed);
        self.sprites.step(scale, self.theme, self.config.transition_speed);
        self.rotation = (self.rotation + ROTATION_STEP).rem_euclid(TAU);
        self.ticks += 1;

        let signal = AppSignal::from_morph(&self.morph);
        if signal.hand_state != self.signal.hand_state {
            debug!(from = %self.signal.hand_state, to = %signal.hand_state, scale, "hand state");
        }
        self.signal = signal;
        signal
    }

    /// Run `frames` ticks; returns the last status (unchanged when 0).
    pub fn advance(&mut self, frames: u32) -> AppSignal {
        for _ in 0..frames {
            self.tick();
        }
        self.signal
    }

    // ── events ────────────────────────────────────────────────────────────

    /// Switch shape.  Regenerates every base position when `shape` differs
    /// from the current one and reports whether it did.  Current positions
    /// only move on the next tick.
    pub fn set_shape(&mut self, shape: ShapeKind) -> bool {
        if shape == self.shape {
            return false;
        }
        info!(from = self.shape.name(), to = shape.name(), "shape change");
        self.shape = shape;
        self.regenerate();
        true
    }

    /// Resample every base position for the current shape.
    pub fn regenerate(&mut self) {
        let particles = generate(self.shape, self.config.particle_count, &mut self.rng);
        let sprites = sprite_bases(self.shape, &self.config, &mut self.rng);
        self.particles.rebase(particles);
        self.sprites.rebase(sprites);
    }

    pub fn set_theme(&mut self, theme: Rgb) {
        if theme != self.theme {
            info!(theme = %theme, "theme change");
            self.theme = theme;
        }
    }

    /// Rebuild both sets for a new configuration.  Morph state, shape,
    /// theme and rotation carry over.  On error nothing changes.
    pub fn reconfigure(&mut self, config: MorphConfig) -> Result<()> {
        config.validate()?;
        let particles = ParticleSet::scattered(
            generate(self.shape, config.particle_count, &mut self.rng),
            &mut self.rng,
        );
        let sprites = SpriteSet::new(sprite_bases(self.shape, &config, &mut self.rng), self.theme);
        info!(
            particles = config.particle_count,
            photos = config.photo_count,
            "particle cloud rebuilt"
        );
        self.particles = particles;
        self.sprites = sprites;
        self.config = config;
        Ok(())
    }

    // ── accessors ─────────────────────────────────────────────────────────

    /// Handle for the gesture pipeline to publish target scales into.
    pub fn target_handle(&self) -> Arc<ScaleCell> {
        Arc::clone(&self.target)
    }

    /// Flattened `x, y, z` particle positions in group-local space.
    pub fn particle_buffer(&self) -> Vec<f32> {
        let mut out = Vec::new();
        self.particles.fill_buffer(&mut out);
        out
    }

    pub fn fill_particle_buffer(&self, out: &mut Vec<f32>) {
        self.particles.fill_buffer(out);
    }

    pub fn particles(&self) -> &ParticleSet     { &self.particles }
    pub fn sprites(&self)   -> &[PhotoSprite]   { self.sprites.as_slice() }
    pub fn morph(&self)     -> MorphState       { self.morph }
    pub fn signal(&self)    -> AppSignal        { self.signal }
    pub fn shape(&self)     -> ShapeKind        { self.shape }
    pub fn theme(&self)     -> Rgb              { self.theme }
    pub fn config(&self)    -> &MorphConfig     { &self.config }
    /// Group rotation about the vertical axis, radians in [0, 2π).
    pub fn rotation(&self)  -> f32              { self.rotation }
    pub fn ticks(&self)     -> u64              { self.ticks }
}

fn sprite_bases<R: Rng + ?Sized>(shape: ShapeKind, config: &MorphConfig, rng: &mut R) -> Vec<Point3D> {
    let indices = scattered_indices(config.photo_count, config.particle_count);
    generate_at(shape, indices, config.particle_count as u64, rng)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
