//! Photo sprites hidden in the cloud and the threshold-gated reveal.
//!
//! While the scale stays at or below [`REVEAL_SCALE`] sprites sit among the
//! particles: faint, tinted with the theme, small.  Past the threshold they
//! drift further out than the particles and ease toward full opacity, white
//! (untinted) and large.  Hiding eases colour and size twice as fast as
//! revealing, so the retreat is quick and the reveal slow.

use cloud_shapes::Point3D;

use crate::color::Rgb;
use crate::signal::REVEAL_SCALE;

// ════════════════════════════════════════════════════════════════════════════
// Appearance targets and rates
// ════════════════════════════════════════════════════════════════════════════

/// Extra outward push applied to sprite targets while revealing.
pub const REVEAL_PUSH:        f32 = 1.5;

pub const REVEAL_OPACITY:     f32 = 1.0;
pub const REVEAL_SIZE:        f32 = 4.0;
pub const REVEAL_RATE:        f32 = 0.05;

pub const IDLE_OPACITY:       f32 = 0.15;
pub const IDLE_SIZE:          f32 = 1.5;
pub const IDLE_OPACITY_RATE:  f32 = 0.05;
pub const IDLE_RATE:          f32 = 0.1;

/// Sprites are built invisible and grow into their idle appearance.
pub const INITIAL_OPACITY:    f32 = 0.0;

// ════════════════════════════════════════════════════════════════════════════
// PhotoSprite
// ════════════════════════════════════════════════════════════════════════════

/// One photo sprite: where it lives in the shape and how it looks now.
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoSprite {
    pub base:          Point3D,
    pub position:      Point3D,
    /// In [0, 1].
    pub opacity:       f32,
    pub tint:          Rgb,
    pub display_scale: f32,
}

impl PhotoSprite {
    pub fn new(base: Point3D, theme: Rgb) -> Self {
        PhotoSprite {
            base,
            position:      Point3D::ORIGIN,
            opacity:       INITIAL_OPACITY,
            tint:          theme,
            display_scale: IDLE_SIZE,
        }
    }
}

/// True when sprites should be in their revealed appearance.
pub fn is_revealing(current_scale: f32) -> bool {
    current_scale > REVEAL_SCALE
}

/// Advance one sprite by one tick.
///
/// Position follows `base · scale` (pushed out by [`REVEAL_PUSH`] while
/// revealing) with the same first-order filter as the particles; appearance
/// eases toward the revealed or idle targets.
pub fn update_sprite(sprite: &mut PhotoSprite, current_scale: f32, theme: Rgb, transition_speed: f32) {
    let revealing = is_revealing(current_scale);
    let push = if revealing { REVEAL_PUSH } else { 1.0 };
    let target = sprite.base.scaled(current_scale * push);
    sprite.position.approach(target, transition_speed);

    if revealing {
        sprite.opacity       += (REVEAL_OPACITY - sprite.opacity) * REVEAL_RATE;
        sprite.tint.approach(Rgb::WHITE, REVEAL_RATE);
        sprite.display_scale += (REVEAL_SIZE - sprite.display_scale) * REVEAL_RATE;
    } else {
        sprite.opacity       += (IDLE_OPACITY - sprite.opacity) * IDLE_OPACITY_RATE;
        sprite.tint.approach(theme, IDLE_RATE);
        sprite.display_scale += (IDLE_SIZE - sprite.display_scale) * IDLE_RATE;
    }
}

// ════════════════════════════════════════════════════════════════════════════
// SpriteSet
// ════════════════════════════════════════════════════════════════════════════

/// All photo sprites, in a fixed order.
#[derive(Debug, Clone, Default)]
pub struct SpriteSet {
    sprites: Vec<PhotoSprite>,
}

impl SpriteSet {
    pub fn new(bases: Vec<Point3D>, theme: Rgb) -> Self {
        SpriteSet {
            sprites: bases.into_iter().map(|b| PhotoSprite::new(b, theme)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn as_slice(&self) -> &[PhotoSprite] {
        &self.sprites
    }

    /// Replace every base position; appearance and current position carry
    /// over.
    ///
    /// # Panics
    /// If `bases` has a different length from the set.
    pub fn rebase(&mut self, bases: Vec<Point3D>) {
        assert_eq!(bases.len(), self.sprites.len(), "rebase must keep the photo count");
        for (s, b) in self.sprites.iter_mut().zip(bases) {
            s.base = b;
        }
    }

    pub fn step(&mut self, current_scale: f32, theme: Rgb, transition_speed: f32) {
        for s in &mut self.sprites {
            update_sprite(s, current_scale, theme, transition_speed);
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    const THEME: Rgb = Rgb::new(0.0, 0.8, 1.0);

    fn sprite() -> PhotoSprite {
        PhotoSprite::new(Point3D::new(2.0, -1.0, 4.0), THEME)
    }

    #[test]
    fn threshold_is_strict() {
        assert!(!is_revealing(1.3));
        assert!(is_revealing(1.3001));
    }

    #[test]
    fn revealed_target_is_pushed_out() {
        let mut a = sprite();
        let mut b = sprite();
        for _ in 0..400 {
            update_sprite(&mut a, 1.2, THEME, 0.08);
            update_sprite(&mut b, 1.4, THEME, 0.08);
        }
        assert!(a.position.distance(a.base.scaled(1.2)) < 1e-3);
        assert!(b.position.distance(b.base.scaled(1.4 * 1.5)) < 1e-3);
    }

    #[test]
    fn reveal_steps_use_reveal_rate() {
        let mut s = sprite();
        update_sprite(&mut s, 2.0, THEME, 0.08);
        assert!((s.opacity - 0.05).abs() < 1e-6);
        assert!((s.display_scale - (1.5 + 2.5 * 0.05)).abs() < 1e-6);
        assert!((s.tint.r - 0.05).abs() < 1e-6);
    }

    #[test]
    fn idle_steps_use_idle_rates() {
        let mut s = sprite();
        s.display_scale = 4.0;
        s.tint = Rgb::WHITE;
        s.opacity = 1.0;
        update_sprite(&mut s, 1.0, THEME, 0.08);
        assert!((s.opacity - (1.0 - 0.85 * 0.05)).abs() < 1e-6);
        assert!((s.display_scale - (4.0 - 2.5 * 0.1)).abs() < 1e-6);
        assert!((s.tint.r - 0.9).abs() < 1e-6);
    }

    #[test]
    fn hiding_settles_faster_than_revealing() {
        let mut revealing = sprite();
        let mut hiding = sprite();
        hiding.display_scale = REVEAL_SIZE;
        for _ in 0..20 {
            update_sprite(&mut revealing, 2.0, THEME, 0.08);
            update_sprite(&mut hiding, 1.0, THEME, 0.08);
        }
        let reveal_progress = (revealing.display_scale - IDLE_SIZE) / (REVEAL_SIZE - IDLE_SIZE);
        let hide_progress = (REVEAL_SIZE - hiding.display_scale) / (REVEAL_SIZE - IDLE_SIZE);
        assert!(hide_progress > reveal_progress);
    }

    #[test]
    fn idle_sprites_settle_faint_and_tinted() {
        let mut s = sprite();
        s.tint = Rgb::WHITE;
        for _ in 0..1_000 {
            update_sprite(&mut s, 1.0, THEME, 0.08);
        }
        assert!((s.opacity - IDLE_OPACITY).abs() < 1e-4);
        assert!((s.tint.g - THEME.g).abs() < 1e-4);
        assert!((s.display_scale - IDLE_SIZE).abs() < 1e-4);
    }

    #[test]
    fn set_rebase_keeps_appearance() {
        let mut set = SpriteSet::new(vec![Point3D::ORIGIN; 3], THEME);
        set.step(2.0, THEME, 0.08);
        let before: Vec<f32> = set.as_slice().iter().map(|s| s.opacity).collect();
        set.rebase(vec![Point3D::new(1.0, 1.0, 1.0); 3]);
        let after: Vec<f32> = set.as_slice().iter().map(|s| s.opacity).collect();
        assert_eq!(before, after);
        assert!(set.as_slice().iter().all(|s| s.base == Point3D::new(1.0, 1.0, 1.0)));
    }
}
