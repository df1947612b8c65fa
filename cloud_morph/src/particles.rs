//! The main particle set: fixed-length base and current positions.

use cloud_shapes::Point3D;
use rand::Rng;

/// Half-width of the cube the particles start scattered in.
pub const INITIAL_SPREAD: f32 = 25.0;

/// Base and current positions for `len()` particles.
///
/// Both vectors always have the same length; it only changes by building a
/// new set.
#[derive(Debug, Clone)]
pub struct ParticleSet {
    base:    Vec<Point3D>,
    current: Vec<Point3D>,
}

impl ParticleSet {
    /// `base` becomes the shape; current positions start as uniform noise in
    /// a cube so the first shape condenses out of it.
    pub fn scattered<R: Rng + ?Sized>(base: Vec<Point3D>, rng: &mut R) -> Self {
        let current = (0..base.len())
            .map(|_| {
                Point3D::new(
                    rng.random_range(-INITIAL_SPREAD..INITIAL_SPREAD),
                    rng.random_range(-INITIAL_SPREAD..INITIAL_SPREAD),
                    rng.random_range(-INITIAL_SPREAD..INITIAL_SPREAD),
                )
            })
            .collect();
        ParticleSet { base, current }
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    pub fn base(&self) -> &[Point3D] {
        &self.base
    }

    pub fn current(&self) -> &[Point3D] {
        &self.current
    }

    /// Replace every base position at once.  Current positions are left
    /// untouched until the next [`step`](Self::step).
    ///
    /// # Panics
    /// If `base` has a different length from the set.
    pub fn rebase(&mut self, base: Vec<Point3D>) {
        assert_eq!(base.len(), self.base.len(), "rebase must keep the particle count");
        self.base = base;
    }

    /// One smoothing step toward `base · scale`.
    pub fn step(&mut self, scale: f32, rate: f32) {
        for (cur, base) in self.current.iter_mut().zip(&self.base) {
            cur.approach(base.scaled(scale), rate);
        }
    }

    /// Write `x, y, z` triples into `out`, replacing its contents.
    pub fn fill_buffer(&self, out: &mut Vec<f32>) {
        out.clear();
        out.reserve(self.current.len() * 3);
        for p in &self.current {
            out.extend_from_slice(&[p.x, p.y, p.z]);
        }
    }
}
