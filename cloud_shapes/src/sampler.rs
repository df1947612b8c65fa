//! Per-shape point samplers.
//!
//! Each call draws two shared angles first, `theta` uniform in [0, 2π) and
//! `phi = acos(2u - 1)` (uniform on the sphere), then whatever extra uniforms
//! the shape needs.  The sampler holds no state of its own; all randomness
//! flows through the `Rng` handed in, so concurrent callers with their own
//! generators never contend.
//!
//! Solid regions use cube-root radius compensation and flat discs use
//! square-root compensation so density stays uniform in volume or area.

use std::f32::consts::TAU;

use rand::Rng;

use crate::{Point3D, ShapeKind};

// ════════════════════════════════════════════════════════════════════════════
// Shape constants
// ════════════════════════════════════════════════════════════════════════════

const HEART_DEPTH:        f32 = 8.0;
const HEART_SCALE:        f32 = 0.35;

const FLOWER_PETALS:      f32 = 3.0;
const FLOWER_DEPTH:       f32 = 5.0;
const FLOWER_RIPPLE:      f32 = 2.0;
const FLOWER_SCALE:       f32 = 0.6;

const SATURN_PLANET_SHARE: f32 = 0.4;
const SATURN_PLANET_R:    f32 = 6.0;
const SATURN_RING_INNER:  f32 = 8.0;
const SATURN_RING_OUTER:  f32 = 16.0;
const SATURN_RING_HALF_T: f32 = 0.25;
const SATURN_TILT:        f32 = 0.4;

const BUDDHA_HEAD_SHARE:  f32 = 0.15;
const BUDDHA_BODY_SHARE:  f32 = 0.40;
const BUDDHA_HEAD_R:      f32 = 2.5;
const BUDDHA_HEAD_Y:      f32 = 6.0;
const BUDDHA_BODY_R:      f32 = 4.0;
const BUDDHA_BODY_STRETCH: f32 = 1.2;
const BUDDHA_BODY_SQUASH: f32 = 0.8;
const BUDDHA_BASE_R:      f32 = 5.5;
const BUDDHA_BASE_SQUASH: f32 = 0.7;

const FIREWORK_R:         f32 = 15.0;
const FIREWORK_SPARK_P:   f32 = 0.1;
const FIREWORK_SPARK_K:   f32 = 1.8;

const HELIX_STEP:         f32 = 0.1;
const HELIX_R:            f32 = 5.0;
const HELIX_HEIGHT:       f32 = 20.0;
const HELIX_JITTER:       f32 = 1.0;

// ════════════════════════════════════════════════════════════════════════════
// Public entry points
// ════════════════════════════════════════════════════════════════════════════

/// Sample one point of `kind` using the thread-local generator.
///
/// Two calls with identical arguments give different points for every
/// stochastic shape.  Use [`sample_with`] and a seeded generator when
/// reproducibility matters.
pub fn sample(kind: ShapeKind, index: u64, total: u64) -> Point3D {
    sample_with(&mut rand::rng(), kind, index, total)
}

/// Sample one point of `kind`, drawing randomness from `rng`.
///
/// `index` and `total` only matter for [`ShapeKind::Helix`]; `total == 0`
/// is treated as 1.
pub fn sample_with<R: Rng + ?Sized>(rng: &mut R, kind: ShapeKind, index: u64, total: u64) -> Point3D {
    let theta = rng.random::<f32>() * TAU;
    let phi   = (2.0 * rng.random::<f32>() - 1.0).acos();

    match kind {
        ShapeKind::Heart    => heart(rng, theta),
        ShapeKind::Flower   => flower(rng, theta),
        ShapeKind::Saturn   => saturn(rng, theta, phi),
        ShapeKind::Buddha   => buddha(rng, theta, phi),
        ShapeKind::Firework => firework(rng, theta, phi),
        ShapeKind::Helix    => helix(rng, index, total),
    }
}

/// Sample `count` points for indices `0..count`.
pub fn generate<R: Rng + ?Sized>(kind: ShapeKind, count: usize, rng: &mut R) -> Vec<Point3D> {
    let total = count as u64;
    (0..total).map(|i| sample_with(rng, kind, i, total)).collect()
}

/// Sample one point per entry of `indices`, all against the same `total`.
pub fn generate_at<R, I>(kind: ShapeKind, indices: I, total: u64, rng: &mut R) -> Vec<Point3D>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = u64>,
{
    indices.into_iter().map(|i| sample_with(rng, kind, i, total)).collect()
}

/// Sample indices spread evenly across `0..particle_count`, one per photo:
/// `i * particle_count / photo_count`.
///
/// Sprites sampled at these indices do not bunch up with the first few
/// particles of index-dependent shapes.  Empty when `photo_count` is 0.
pub fn scattered_indices(photo_count: usize, particle_count: usize) -> Vec<u64> {
    if photo_count == 0 {
        return Vec::new();
    }
    let (photos, particles) = (photo_count as u64, particle_count as u64);
    (0..photos).map(|i| i * particles / photos).collect()
}

// ════════════════════════════════════════════════════════════════════════════
// Fill helpers
// ════════════════════════════════════════════════════════════════════════════

/// Radius factor in [0, 1) giving uniform density inside a ball.
fn volume_fill<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random::<f32>().cbrt()
}

/// Radius factor in [0, 1) giving uniform density inside a disc.
fn area_fill<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random::<f32>().sqrt()
}

/// Uniform value in [-half, half).
fn jitter<R: Rng + ?Sized>(rng: &mut R, half: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * 2.0 * half
}

fn spherical(r: f32, theta: f32, phi: f32) -> Point3D {
    Point3D::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

fn solid_ball<R: Rng + ?Sized>(rng: &mut R, radius: f32, theta: f32, phi: f32) -> Point3D {
    spherical(radius * volume_fill(rng), theta, phi)
}

// ════════════════════════════════════════════════════════════════════════════
// Shapes
// ════════════════════════════════════════════════════════════════════════════

fn heart<R: Rng + ?Sized>(rng: &mut R, t: f32) -> Point3D {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    let z = jitter(rng, HEART_DEPTH / 2.0);
    Point3D::new(x, y, z).scaled(volume_fill(rng) * HEART_SCALE)
}

fn flower<R: Rng + ?Sized>(rng: &mut R, theta: f32) -> Point3D {
    let petal  = (FLOWER_PETALS * theta).cos();
    let r_edge = 10.0 * petal + 5.0;
    // Linear, not cube-root: density deliberately favours the petal tips.
    let r      = r_edge * rng.random::<f32>();

    let x = r * theta.cos();
    let y = r * theta.sin();
    let z = jitter(rng, FLOWER_DEPTH / 2.0) * (1.0 - r / 15.0) + petal * FLOWER_RIPPLE;
    Point3D::new(x, y, z).scaled(FLOWER_SCALE)
}

fn saturn<R: Rng + ?Sized>(rng: &mut R, theta: f32, phi: f32) -> Point3D {
    if rng.random::<f32>() < SATURN_PLANET_SHARE {
        return solid_ball(rng, SATURN_PLANET_R, theta, phi);
    }
    let (r0, r1) = (SATURN_RING_INNER, SATURN_RING_OUTER);
    let r = (rng.random::<f32>() * (r1 * r1 - r0 * r0) + r0 * r0).sqrt();
    let y = jitter(rng, SATURN_RING_HALF_T);
    Point3D::new(r * theta.cos(), y, r * theta.sin()).rotated_x(SATURN_TILT)
}

fn buddha<R: Rng + ?Sized>(rng: &mut R, theta: f32, phi: f32) -> Point3D {
    let dice = rng.random::<f32>();
    if dice < BUDDHA_HEAD_SHARE {
        let p = solid_ball(rng, BUDDHA_HEAD_R, theta, phi);
        Point3D::new(p.x, p.y + BUDDHA_HEAD_Y, p.z)
    } else if dice < BUDDHA_HEAD_SHARE + BUDDHA_BODY_SHARE {
        let p = solid_ball(rng, BUDDHA_BODY_R, theta, phi);
        Point3D::new(p.x, p.y * BUDDHA_BODY_STRETCH, p.z * BUDDHA_BODY_SQUASH)
    } else {
        let r = BUDDHA_BASE_R * area_fill(rng);
        // Seat slab sits in y ∈ [-5, -3).
        let y = (rng.random::<f32>() - 1.0) * 2.0 - 3.0;
        Point3D::new(r * theta.cos(), y, r * theta.sin() * BUDDHA_BASE_SQUASH)
    }
}

fn firework<R: Rng + ?Sized>(rng: &mut R, theta: f32, phi: f32) -> Point3D {
    let p = solid_ball(rng, FIREWORK_R, theta, phi);
    if rng.random::<f32>() < FIREWORK_SPARK_P {
        p.scaled(FIREWORK_SPARK_K)
    } else {
        p
    }
}

fn helix<R: Rng + ?Sized>(rng: &mut R, index: u64, total: u64) -> Point3D {
    let t = index as f32 * HELIX_STEP;
    let y = (index as f64 / total.max(1) as f64) as f32 * HELIX_HEIGHT - HELIX_HEIGHT / 2.0;
    let x = HELIX_R * t.cos() + jitter(rng, HELIX_JITTER / 2.0);
    let z = HELIX_R * t.sin() + jitter(rng, HELIX_JITTER / 2.0);
    Point3D::new(x, y, z)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const N: usize = 100_000;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// Every bin of `values` (all in [0, 1]) holds within `tol` (relative)
    /// of its fair share.
    fn assert_flat(values: &[f32], bins: usize, tol: f32, what: &str) {
        let mut counts = vec![0usize; bins];
        for &v in values {
            let b = ((v * bins as f32) as usize).min(bins - 1);
            counts[b] += 1;
        }
        let expected = values.len() as f32 / bins as f32;
        for (i, &c) in counts.iter().enumerate() {
            let dev = (c as f32 - expected).abs() / expected;
            assert!(
                dev < tol,
                "{what}: bin {i} has {c}, expected ≈{expected:.0} (counts {counts:?})"
            );
        }
    }

    #[test]
    fn heart_matches_formula_draw_for_draw() {
        let mut a = rng(11);
        let mut b = rng(11);
        for _ in 0..50 {
            let p = sample_with(&mut a, ShapeKind::Heart, 0, 1);

            let t: f32 = b.random::<f32>() * TAU;
            let _phi: f32 = b.random();
            let z = (b.random::<f32>() - 0.5) * 8.0;
            let s = b.random::<f32>().cbrt() * 0.35;
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();

            assert!((p.x - x * s).abs() < 1e-4);
            assert!((p.y - y * s).abs() < 1e-4);
            assert!((p.z - z * s).abs() < 1e-4);
        }
    }

    #[test]
    fn heart_fits_inside_scaled_outline() {
        let mut r = rng(2);
        for p in generate(ShapeKind::Heart, 5_000, &mut r) {
            assert!(p.x.abs() <= 16.0 * 0.35 + 1e-4);
            assert!(p.z.abs() <= 4.0 * 0.35 + 1e-4);
        }
    }

    #[test]
    fn volume_fill_is_flat_in_cubed_radius() {
        let mut r = rng(3);
        let cubed: Vec<f32> = (0..N).map(|_| volume_fill(&mut r).powi(3)).collect();
        assert_flat(&cubed, 10, 0.1, "volume_fill");
    }

    #[test]
    fn firework_core_density_is_uniform() {
        let mut r = rng(4);
        let cubed: Vec<f32> = generate(ShapeKind::Firework, N, &mut r)
            .into_iter()
            .map(|p| p.length() / FIREWORK_R)
            .filter(|&n| n <= 1.0)
            .map(|n| n.powi(3))
            .collect();
        assert_flat(&cubed, 10, 0.1, "firework");
    }

    #[test]
    fn firework_has_stray_sparks() {
        let mut r = rng(5);
        let pts = generate(ShapeKind::Firework, N, &mut r);
        let outside = pts.iter().filter(|p| p.length() > FIREWORK_R).count() as f32 / N as f32;
        // 10% boosted, of which (1 - 1/1.8³) leave the ball: ≈ 8.3%.
        assert!((outside - 0.083).abs() < 0.01, "outside fraction {outside}");
        assert!(pts.iter().all(|p| p.length() <= FIREWORK_R * FIREWORK_SPARK_K + 1e-3));
    }

    #[test]
    fn saturn_planet_density_is_uniform() {
        let mut r = rng(6);
        let cubed: Vec<f32> = generate(ShapeKind::Saturn, N, &mut r)
            .into_iter()
            .map(|p| p.length())
            .filter(|&d| d < 7.0)
            .map(|d| (d / SATURN_PLANET_R).min(1.0).powi(3))
            .collect();
        assert_flat(&cubed, 10, 0.1, "saturn planet");
    }

    #[test]
    fn saturn_split_is_forty_sixty() {
        let mut r = rng(7);
        let pts = generate(ShapeKind::Saturn, N, &mut r);
        let planet = pts.iter().filter(|p| p.length() <= SATURN_PLANET_R + 1e-3).count() as f32;
        let share = planet / N as f32;
        assert!((share - 0.4).abs() < 0.01, "planet share {share}");
    }

    #[test]
    fn saturn_ring_lies_in_tilted_plane() {
        let mut r = rng(8);
        for p in generate(ShapeKind::Saturn, 20_000, &mut r) {
            if p.length() < 7.0 { continue; }
            let flat = p.rotated_x(-SATURN_TILT);
            assert!(flat.y.abs() <= SATURN_RING_HALF_T + 1e-4);
            let radial = (flat.x * flat.x + flat.z * flat.z).sqrt();
            assert!(radial >= SATURN_RING_INNER - 1e-3 && radial <= SATURN_RING_OUTER + 1e-3);
        }
    }

    #[test]
    fn buddha_head_density_is_uniform() {
        // Body points stay at least 1.2 below the head centre, so a slightly
        // smaller probe ball around it sees head points only.
        let probe = 1.15;
        let centre = Point3D::new(0.0, BUDDHA_HEAD_Y, 0.0);
        let mut r = rng(9);
        let cubed: Vec<f32> = generate(ShapeKind::Buddha, N, &mut r)
            .into_iter()
            .map(|p| p.distance(centre))
            .filter(|&d| d < probe)
            .map(|d| (d / probe).powi(3))
            .collect();
        assert!(cubed.len() > 1_000);
        assert_flat(&cubed, 5, 0.3, "buddha head");
    }

    #[test]
    fn helix_is_deterministic_up_to_jitter() {
        let mut a = rng(12);
        let mut b = rng(99);
        for i in [0u64, 1, 17, 500, 999] {
            let p = sample_with(&mut a, ShapeKind::Helix, i, 1_000);
            let q = sample_with(&mut b, ShapeKind::Helix, i, 1_000);
            assert_eq!(p.y, q.y);
            let t = i as f32 * 0.1;
            for s in [p, q] {
                assert!((s.x - 5.0 * t.cos()).abs() <= 0.5);
                assert!((s.z - 5.0 * t.sin()).abs() <= 0.5);
            }
            assert!((p.y - ((i as f32 / 1_000.0) * 20.0 - 10.0)).abs() < 1e-4);
        }
    }

    #[test]
    fn helix_tolerates_zero_total() {
        let p = sample(ShapeKind::Helix, 3, 0);
        assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
    }

    #[test]
    fn stochastic_shapes_differ_between_calls() {
        let mut r = rng(13);
        for kind in ShapeKind::all().into_iter().filter(|k| k.is_stochastic()) {
            let p = sample_with(&mut r, kind, 5, 100);
            let q = sample_with(&mut r, kind, 5, 100);
            assert_ne!(p, q, "{kind} repeated a point");
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        for kind in ShapeKind::all() {
            let a = generate(kind, 64, &mut rng(21));
            let b = generate(kind, 64, &mut rng(21));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn every_shape_yields_finite_points() {
        let mut r = rng(14);
        for kind in ShapeKind::all() {
            assert!(generate(kind, 2_000, &mut r)
                .iter()
                .all(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite()));
        }
    }

    #[test]
    fn scattered_indices_spread_over_range() {
        assert_eq!(scattered_indices(4, 20), vec![0, 5, 10, 15]);
        assert_eq!(scattered_indices(3, 10), vec![0, 3, 6]);
        assert!(scattered_indices(0, 10).is_empty());
        assert_eq!(scattered_indices(5, 5), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn generate_at_uses_given_indices() {
        let idx = scattered_indices(10, 1_000);
        let pts = generate_at(ShapeKind::Helix, idx.iter().copied(), 1_000, &mut rng(15));
        assert_eq!(pts.len(), 10);
        for (p, i) in pts.iter().zip(idx) {
            assert!((p.y - ((i as f32 / 1_000.0) * 20.0 - 10.0)).abs() < 1e-4);
        }
    }
}
