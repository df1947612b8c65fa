//! # cloud_shapes
//!
//! Procedural point distributions for six parametric particle-cloud shapes.
//!
//! Every shape is sampled one point at a time from `(kind, index, total)`.
//! Five of the six are stochastic; only [`ShapeKind::Helix`] depends on the
//! index, and even it adds a little positional jitter.  Randomness always
//! comes from a caller-supplied [`rand::Rng`], so seeded generators give
//! reproducible clouds.
//!
//! | Shape | Distribution |
//! |---|---|
//! | Heart | parametric heart curve, cube-root volume fill |
//! | Flower | three-petal rose curve, linear fill (petal-tip weighted) |
//! | Saturn | solid planet (40%) + tilted flat ring (60%) |
//! | Buddha | head / body / base mixture (15 / 40 / 45) |
//! | Firework | solid ball, 10% of points pushed out as stray sparks |
//! | Helix | deterministic spiral ramp with small x/z jitter |
//!
//! ## Quick start
//!
//! ```rust
//! use cloud_shapes::{generate, ShapeKind};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let cloud = generate(ShapeKind::Saturn, 1_000, &mut rng);
//! assert_eq!(cloud.len(), 1_000);
//! ```

pub mod kind;
pub mod point;
pub mod sampler;

pub use kind::{ShapeKind, UnknownShape};
pub use point::Point3D;
pub use sampler::{generate, generate_at, sample, sample_with, scattered_indices};
