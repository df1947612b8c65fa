//! The closed set of shapes a cloud can morph between.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shape name that is not one of the six known kinds.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown shape \"{0}\" (expected heart, flower, saturn, buddha, firework or helix)")]
pub struct UnknownShape(pub String);

/// One of the six point distributions.
///
/// Dispatch over this enum is always exhaustive: adding a shape is a
/// compile-time checked change, never a silent fallthrough to the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    Heart,
    Flower,
    Saturn,
    Buddha,
    Firework,
    Helix,
}

impl ShapeKind {
    /// All shapes, in menu order.
    pub fn all() -> [ShapeKind; 6] {
        [
            ShapeKind::Heart,
            ShapeKind::Flower,
            ShapeKind::Saturn,
            ShapeKind::Buddha,
            ShapeKind::Firework,
            ShapeKind::Helix,
        ]
    }

    /// Lower-case identifier used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Heart    => "heart",
            ShapeKind::Flower   => "flower",
            ShapeKind::Saturn   => "saturn",
            ShapeKind::Buddha   => "buddha",
            ShapeKind::Firework => "firework",
            ShapeKind::Helix    => "helix",
        }
    }

    /// Human-facing label shown in the viewer.
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Heart    => "Heart",
            ShapeKind::Flower   => "Rose",
            ShapeKind::Saturn   => "Saturn",
            ShapeKind::Buddha   => "Zen",
            ShapeKind::Firework => "Burst",
            ShapeKind::Helix    => "Helix",
        }
    }

    /// True for shapes whose points do not depend on the sample index.
    pub fn is_stochastic(self) -> bool {
        !matches!(self, ShapeKind::Helix)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = UnknownShape;

    /// Accepts the identifier or the display label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ShapeKind::all()
            .into_iter()
            .find(|k| {
                k.name().eq_ignore_ascii_case(wanted) || k.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownShape(wanted.to_string()))
    }
}
