//! Fixed perspective camera and depth fog for the software renderer.
//!
//! The camera sits at (0, 2, 25) looking down −z with a 75° vertical field
//! of view.  The cloud itself rotates about y; the camera never moves.

use cloud_shapes::Point3D;

pub const FOV_Y_DEG:   f32 = 75.0;
pub const EYE:         Point3D = Point3D::new(0.0, 2.0, 25.0);
/// Points closer than this to the eye plane are culled.
pub const NEAR:        f32 = 0.1;
/// Exponential-squared fog density.
pub const FOG_DENSITY: f32 = 0.02;

/// A world point mapped to screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x:     f32,
    pub y:     f32,
    /// Distance in front of the eye, along the view axis.
    pub depth: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct Camera {
    width:  usize,
    height: usize,
    focal:  f32,
}

impl Camera {
    pub fn new(width: usize, height: usize) -> Self {
        let half_fov = (FOV_Y_DEG * 0.5).to_radians();
        Camera {
            width,
            height,
            focal: height as f32 * 0.5 / half_fov.tan(),
        }
    }

    /// Pixels per world unit at depth 1.
    pub fn focal(&self) -> f32 { self.focal }

    pub fn project(&self, p: Point3D) -> Option<Projected> {
        let depth = EYE.z - p.z;
        if depth < NEAR {
            return None;
        }
        let k = self.focal / depth;
        Some(Projected {
            x: self.width  as f32 * 0.5 + (p.x - EYE.x) * k,
            y: self.height as f32 * 0.5 - (p.y - EYE.y) * k,
            depth,
        })
    }

    /// Screen size of a size-attenuated point (half the viewport height
    /// per world unit at depth 1).
    pub fn point_px(&self, size: f32, depth: f32) -> f32 {
        size * self.height as f32 * 0.5 / depth
    }

    /// Screen size of a world-space square facing the camera.
    pub fn sprite_px(&self, world: f32, depth: f32) -> f32 {
        world * self.focal / depth
    }
}

/// Fraction of a fragment's color that survives the fog at `depth`.
pub fn fog_visibility(depth: f32) -> f32 {
    let d = FOG_DENSITY * depth;
    (-d * d).exp().clamp(0.0, 1.0)
}
