//! Plain 3-D point with the handful of operations the morph engine needs.

use serde::{Deserialize, Serialize};

/// A point in cloud space.  Carries no identity beyond its coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3D {
    pub const ORIGIN: Point3D = Point3D { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Point3D { x, y, z }
    }

    /// Uniform scale about the origin.
    pub fn scaled(self, s: f32) -> Self {
        Point3D::new(self.x * s, self.y * s, self.z * s)
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance(self, other: Point3D) -> f32 {
        Point3D::new(self.x - other.x, self.y - other.y, self.z - other.z).length()
    }

    /// Move a fraction `rate` of the way toward `target`, independently per
    /// axis.  Repeated calls approach `target` geometrically without
    /// overshoot for `rate` in (0, 1).
    pub fn approach(&mut self, target: Point3D, rate: f32) {
        self.x += (target.x - self.x) * rate;
        self.y += (target.y - self.y) * rate;
        self.z += (target.z - self.z) * rate;
    }

    /// Rotate the (y, z) plane by `angle` radians about the x axis.
    pub fn rotated_x(self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Point3D::new(self.x, self.y * c - self.z * s, self.y * s + self.z * c)
    }

    /// Rotate the (z, x) plane by `angle` radians about the y axis
    /// (right-handed, y up).
    pub fn rotated_y(self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Point3D::new(self.x * c + self.z * s, self.y, -self.x * s + self.z * c)
    }
}
