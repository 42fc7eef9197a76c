//! Vertex coordinate types.

use serde::{Deserialize, Serialize};

/// A 3D coordinate in mesh space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Componentwise addition, in place.
    pub fn add_assign(&mut self, other: Vec3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }

    /// Componentwise scaling.
    pub fn scaled(&self, factor: f64) -> Vec3 {
        Vec3 {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assign_accumulates() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v.add_assign(Vec3::new(0.5, -2.0, 0.0));
        assert_eq!(v, Vec3::new(1.5, 0.0, 3.0));
    }

    #[test]
    fn scaled_multiplies_every_component() {
        let v = Vec3::new(1.0, -2.0, 4.0).scaled(0.5);
        assert_eq!(v, Vec3::new(0.5, -1.0, 2.0));
    }
}
