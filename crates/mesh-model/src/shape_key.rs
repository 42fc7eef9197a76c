//! Shape key (morph target) data.

use serde::{Deserialize, Serialize};

use crate::geometry::Vec3;

/// Name of the reference (zero-displacement) shape key.
pub const BASIS_NAME: &str = "Basis";

/// A named alternate vertex-position set for a mesh.
///
/// Shape keys blend against the basis pose via an influence weight.
/// Freshly imported keys start at weight 0.0 so they do not deform the
/// mesh until the user raises the weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeKey {
    /// Shape key name (derived from the target file stem on import).
    pub name: String,

    /// Influence weight in `[0.0, 1.0]`.
    pub weight: f64,

    /// Per-vertex coordinates, same length and order as the base geometry.
    pub points: Vec<Vec3>,
}

impl ShapeKey {
    /// Create a shape key as a copy of the given base geometry.
    pub fn from_base(name: impl Into<String>, base: &[Vec3]) -> Self {
        Self {
            name: name.into(),
            weight: 0.0,
            points: base.to_vec(),
        }
    }

    /// Whether this is the basis key.
    pub fn is_basis(&self) -> bool {
        self.name == BASIS_NAME
    }
}
