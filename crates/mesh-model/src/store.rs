//! The shape-key store contract.
//!
//! The import pipeline mutates shape keys through this trait rather than
//! a concrete mesh type, so the same parser/applicator/orchestrator code
//! can drive the bundled in-memory [`MeshObject`](crate::mesh::MeshObject)
//! or an adapter over a host application's own mesh store.

use crate::geometry::Vec3;
use crate::shape_key::BASIS_NAME;

/// Mutable access to a mesh's shape-key collection.
///
/// Shape keys are addressed by their position in the collection; removing
/// a key shifts the positions of the keys after it, so callers that hold
/// an index across a removal must re-resolve by name.
pub trait ShapeKeyMesh {
    /// Object name, used in diagnostics.
    fn object_name(&self) -> &str;

    /// Number of vertices in the base geometry. Shape keys always carry
    /// exactly this many points.
    fn vertex_count(&self) -> usize;

    /// Whether the mesh has any shape keys at all.
    fn has_shape_keys(&self) -> bool;

    /// Append a new shape key initialized as a copy of the base geometry,
    /// with weight 0.0. Returns its index.
    fn add_shape_key(&mut self, name: &str) -> usize;

    /// Look up a shape key by name.
    fn find_shape_key(&self, name: &str) -> Option<usize>;

    /// Remove the shape key at `index`.
    fn remove_shape_key(&mut self, index: usize);

    /// Mutable view of a shape key's vertex coordinates.
    fn shape_key_points_mut(&mut self, index: usize) -> &mut [Vec3];

    /// Set a shape key's influence weight.
    fn set_shape_key_weight(&mut self, index: usize, weight: f64);

    /// Select the active shape key.
    fn set_active_shape_key(&mut self, index: usize);

    /// Record the most recently requested target name on the mesh.
    fn set_requested_target(&mut self, name: &str);

    /// Whether this mesh may serve as an import base. Imports against an
    /// ineligible mesh are cancelled before any work.
    fn is_eligible_base(&self) -> bool;

    /// Create the basis key from the base geometry if no shape keys exist
    /// yet. Returns the basis index.
    fn ensure_basis(&mut self) -> usize {
        if !self.has_shape_keys() {
            return self.add_shape_key(BASIS_NAME);
        }
        self.find_shape_key(BASIS_NAME).unwrap_or(0)
    }
}
