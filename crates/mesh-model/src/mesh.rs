//! In-memory mesh documents with JSON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};
use targetkit_common::{TargetkitError, TargetkitResult};

use crate::geometry::Vec3;
use crate::shape_key::ShapeKey;
use crate::store::ShapeKeyMesh;

/// Classification of a mesh object within a scene.
///
/// Only base-type meshes accept target imports; proxies, clothes, and
/// other fitted assets do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    /// The primary editable base mesh.
    Basemesh,
    /// A user-defined custom base.
    CustomBase,
    /// Anything else (proxy, clothes, helper geometry, ...).
    Other(String),
}

impl ObjectType {
    /// Whether targets may be imported onto this object.
    pub fn accepts_targets(&self) -> bool {
        matches!(self, ObjectType::Basemesh | ObjectType::CustomBase)
    }
}

/// A mesh object with its shape-key collection.
///
/// This is the reference [`ShapeKeyMesh`] implementation, serializable as
/// a standalone JSON document so the CLI can operate without a host
/// application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshObject {
    /// Object name.
    pub name: String,

    /// Object classification; gates import eligibility.
    pub object_type: ObjectType,

    /// Base geometry, fixed length for the lifetime of the object.
    pub vertices: Vec<Vec3>,

    /// Shape keys, in creation order. Empty until the first import
    /// creates the basis.
    #[serde(default)]
    pub shape_keys: Vec<ShapeKey>,

    /// Index of the active shape key, if any.
    #[serde(default)]
    pub active_shape_key: Option<usize>,

    /// Most recently requested target name.
    #[serde(default)]
    pub requested_target: Option<String>,
}

impl MeshObject {
    /// Create a mesh with the given base geometry and no shape keys.
    pub fn new(name: impl Into<String>, object_type: ObjectType, vertices: Vec<Vec3>) -> Self {
        Self {
            name: name.into(),
            object_type,
            vertices,
            shape_keys: Vec::new(),
            active_shape_key: None,
            requested_target: None,
        }
    }

    /// Load a mesh document from a JSON file.
    pub fn load(path: &Path) -> TargetkitResult<Self> {
        if !path.exists() {
            return Err(TargetkitError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let mesh: MeshObject = serde_json::from_str(&content)?;
        mesh.validate()?;
        Ok(mesh)
    }

    /// Save the mesh document as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> TargetkitResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Structural invariants: every shape key carries exactly one point
    /// per base vertex, and the active index points at an existing key.
    pub fn validate(&self) -> TargetkitResult<()> {
        for key in &self.shape_keys {
            if key.points.len() != self.vertices.len() {
                return Err(TargetkitError::mesh(format!(
                    "shape key '{}' has {} points but the mesh has {} vertices",
                    key.name,
                    key.points.len(),
                    self.vertices.len()
                )));
            }
        }
        if let Some(active) = self.active_shape_key {
            if active >= self.shape_keys.len() {
                return Err(TargetkitError::mesh(format!(
                    "active shape key index {} out of range ({} keys)",
                    active,
                    self.shape_keys.len()
                )));
            }
        }
        Ok(())
    }
}

impl ShapeKeyMesh for MeshObject {
    fn object_name(&self) -> &str {
        &self.name
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn has_shape_keys(&self) -> bool {
        !self.shape_keys.is_empty()
    }

    fn add_shape_key(&mut self, name: &str) -> usize {
        self.shape_keys.push(ShapeKey::from_base(name, &self.vertices));
        self.shape_keys.len() - 1
    }

    fn find_shape_key(&self, name: &str) -> Option<usize> {
        self.shape_keys.iter().position(|k| k.name == name)
    }

    fn remove_shape_key(&mut self, index: usize) {
        if index >= self.shape_keys.len() {
            return;
        }
        self.shape_keys.remove(index);

        // Keep the active selection pointing at the same key, or clear it
        // if the removed key was active.
        self.active_shape_key = match self.active_shape_key {
            Some(active) if active == index => None,
            Some(active) if active > index => Some(active - 1),
            other => other,
        };
    }

    fn shape_key_points_mut(&mut self, index: usize) -> &mut [Vec3] {
        &mut self.shape_keys[index].points
    }

    fn set_shape_key_weight(&mut self, index: usize, weight: f64) {
        if let Some(key) = self.shape_keys.get_mut(index) {
            key.weight = weight;
        }
    }

    fn set_active_shape_key(&mut self, index: usize) {
        if index < self.shape_keys.len() {
            self.active_shape_key = Some(index);
        }
    }

    fn set_requested_target(&mut self, name: &str) {
        self.requested_target = Some(name.to_string());
    }

    fn is_eligible_base(&self) -> bool {
        self.object_type.accepts_targets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape_key::BASIS_NAME;

    fn quad() -> MeshObject {
        MeshObject::new(
            "quad",
            ObjectType::Basemesh,
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
        )
    }

    #[test]
    fn add_shape_key_copies_base_geometry() {
        let mut mesh = quad();
        let idx = mesh.add_shape_key("smile");

        assert_eq!(idx, 0);
        assert_eq!(mesh.shape_keys[0].points, mesh.vertices);
        assert_eq!(mesh.shape_keys[0].weight, 0.0);
    }

    #[test]
    fn ensure_basis_is_idempotent() {
        let mut mesh = quad();
        let first = mesh.ensure_basis();
        mesh.add_shape_key("smile");
        let second = mesh.ensure_basis();

        assert_eq!(first, second);
        assert_eq!(mesh.shape_keys.len(), 2);
        assert_eq!(mesh.shape_keys[0].name, BASIS_NAME);
    }

    #[test]
    fn remove_shape_key_adjusts_active_selection() {
        let mut mesh = quad();
        mesh.ensure_basis();
        let smile = mesh.add_shape_key("smile");
        let frown = mesh.add_shape_key("frown");

        mesh.set_active_shape_key(frown);
        mesh.remove_shape_key(smile);
        assert_eq!(mesh.active_shape_key, Some(frown - 1));

        let frown = mesh.find_shape_key("frown").unwrap();
        mesh.remove_shape_key(frown);
        assert_eq!(mesh.active_shape_key, None);
    }

    #[test]
    fn only_base_types_accept_targets() {
        assert!(ObjectType::Basemesh.accepts_targets());
        assert!(ObjectType::CustomBase.accepts_targets());
        assert!(!ObjectType::Other("Proxymeshes".to_string()).accepts_targets());
    }

    #[test]
    fn validate_rejects_mismatched_key_length() {
        let mut mesh = quad();
        mesh.ensure_basis();
        mesh.shape_keys[0].points.pop();

        assert!(mesh.validate().is_err());
    }

    #[test]
    fn json_round_trip_preserves_document() {
        let mut mesh = quad();
        mesh.ensure_basis();
        mesh.add_shape_key("smile");
        mesh.set_active_shape_key(1);
        mesh.set_requested_target("smile");

        let json = serde_json::to_string(&mesh).unwrap();
        let back: MeshObject = serde_json::from_str(&json).unwrap();

        assert_eq!(back.name, mesh.name);
        assert_eq!(back.shape_keys, mesh.shape_keys);
        assert_eq!(back.active_shape_key, Some(1));
        assert_eq!(back.requested_target.as_deref(), Some("smile"));
    }
}
