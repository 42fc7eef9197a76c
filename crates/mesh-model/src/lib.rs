//! TargetKit Mesh Model
//!
//! Defines the core data contracts for TargetKit meshes:
//! - **Geometry:** Vertex coordinates in mesh space
//! - **Shape keys:** Named alternate vertex-position sets with blend weights
//! - **Mesh objects:** Top-level mesh documents with JSON persistence
//! - **Store contract:** The [`ShapeKeyMesh`] trait the import pipeline
//!   operates against, decoupled from any concrete host application
//!
//! Coordinates are in the mesh's native unit; unit conversion is the
//! importer's concern, not the model's.

pub mod geometry;
pub mod mesh;
pub mod shape_key;
pub mod store;

pub use geometry::*;
pub use mesh::*;
pub use shape_key::*;
pub use store::*;
