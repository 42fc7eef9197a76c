//! Displacement application.
//!
//! Target files use a coordinate system where the third column is the
//! mesh's Z axis and the fourth is the mesh's Y axis, negated. The remap
//! here is fixed; changing it breaks compatibility with every published
//! target file.

use targetkit_mesh_model::Vec3;

use crate::parser::TargetRecord;

/// Mesh-space displacement for a record at the given scale factor.
///
/// `out.x = dx * scale`, `out.y = -dz * scale`, `out.z = dy * scale`.
pub fn displacement(record: &TargetRecord, scale: f64) -> Vec3 {
    Vec3::new(record.dx, -record.dz, record.dy).scaled(scale)
}

/// Accumulate one record onto a shape key's vertex buffer.
///
/// Offsets add to the existing coordinate rather than replacing it, so
/// stacked targets and re-imports compose. Records addressing vertices
/// beyond the buffer are ignored: shared target files may reference
/// helper vertices that are absent when only the body mesh is loaded.
pub fn apply_record(points: &mut [Vec3], record: &TargetRecord, scale: f64) {
    if record.index >= points.len() {
        return;
    }
    points[record.index].add_assign(displacement(record, scale));
}
