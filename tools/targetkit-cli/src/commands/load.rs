//! Import a single target file.

use std::path::PathBuf;

use targetkit_common::config::AppConfig;
use targetkit_common::TargetkitError;
use targetkit_import_core::{
    import_target, FileOutcome, ImportSession, InvocationStatus, SceneScale,
};
use targetkit_mesh_model::MeshObject;

pub fn run(
    mesh_path: PathBuf,
    file: PathBuf,
    unit: Option<String>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let unit = super::resolve_unit(unit, config)?;
    let mut mesh = MeshObject::load(&mesh_path)
        .map_err(|e| anyhow::anyhow!("Failed to load mesh document: {e}"))?;

    let session = ImportSession::from_source(&SceneScale::new(unit));
    let report = import_target(&mut mesh, &session, &file);

    if report.status == InvocationStatus::Cancelled {
        return Err(TargetkitError::NotEligibleBase {
            name: mesh.name.clone(),
        }
        .into());
    }

    match &report.outcomes[0] {
        FileOutcome::Loaded { name } => {
            mesh.save(&mesh_path)?;
            println!("Target '{name}' loaded");
            println!("  Mesh: {} ({} vertices)", mesh.name, mesh.vertices.len());
            println!("  Shape keys: {}", mesh.shape_keys.len());
            Ok(())
        }
        FileOutcome::Failed { name, reason } => {
            anyhow::bail!("Failed to load target '{name}': {reason}")
        }
        FileOutcome::Skipped { .. } => unreachable!("single-file imports are never skipped"),
    }
}
