//! Import a batch of target files.

use std::path::{Path, PathBuf};

use targetkit_common::config::AppConfig;
use targetkit_common::TargetkitError;
use targetkit_import_core::{
    import_targets, FileOutcome, ImportSession, InvocationStatus, SceneScale, SkipReason,
};
use targetkit_mesh_model::MeshObject;

pub fn run(
    mesh_path: PathBuf,
    dir: PathBuf,
    files: Vec<String>,
    unit: Option<String>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let unit = super::resolve_unit(unit, config)?;
    let mut mesh = MeshObject::load(&mesh_path)
        .map_err(|e| anyhow::anyhow!("Failed to load mesh document: {e}"))?;

    // Files with an unexpected extension are still processed (the caller
    // listed them explicitly), but worth flagging.
    let expected = &config.import.target_extension;
    for name in &files {
        let ext = Path::new(name).extension().and_then(|e| e.to_str());
        if ext != Some(expected.as_str()) {
            tracing::warn!(file = %name, expected = %expected, "unexpected file extension");
        }
    }

    let session = ImportSession::from_source(&SceneScale::new(unit));
    let report = import_targets(&mut mesh, &session, &dir, &files);

    if report.status == InvocationStatus::Cancelled {
        return Err(TargetkitError::NotEligibleBase {
            name: mesh.name.clone(),
        }
        .into());
    }

    for outcome in &report.outcomes {
        match outcome {
            FileOutcome::Loaded { name } => println!("  loaded   {name}"),
            FileOutcome::Skipped {
                name,
                reason: SkipReason::FileMissing,
            } => println!("  missing  {name}"),
            FileOutcome::Skipped {
                name,
                reason: SkipReason::NameCollision,
            } => println!("  exists   {name}"),
            FileOutcome::Failed { name, reason } => println!("  failed   {name}: {reason}"),
        }
    }

    if report.loaded > 0 {
        mesh.save(&mesh_path)?;
        println!("Successfully loaded {} target(s)", report.loaded);
        if let Some(last) = &report.last_loaded {
            println!("Active shape key: {last}");
        }
    } else {
        println!("No targets were loaded");
    }

    Ok(())
}
