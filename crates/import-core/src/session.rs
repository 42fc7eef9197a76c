//! Import orchestration.
//!
//! Drives the parser and applicator over one or many target files against
//! a single mesh. Everything runs synchronously within one invocation;
//! per-file failures in a batch never abort the batch, and a file that
//! fails mid-parse has its freshly created shape key rolled back so no
//! half-populated key survives.

use std::path::Path;

use targetkit_common::TargetkitResult;
use targetkit_mesh_model::ShapeKeyMesh;

use crate::apply::apply_record;
use crate::parser::TargetReader;
use crate::scale::ScaleFactorSource;

/// Per-invocation context. The scale factor is sampled once from its
/// source; every file in the invocation uses the same value.
#[derive(Debug, Clone, Copy)]
pub struct ImportSession {
    pub scale_factor: f64,
}

impl ImportSession {
    pub fn new(scale_factor: f64) -> Self {
        Self { scale_factor }
    }

    /// Build a session by sampling a scale-factor source.
    pub fn from_source(source: &impl ScaleFactorSource) -> Self {
        Self {
            scale_factor: source.scale_factor(),
        }
    }
}

/// Why a file was skipped without an import attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The file does not exist on disk.
    FileMissing,
    /// A shape key with the derived name already exists; existing keys
    /// are never overwritten.
    NameCollision,
}

/// Outcome of one file within an invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Loaded { name: String },
    Skipped { name: String, reason: SkipReason },
    Failed { name: String, reason: String },
}

impl FileOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, FileOutcome::Loaded { .. })
    }
}

/// Whether the invocation ran at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationStatus {
    /// The invocation ran to completion (individual files may still have
    /// failed or been skipped).
    Finished,
    /// The precondition check rejected the mesh; nothing was touched.
    Cancelled,
}

/// Summary of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    pub outcomes: Vec<FileOutcome>,
    /// Number of successfully loaded targets.
    pub loaded: usize,
    /// Name of the last target loaded successfully, in processing order.
    pub last_loaded: Option<String>,
    pub status: InvocationStatus,
}

impl ImportReport {
    fn cancelled() -> Self {
        Self {
            outcomes: Vec::new(),
            loaded: 0,
            last_loaded: None,
            status: InvocationStatus::Cancelled,
        }
    }

    fn finished(outcomes: Vec<FileOutcome>) -> Self {
        let loaded = outcomes.iter().filter(|o| o.is_loaded()).count();
        let last_loaded = outcomes.iter().rev().find_map(|o| match o {
            FileOutcome::Loaded { name } => Some(name.clone()),
            _ => None,
        });
        Self {
            outcomes,
            loaded,
            last_loaded,
            status: InvocationStatus::Finished,
        }
    }
}

/// Shape key name derived from a target file path: the base name with the
/// extension stripped.
pub fn target_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Import a single target file.
///
/// Reuses an existing shape key of the same name if present (re-running
/// an import accumulates onto it); otherwise creates one. On a parse or
/// read error a key created by this invocation is removed again; a
/// reused pre-existing key is kept, since removing it would destroy data
/// the invocation did not create. The failure is reported either way and
/// nothing is counted as loaded.
pub fn import_target<M: ShapeKeyMesh>(
    mesh: &mut M,
    session: &ImportSession,
    path: &Path,
) -> ImportReport {
    if !mesh.is_eligible_base() {
        tracing::error!(
            object = mesh.object_name(),
            "object is not an eligible base mesh; import cancelled"
        );
        return ImportReport::cancelled();
    }

    let name = target_name(path);
    mesh.ensure_basis();

    let (key, created) = match mesh.find_shape_key(&name) {
        Some(existing) => (existing, false),
        None => (mesh.add_shape_key(&name), true),
    };
    mesh.set_shape_key_weight(key, 0.0);
    mesh.set_requested_target(&name);
    mesh.set_active_shape_key(key);

    match stream_into_key(mesh, key, session, path) {
        Ok(()) => {
            tracing::info!(name = %name, "target loaded");
            ImportReport::finished(vec![FileOutcome::Loaded { name }])
        }
        Err(e) => {
            if created {
                mesh.remove_shape_key(key);
            }
            tracing::error!(name = %name, error = %e, "failed to load target");
            ImportReport::finished(vec![FileOutcome::Failed {
                name,
                reason: e.to_string(),
            }])
        }
    }
}

/// Import a batch of target files from one directory, in the order given.
///
/// Missing files and name collisions are skipped with a warning; a file
/// that fails mid-parse has its shape key rolled back and the batch
/// continues. Afterwards the active shape key is the last target that
/// loaded successfully, if any.
pub fn import_targets<M: ShapeKeyMesh>(
    mesh: &mut M,
    session: &ImportSession,
    directory: &Path,
    file_names: &[String],
) -> ImportReport {
    if !mesh.is_eligible_base() {
        tracing::error!(
            object = mesh.object_name(),
            "object is not an eligible base mesh; import cancelled"
        );
        return ImportReport::cancelled();
    }

    mesh.ensure_basis();

    let mut outcomes = Vec::with_capacity(file_names.len());
    for file_name in file_names {
        let path = directory.join(file_name);
        let name = target_name(&path);

        if !path.exists() {
            tracing::warn!(file = %path.display(), "file not found, skipping");
            outcomes.push(FileOutcome::Skipped {
                name,
                reason: SkipReason::FileMissing,
            });
            continue;
        }

        if mesh.find_shape_key(&name).is_some() {
            tracing::warn!(name = %name, "shape key already exists, skipping");
            outcomes.push(FileOutcome::Skipped {
                name,
                reason: SkipReason::NameCollision,
            });
            continue;
        }

        let key = mesh.add_shape_key(&name);
        mesh.set_shape_key_weight(key, 0.0);

        match stream_into_key(mesh, key, session, &path) {
            Ok(()) => {
                tracing::info!(name = %name, "target loaded");
                outcomes.push(FileOutcome::Loaded { name });
            }
            Err(e) => {
                mesh.remove_shape_key(key);
                tracing::error!(file = %file_name, error = %e, "failed to load target");
                outcomes.push(FileOutcome::Failed {
                    name,
                    reason: e.to_string(),
                });
            }
        }
    }

    let report = ImportReport::finished(outcomes);

    // Select the last successfully loaded target. Rollbacks may have
    // shifted indices, so resolve by name.
    if let Some(last) = &report.last_loaded {
        if let Some(key) = mesh.find_shape_key(last) {
            mesh.set_active_shape_key(key);
        }
    }

    if report.loaded > 0 {
        tracing::info!(count = report.loaded, "targets loaded");
    } else {
        tracing::warn!("no targets were loaded");
    }

    report
}

/// Stream-parse one file, accumulating every record onto the given key.
fn stream_into_key<M: ShapeKeyMesh>(
    mesh: &mut M,
    key: usize,
    session: &ImportSession,
    path: &Path,
) -> TargetkitResult<()> {
    let reader = TargetReader::open(path)?;
    let points = mesh.shape_key_points_mut(key);
    for record in reader {
        apply_record(points, &record?, session.scale_factor);
    }
    Ok(())
}
