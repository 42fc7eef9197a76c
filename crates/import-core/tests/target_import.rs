use std::path::PathBuf;

use targetkit_import_core::{
    import_target, import_targets, FileOutcome, ImportSession, InvocationStatus, SkipReason,
};
use targetkit_mesh_model::{MeshObject, ObjectType, ShapeKeyMesh, Vec3, BASIS_NAME};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
}

fn targets_dir() -> PathBuf {
    fixture_dir().join("targets")
}

fn base_mesh() -> MeshObject {
    MeshObject::new("human", ObjectType::Basemesh, vec![Vec3::ZERO; 8])
}

fn key_names(mesh: &MeshObject) -> Vec<&str> {
    mesh.shape_keys.iter().map(|k| k.name.as_str()).collect()
}

#[test]
fn single_file_import_creates_inactive_key_with_offsets() {
    let mut mesh = base_mesh();
    let session = ImportSession::new(1.0);

    let report = import_target(&mut mesh, &session, &targets_dir().join("smile.target"));

    assert_eq!(report.status, InvocationStatus::Finished);
    assert_eq!(report.loaded, 1);
    assert_eq!(report.last_loaded.as_deref(), Some("smile"));

    assert_eq!(key_names(&mesh), vec![BASIS_NAME, "smile"]);
    assert_eq!(mesh.requested_target.as_deref(), Some("smile"));
    assert_eq!(mesh.active_shape_key, Some(1));

    let smile = &mesh.shape_keys[1];
    assert_eq!(smile.weight, 0.0);
    // Line `0 1.0 0.0 2.0` maps to (dx, -dz, dy).
    assert_eq!(smile.points[0], Vec3::new(1.0, -2.0, 0.0));
    assert_eq!(smile.points[3], Vec3::new(0.5, 0.5, 0.25));
    // Index 100 exceeds the vertex count and is dropped silently.
    for i in [1, 2, 4, 5, 6, 7] {
        assert_eq!(smile.points[i], Vec3::ZERO);
    }
}

#[test]
fn single_file_import_honors_scale_factor() {
    let mut mesh = base_mesh();
    let session = ImportSession::new(0.1);

    import_target(&mut mesh, &session, &targets_dir().join("smile.target"));

    let smile = &mesh.shape_keys[1];
    assert!((smile.points[0].x - 0.1).abs() < 1e-12);
    assert!((smile.points[0].y + 0.2).abs() < 1e-12);
}

#[test]
fn reimporting_accumulates_onto_the_existing_key() {
    let mut mesh = base_mesh();
    let session = ImportSession::new(1.0);
    let path = targets_dir().join("smile.target");

    import_target(&mut mesh, &session, &path);
    import_target(&mut mesh, &session, &path);

    assert_eq!(key_names(&mesh), vec![BASIS_NAME, "smile"]);
    assert_eq!(mesh.shape_keys[1].points[0], Vec3::new(2.0, -4.0, 0.0));
}

#[test]
fn fixture_mesh_document_accepts_imports() {
    let mut mesh = MeshObject::load(&fixture_dir().join("meshes").join("cube.mesh.json"))
        .expect("fixture mesh should load");
    let session = ImportSession::new(1.0);

    let report = import_target(&mut mesh, &session, &targets_dir().join("browA.target"));

    assert_eq!(report.loaded, 1);
    let brow = &mesh.shape_keys[mesh.find_shape_key("browA").unwrap()];
    // Offsets accumulate onto the copied base geometry.
    assert_eq!(brow.points[1], Vec3::new(1.0, 0.0, 0.1));
    assert_eq!(brow.points[2], Vec3::new(1.0, 1.0, 0.2));
}

#[test]
fn duplicate_names_in_one_batch_are_skipped() {
    let mut mesh = base_mesh();
    let session = ImportSession::new(1.0);
    let files = vec!["browA.target".to_string(), "browA.target".to_string()];

    let report = import_targets(&mut mesh, &session, &targets_dir(), &files);

    assert_eq!(report.loaded, 1);
    assert_eq!(
        report.outcomes[1],
        FileOutcome::Skipped {
            name: "browA".to_string(),
            reason: SkipReason::NameCollision,
        }
    );
    assert_eq!(key_names(&mesh), vec![BASIS_NAME, "browA"]);
}

#[test]
fn missing_files_are_skipped_and_the_batch_continues() {
    let mut mesh = base_mesh();
    let session = ImportSession::new(1.0);
    let files = vec![
        "smile.target".to_string(),
        "ghost.target".to_string(),
        "browA.target".to_string(),
    ];

    let report = import_targets(&mut mesh, &session, &targets_dir(), &files);

    assert_eq!(report.loaded, 2);
    assert_eq!(
        report.outcomes[1],
        FileOutcome::Skipped {
            name: "ghost".to_string(),
            reason: SkipReason::FileMissing,
        }
    );
    assert_eq!(key_names(&mesh), vec![BASIS_NAME, "smile", "browA"]);
}

#[test]
fn malformed_file_is_rolled_back_and_the_batch_continues() {
    let mut mesh = base_mesh();
    let session = ImportSession::new(1.0);
    let files = vec![
        "smile.target".to_string(),
        "broken.target".to_string(),
        "browA.target".to_string(),
    ];

    let report = import_targets(&mut mesh, &session, &targets_dir(), &files);

    assert_eq!(report.loaded, 2);
    assert!(matches!(
        report.outcomes[1],
        FileOutcome::Failed { ref name, ref reason }
            if name == "broken" && reason.contains("line 2")
    ));
    // The broken key is gone; later files still loaded.
    assert_eq!(key_names(&mesh), vec![BASIS_NAME, "smile", "browA"]);
    assert_eq!(mesh.find_shape_key("broken"), None);
}

#[test]
fn active_key_is_the_last_successful_in_caller_order() {
    let mut mesh = base_mesh();
    let session = ImportSession::new(1.0);
    let files = vec![
        "c.target".to_string(),
        "a.target".to_string(),
        "b.target".to_string(),
    ];

    let report = import_targets(&mut mesh, &session, &targets_dir(), &files);

    assert_eq!(report.loaded, 3);
    assert_eq!(report.last_loaded.as_deref(), Some("b"));
    let active = mesh.active_shape_key.expect("an active key is selected");
    assert_eq!(mesh.shape_keys[active].name, "b");
}

#[test]
fn batch_with_no_successes_still_finishes() {
    let mut mesh = base_mesh();
    let session = ImportSession::new(1.0);
    let files = vec!["ghost.target".to_string(), "broken.target".to_string()];

    let report = import_targets(&mut mesh, &session, &targets_dir(), &files);

    assert_eq!(report.status, InvocationStatus::Finished);
    assert_eq!(report.loaded, 0);
    assert_eq!(report.last_loaded, None);
    assert_eq!(key_names(&mesh), vec![BASIS_NAME]);
    assert_eq!(mesh.active_shape_key, None);
}

#[test]
fn basis_is_created_once_up_front() {
    let mut mesh = base_mesh();
    let session = ImportSession::new(1.0);

    import_targets(&mut mesh, &session, &targets_dir(), &[]);

    assert_eq!(key_names(&mesh), vec![BASIS_NAME]);
    assert_eq!(mesh.shape_keys[0].points, mesh.vertices);
}
