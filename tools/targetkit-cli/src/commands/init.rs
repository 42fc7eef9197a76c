//! Create a new empty base mesh document.

use std::path::PathBuf;

use targetkit_mesh_model::{MeshObject, ObjectType, Vec3};

pub fn run(name: String, vertices: usize, output: PathBuf) -> anyhow::Result<()> {
    let path = output.join(format!("{name}.mesh.json"));
    if path.exists() {
        anyhow::bail!("Mesh document already exists: {}", path.display());
    }

    let mesh = MeshObject::new(&name, ObjectType::Basemesh, vec![Vec3::ZERO; vertices]);
    mesh.save(&path)?;

    println!("Created mesh document: {}", path.display());
    println!("  Vertices: {vertices}");
    Ok(())
}
