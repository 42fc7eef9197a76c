//! Summarize a target file without touching any mesh.

use std::path::PathBuf;

use targetkit_import_core::{displacement, TargetReader};

pub fn run(file: PathBuf) -> anyhow::Result<()> {
    let reader = TargetReader::open(&file)
        .map_err(|e| anyhow::anyhow!("Failed to open target file: {e}"))?;

    let mut records = 0usize;
    let mut max_index = 0usize;
    let mut max_offset = 0.0f64;

    for record in reader {
        let record = record.map_err(|e| anyhow::anyhow!("{e}"))?;
        records += 1;
        max_index = max_index.max(record.index);

        let d = displacement(&record, 1.0);
        let magnitude = (d.x * d.x + d.y * d.y + d.z * d.z).sqrt();
        max_offset = max_offset.max(magnitude);
    }

    println!("Target file: {}", file.display());
    println!("  Records: {records}");
    if records > 0 {
        println!("  Highest vertex index: {max_index}");
        println!("  Largest offset magnitude: {max_offset:.6} (at scale 1.0)");
    }

    Ok(())
}
