//! CLI subcommand implementations.

pub mod batch;
pub mod init;
pub mod inspect;
pub mod load;

use targetkit_common::config::AppConfig;
use targetkit_import_core::ScaleUnit;

/// Resolve the scale unit from the CLI flag, falling back to config.
pub fn resolve_unit(flag: Option<String>, config: &AppConfig) -> anyhow::Result<ScaleUnit> {
    let raw = flag.unwrap_or_else(|| config.import.scale_unit.clone());
    let unit = raw.parse::<ScaleUnit>()?;
    Ok(unit)
}
