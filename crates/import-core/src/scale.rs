//! Scale factor providers.
//!
//! Target files store displacements in decimeters. The scale factor
//! converts them into the scene's working unit and is computed once per
//! import session, never per record.

use std::str::FromStr;

use targetkit_common::TargetkitError;

/// Source of the per-session scale factor.
///
/// Abstracted so a host integration can derive the factor from live
/// scene state instead of static configuration.
pub trait ScaleFactorSource {
    fn scale_factor(&self) -> f64;
}

/// Scene working unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleUnit {
    /// Meters: one file unit is 0.1 scene units.
    Meter,
    /// Decimeters: file units pass through unchanged.
    #[default]
    Decimeter,
    /// Centimeters: one file unit is 10 scene units.
    Centimeter,
}

impl ScaleUnit {
    /// Multiplier from file units to scene units.
    pub fn factor(&self) -> f64 {
        match self {
            ScaleUnit::Meter => 0.1,
            ScaleUnit::Decimeter => 1.0,
            ScaleUnit::Centimeter => 10.0,
        }
    }
}

impl FromStr for ScaleUnit {
    type Err = TargetkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" | "meter" => Ok(ScaleUnit::Meter),
            "dm" | "decimeter" => Ok(ScaleUnit::Decimeter),
            "cm" | "centimeter" => Ok(ScaleUnit::Centimeter),
            other => Err(TargetkitError::config(format!(
                "unknown scale unit '{other}' (expected m, dm, or cm)"
            ))),
        }
    }
}

/// Scale factor derived from the scene's working unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneScale {
    pub unit: ScaleUnit,
}

impl SceneScale {
    pub fn new(unit: ScaleUnit) -> Self {
        Self { unit }
    }
}

impl ScaleFactorSource for SceneScale {
    fn scale_factor(&self) -> f64 {
        self.unit.factor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_strings_parse() {
        assert_eq!("m".parse::<ScaleUnit>().unwrap(), ScaleUnit::Meter);
        assert_eq!("dm".parse::<ScaleUnit>().unwrap(), ScaleUnit::Decimeter);
        assert_eq!("centimeter".parse::<ScaleUnit>().unwrap(), ScaleUnit::Centimeter);
        assert!("feet".parse::<ScaleUnit>().is_err());
    }

    #[test]
    fn scene_scale_exposes_unit_factor() {
        assert_eq!(SceneScale::new(ScaleUnit::Meter).scale_factor(), 0.1);
        assert_eq!(SceneScale::default().scale_factor(), 1.0);
        assert_eq!(SceneScale::new(ScaleUnit::Centimeter).scale_factor(), 10.0);
    }
}
