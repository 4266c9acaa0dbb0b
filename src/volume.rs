// Results of a stochastic volume calculation, as written by the engine
use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Kind of domain a volume calculation was run over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainType {
    Material,
    Cell,
    Universe,
}

/// A tallied quantity with its one-sigma uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub mean: f64,
    pub std_dev: f64,
}

impl Estimate {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Estimate { mean, std_dev }
    }
}

/// Volumes and per-nuclide atom counts keyed by domain id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeCalculation {
    pub domain_type: DomainType,
    #[serde(default)]
    pub volumes: HashMap<u32, Estimate>,
    #[serde(default)]
    pub atoms: HashMap<u32, IndexMap<String, Estimate>>,
}

impl VolumeCalculation {
    pub fn new(domain_type: DomainType) -> Self {
        VolumeCalculation {
            domain_type,
            volumes: HashMap::new(),
            atoms: HashMap::new(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "domain_type": "material",
            "volumes": {"3": {"mean": 12.5, "std_dev": 0.1}},
            "atoms": {"3": {"H1": {"mean": 1.0e24, "std_dev": 1.0e21}}}
        }"#;
        let calc = VolumeCalculation::from_json_str(json).unwrap();
        assert_eq!(calc.domain_type, DomainType::Material);
        assert_eq!(calc.volumes[&3].mean, 12.5);
        assert_eq!(calc.atoms[&3]["H1"].std_dev, 1.0e21);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(VolumeCalculation::from_json_str("{\"domain_type\": \"planet\"}").is_err());
    }
}
