// Material records as written to a prior run's summary
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One material as recorded after a run: total atom density plus the atom
/// density of each nuclide, all in atom/b-cm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSummary {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub depletable: bool,
    pub atom_density: f64,
    #[serde(default)]
    pub nuclides: Vec<String>,
    #[serde(default)]
    pub nuclide_densities: Vec<f64>,
    #[serde(default)]
    pub sab_names: Vec<String>,
}

impl MaterialSummary {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Read a list of records, one per material.
    pub fn list_from_json_str(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}
