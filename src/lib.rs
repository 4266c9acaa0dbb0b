//! Materials for Monte Carlo transport input decks: composition, density
//! conversion and `materials.xml` output.
mod data;
// First, import any modules and re-export the types for Rust usage
mod config;
mod diagnostics;
mod element;
mod error;
mod ids;
mod material;
mod materials;
mod nuclide;
mod provider;
mod summary;
mod units;
mod volume;
mod xml;

pub use config::{Config, CONFIG};
pub use data::{split_nuclide_name, AVOGADRO};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use element::{Element, ElementEntry};
pub use error::{MaterialError, Result};
pub use ids::IdRegistry;
pub use material::{CloneMemo, Material, ENRICHMENT_WARNING_THRESHOLD, MAX_ENRICHMENT};
pub use materials::{Materials, DEFAULT_MATERIALS_FILE};
pub use nuclide::{Macroscopic, Nuclide, NuclideEntry, PercentType, ISO_IN_LAB};
pub use provider::{NuclideData, StandardData, U234_TO_U235_MASS_RATIO};
pub use summary::MaterialSummary;
pub use units::{average_molar_mass, atom_densities, DensityBasis, DensityUnits};
pub use volume::{DomainType, Estimate, VolumeCalculation};
pub use xml::{format_float, XmlElement};

// Import PyO3 items conditionally
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;
#[cfg(feature = "pyo3")]
use pyo3::pymodule;

#[cfg(feature = "pyo3")]
mod python {
    pub mod material_python;
    pub mod materials_python;
    pub use material_python::*;
    pub use materials_python::*;
}

#[cfg(feature = "pyo3")]
#[pymodule]
fn materials_deck(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    use crate::python::material_python;
    use crate::python::materials_python;

    m.add_class::<material_python::PyMaterial>()?;
    m.add_class::<materials_python::PyMaterials>()?;
    Ok(())
}
