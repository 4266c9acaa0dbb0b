use crate::error::MaterialError;
use crate::ids::IdRegistry;
use crate::material::Material;
use once_cell::sync::Lazy;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

// Python callers all draw ids from one registry
static REGISTRY: Lazy<Mutex<IdRegistry>> = Lazy::new(|| Mutex::new(IdRegistry::new()));

pub(crate) fn registry() -> MutexGuard<'static, IdRegistry> {
    REGISTRY
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub(crate) fn to_py_err(err: MaterialError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

#[pyclass(name = "Material")]
pub struct PyMaterial {
    internal: Material,
}

impl PyMaterial {
    pub fn from_material(material: Material) -> Self {
        PyMaterial { internal: material }
    }

    pub fn get_internal(&self) -> &Material {
        &self.internal
    }
}

#[pymethods]
impl PyMaterial {
    /// Create a new material, optionally with an id and a name.
    ///
    /// Args:
    ///     material_id (Optional[int]): Unique id; the next free id if omitted.
    ///     name (Optional[str]): Name for the material.
    ///     temperature (Optional[float]): Temperature in K.
    ///
    /// Raises:
    ///     ValueError: If the id is already in use.
    #[new]
    fn new(
        material_id: Option<u32>,
        name: Option<String>,
        temperature: Option<f64>,
    ) -> PyResult<Self> {
        let mut internal = {
            let mut reg = registry();
            match material_id {
                Some(id) => Material::with_id(&mut reg, id).map_err(to_py_err)?,
                None => Material::new(&mut reg),
            }
        };
        if let Some(n) = name {
            internal.set_name(n);
        }
        internal.set_temperature(temperature).map_err(to_py_err)?;
        Ok(PyMaterial { internal })
    }

    #[getter]
    fn id(&self) -> u32 {
        self.internal.id()
    }

    /// Get the name of the material
    #[getter]
    fn name(&self) -> String {
        self.internal.get_name().to_string()
    }

    /// Set the name of the material
    #[setter]
    fn set_name(&mut self, name: String) {
        self.internal.set_name(name);
    }

    #[getter]
    fn temperature(&self) -> Option<f64> {
        self.internal.temperature()
    }

    #[setter]
    fn set_temperature(&mut self, value: Option<f64>) -> PyResult<()> {
        self.internal.set_temperature(value).map_err(to_py_err)
    }

    #[getter]
    fn depletable(&self) -> bool {
        self.internal.depletable()
    }

    #[setter]
    fn set_depletable(&mut self, value: bool) {
        self.internal.set_depletable(value);
    }

    /// Material volume in cm^3, if set.
    #[getter]
    fn volume(&self) -> Option<f64> {
        self.internal.volume()
    }

    #[setter]
    fn set_volume(&mut self, value: Option<f64>) -> PyResult<()> {
        self.internal.set_volume(value).map_err(to_py_err)
    }

    #[getter]
    fn density(&self) -> Option<f64> {
        self.internal.density()
    }

    #[getter]
    fn density_units(&self) -> Option<String> {
        self.internal.density_units().map(|u| u.as_str().to_string())
    }

    /// Set material density.
    ///
    /// Args:
    ///     units (str): One of g/cm3, g/cc, kg/m3, atom/b-cm, atom/cm3,
    ///         atom/cc, sum or macro.
    ///     density (Optional[float]): Density value; ignored for "sum".
    ///
    /// Raises:
    ///     ValueError: On unknown units or a missing value.
    #[pyo3(signature = (units, density=None))]
    fn set_density(&mut self, units: &str, density: Option<f64>) -> PyResult<()> {
        self.internal.set_density(units, density).map_err(to_py_err)
    }

    /// Add (or replace) a nuclide.
    ///
    /// Args:
    ///     nuclide (str): Nuclide name (e.g. "Fe56").
    ///     percent (float): Amount of the nuclide.
    ///     percent_type (str): "ao", "wo" or "at/g-cm".
    #[pyo3(signature = (nuclide, percent, percent_type="ao"))]
    fn add_nuclide(&mut self, nuclide: &str, percent: f64, percent_type: &str) -> PyResult<()> {
        self.internal
            .add_nuclide(nuclide, percent, percent_type)
            .map_err(to_py_err)
    }

    fn remove_nuclide(&mut self, nuclide: &str) {
        self.internal.remove_nuclide(nuclide);
    }

    /// Add a natural element by symbol or name.
    ///
    /// Args:
    ///     element (str): Element symbol ("U") or name ("uranium").
    ///     percent (float): Amount of the element.
    ///     percent_type (str): "ao" or "wo".
    ///     enrichment (Optional[float]): U235 weight percent, uranium only.
    #[pyo3(signature = (element, percent, percent_type="ao", enrichment=None))]
    fn add_element(
        &mut self,
        element: &str,
        percent: f64,
        percent_type: &str,
        enrichment: Option<f64>,
    ) -> PyResult<()> {
        self.internal
            .add_element(element, percent, percent_type, enrichment)
            .map_err(to_py_err)
    }

    fn remove_element(&mut self, element: &str) {
        self.internal.remove_element(element);
    }

    fn add_macroscopic(&mut self, macroscopic: &str) -> PyResult<()> {
        self.internal.add_macroscopic(macroscopic).map_err(to_py_err)
    }

    fn remove_macroscopic(&mut self, macroscopic: &str) -> PyResult<()> {
        self.internal
            .remove_macroscopic(macroscopic)
            .map_err(to_py_err)
    }

    fn add_s_alpha_beta(&mut self, name: &str) -> PyResult<()> {
        self.internal.add_s_alpha_beta(name).map_err(to_py_err)
    }

    fn remove_s_alpha_beta(&mut self, name: &str) {
        self.internal.remove_s_alpha_beta(name);
    }

    fn make_isotropic_in_lab(&mut self) {
        self.internal.make_isotropic_in_lab();
    }

    /// Return a list of nuclide names with elements expanded.
    #[pyo3(text_signature = "(self)")]
    fn get_nuclides(&self) -> PyResult<Vec<String>> {
        self.internal.get_nuclides().map_err(to_py_err)
    }

    /// Map of nuclide name to (percent, percent_type) after element expansion.
    fn get_nuclide_densities(&self) -> PyResult<HashMap<String, (f64, String)>> {
        let densities = self.internal.get_nuclide_densities().map_err(to_py_err)?;
        Ok(densities
            .into_iter()
            .map(|(name, e)| (name, (e.percent, e.percent_type.as_str().to_string())))
            .collect())
    }

    /// Map of nuclide name to atom density in atom/b-cm.
    fn get_nuclide_atom_densities(&self) -> PyResult<HashMap<String, f64>> {
        Ok(self
            .internal
            .get_nuclide_atom_densities()
            .map_err(to_py_err)?
            .into_iter()
            .collect())
    }

    #[getter]
    fn average_molar_mass(&self) -> PyResult<f64> {
        self.internal.average_molar_mass().map_err(to_py_err)
    }

    /// Deep copy with a new id from the shared registry.
    #[pyo3(name = "clone")]
    fn clone_material(&self) -> Self {
        let mut reg = registry();
        PyMaterial {
            internal: self.internal.clone_with_new_id(&mut reg),
        }
    }

    /// Advisory messages raised so far, drained on read.
    fn take_warnings(&mut self) -> Vec<String> {
        self.internal
            .take_diagnostics()
            .into_iter()
            .map(|d| d.to_string())
            .collect()
    }

    fn __str__(&self) -> String {
        self.internal.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Material(id={}, name='{}')",
            self.internal.id(),
            self.internal.get_name()
        )
    }
}
