use crate::config::Config;
use crate::materials::Materials;
use crate::python::material_python::{to_py_err, PyMaterial};
use pyo3::exceptions::PyIndexError;
use pyo3::prelude::*;
use pyo3::types::PyList;

/// Python wrapper for the Rust Materials struct
#[pyclass(name = "Materials")]
pub struct PyMaterials {
    /// Internal Rust Materials instance
    internal: Materials,
}

#[pymethods]
impl PyMaterials {
    /// Create a new materials collection, optionally with initial materials.
    /// Path settings start from the global configuration.
    #[new]
    fn py_new(materials: Option<&PyList>) -> PyResult<Self> {
        let mut result = PyMaterials {
            internal: Materials::from_config(&Config::global()),
        };

        if let Some(mat_list) = materials {
            for item in mat_list.iter() {
                let material = item.extract::<PyRef<PyMaterial>>()?;
                result
                    .internal
                    .append(material.get_internal().clone())
                    .map_err(to_py_err)?;
            }
        }

        Ok(result)
    }

    /// Append a material to the collection
    fn append(&mut self, material: &PyMaterial) -> PyResult<()> {
        self.internal
            .append(material.get_internal().clone())
            .map_err(to_py_err)
    }

    fn insert(&mut self, index: usize, material: &PyMaterial) -> PyResult<()> {
        self.internal
            .insert(index, material.get_internal().clone())
            .map_err(to_py_err)
    }

    /// Get a material by index
    fn get(&self, index: usize) -> PyResult<PyMaterial> {
        match self.internal.get(index) {
            Some(m) => Ok(PyMaterial::from_material(m.clone())),
            None => Err(PyIndexError::new_err(format!(
                "Index {} out of range",
                index
            ))),
        }
    }

    /// Remove a material at the specified index
    fn remove(&mut self, index: usize) -> PyResult<PyMaterial> {
        self.internal
            .remove(index)
            .map(PyMaterial::from_material)
            .ok_or_else(|| PyIndexError::new_err(format!("Index {} out of range", index)))
    }

    #[getter]
    fn cross_sections(&self) -> Option<String> {
        self.internal.cross_sections().map(|s| s.to_string())
    }

    #[setter]
    fn set_cross_sections(&mut self, path: Option<String>) {
        self.internal.set_cross_sections(path);
    }

    #[getter]
    fn multipole_library(&self) -> Option<String> {
        self.internal.multipole_library().map(|s| s.to_string())
    }

    #[setter]
    fn set_multipole_library(&mut self, path: Option<String>) {
        self.internal.set_multipole_library(path);
    }

    fn make_isotropic_in_lab(&mut self) {
        self.internal.make_isotropic_in_lab();
    }

    /// Write the collection as XML.
    ///
    /// Args:
    ///     path (str): Output file, "materials.xml" by default.
    #[pyo3(signature = (path="materials.xml"))]
    fn export_to_xml(&self, path: &str) -> PyResult<()> {
        self.internal.export_to_xml(path).map_err(to_py_err)
    }

    fn to_xml_string(&self) -> PyResult<String> {
        self.internal.to_xml_string().map_err(to_py_err)
    }

    /// Special method for Python's len() function
    fn __len__(&self) -> usize {
        self.internal.len()
    }

    /// Return a string representation of the Materials object
    fn __repr__(&self) -> String {
        format!("Materials with {} entries", self.internal.len())
    }

    /// Make the Materials object behave like a sequence in Python
    fn __getitem__(&self, index: usize) -> PyResult<PyMaterial> {
        self.get(index)
    }
}
