use crate::config::Config;
use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::error::{MaterialError, Result};
use crate::material::Material;
use crate::xml::XmlElement;
use std::path::Path;

/// File name used by [`Materials::export_to_xml_default`].
pub const DEFAULT_MATERIALS_FILE: &str = "materials.xml";

/// Ordered collection of every [`Material`] in a model.
///
/// `Materials` behaves like a simple growable list with unique material ids,
/// plus the two collection-level path settings written to `materials.xml`:
/// the cross-section listing file and the windowed multipole library.
#[derive(Debug, Clone)]
pub struct Materials {
    /// Storage for materials in a vector
    materials: Vec<Material>,
    cross_sections: Option<String>,
    multipole_library: Option<String>,
    diagnostics: Diagnostics,
}

impl Materials {
    /// Create a new empty materials collection
    pub fn new() -> Self {
        Materials {
            materials: Vec::new(),
            cross_sections: None,
            multipole_library: None,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Create an empty collection with its paths taken from `config`.
    pub fn from_config(config: &Config) -> Self {
        let mut materials = Materials::new();
        materials.cross_sections = config.cross_sections.clone();
        materials.multipole_library = config.multipole_library.clone();
        materials
    }

    pub fn cross_sections(&self) -> Option<&str> {
        self.cross_sections.as_deref()
    }

    pub fn set_cross_sections(&mut self, path: Option<String>) {
        self.cross_sections = path;
    }

    pub fn multipole_library(&self) -> Option<&str> {
        self.multipole_library.as_deref()
    }

    pub fn set_multipole_library(&mut self, path: Option<String>) {
        self.multipole_library = path;
    }

    fn check_unique(&self, material: &Material) -> Result<()> {
        if self.materials.iter().any(|m| m.id() == material.id()) {
            return Err(MaterialError::DuplicateId(material.id()));
        }
        Ok(())
    }

    /// Append a material to the collection (like a list)
    ///
    /// Fails with [`MaterialError::DuplicateId`] if a material with the same
    /// id is already present.
    pub fn append(&mut self, material: Material) -> Result<()> {
        self.check_unique(&material)?;
        self.materials.push(material);
        Ok(())
    }

    /// Insert a material before `index`; an index past the end appends.
    pub fn insert(&mut self, index: usize, material: Material) -> Result<()> {
        self.check_unique(&material)?;
        let index = index.min(self.materials.len());
        self.materials.insert(index, material);
        Ok(())
    }

    /// Get a reference to a material by index
    pub fn get(&self, index: usize) -> Option<&Material> {
        self.materials.get(index)
    }

    /// Get a mutable reference to a material by index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Material> {
        self.materials.get_mut(index)
    }

    /// Find a material by its id
    pub fn get_by_id(&self, material_id: u32) -> Option<&Material> {
        self.materials.iter().find(|m| m.id() == material_id)
    }

    /// Remove the material at `index`, or `None` if out of bounds
    pub fn remove(&mut self, index: usize) -> Option<Material> {
        if index < self.materials.len() {
            Some(self.materials.remove(index))
        } else {
            None
        }
    }

    /// Get the number of materials in the collection
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Get an iterator over the materials
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    /// Get a mutable iterator over the materials
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Material> {
        self.materials.iter_mut()
    }

    fn warn_deprecated(&mut self, old: &str, new: &str) {
        self.diagnostics.push(
            DiagnosticKind::Deprecated,
            format!(
                "Materials.{}(...) has been deprecated and may be removed in a future version. Use {} instead.",
                old, new
            ),
        );
    }

    #[deprecated(note = "use `Materials::append`")]
    pub fn add_material(&mut self, material: Material) -> Result<()> {
        self.warn_deprecated("add_material", "Materials.append(...)");
        self.append(material)
    }

    /// Append several materials, stopping at the first duplicate id.
    #[deprecated(note = "use `Extend` or repeated `Materials::append`")]
    pub fn add_materials<I>(&mut self, materials: I) -> Result<()>
    where
        I: IntoIterator<Item = Material>,
    {
        self.warn_deprecated("add_materials", "compound assignment");
        for material in materials {
            self.append(material)?;
        }
        Ok(())
    }

    /// Remove the material with `material_id`, if present.
    #[deprecated(note = "use `Materials::remove`")]
    pub fn remove_material(&mut self, material_id: u32) -> Option<Material> {
        self.warn_deprecated("remove_material", "Materials.remove(...)");
        let index = self.materials.iter().position(|m| m.id() == material_id)?;
        self.remove(index)
    }

    /// Request isotropic-in-lab scattering in every material.
    pub fn make_isotropic_in_lab(&mut self) {
        for material in self.materials.iter_mut() {
            material.make_isotropic_in_lab();
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Drain the collection's own advisories.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    /// Build the normalized `materials` root element.
    pub fn to_xml_element(&self) -> Result<XmlElement> {
        let mut root = XmlElement::new("materials");
        for material in &self.materials {
            root.push(material.to_xml_element()?);
        }
        if let Some(path) = &self.cross_sections {
            root.push(XmlElement::new("cross_sections").with_text(path.as_str()));
        }
        if let Some(path) = &self.multipole_library {
            root.push(XmlElement::new("multipole_library").with_text(path.as_str()));
        }
        root.normalize();
        Ok(root)
    }

    pub fn to_xml_string(&self) -> Result<String> {
        self.to_xml_element()?.to_xml_string()
    }

    /// Write the collection to `path`. Nothing is written if any material
    /// fails validation.
    pub fn export_to_xml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let root = self.to_xml_element()?;
        root.write_to_file(path.as_ref())?;
        log::debug!(
            "exported {} materials to {}",
            self.materials.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Write the collection to `materials.xml` in the working directory.
    pub fn export_to_xml_default(&self) -> Result<()> {
        self.export_to_xml(DEFAULT_MATERIALS_FILE)
    }
}

impl Default for Materials {
    fn default() -> Self {
        Self::new()
    }
}

/// Materials whose id is already present are skipped with a warning; use
/// [`Materials::append`] to get the error instead.
impl Extend<Material> for Materials {
    fn extend<T: IntoIterator<Item = Material>>(&mut self, iter: T) {
        for material in iter {
            if let Err(err) = self.append(material) {
                log::warn!("{}", err);
            }
        }
    }
}

impl IntoIterator for Materials {
    type Item = Material;
    type IntoIter = std::vec::IntoIter<Material>;

    fn into_iter(self) -> Self::IntoIter {
        self.materials.into_iter()
    }
}

impl<'a> IntoIterator for &'a Materials {
    type Item = &'a Material;
    type IntoIter = std::slice::Iter<'a, Material>;

    fn into_iter(self) -> Self::IntoIter {
        self.materials.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdRegistry;

    fn dense(reg: &mut IdRegistry) -> Material {
        let mut material = Material::new(reg);
        material.add_nuclide("Fe56", 1.0, "ao").unwrap();
        material.set_density("g/cm3", Some(7.8)).unwrap();
        material
    }

    #[test]
    fn test_new_materials() {
        let materials = Materials::new();
        assert!(materials.is_empty());
        assert_eq!(materials.len(), 0);
        assert_eq!(materials.cross_sections(), None);
    }

    #[test]
    fn test_append_material() {
        let mut reg = IdRegistry::new();
        let mut materials = Materials::new();
        materials.append(Material::new(&mut reg)).unwrap();
        assert_eq!(materials.len(), 1);
    }

    #[test]
    fn test_append_duplicate_id() {
        let mut reg = IdRegistry::new();
        let mut materials = Materials::new();
        let material = Material::new(&mut reg);
        let copy = material.clone();
        materials.append(material).unwrap();
        assert!(matches!(
            materials.append(copy),
            Err(MaterialError::DuplicateId(1))
        ));
        assert_eq!(materials.len(), 1);
    }

    #[test]
    fn test_get_material() {
        let mut reg = IdRegistry::new();
        let mut materials = Materials::new();
        let mut material = Material::new(&mut reg);
        material.set_density("g/cm3", Some(10.5)).unwrap();

        materials.append(material).unwrap();
        let retrieved = materials.get(0);

        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().density(), Some(10.5));
        assert!(materials.get(1).is_none());
        assert!(materials.get_by_id(1).is_some());
    }

    #[test]
    fn test_insert_and_remove_material() {
        let mut reg = IdRegistry::new();
        let mut materials = Materials::new();
        materials.append(Material::new(&mut reg)).unwrap();
        materials.insert(0, Material::new(&mut reg)).unwrap();
        materials.insert(99, Material::new(&mut reg)).unwrap();
        let ids: Vec<u32> = materials.iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec![2, 1, 3]);

        let removed = materials.remove(0).unwrap();
        assert_eq!(removed.id(), 2);
        assert!(materials.remove(5).is_none());
        assert_eq!(materials.len(), 2);
    }

    #[test]
    fn test_get_mut_material() {
        let mut reg = IdRegistry::new();
        let mut materials = Materials::new();
        materials.append(Material::new(&mut reg)).unwrap();

        // Modify the material through the mutable reference
        let material = materials.get_mut(0).unwrap();
        material.set_density("g/cm3", Some(10.5)).unwrap();
        assert_eq!(materials.get(0).unwrap().density(), Some(10.5));
    }

    #[test]
    #[allow(deprecated)]
    fn test_deprecated_aliases_still_work() {
        let mut reg = IdRegistry::new();
        let mut materials = Materials::new();
        materials.add_material(Material::new(&mut reg)).unwrap();
        materials
            .add_materials(vec![Material::new(&mut reg), Material::new(&mut reg)])
            .unwrap();
        assert_eq!(materials.len(), 3);
        let removed = materials.remove_material(2).unwrap();
        assert_eq!(removed.id(), 2);
        assert!(materials.remove_material(2).is_none());
        assert_eq!(materials.len(), 2);
        let deprecated = materials
            .diagnostics()
            .iter()
            .filter(|d| d.kind == DiagnosticKind::Deprecated)
            .count();
        assert_eq!(deprecated, 4);
        assert_eq!(materials.take_diagnostics().len(), 4);
        assert!(materials.diagnostics().is_empty());
    }

    #[test]
    fn test_extend_skips_duplicates() {
        let mut reg = IdRegistry::new();
        let a = Material::new(&mut reg);
        let b = Material::new(&mut reg);
        let mut materials = Materials::new();
        materials.extend(vec![a.clone(), b, a]);
        assert_eq!(materials.len(), 2);

        let ids: Vec<u32> = (&materials).into_iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec![1, 2]);
        let owned: Vec<Material> = materials.into_iter().collect();
        assert_eq!(owned.len(), 2);
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::new();
        config.set_cross_sections("/data/cross_sections.xml");
        let materials = Materials::from_config(&config);
        assert_eq!(materials.cross_sections(), Some("/data/cross_sections.xml"));
        assert_eq!(materials.multipole_library(), None);
    }

    #[test]
    fn test_make_isotropic_in_lab() {
        let mut reg = IdRegistry::new();
        let mut materials = Materials::new();
        materials.append(dense(&mut reg)).unwrap();
        materials.append(dense(&mut reg)).unwrap();
        materials.make_isotropic_in_lab();
        for material in &materials {
            assert_eq!(
                material.nuclides()[0].nuclide.scattering.as_deref(),
                Some("iso-in-lab")
            );
        }
    }

    #[test]
    fn test_xml_root_layout() {
        let mut reg = IdRegistry::new();
        let mut materials = Materials::new();
        let late = Material::with_id(&mut reg, 10)
            .map(|mut m| {
                m.set_density("sum", None).unwrap();
                m
            })
            .unwrap();
        materials.append(late).unwrap();
        materials.append(dense(&mut reg)).unwrap();
        materials.set_cross_sections(Some("/data/cross_sections.xml".to_string()));
        materials.set_multipole_library(Some("/data/wmp".to_string()));

        let root = materials.to_xml_element().unwrap();
        let tags: Vec<&str> = root.children.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(
            tags,
            vec!["cross_sections", "multipole_library", "material", "material"]
        );
        let ids: Vec<&str> = root.find_all("material").filter_map(|m| m.get("id")).collect();
        assert_eq!(ids, vec!["1", "10"]);
    }

    #[test]
    fn test_export_fails_without_density() {
        let mut reg = IdRegistry::new();
        let mut materials = Materials::new();
        materials.append(Material::new(&mut reg)).unwrap();
        let path = std::env::temp_dir().join("materials_deck_no_density.xml");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            materials.export_to_xml(&path),
            Err(MaterialError::DensityNotSet { id: 1 })
        ));
        assert!(!path.exists());
    }
}
