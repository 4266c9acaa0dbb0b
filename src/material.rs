use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::element::{Element, ElementEntry};
use crate::error::{MaterialError, Result};
use crate::ids::IdRegistry;
use crate::nuclide::{
    parse_percent_type, Macroscopic, Nuclide, NuclideEntry, PercentType, ISO_IN_LAB,
};
use crate::provider::{NuclideData, StandardData};
use crate::summary::MaterialSummary;
use crate::units::{self, DensityUnits};
use crate::volume::{DomainType, Estimate, VolumeCalculation};
use crate::xml::{format_float, XmlElement};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Highest accepted U235 enrichment (w/o); above it U238 would go negative.
pub const MAX_ENRICHMENT: f64 = 100.0 / 1.008;

/// Enrichment above which the fixed U234/U235 ratio stops being a good model.
pub const ENRICHMENT_WARNING_THRESHOLD: f64 = 5.0;

const NUCLIDE: &str = "a Nuclide";
const ELEMENT: &str = "an Element";
const SAB: &str = "an S(a,b) table";

/// A material composed of nuclides and natural elements, or of a single
/// macroscopic data set, for a transport input deck.
///
/// A `Material` starts empty; users add nuclides with [`Material::add_nuclide`]
/// or elements with [`Material::add_element`] and set the total density with
/// [`Material::set_density`]. Thermal scattering tables are attached with
/// [`Material::add_s_alpha_beta`]. Alternatively a single
/// [`Macroscopic`] data set replaces the whole composition; the two modes are
/// mutually exclusive and every mutation enforces it.
///
/// Typical workflow:
/// 1. Create with [`Material::new`] (auto id) or [`Material::with_id`].
/// 2. Populate composition and set density.
/// 3. Query derived quantities such as [`Material::get_nuclide_atom_densities`].
/// 4. Emit with [`Material::to_xml_element`], usually through
///    [`crate::Materials::export_to_xml`].
///
/// Non-fatal advisories are collected in [`Material::diagnostics`] and logged.
///
/// `Clone` copies the id as well, so the copy is only valid as a replacement
/// for the original. Use [`Material::clone_with_new_id`] or
/// [`Material::clone_with_memo`] for a copy that lives alongside it.
#[derive(Debug, Clone)]
pub struct Material {
    id: u32,
    name: String,
    /// Temperature in K; `None` inherits the model default
    temperature: Option<f64>,
    density: Option<f64>,
    density_units: Option<DensityUnits>,
    depletable: bool,
    nuclides: Vec<NuclideEntry>,
    elements: Vec<ElementEntry>,
    macroscopic: Option<Macroscopic>,
    sab: Vec<String>,
    /// Volume in cm³
    volume: Option<f64>,
    atoms: IndexMap<String, Estimate>,
    paths: Option<Vec<String>>,
    num_instances: Option<usize>,
    convert_to_distrib_comps: bool,
    distrib_otf_file: Option<String>,
    data: Arc<dyn NuclideData>,
    diagnostics: Diagnostics,
}

impl Material {
    /// Create an empty material with the next free id from `registry`.
    pub fn new(registry: &mut IdRegistry) -> Self {
        Self::blank(registry.allocate())
    }

    /// Create an empty material with a specific id.
    pub fn with_id(registry: &mut IdRegistry, material_id: u32) -> Result<Self> {
        registry.reserve(material_id)?;
        Ok(Self::blank(material_id))
    }

    fn blank(id: u32) -> Self {
        Material {
            id,
            name: String::new(),
            temperature: None,
            density: None,
            density_units: None,
            depletable: false,
            nuclides: Vec::new(),
            elements: Vec::new(),
            macroscopic: None,
            sab: Vec::new(),
            volume: None,
            atoms: IndexMap::new(),
            paths: None,
            num_instances: None,
            convert_to_distrib_comps: false,
            distrib_otf_file: None,
            data: Arc::new(StandardData),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Use a different nuclide data provider for expansion and mass lookups.
    pub fn with_data(mut self, data: Arc<dyn NuclideData>) -> Self {
        self.data = data;
        self
    }

    /// Rebuild a material from a prior run's summary record.
    ///
    /// Densities come back in atom/b-cm and every nuclide as an atom amount.
    /// On failure the summary's id is left free in `registry`.
    pub fn from_summary(summary: &MaterialSummary, registry: &mut IdRegistry) -> Result<Self> {
        if summary.nuclides.len() != summary.nuclide_densities.len() {
            return Err(MaterialError::SummaryLengthMismatch {
                id: summary.id,
                nuclides: summary.nuclides.len(),
                densities: summary.nuclide_densities.len(),
            });
        }
        let mut material = Material::with_id(registry, summary.id)?;
        if let Err(err) = material.fill_from_summary(summary) {
            registry.release(summary.id);
            return Err(err);
        }
        Ok(material)
    }

    fn fill_from_summary(&mut self, summary: &MaterialSummary) -> Result<()> {
        self.set_name(summary.name.clone());
        self.set_depletable(summary.depletable);
        for sab in &summary.sab_names {
            self.add_s_alpha_beta(sab)?;
        }
        self.set_density("atom/b-cm", Some(summary.atom_density))?;
        for (name, density) in summary.nuclides.iter().zip(&summary.nuclide_densities) {
            self.add_nuclide(name.trim(), *density, "ao")?;
        }
        Ok(())
    }

    /// Parse a summary record from JSON and rebuild the material.
    pub fn from_summary_json(json: &str, registry: &mut IdRegistry) -> Result<Self> {
        let summary = MaterialSummary::from_json_str(json)?;
        Self::from_summary(&summary, registry)
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Move this material to another id, returning the old one to the registry.
    pub fn set_id(&mut self, registry: &mut IdRegistry, material_id: u32) -> Result<()> {
        if material_id == self.id {
            return Ok(());
        }
        registry.reserve(material_id)?;
        registry.release(self.id);
        self.id = material_id;
        Ok(())
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    pub fn set_temperature(&mut self, temperature: Option<f64>) -> Result<()> {
        if let Some(t) = temperature {
            if !(t.is_finite() && t > 0.0) {
                return Err(MaterialError::InvalidTemperature {
                    id: self.id,
                    value: t,
                });
            }
        }
        self.temperature = temperature;
        Ok(())
    }

    pub fn density(&self) -> Option<f64> {
        self.density
    }

    pub fn density_units(&self) -> Option<DensityUnits> {
        self.density_units
    }

    /// Set the density and its units.
    ///
    /// A value is required unless `units` is `"sum"`, in which case any value
    /// passed is ignored with an advisory.
    pub fn set_density(&mut self, units: impl AsRef<str>, density: Option<f64>) -> Result<()> {
        let units: DensityUnits = units.as_ref().parse()?;
        if units == DensityUnits::Sum {
            if let Some(value) = density {
                self.diagnostics.push(
                    DiagnosticKind::IgnoredDensity,
                    format!(
                        "Density \"{}\" for Material ID=\"{}\" is ignored because the unit is \"sum\"",
                        value, self.id
                    ),
                );
            }
            self.density_units = Some(units);
            return Ok(());
        }

        let value = density.ok_or(MaterialError::MissingDensityValue { id: self.id })?;
        if !value.is_finite() {
            return Err(MaterialError::InvalidDensity { id: self.id, value });
        }
        self.density_units = Some(units);
        self.density = Some(value);
        Ok(())
    }

    pub fn depletable(&self) -> bool {
        self.depletable
    }

    pub fn set_depletable(&mut self, depletable: bool) {
        self.depletable = depletable;
    }

    pub fn volume(&self) -> Option<f64> {
        self.volume
    }

    pub fn set_volume(&mut self, volume: Option<f64>) -> Result<()> {
        if let Some(v) = volume {
            if !(v.is_finite() && v > 0.0) {
                return Err(MaterialError::InvalidVolume {
                    id: self.id,
                    value: v,
                });
            }
        }
        self.volume = volume;
        Ok(())
    }

    /// Per-nuclide atom counts from the last volume calculation applied.
    pub fn atoms(&self) -> &IndexMap<String, Estimate> {
        &self.atoms
    }

    /// Take the volume and atom counts for this material from a volume calculation.
    pub fn add_volume_information(&mut self, volume_calc: &VolumeCalculation) -> Result<()> {
        if volume_calc.domain_type != DomainType::Material {
            return Err(MaterialError::NoVolumeInformation { id: self.id });
        }
        let volume = volume_calc
            .volumes
            .get(&self.id)
            .ok_or(MaterialError::NoVolumeInformation { id: self.id })?;
        self.volume = Some(volume.mean);
        self.atoms = volume_calc.atoms.get(&self.id).cloned().unwrap_or_default();
        Ok(())
    }

    /// Instance paths through the geometry tree.
    pub fn paths(&self) -> Result<&[String]> {
        self.paths
            .as_deref()
            .ok_or(MaterialError::PathsNotDetermined { id: self.id })
    }

    pub fn num_instances(&self) -> Result<usize> {
        self.num_instances
            .ok_or(MaterialError::InstancesNotDetermined { id: self.id })
    }

    /// Record the paths found by a geometry traversal; one instance per path.
    pub fn set_paths(&mut self, paths: Vec<String>) {
        self.num_instances = Some(paths.len());
        self.paths = Some(paths);
    }

    pub fn nuclides(&self) -> &[NuclideEntry] {
        &self.nuclides
    }

    pub fn elements(&self) -> &[ElementEntry] {
        &self.elements
    }

    pub fn macroscopic(&self) -> Option<&Macroscopic> {
        self.macroscopic.as_ref()
    }

    pub fn s_alpha_beta(&self) -> &[String] {
        &self.sab
    }

    pub fn convert_to_distrib_comps(&self) -> bool {
        self.convert_to_distrib_comps
    }

    /// Emit the composition as a distributed `compositions` block.
    pub fn set_convert_to_distrib_comps(&mut self) {
        self.warn_experimental();
        self.convert_to_distrib_comps = true;
    }

    pub fn distrib_otf_file(&self) -> Option<&str> {
        self.distrib_otf_file.as_deref()
    }

    /// Point a distributed composition at an externally stored file.
    pub fn set_distrib_otf_file(&mut self, filename: Option<String>) {
        self.warn_experimental();
        self.distrib_otf_file = filename;
    }

    fn warn_experimental(&mut self) {
        self.diagnostics.push(
            DiagnosticKind::Experimental,
            format!(
                "Distributed compositions for Material ID=\"{}\" are not yet supported by a released engine version",
                self.id
            ),
        );
    }

    pub fn data(&self) -> &dyn NuclideData {
        self.data.as_ref()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    fn check_no_macroscopic(&self, entry: &'static str) -> Result<()> {
        if self.macroscopic.is_some() {
            return Err(MaterialError::MacroscopicPresent { id: self.id, entry });
        }
        Ok(())
    }

    fn check_percent(&self, entry: &'static str, percent: f64) -> Result<()> {
        if !percent.is_finite() || percent < 0.0 {
            return Err(MaterialError::InvalidPercent {
                id: self.id,
                entry,
                value: percent,
            });
        }
        Ok(())
    }

    /// Add a nuclide. `percent_type` is one of `"ao"`, `"wo"` or `"at/g-cm"`.
    ///
    /// Adding a nuclide that is already present replaces its amount in place.
    pub fn add_nuclide(
        &mut self,
        nuclide: impl Into<Nuclide>,
        percent: f64,
        percent_type: &str,
    ) -> Result<()> {
        self.check_no_macroscopic(NUCLIDE)?;
        self.check_percent(NUCLIDE, percent)?;
        let percent_type = parse_percent_type(
            self.id,
            NUCLIDE,
            percent_type,
            &[PercentType::Ao, PercentType::Wo, PercentType::AtGCm],
        )?;

        let entry = NuclideEntry::new(nuclide.into(), percent, percent_type);
        match self
            .nuclides
            .iter_mut()
            .find(|e| e.nuclide.name == entry.nuclide.name)
        {
            Some(existing) => *existing = entry,
            None => self.nuclides.push(entry),
        }
        Ok(())
    }

    /// Remove a nuclide by exact name; absent names are ignored.
    pub fn remove_nuclide(&mut self, nuclide: &str) {
        if let Some(pos) = self.nuclides.iter().position(|e| e.nuclide.name == nuclide) {
            self.nuclides.remove(pos);
        }
    }

    /// Add a natural element by symbol or English name.
    ///
    /// `enrichment` is the U235 weight percent and is only accepted for
    /// uranium, strictly between 0 and 100/1.008. Values above 5 are accepted
    /// with a [`DiagnosticKind::HighEnrichment`] advisory.
    pub fn add_element(
        &mut self,
        element: impl Into<Element>,
        percent: f64,
        percent_type: &str,
        enrichment: Option<f64>,
    ) -> Result<()> {
        self.check_no_macroscopic(ELEMENT)?;
        self.check_percent(ELEMENT, percent)?;
        let percent_type = parse_percent_type(
            self.id,
            ELEMENT,
            percent_type,
            &[PercentType::Ao, PercentType::Wo],
        )?;
        let element = self.resolve_element(element.into())?;

        if let Some(enrichment) = enrichment {
            if element.name != "U" {
                return Err(MaterialError::EnrichmentNotUranium {
                    id: self.id,
                    element: element.name,
                });
            }
            if !(enrichment > 0.0 && enrichment < MAX_ENRICHMENT) {
                return Err(MaterialError::EnrichmentOutOfRange {
                    id: self.id,
                    value: enrichment,
                });
            }
            if enrichment > ENRICHMENT_WARNING_THRESHOLD {
                self.diagnostics.push(
                    DiagnosticKind::HighEnrichment,
                    format!(
                        "A uranium enrichment of {} was given for Material ID=\"{}\". The U234/U235 \
                         mass ratio is assumed constant at 0.008, which is only valid at low \
                         enrichments. Consider setting the isotopic composition manually for \
                         enrichments over 5%.",
                        enrichment, self.id
                    ),
                );
            }
        }

        let entry = ElementEntry {
            element,
            percent,
            percent_type,
            enrichment,
        };
        match self
            .elements
            .iter_mut()
            .find(|e| e.element.name == entry.element.name)
        {
            Some(existing) => *existing = entry,
            None => self.elements.push(entry),
        }
        Ok(())
    }

    fn resolve_element(&self, element: Element) -> Result<Element> {
        if self.data.natural_abundances(&element.name).is_ok() {
            return Ok(element);
        }
        let resolved = Element::from_symbol_or_name(&element.name)
            .filter(|e| self.data.natural_abundances(&e.name).is_ok())
            .ok_or_else(|| MaterialError::UnknownElement(element.name.clone()))?;
        Ok(Element {
            name: resolved.name,
            scattering: element.scattering,
        })
    }

    /// Remove an element by exact symbol; absent symbols are ignored.
    pub fn remove_element(&mut self, element: &str) {
        self.elements.retain(|e| e.element.name != element);
    }

    /// Replace the composition with a macroscopic data set.
    ///
    /// Fails if any nuclide, element or S(α,β) table is present, or if a
    /// macroscopic is already set. If no density has been given yet it
    /// defaults to 1.0 in `macro` units.
    pub fn add_macroscopic(&mut self, macroscopic: impl Into<Macroscopic>) -> Result<()> {
        let macroscopic = macroscopic.into();
        if !self.nuclides.is_empty() || !self.elements.is_empty() || !self.sab.is_empty() {
            return Err(MaterialError::IncompatibleWithMacroscopic {
                id: self.id,
                name: macroscopic.name,
            });
        }
        if self.macroscopic.is_some() {
            return Err(MaterialError::MacroscopicAlreadySet { id: self.id });
        }
        self.macroscopic = Some(macroscopic);

        if self.density.is_none() {
            self.set_density("macro", Some(1.0))?;
        }
        Ok(())
    }

    pub fn remove_macroscopic(&mut self, name: &str) -> Result<()> {
        match &self.macroscopic {
            None => Err(MaterialError::MacroscopicNotSet { id: self.id }),
            Some(current) if current.name != name => Err(MaterialError::MacroscopicMismatch {
                id: self.id,
                name: name.to_string(),
                current: current.name.clone(),
            }),
            Some(_) => {
                self.macroscopic = None;
                Ok(())
            }
        }
    }

    /// Attach an S(α,β) table, stored under its canonical name.
    pub fn add_s_alpha_beta(&mut self, name: &str) -> Result<()> {
        self.check_no_macroscopic(SAB)?;
        let new_name = self.data.thermal_name(name);
        if new_name != name {
            self.diagnostics.push(
                DiagnosticKind::ThermalNameChanged,
                format!(
                    "S(a,b) tables follow the GND naming convention. Table \"{}\" is being renamed as \"{}\".",
                    name, new_name
                ),
            );
        }
        if !self.sab.contains(&new_name) {
            self.sab.push(new_name);
        }
        Ok(())
    }

    /// Remove an S(α,β) table by exact stored name; absent names are ignored.
    pub fn remove_s_alpha_beta(&mut self, name: &str) {
        self.sab.retain(|s| s != name);
    }

    /// Request isotropic-in-lab scattering for every nuclide and element.
    pub fn make_isotropic_in_lab(&mut self) {
        for entry in self.nuclides.iter_mut() {
            entry.nuclide.scattering = Some(ISO_IN_LAB.to_string());
        }
        for entry in self.elements.iter_mut() {
            entry.element.scattering = Some(ISO_IN_LAB.to_string());
        }
    }

    /// Nuclide names with elements expanded: nuclide entries first, then each
    /// element's isotopes. Repeats are kept.
    pub fn get_nuclides(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.nuclides.iter().map(|e| e.nuclide.name.clone()).collect();
        for element in &self.elements {
            for iso in element.expand(self.data.as_ref())? {
                names.push(iso.nuclide.name);
            }
        }
        Ok(names)
    }

    /// Every nuclide with its amount after element expansion.
    ///
    /// A name seen again later overwrites the earlier amount but keeps its
    /// first position.
    pub fn get_nuclide_densities(&self) -> Result<IndexMap<String, NuclideEntry>> {
        let mut densities: IndexMap<String, NuclideEntry> = IndexMap::new();
        for entry in &self.nuclides {
            densities.insert(entry.nuclide.name.clone(), entry.clone());
        }
        for element in &self.elements {
            for iso in element.expand(self.data.as_ref())? {
                densities.insert(iso.nuclide.name.clone(), iso);
            }
        }
        Ok(densities)
    }

    /// Absolute atom density of every nuclide in atom/b-cm.
    pub fn get_nuclide_atom_densities(&self) -> Result<IndexMap<String, f64>> {
        let basis = self
            .density_units
            .and_then(|u| u.basis(self.density))
            .ok_or(MaterialError::DensityNotSet { id: self.id })?;
        let densities = self.get_nuclide_densities()?;
        units::atom_densities(basis, &densities, self.data.as_ref())
    }

    /// Mean molar mass of the expanded composition in g/mol.
    pub fn average_molar_mass(&self) -> Result<f64> {
        let densities = self.get_nuclide_densities()?;
        units::average_molar_mass(&densities, self.data.as_ref())
    }

    fn fresh_copy(&self, registry: &mut IdRegistry) -> Material {
        let mut clone = self.clone();
        clone.id = registry.allocate();
        clone.paths = None;
        clone.num_instances = None;
        clone.diagnostics = Diagnostics::new();
        clone
    }

    /// Deep copy with a new id and no instance information.
    pub fn clone_with_new_id(&self, registry: &mut IdRegistry) -> Material {
        self.fresh_copy(registry)
    }

    /// Deep copy within a clone pass: the first call for this material makes
    /// the copy, later calls in the same pass return that same copy.
    pub fn clone_with_memo<'m>(
        &self,
        registry: &mut IdRegistry,
        memo: &'m mut CloneMemo,
    ) -> &'m Material {
        let index = match memo.index.get(&self.id) {
            Some(&index) => index,
            None => {
                memo.clones.push(self.fresh_copy(registry));
                let index = memo.clones.len() - 1;
                memo.index.insert(self.id, index);
                index
            }
        };
        &memo.clones[index]
    }

    fn nuclide_xml(entry: &NuclideEntry, distrib: bool) -> XmlElement {
        let mut element = XmlElement::new("nuclide");
        element.set("name", entry.nuclide.name.as_str());
        if !distrib {
            element.set(entry.percent_type.xml_attribute(), format_float(entry.percent));
        }
        if let Some(scattering) = &entry.nuclide.scattering {
            element.set("scattering", scattering.as_str());
        }
        element
    }

    fn macroscopic_xml(macroscopic: &Macroscopic) -> XmlElement {
        let mut element = XmlElement::new("macroscopic");
        element.set("name", macroscopic.name.as_str());
        element
    }

    fn composition_xml(&self, distrib: bool) -> Result<Vec<XmlElement>> {
        if let Some(macroscopic) = &self.macroscopic {
            return Ok(vec![Self::macroscopic_xml(macroscopic)]);
        }
        let mut children: Vec<XmlElement> = self
            .nuclides
            .iter()
            .map(|e| Self::nuclide_xml(e, distrib))
            .collect();
        for element in &self.elements {
            for iso in element.expand(self.data.as_ref())? {
                children.push(Self::nuclide_xml(&iso, distrib));
            }
        }
        Ok(children)
    }

    fn distributed_xml(&self) -> Result<XmlElement> {
        let mut compositions = XmlElement::new("compositions");
        if let Some(macroscopic) = &self.macroscopic {
            compositions.push(Self::macroscopic_xml(macroscopic));
            return Ok(compositions);
        }
        let entries: Vec<(f64, PercentType)> = self
            .nuclides
            .iter()
            .map(|e| (e.percent, e.percent_type))
            .chain(self.elements.iter().map(|e| (e.percent, e.percent_type)))
            .collect();
        let shared_type = entries
            .first()
            .map(|(_, t)| *t)
            .ok_or(MaterialError::EmptyDistributedComposition { id: self.id })?;
        if entries.iter().any(|(_, t)| *t != shared_type) {
            return Err(MaterialError::MixedDistributedPercentTypes { id: self.id });
        }

        match &self.distrib_otf_file {
            None => {
                let values: Vec<String> = entries.iter().map(|(p, _)| format_float(*p)).collect();
                compositions.push(XmlElement::new("values").with_text(values.join(" ")));
                compositions.push(XmlElement::new("units").with_text(shared_type.as_str()));
            }
            Some(path) => {
                compositions.push(XmlElement::new("otf_file_path").with_text(path.as_str()));
            }
        }
        for child in self.composition_xml(true)? {
            compositions.push(child);
        }
        Ok(compositions)
    }

    /// Build the `material` element for `materials.xml`.
    pub fn to_xml_element(&self) -> Result<XmlElement> {
        let mut element = XmlElement::new("material");
        element.set("id", self.id.to_string());
        if !self.name.is_empty() {
            element.set("name", self.name.as_str());
        }
        if self.depletable {
            element.set("depletable", "true");
        }

        if let Some(temperature) = self.temperature {
            element.push(XmlElement::new("temperature").with_text(format_float(temperature)));
        }

        let is_sum = self.density_units == Some(DensityUnits::Sum);
        match (self.density, self.density_units) {
            (_, Some(units)) if is_sum => {
                let density = element.sub_element("density");
                density.set("units", units.as_str());
            }
            (Some(value), Some(units)) => {
                let density = element.sub_element("density");
                density.set("value", format_float(value));
                density.set("units", units.as_str());
            }
            _ => return Err(MaterialError::DensityNotSet { id: self.id }),
        }

        if self.convert_to_distrib_comps {
            element.push(self.distributed_xml()?);
        } else {
            for child in self.composition_xml(false)? {
                element.push(child);
            }
        }

        for sab in &self.sab {
            element.sub_element("sab").set("name", sab.as_str());
        }
        Ok(element)
    }
}

/// Equality follows identity: id, name and S(α,β) tables. Densities and
/// compositions are not compared since a rebuilt material carries them in
/// atom/b-cm regardless of the units it was defined with.
impl PartialEq for Material {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.sab == other.sab
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Material")?;
        writeln!(f, "{: <16}=\t{}", "\tID", self.id)?;
        writeln!(f, "{: <16}=\t{}", "\tName", self.name)?;
        match self.temperature {
            Some(t) => writeln!(f, "{: <16}=\t{}", "\tTemperature", t)?,
            None => writeln!(f, "{: <16}=\tNone", "\tTemperature")?,
        }
        let density = self
            .density
            .map(|d| d.to_string())
            .unwrap_or_else(|| "None".to_string());
        let units = self.density_units.map(|u| u.as_str()).unwrap_or("");
        writeln!(f, "{: <16}=\t{} [{}]", "\tDensity", density, units)?;

        writeln!(f, "{: <16}", "\tS(a,b) Tables")?;
        for sab in &self.sab {
            writeln!(f, "{: <16}=\t{}", "\tS(a,b)", sab)?;
        }

        writeln!(f, "{: <16}", "\tNuclides")?;
        for e in &self.nuclides {
            writeln!(
                f,
                "{: <16}=\t{: <12} [{}]",
                format!("\t{}", e.nuclide.name),
                e.percent,
                e.percent_type
            )?;
        }

        if let Some(macroscopic) = &self.macroscopic {
            writeln!(f, "{: <16}", "\tMacroscopic Data")?;
            writeln!(f, "{: <16}", format!("\t{}", macroscopic.name))?;
        }

        writeln!(f, "{: <16}", "\tElements")?;
        for e in &self.elements {
            let label = format!("\t{}", e.element.name);
            match e.enrichment {
                None => writeln!(f, "{: <16}=\t{: <12} [{}]", label, e.percent, e.percent_type)?,
                Some(enr) => writeln!(
                    f,
                    "{: <16}=\t{: <12} [{}] @ {} w/o enrichment",
                    label, e.percent, e.percent_type, enr
                )?,
            }
        }
        Ok(())
    }
}

/// Clones made during one clone pass, one per original material id.
#[derive(Debug, Default)]
pub struct CloneMemo {
    clones: Vec<Material>,
    index: HashMap<u32, usize>,
}

impl CloneMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// The clone made for the material with `original_id`, if any.
    pub fn get(&self, original_id: u32) -> Option<&Material> {
        self.index.get(&original_id).map(|&i| &self.clones[i])
    }

    pub fn len(&self) -> usize {
        self.clones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clones.is_empty()
    }

    /// Consume the pass, yielding the clones in creation order.
    pub fn into_clones(self) -> Vec<Material> {
        self.clones
    }
}
