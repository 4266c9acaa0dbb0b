use crate::data::{ELEMENT_NAMES, ELEMENT_NUCLIDES};
use crate::error::Result;
use crate::nuclide::{NuclideEntry, PercentType};
use crate::provider::NuclideData;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A natural element, e.g. `"Fe"`, expanded to its isotopes on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    /// Element symbol.
    pub name: String,
    /// Scattering override copied onto every expanded isotope.
    pub scattering: Option<String>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            scattering: None,
        }
    }

    /// Resolve a symbol or a lowercase English name (e.g. `"iron"`) to an element.
    pub fn from_symbol_or_name(input: &str) -> Option<Self> {
        let input = input.trim();
        if ELEMENT_NAMES.contains_key(input) {
            return Some(Element::new(input));
        }
        ELEMENT_NAMES
            .iter()
            .find(|(_, name)| **name == input)
            .map(|(symbol, _)| Element::new(*symbol))
    }

    /// Isotope names for this element in the built-in tables, by mass number.
    pub fn get_nuclides(&self) -> Vec<String> {
        ELEMENT_NUCLIDES
            .get(self.name.as_str())
            .map(|v| v.iter().map(|s| s.to_string()).collect())
            .unwrap_or_default()
    }

    /// Expand into isotope entries using `data`.
    pub fn expand(
        &self,
        data: &dyn NuclideData,
        percent: f64,
        percent_type: PercentType,
        enrichment: Option<f64>,
    ) -> Result<Vec<NuclideEntry>> {
        let mut isotopes = data.expand_element(&self.name, percent, percent_type, enrichment)?;
        for iso in isotopes.iter_mut() {
            iso.nuclide.scattering = self.scattering.clone();
        }
        Ok(isotopes)
    }
}

impl From<&str> for Element {
    fn from(name: &str) -> Self {
        Element::new(name)
    }
}

impl From<String> for Element {
    fn from(name: String) -> Self {
        Element::new(name)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An element together with its amount and optional U235 enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementEntry {
    pub element: Element,
    pub percent: f64,
    pub percent_type: PercentType,
    pub enrichment: Option<f64>,
}

impl ElementEntry {
    pub fn name(&self) -> &str {
        &self.element.name
    }

    pub fn expand(&self, data: &dyn NuclideData) -> Result<Vec<NuclideEntry>> {
        self.element
            .expand(data, self.percent, self.percent_type, self.enrichment)
    }
}
