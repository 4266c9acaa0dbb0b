// Composition entries that name a single nuclide or a macroscopic data set
use crate::error::{MaterialError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scattering treatment requested for every reaction of a nuclide.
pub const ISO_IN_LAB: &str = "iso-in-lab";

/// How the `percent` of a composition entry is to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PercentType {
    /// Atom percent.
    #[serde(rename = "ao")]
    Ao,
    /// Weight percent.
    #[serde(rename = "wo")]
    Wo,
    /// Atoms per gram-centimetre, accepted for nuclides only.
    #[serde(rename = "at/g-cm")]
    AtGCm,
}

impl PercentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PercentType::Ao => "ao",
            PercentType::Wo => "wo",
            PercentType::AtGCm => "at/g-cm",
        }
    }

    /// True for atom-percent entries, the only ones counted on a mole basis.
    pub fn is_atom(&self) -> bool {
        matches!(self, PercentType::Ao)
    }

    /// Attribute name used for this entry in `materials.xml`.
    pub fn xml_attribute(&self) -> &'static str {
        if self.is_atom() {
            "ao"
        } else {
            "wo"
        }
    }
}

impl FromStr for PercentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ao" => Ok(PercentType::Ao),
            "wo" => Ok(PercentType::Wo),
            "at/g-cm" => Ok(PercentType::AtGCm),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for PercentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A nuclide reference, e.g. `"U235"`, with an optional scattering override.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nuclide {
    pub name: String,
    pub scattering: Option<String>,
}

impl Nuclide {
    pub fn new(name: impl Into<String>) -> Self {
        Nuclide {
            name: name.into(),
            scattering: None,
        }
    }
}

impl From<&str> for Nuclide {
    fn from(name: &str) -> Self {
        Nuclide::new(name)
    }
}

impl From<String> for Nuclide {
    fn from(name: String) -> Self {
        Nuclide::new(name)
    }
}

impl fmt::Display for Nuclide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A nuclide together with its amount in a material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NuclideEntry {
    pub nuclide: Nuclide,
    pub percent: f64,
    pub percent_type: PercentType,
}

impl NuclideEntry {
    pub fn new(nuclide: Nuclide, percent: f64, percent_type: PercentType) -> Self {
        NuclideEntry {
            nuclide,
            percent,
            percent_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.nuclide.name
    }
}

/// A precomputed bulk cross-section data set, named by its library key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Macroscopic {
    pub name: String,
}

impl Macroscopic {
    pub fn new(name: impl Into<String>) -> Self {
        Macroscopic { name: name.into() }
    }
}

impl From<&str> for Macroscopic {
    fn from(name: &str) -> Self {
        Macroscopic::new(name)
    }
}

impl From<String> for Macroscopic {
    fn from(name: String) -> Self {
        Macroscopic::new(name)
    }
}

impl fmt::Display for Macroscopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Parse a percent type, restricted to `allowed`.
pub(crate) fn parse_percent_type(
    id: u32,
    entry: &'static str,
    percent_type: &str,
    allowed: &[PercentType],
) -> Result<PercentType> {
    percent_type
        .parse::<PercentType>()
        .ok()
        .filter(|p| allowed.contains(p))
        .ok_or_else(|| MaterialError::InvalidPercentType {
            id,
            entry,
            percent_type: percent_type.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_type_round_trip_strings() {
        for s in ["ao", "wo", "at/g-cm"] {
            let p: PercentType = s.parse().unwrap();
            assert_eq!(p.as_str(), s);
        }
        assert!("mo".parse::<PercentType>().is_err());
    }

    #[test]
    fn test_xml_attribute_collapses_non_atom_types() {
        assert_eq!(PercentType::Ao.xml_attribute(), "ao");
        assert_eq!(PercentType::Wo.xml_attribute(), "wo");
        assert_eq!(PercentType::AtGCm.xml_attribute(), "wo");
    }

    #[test]
    fn test_parse_percent_type_respects_allowed_set() {
        let allowed = [PercentType::Ao, PercentType::Wo];
        assert_eq!(
            parse_percent_type(3, "an Element", "wo", &allowed).unwrap(),
            PercentType::Wo
        );
        let err = parse_percent_type(3, "an Element", "at/g-cm", &allowed).unwrap_err();
        assert!(matches!(
            err,
            MaterialError::InvalidPercentType { id: 3, .. }
        ));
    }

    #[test]
    fn test_nuclide_from_str() {
        let n: Nuclide = "O16".into();
        assert_eq!(n.name, "O16");
        assert!(n.scattering.is_none());
        assert_eq!(n.to_string(), "O16");
    }
}
