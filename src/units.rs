//! Density units and the conversion of a material's composition to absolute
//! atom densities in atom/b-cm.

use crate::error::{MaterialError, Result};
use crate::nuclide::NuclideEntry;
use crate::provider::NuclideData;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One barn-centimetre expressed in cm³.
pub const BARN_CM_IN_CM3: f64 = 1.0e-24;

/// Units accepted for a material density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DensityUnits {
    #[serde(rename = "g/cm3")]
    GramPerCm3,
    #[serde(rename = "g/cc")]
    GramPerCc,
    #[serde(rename = "kg/m3")]
    KilogramPerM3,
    #[serde(rename = "atom/b-cm")]
    AtomPerBarnCm,
    #[serde(rename = "atom/cm3")]
    AtomPerCm3,
    #[serde(rename = "atom/cc")]
    AtomPerCc,
    /// Density is the sum of the constituent atom densities.
    #[serde(rename = "sum")]
    Sum,
    /// Macroscopic cross-section mode.
    #[serde(rename = "macro")]
    Macro,
}

impl DensityUnits {
    pub const ALL: [DensityUnits; 8] = [
        DensityUnits::GramPerCm3,
        DensityUnits::GramPerCc,
        DensityUnits::KilogramPerM3,
        DensityUnits::AtomPerBarnCm,
        DensityUnits::AtomPerCm3,
        DensityUnits::AtomPerCc,
        DensityUnits::Sum,
        DensityUnits::Macro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DensityUnits::GramPerCm3 => "g/cm3",
            DensityUnits::GramPerCc => "g/cc",
            DensityUnits::KilogramPerM3 => "kg/m3",
            DensityUnits::AtomPerBarnCm => "atom/b-cm",
            DensityUnits::AtomPerCm3 => "atom/cm3",
            DensityUnits::AtomPerCc => "atom/cc",
            DensityUnits::Sum => "sum",
            DensityUnits::Macro => "macro",
        }
    }

    /// Resolve a stored density into the basis used for conversion.
    ///
    /// Returns `None` when a value is required but missing.
    pub fn basis(&self, density: Option<f64>) -> Option<DensityBasis> {
        if *self == DensityUnits::Sum {
            return Some(DensityBasis::Sum);
        }
        let value = density?;
        Some(match self {
            DensityUnits::GramPerCm3 | DensityUnits::GramPerCc => DensityBasis::Mass(value),
            DensityUnits::KilogramPerM3 => DensityBasis::Mass(1.0e-3 * value),
            DensityUnits::AtomPerBarnCm | DensityUnits::Macro => DensityBasis::Atom(value),
            DensityUnits::AtomPerCm3 | DensityUnits::AtomPerCc => {
                DensityBasis::Atom(BARN_CM_IN_CM3 * value)
            }
            DensityUnits::Sum => DensityBasis::Sum,
        })
    }
}

impl FromStr for DensityUnits {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self> {
        DensityUnits::ALL
            .iter()
            .copied()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| MaterialError::InvalidDensityUnits(s.to_string()))
    }
}

impl fmt::Display for DensityUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Density normalized to either a mass basis (g/cm³) or an atom basis
/// (atom/b-cm). `Sum` defers the atom-basis total to the composition itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DensityBasis {
    Mass(f64),
    Atom(f64),
    Sum,
}

/// Mean molar mass (g/mol) of a composition.
///
/// Atom-percent entries contribute their amount to the moles and amount × mass
/// to the total mass; every other entry is read as a mass and contributes
/// amount / mass to the moles. Zero total moles is a
/// [`MaterialError::ZeroComposition`].
pub fn average_molar_mass(
    entries: &IndexMap<String, NuclideEntry>,
    data: &dyn NuclideData,
) -> Result<f64> {
    let mut mass = 0.0;
    let mut moles = 0.0;
    for (name, entry) in entries {
        let atomic_mass = data.atomic_mass(name)?;
        if entry.percent_type.is_atom() {
            mass += entry.percent * atomic_mass;
            moles += entry.percent;
        } else {
            moles += entry.percent / atomic_mass;
            mass += entry.percent;
        }
    }
    if moles == 0.0 {
        return Err(MaterialError::ZeroComposition);
    }
    Ok(mass / moles)
}

/// Distribute a density over an expanded composition, giving atom/b-cm per nuclide.
pub fn atom_densities(
    basis: DensityBasis,
    entries: &IndexMap<String, NuclideEntry>,
    data: &dyn NuclideData,
) -> Result<IndexMap<String, f64>> {
    if entries.is_empty() {
        return Ok(IndexMap::new());
    }

    let mut fractions: Vec<f64> = entries.values().map(|e| e.percent).collect();
    let all_atom = entries.values().all(|e| e.percent_type.is_atom());

    // Only look up masses when something actually needs them
    let needs_mass = !all_atom || matches!(basis, DensityBasis::Mass(_));
    let avg_molar_mass = if needs_mass {
        average_molar_mass(entries, data)?
    } else {
        0.0
    };

    let density = match basis {
        DensityBasis::Sum => fractions.iter().sum(),
        DensityBasis::Atom(value) => value,
        DensityBasis::Mass(value) => {
            value.abs() / avg_molar_mass * BARN_CM_IN_CM3 * data.avogadro()
        }
    };

    if !all_atom {
        for (fraction, name) in fractions.iter_mut().zip(entries.keys()) {
            *fraction *= avg_molar_mass / data.atomic_mass(name)?;
        }
    }

    let total: f64 = fractions.iter().sum();
    if total == 0.0 {
        return Err(MaterialError::ZeroComposition);
    }
    Ok(entries
        .keys()
        .zip(fractions)
        .map(|(name, fraction)| (name.clone(), density * fraction / total))
        .collect())
}
