use crate::data::{ATOMIC_MASSES, AVOGADRO, ELEMENT_NUCLIDES, NATURAL_ABUNDANCE, THERMAL_NAMES};
use crate::error::{MaterialError, Result};
use crate::nuclide::{Nuclide, NuclideEntry, PercentType};
use std::fmt::Debug;

/// U234/U235 mass ratio assumed when a uranium enrichment is given.
pub const U234_TO_U235_MASS_RATIO: f64 = 0.008;

/// Source of nuclide masses, natural isotopic compositions and thermal
/// scattering table names.
///
/// [`StandardData`] serves the built-in tables; a [`crate::Material`] can be
/// pointed at any other implementation with [`crate::Material::with_data`].
pub trait NuclideData: Debug + Send + Sync {
    /// Atomic mass of `nuclide` in u.
    fn atomic_mass(&self, nuclide: &str) -> Result<f64>;

    /// Naturally occurring isotopes of `element` with their atom fractions,
    /// in the order they should be expanded.
    fn natural_abundances(&self, element: &str) -> Result<Vec<(String, f64)>>;

    /// Canonical form of a thermal scattering table name.
    fn thermal_name(&self, name: &str) -> String;

    fn avogadro(&self) -> f64 {
        AVOGADRO
    }

    /// Expand a natural element into `(isotope, percent, percent type)` entries.
    ///
    /// For uranium an `enrichment` (U235 weight percent) replaces the natural
    /// abundances: U234 is held at 0.008 × enrichment and U238 takes the rest.
    /// Weight-percent requests have their fractions converted from atom to mass
    /// basis using the element's mean atomic mass.
    fn expand_element(
        &self,
        element: &str,
        percent: f64,
        percent_type: PercentType,
        enrichment: Option<f64>,
    ) -> Result<Vec<NuclideEntry>> {
        let mut abundances = self.natural_abundances(element)?;

        if let Some(enrichment) = enrichment {
            // Mass fractions first, then to mole fractions
            abundances = vec![
                ("U234".to_string(), U234_TO_U235_MASS_RATIO * enrichment),
                ("U235".to_string(), enrichment),
                (
                    "U238".to_string(),
                    100.0 - (1.0 + U234_TO_U235_MASS_RATIO) * enrichment,
                ),
            ];
            for (nuclide, fraction) in abundances.iter_mut() {
                *fraction /= self.atomic_mass(nuclide)?;
            }
            normalize(&mut abundances);
        }

        if percent_type == PercentType::Wo {
            let mut element_mass = 0.0;
            for (nuclide, fraction) in &abundances {
                element_mass += self.atomic_mass(nuclide)? * fraction;
            }
            for (nuclide, fraction) in abundances.iter_mut() {
                *fraction *= self.atomic_mass(nuclide)? / element_mass;
            }
            normalize(&mut abundances);
        }

        Ok(abundances
            .into_iter()
            .map(|(name, fraction)| {
                NuclideEntry::new(Nuclide::new(name), percent * fraction, percent_type)
            })
            .collect())
    }
}

fn normalize(fractions: &mut [(String, f64)]) {
    let total: f64 = fractions.iter().map(|(_, f)| f).sum();
    if total > 0.0 {
        for (_, f) in fractions.iter_mut() {
            *f /= total;
        }
    }
}

/// Built-in data provider backed by the static tables in [`crate::data`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardData;

impl NuclideData for StandardData {
    fn atomic_mass(&self, nuclide: &str) -> Result<f64> {
        ATOMIC_MASSES
            .get(nuclide)
            .copied()
            .ok_or_else(|| MaterialError::UnknownNuclide(nuclide.to_string()))
    }

    fn natural_abundances(&self, element: &str) -> Result<Vec<(String, f64)>> {
        let isotopes = ELEMENT_NUCLIDES
            .get(element)
            .ok_or_else(|| MaterialError::UnknownElement(element.to_string()))?;
        Ok(isotopes
            .iter()
            .filter_map(|&iso| {
                NATURAL_ABUNDANCE
                    .get(iso)
                    .filter(|&&a| a > 0.0)
                    .map(|&a| (iso.to_string(), a))
            })
            .collect())
    }

    fn thermal_name(&self, name: &str) -> String {
        if THERMAL_NAMES.iter().any(|(proper, _)| *proper == name) {
            return name.to_string();
        }
        // Legacy names carry a temperature suffix such as ".20t"
        let lowered = name.to_lowercase();
        let stem = lowered.split('.').next().unwrap_or(&lowered);
        for (proper, aliases) in THERMAL_NAMES {
            if aliases.contains(&stem) || proper.to_lowercase() == lowered {
                return proper.to_string();
            }
        }
        if name.starts_with("c_") {
            name.replace('.', "_")
        } else {
            format!("c_{}", name.replace('.', "_"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_atomic_mass_lookup() {
        let data = StandardData;
        assert_relative_eq!(data.atomic_mass("C12").unwrap(), 12.0);
        assert!(matches!(
            data.atomic_mass("Xx999"),
            Err(MaterialError::UnknownNuclide(_))
        ));
    }

    #[test]
    fn test_natural_abundances_unknown_element() {
        assert!(matches!(
            StandardData.natural_abundances("Qq"),
            Err(MaterialError::UnknownElement(_))
        ));
    }

    #[test]
    fn test_expand_ao_scales_by_abundance() {
        let isotopes = StandardData
            .expand_element("Li", 2.0, PercentType::Ao, None)
            .unwrap();
        assert_eq!(isotopes.len(), 2);
        assert_eq!(isotopes[0].name(), "Li6");
        assert_eq!(isotopes[1].name(), "Li7");
        assert_relative_eq!(isotopes[0].percent, 2.0 * 0.07589, max_relative = 1e-12);
        let total: f64 = isotopes.iter().map(|e| e.percent).sum();
        assert_relative_eq!(total, 2.0, max_relative = 1e-9);
    }

    #[test]
    fn test_expand_wo_preserves_total_weight() {
        let isotopes = StandardData
            .expand_element("Fe", 0.7, PercentType::Wo, None)
            .unwrap();
        assert!(isotopes.iter().all(|e| e.percent_type == PercentType::Wo));
        let total: f64 = isotopes.iter().map(|e| e.percent).sum();
        assert_relative_eq!(total, 0.7, max_relative = 1e-12);
        // Heavier isotopes gain weight share relative to their atom share
        let fe58 = isotopes.iter().find(|e| e.name() == "Fe58").unwrap();
        assert!(fe58.percent / 0.7 > NATURAL_ABUNDANCE["Fe58"]);
    }

    #[test]
    fn test_enriched_uranium_weight_fractions() {
        let data = StandardData;
        let isotopes = data
            .expand_element("U", 1.0, PercentType::Wo, Some(4.5))
            .unwrap();
        let names: Vec<&str> = isotopes.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["U234", "U235", "U238"]);
        assert_relative_eq!(isotopes[1].percent, 0.045, max_relative = 1e-9);
        assert_relative_eq!(isotopes[0].percent, 0.008 * 0.045, max_relative = 1e-9);
    }

    #[test]
    fn test_enriched_uranium_atom_fractions_favour_light_isotope() {
        let isotopes = StandardData
            .expand_element("U", 1.0, PercentType::Ao, Some(3.0))
            .unwrap();
        // Atom fraction of U235 exceeds its weight fraction
        assert!(isotopes[1].percent > 0.03);
        let total: f64 = isotopes.iter().map(|e| e.percent).sum();
        assert_relative_eq!(total, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_thermal_name_canonicalization() {
        let data = StandardData;
        assert_eq!(data.thermal_name("c_H_in_H2O"), "c_H_in_H2O");
        assert_eq!(data.thermal_name("lwtr"), "c_H_in_H2O");
        assert_eq!(data.thermal_name("HH2O.71t"), "c_H_in_H2O");
        assert_eq!(data.thermal_name("grph.20t"), "c_Graphite");
        assert_eq!(data.thermal_name("unobtainium"), "c_unobtainium");
        assert_eq!(data.thermal_name("abc.10t"), "c_abc_10t");
    }
}
