use approx::assert_relative_eq;
use materials_deck::{
    CloneMemo, DiagnosticKind, IdRegistry, Material, MaterialError, PercentType, AVOGADRO,
    MAX_ENRICHMENT,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn atom_densities_sum_to_declared_atom_density() {
    init_logging();
    let mut reg = IdRegistry::new();
    let mut material = Material::new(&mut reg);
    material.add_nuclide("H1", 2.0, "ao").unwrap();
    material.add_nuclide("O16", 1.0, "ao").unwrap();
    material.add_element("Fe", 0.3, "ao", None).unwrap();
    material.set_density("atom/b-cm", Some(0.0734)).unwrap();

    let densities = material.get_nuclide_atom_densities().unwrap();
    let total: f64 = densities.values().sum();
    assert_relative_eq!(total, 0.0734, max_relative = 1e-12);
    assert_relative_eq!(densities["H1"] / densities["O16"], 2.0, max_relative = 1e-12);
}

#[test]
fn enriched_uranium_weight_percent_round_trips() {
    let mut reg = IdRegistry::new();
    for enrichment in [0.7, 3.2, 4.95, 19.75] {
        let mut material = Material::new(&mut reg);
        material.add_element("U", 87.5, "wo", Some(enrichment)).unwrap();

        let densities = material.get_nuclide_densities().unwrap();
        assert!(densities.values().all(|e| e.percent_type == PercentType::Wo));
        let total: f64 = densities.values().map(|e| e.percent).sum();
        assert_relative_eq!(total, 87.5, max_relative = 1e-10);
        assert_relative_eq!(
            densities["U235"].percent,
            87.5 * enrichment / 100.0,
            max_relative = 1e-9
        );
    }
}

#[test]
fn natural_element_weight_percent_round_trips() {
    let mut reg = IdRegistry::new();
    let mut material = Material::new(&mut reg);
    material.add_element("Cr", 18.0, "wo", None).unwrap();
    let total: f64 = material
        .get_nuclide_densities()
        .unwrap()
        .values()
        .map(|e| e.percent)
        .sum();
    assert_relative_eq!(total, 18.0, max_relative = 1e-10);
}

#[test]
fn macroscopic_only_before_other_entries() {
    let mut reg = IdRegistry::new();

    let mut with_element = Material::new(&mut reg);
    with_element.add_element("C", 1.0, "ao", None).unwrap();
    assert!(matches!(
        with_element.add_macroscopic("graphite"),
        Err(MaterialError::IncompatibleWithMacroscopic { .. })
    ));

    let mut fresh = Material::new(&mut reg);
    fresh.add_macroscopic("graphite").unwrap();
    assert_eq!(fresh.density(), Some(1.0));
    assert_eq!(fresh.density_units().map(|u| u.as_str()), Some("macro"));
}

#[test]
fn enrichment_bounds_and_advisory() {
    init_logging();
    let mut reg = IdRegistry::new();
    let mut material = Material::new(&mut reg);

    assert!(material.add_element("U", 1.0, "ao", Some(0.0)).is_err());
    assert!(material
        .add_element("U", 1.0, "ao", Some(100.0 / 1.008))
        .is_err());
    assert_eq!(MAX_ENRICHMENT, 100.0 / 1.008);
    assert!(material.elements().is_empty());

    material.add_element("U", 1.0, "ao", Some(5.0)).unwrap();
    assert!(!material.diagnostics().contains(DiagnosticKind::HighEnrichment));

    material.add_element("U", 1.0, "ao", Some(5.1)).unwrap();
    let warnings: Vec<_> = material.take_diagnostics();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, DiagnosticKind::HighEnrichment);
}

#[test]
fn memoized_clone_pass() {
    let mut reg = IdRegistry::new();
    let mut original = Material::new(&mut reg);
    original.add_nuclide("O16", 1.0, "ao").unwrap();

    let mut pass = CloneMemo::new();
    let first = original.clone_with_memo(&mut reg, &mut pass) as *const Material;
    let second = original.clone_with_memo(&mut reg, &mut pass) as *const Material;
    assert_eq!(first, second);

    let mut other = CloneMemo::new();
    let a = pass.get(original.id()).unwrap().id();
    let b = original.clone_with_memo(&mut reg, &mut other).id();
    assert_ne!(a, b);
    assert_ne!(a, original.id());
    assert_ne!(b, original.id());
    assert_eq!(pass.into_clones().len(), 1);
}

#[test]
fn uranium_dioxide_mass_density_scenario() {
    let mut reg = IdRegistry::new();
    let mut material = Material::with_id(&mut reg, 1).unwrap();
    material.set_density("g/cm3", Some(10.0)).unwrap();
    material.add_nuclide("U235", 0.02, "ao").unwrap();
    material.add_nuclide("O16", 0.04, "ao").unwrap();

    let densities = material.get_nuclide_atom_densities().unwrap();
    assert_eq!(densities.len(), 2);

    let (u235, o16) = (235.0439301, 15.99491461957);
    let avg = (0.02 * u235 + 0.04 * o16) / 0.06;
    let total = 10.0 / avg * 1.0e-24 * AVOGADRO;
    assert_relative_eq!(densities["U235"], total / 3.0, max_relative = 1e-9);
    assert_relative_eq!(densities["O16"], 2.0 * total / 3.0, max_relative = 1e-9);
    assert_relative_eq!(material.average_molar_mass().unwrap(), avg, max_relative = 1e-12);
}

#[test]
fn kilograms_per_cubic_metre_match_grams_per_cubic_centimetre() {
    let mut reg = IdRegistry::new();
    let mut a = Material::new(&mut reg);
    a.add_element("Fe", 1.0, "wo", None).unwrap();
    let mut b = a.clone_with_new_id(&mut reg);
    a.set_density("g/cm3", Some(7.87)).unwrap();
    b.set_density("kg/m3", Some(7870.0)).unwrap();

    let da = a.get_nuclide_atom_densities().unwrap();
    let db = b.get_nuclide_atom_densities().unwrap();
    for (name, value) in &da {
        assert_relative_eq!(*value, db[name], max_relative = 1e-12);
    }
}
