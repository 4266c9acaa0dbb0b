use materials_deck::{Config, IdRegistry, Material, MaterialError, Materials, XmlElement};

fn fuel(reg: &mut IdRegistry) -> Material {
    let mut fuel = Material::new(reg);
    fuel.set_name("uo2");
    fuel.set_temperature(Some(900.0)).unwrap();
    fuel.set_depletable(true);
    fuel.set_density("g/cm3", Some(10.4)).unwrap();
    fuel.add_nuclide("O16", 2.0, "ao").unwrap();
    fuel.add_element("U", 1.0, "ao", Some(4.25)).unwrap();
    fuel
}

fn water(reg: &mut IdRegistry) -> Material {
    let mut water = Material::new(reg);
    water.set_name("water");
    water.set_density("sum", None).unwrap();
    water.add_nuclide("H1", 0.0667, "ao").unwrap();
    water.add_nuclide("O16", 0.0333, "ao").unwrap();
    water.add_s_alpha_beta("c_H_in_H2O").unwrap();
    water
}

fn nuclide_names(material: &XmlElement) -> Vec<&str> {
    material
        .find_all("nuclide")
        .filter_map(|n| n.get("name"))
        .collect()
}

#[test]
fn sum_density_has_units_only() {
    let mut reg = IdRegistry::new();
    let element = water(&mut reg).to_xml_element().unwrap();
    let density = element.find("density").unwrap();
    assert_eq!(density.get("units"), Some("sum"));
    assert_eq!(density.get("value"), None);
    assert_eq!(element.find("sab").and_then(|s| s.get("name")), Some("c_H_in_H2O"));
}

#[test]
fn nuclides_then_expanded_elements() {
    let mut reg = IdRegistry::new();
    let mut material = Material::new(&mut reg);
    material.set_density("g/cm3", Some(8.0)).unwrap();
    material.add_nuclide("C12", 0.01, "wo").unwrap();
    material.add_nuclide("Mn55", 0.02, "wo").unwrap();
    material.add_element("Fe", 0.97, "wo", None).unwrap();

    let element = material.to_xml_element().unwrap();
    let names = nuclide_names(&element);
    assert_eq!(names, vec!["C12", "Mn55", "Fe54", "Fe56", "Fe57", "Fe58"]);
    assert!(element.find_all("nuclide").all(|n| n.get("wo").is_some()));
}

#[test]
fn material_element_attributes() {
    let mut reg = IdRegistry::new();
    let element = fuel(&mut reg).to_xml_element().unwrap();
    assert_eq!(element.get("id"), Some("1"));
    assert_eq!(element.get("name"), Some("uo2"));
    assert_eq!(element.get("depletable"), Some("true"));
    assert_eq!(
        element.find("temperature").and_then(|t| t.text.as_deref()),
        Some("900.0")
    );
    let density = element.find("density").unwrap();
    assert_eq!(density.get("value"), Some("10.4"));
    assert_eq!(density.get("units"), Some("g/cm3"));
    assert_eq!(nuclide_names(&element), vec!["O16", "U234", "U235", "U238"]);
}

#[test]
fn macroscopic_material_xml() {
    let mut reg = IdRegistry::new();
    let mut material = Material::new(&mut reg);
    material.add_macroscopic("UO2").unwrap();
    let element = material.to_xml_element().unwrap();
    assert_eq!(element.find("macroscopic").and_then(|m| m.get("name")), Some("UO2"));
    assert!(element.find("nuclide").is_none());
    assert_eq!(element.find("density").and_then(|d| d.get("units")), Some("macro"));
}

#[test]
fn isotropic_in_lab_scattering_attribute() {
    let mut reg = IdRegistry::new();
    let mut material = water(&mut reg);
    material.make_isotropic_in_lab();
    let element = material.to_xml_element().unwrap();
    assert!(element
        .find_all("nuclide")
        .all(|n| n.get("scattering") == Some("iso-in-lab")));
}

#[test]
fn distributed_composition_inline_values() {
    let mut reg = IdRegistry::new();
    let mut material = Material::new(&mut reg);
    material.set_density("g/cm3", Some(1.0)).unwrap();
    material.add_nuclide("H1", 2.0, "ao").unwrap();
    material.add_element("O", 1.0, "ao", None).unwrap();
    material.set_convert_to_distrib_comps();

    let element = material.to_xml_element().unwrap();
    assert!(element.find("nuclide").is_none());
    let comps = element.find("compositions").unwrap();
    assert_eq!(comps.find("values").and_then(|v| v.text.as_deref()), Some("2.0 1.0"));
    assert_eq!(comps.find("units").and_then(|v| v.text.as_deref()), Some("ao"));
    let names = nuclide_names(comps);
    assert_eq!(names[0], "H1");
    assert!(comps.find_all("nuclide").all(|n| n.get("ao").is_none()));
}

#[test]
fn distributed_composition_of_macroscopic_material() {
    let mut reg = IdRegistry::new();
    let mut material = Material::new(&mut reg);
    material.add_macroscopic("UO2").unwrap();
    material.set_convert_to_distrib_comps();

    let element = material.to_xml_element().unwrap();
    assert!(element.find("macroscopic").is_none());
    let comps = element.find("compositions").unwrap();
    assert_eq!(comps.find("macroscopic").and_then(|m| m.get("name")), Some("UO2"));
    assert!(comps.find("values").is_none());
    assert!(comps.find("units").is_none());
    assert!(comps.find("nuclide").is_none());
}

#[test]
fn distributed_composition_otf_file_and_validation() {
    let mut reg = IdRegistry::new();
    let mut material = Material::new(&mut reg);
    material.set_density("g/cm3", Some(1.0)).unwrap();
    material.set_convert_to_distrib_comps();
    assert!(matches!(
        material.to_xml_element(),
        Err(MaterialError::EmptyDistributedComposition { .. })
    ));

    material.add_nuclide("H1", 2.0, "ao").unwrap();
    material.set_distrib_otf_file(Some("comps.h5".to_string()));
    let element = material.to_xml_element().unwrap();
    let comps = element.find("compositions").unwrap();
    assert_eq!(
        comps.find("otf_file_path").and_then(|p| p.text.as_deref()),
        Some("comps.h5")
    );
    assert!(comps.find("values").is_none());

    material.add_nuclide("O16", 1.0, "wo").unwrap();
    assert!(matches!(
        material.to_xml_element(),
        Err(MaterialError::MixedDistributedPercentTypes { .. })
    ));
}

#[test]
fn export_writes_deterministic_file() {
    let mut reg = IdRegistry::new();
    let mut config = Config::new();
    config.set_cross_sections("/nuclear_data/cross_sections.xml");

    let mut materials = Materials::from_config(&config);
    let late = {
        let mut m = Material::with_id(&mut reg, 20).unwrap();
        m.set_density("g/cm3", Some(2.7)).unwrap();
        m.add_element("Al", 1.0, "ao", None).unwrap();
        m
    };
    materials.append(late).unwrap();
    materials.append(fuel(&mut reg)).unwrap();
    materials.append(water(&mut reg)).unwrap();

    let path = std::env::temp_dir().join("materials_deck_export_test.xml");
    materials.export_to_xml(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, materials.to_xml_string().unwrap());

    assert!(written.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<materials>"));
    let cross = written.find("<cross_sections>").unwrap();
    let first = written.find("<material depletable=\"true\" id=\"1\" name=\"uo2\">").unwrap();
    let second = written.find("<material id=\"2\" name=\"water\">").unwrap();
    let last = written.find("<material id=\"20\">").unwrap();
    assert!(cross < first && first < second && second < last);
    assert!(written.contains("<density units=\"sum\"/>"));
    assert!(!written.contains("multipole_library"));

    std::fs::remove_file(&path).unwrap();
}
