use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Avogadro's number in atoms/mol.
pub const AVOGADRO: f64 = 6.02214076e23;

/// Split a nuclide name such as `"Fe56"` into its element symbol and mass number.
pub fn split_nuclide_name(nuclide: &str) -> (&str, Option<u32>) {
    let idx = nuclide
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(nuclide.len());
    let rest = &nuclide[idx..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let mass_number = rest[..end].parse().ok();
    (&nuclide[..idx], mass_number)
}

/// Map from element symbol to the vector of naturally occurring nuclides.
///
/// Keys are element symbols (e.g. `"Mo"`) and values list the isotopes in
/// ascending mass-number order (e.g. `["Mo92", "Mo94", ..., "Mo100"]`). The
/// mapping is derived automatically from [`NATURAL_ABUNDANCE`] so it stays
/// consistent with the set of isotopes for which natural abundances are defined.
pub static ELEMENT_NUCLIDES: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
    for &nuclide in NATURAL_ABUNDANCE.keys() {
        let (element, _) = split_nuclide_name(nuclide);
        map.entry(element).or_insert_with(Vec::new).push(nuclide);
    }
    for nuclides in map.values_mut() {
        nuclides.sort_by_key(|n| split_nuclide_name(n).1);
    }
    map
});

/// Natural terrestrial isotopic abundances (fractional, summing to ~1.0 per
/// element) for stable isotopes.
///
/// Each key is a nuclide name (e.g. `"Fe56"`) and the value is its natural
/// abundance by atom fraction. Values are sourced from standard reference
/// compilations (rounded as needed). Elements with a single stable isotope are
/// assigned 1.0.
pub static NATURAL_ABUNDANCE: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Hydrogen
    m.insert("H1", 0.99984426);
    m.insert("H2", 0.00015574);

    // Helium
    m.insert("He3", 0.000002);
    m.insert("He4", 0.999998);

    // Lithium
    m.insert("Li6", 0.07589);
    m.insert("Li7", 0.92411);

    // Beryllium
    m.insert("Be9", 1.0);

    // Boron
    m.insert("B10", 0.1982);
    m.insert("B11", 0.8018);

    // Carbon
    m.insert("C12", 0.988922);
    m.insert("C13", 0.011078);

    // Nitrogen
    m.insert("N14", 0.996337);
    m.insert("N15", 0.003663);

    // Oxygen
    m.insert("O16", 0.9976206);
    m.insert("O17", 0.000379);
    m.insert("O18", 0.0020004);

    // Fluorine
    m.insert("F19", 1.0);

    // Neon
    m.insert("Ne20", 0.9048);
    m.insert("Ne21", 0.0027);
    m.insert("Ne22", 0.0925);

    // Sodium
    m.insert("Na23", 1.0);

    // Magnesium
    m.insert("Mg24", 0.78951);
    m.insert("Mg25", 0.1002);
    m.insert("Mg26", 0.11029);

    // Aluminum
    m.insert("Al27", 1.0);

    // Silicon
    m.insert("Si28", 0.9222968);
    m.insert("Si29", 0.0468316);
    m.insert("Si30", 0.0308716);

    // Phosphorus
    m.insert("P31", 1.0);

    // Sulfur
    m.insert("S32", 0.9504074);
    m.insert("S33", 0.0074869);
    m.insert("S34", 0.0419599);
    m.insert("S36", 0.0001458);

    // Chlorine
    m.insert("Cl35", 0.757647);
    m.insert("Cl37", 0.242353);

    // Argon
    m.insert("Ar36", 0.003336);
    m.insert("Ar38", 0.000629);
    m.insert("Ar40", 0.996035);

    // Potassium
    m.insert("K39", 0.932581);
    m.insert("K40", 0.000117);
    m.insert("K41", 0.067302);

    // Calcium
    m.insert("Ca40", 0.96941);
    m.insert("Ca42", 0.00647);
    m.insert("Ca43", 0.00135);
    m.insert("Ca44", 0.02086);
    m.insert("Ca46", 0.00004);
    m.insert("Ca48", 0.00187);

    // Scandium
    m.insert("Sc45", 1.0);

    // Titanium
    m.insert("Ti46", 0.0825);
    m.insert("Ti47", 0.0744);
    m.insert("Ti48", 0.7372);
    m.insert("Ti49", 0.0541);
    m.insert("Ti50", 0.0518);

    // Vanadium
    m.insert("V50", 0.0025);
    m.insert("V51", 0.9975);

    // Chromium
    m.insert("Cr50", 0.04345);
    m.insert("Cr52", 0.83789);
    m.insert("Cr53", 0.09501);
    m.insert("Cr54", 0.02365);

    // Manganese
    m.insert("Mn55", 1.0);

    // Iron
    m.insert("Fe54", 0.05845);
    m.insert("Fe56", 0.91754);
    m.insert("Fe57", 0.02119);
    m.insert("Fe58", 0.00282);

    // Cobalt
    m.insert("Co59", 1.0);

    // Nickel
    m.insert("Ni58", 0.680769);
    m.insert("Ni60", 0.262231);
    m.insert("Ni61", 0.011399);
    m.insert("Ni62", 0.036345);
    m.insert("Ni64", 0.009256);

    // Copper
    m.insert("Cu63", 0.6915);
    m.insert("Cu65", 0.3085);

    // Zinc
    m.insert("Zn64", 0.4917);
    m.insert("Zn66", 0.2773);
    m.insert("Zn67", 0.0404);
    m.insert("Zn68", 0.1845);
    m.insert("Zn70", 0.0061);

    // Gallium
    m.insert("Ga69", 0.60108);
    m.insert("Ga71", 0.39892);

    // Germanium
    m.insert("Ge70", 0.2052);
    m.insert("Ge72", 0.2745);
    m.insert("Ge73", 0.0776);
    m.insert("Ge74", 0.3652);
    m.insert("Ge76", 0.0775);

    // Arsenic
    m.insert("As75", 1.0);

    // Selenium
    m.insert("Se74", 0.0086);
    m.insert("Se76", 0.0923);
    m.insert("Se77", 0.076);
    m.insert("Se78", 0.2369);
    m.insert("Se80", 0.498);
    m.insert("Se82", 0.0882);

    // Bromine
    m.insert("Br79", 0.50686);
    m.insert("Br81", 0.49314);

    // Krypton
    m.insert("Kr78", 0.00355);
    m.insert("Kr80", 0.02286);
    m.insert("Kr82", 0.11593);
    m.insert("Kr83", 0.115);
    m.insert("Kr84", 0.56987);
    m.insert("Kr86", 0.17279);

    // Rubidium
    m.insert("Rb85", 0.7217);
    m.insert("Rb87", 0.2783);

    // Strontium
    m.insert("Sr84", 0.0056);
    m.insert("Sr86", 0.0986);
    m.insert("Sr87", 0.07);
    m.insert("Sr88", 0.8258);

    // Yttrium
    m.insert("Y89", 1.0);

    // Zirconium
    m.insert("Zr90", 0.5145);
    m.insert("Zr91", 0.1122);
    m.insert("Zr92", 0.1715);
    m.insert("Zr94", 0.1738);
    m.insert("Zr96", 0.028);

    // Niobium
    m.insert("Nb93", 1.0);

    // Molybdenum
    m.insert("Mo92", 0.14649);
    m.insert("Mo94", 0.09187);
    m.insert("Mo95", 0.15873);
    m.insert("Mo96", 0.16673);
    m.insert("Mo97", 0.09582);
    m.insert("Mo98", 0.24292);
    m.insert("Mo100", 0.09744);

    // Ruthenium
    m.insert("Ru96", 0.0554);
    m.insert("Ru98", 0.0187);
    m.insert("Ru99", 0.1276);
    m.insert("Ru100", 0.126);
    m.insert("Ru101", 0.1706);
    m.insert("Ru102", 0.3155);
    m.insert("Ru104", 0.1862);

    // Rhodium
    m.insert("Rh103", 1.0);

    // Palladium
    m.insert("Pd102", 0.0102);
    m.insert("Pd104", 0.1114);
    m.insert("Pd105", 0.2233);
    m.insert("Pd106", 0.2733);
    m.insert("Pd108", 0.2646);
    m.insert("Pd110", 0.1172);

    // Silver
    m.insert("Ag107", 0.51839);
    m.insert("Ag109", 0.48161);

    // Cadmium
    m.insert("Cd106", 0.01245);
    m.insert("Cd108", 0.00888);
    m.insert("Cd110", 0.1247);
    m.insert("Cd111", 0.12795);
    m.insert("Cd112", 0.24109);
    m.insert("Cd113", 0.12227);
    m.insert("Cd114", 0.28754);
    m.insert("Cd116", 0.07512);

    // Indium
    m.insert("In113", 0.04281);
    m.insert("In115", 0.95719);

    // Tin
    m.insert("Sn112", 0.0097);
    m.insert("Sn114", 0.0066);
    m.insert("Sn115", 0.0034);
    m.insert("Sn116", 0.1454);
    m.insert("Sn117", 0.0768);
    m.insert("Sn118", 0.2422);
    m.insert("Sn119", 0.0859);
    m.insert("Sn120", 0.3258);
    m.insert("Sn122", 0.0463);
    m.insert("Sn124", 0.0579);

    // Antimony
    m.insert("Sb121", 0.5721);
    m.insert("Sb123", 0.4279);

    // Tellurium
    m.insert("Te120", 0.0009);
    m.insert("Te122", 0.0255);
    m.insert("Te123", 0.0089);
    m.insert("Te124", 0.0474);
    m.insert("Te125", 0.0707);
    m.insert("Te126", 0.1884);
    m.insert("Te128", 0.3174);
    m.insert("Te130", 0.3408);

    // Iodine
    m.insert("I127", 1.0);

    // Xenon
    m.insert("Xe124", 0.00095);
    m.insert("Xe126", 0.00089);
    m.insert("Xe128", 0.0191);
    m.insert("Xe129", 0.26401);
    m.insert("Xe130", 0.04071);
    m.insert("Xe131", 0.21232);
    m.insert("Xe132", 0.26909);
    m.insert("Xe134", 0.10436);
    m.insert("Xe136", 0.08857);

    // Cesium
    m.insert("Cs133", 1.0);

    // Barium
    m.insert("Ba130", 0.0011);
    m.insert("Ba132", 0.001);
    m.insert("Ba134", 0.0242);
    m.insert("Ba135", 0.0659);
    m.insert("Ba136", 0.0785);
    m.insert("Ba137", 0.1123);
    m.insert("Ba138", 0.717);

    // Lanthanum
    m.insert("La138", 0.0008881);
    m.insert("La139", 0.9991119);

    // Cerium
    m.insert("Ce136", 0.00186);
    m.insert("Ce138", 0.00251);
    m.insert("Ce140", 0.88449);
    m.insert("Ce142", 0.11114);

    // Praseodymium
    m.insert("Pr141", 1.0);

    // Neodymium
    m.insert("Nd142", 0.27153);
    m.insert("Nd143", 0.12173);
    m.insert("Nd144", 0.23798);
    m.insert("Nd145", 0.08293);
    m.insert("Nd146", 0.17189);
    m.insert("Nd148", 0.05756);
    m.insert("Nd150", 0.05638);

    // Samarium
    m.insert("Sm144", 0.0308);
    m.insert("Sm147", 0.15);
    m.insert("Sm148", 0.1125);
    m.insert("Sm149", 0.1382);
    m.insert("Sm150", 0.0737);
    m.insert("Sm152", 0.2674);
    m.insert("Sm154", 0.2274);

    // Europium
    m.insert("Eu151", 0.4781);
    m.insert("Eu153", 0.5219);

    // Gadolinium
    m.insert("Gd152", 0.002);
    m.insert("Gd154", 0.0218);
    m.insert("Gd155", 0.148);
    m.insert("Gd156", 0.2047);
    m.insert("Gd157", 0.1565);
    m.insert("Gd158", 0.2484);
    m.insert("Gd160", 0.2186);

    // Terbium
    m.insert("Tb159", 1.0);

    // Dysprosium
    m.insert("Dy156", 0.00056);
    m.insert("Dy158", 0.00095);
    m.insert("Dy160", 0.02329);
    m.insert("Dy161", 0.18889);
    m.insert("Dy162", 0.25475);
    m.insert("Dy163", 0.24896);
    m.insert("Dy164", 0.2826);

    // Holmium
    m.insert("Ho165", 1.0);

    // Erbium
    m.insert("Er162", 0.00139);
    m.insert("Er164", 0.01601);
    m.insert("Er166", 0.33503);
    m.insert("Er167", 0.22869);
    m.insert("Er168", 0.26978);
    m.insert("Er170", 0.1491);

    // Thulium
    m.insert("Tm169", 1.0);

    // Ytterbium
    m.insert("Yb168", 0.00123);
    m.insert("Yb170", 0.02982);
    m.insert("Yb171", 0.14086);
    m.insert("Yb172", 0.21686);
    m.insert("Yb173", 0.16103);
    m.insert("Yb174", 0.32025);
    m.insert("Yb176", 0.12995);

    // Lutetium
    m.insert("Lu175", 0.97401);
    m.insert("Lu176", 0.02599);

    // Hafnium
    m.insert("Hf174", 0.0016);
    m.insert("Hf176", 0.0526);
    m.insert("Hf177", 0.186);
    m.insert("Hf178", 0.2728);
    m.insert("Hf179", 0.1362);
    m.insert("Hf180", 0.3508);

    // Tantalum
    m.insert("Ta180_m1", 0.0001201);
    m.insert("Ta181", 0.9998799);

    // Tungsten
    m.insert("W180", 0.0012);
    m.insert("W182", 0.265);
    m.insert("W183", 0.1431);
    m.insert("W184", 0.3064);
    m.insert("W186", 0.2843);

    // Rhenium
    m.insert("Re185", 0.374);
    m.insert("Re187", 0.626);

    // Osmium
    m.insert("Os184", 0.0002);
    m.insert("Os186", 0.0159);
    m.insert("Os187", 0.0196);
    m.insert("Os188", 0.1324);
    m.insert("Os189", 0.1615);
    m.insert("Os190", 0.2626);
    m.insert("Os192", 0.4078);

    // Iridium
    m.insert("Ir191", 0.373);
    m.insert("Ir193", 0.627);

    // Platinum
    m.insert("Pt190", 0.00012);
    m.insert("Pt192", 0.00782);
    m.insert("Pt194", 0.32864);
    m.insert("Pt195", 0.33775);
    m.insert("Pt196", 0.25211);
    m.insert("Pt198", 0.07356);

    // Gold
    m.insert("Au197", 1.0);

    // Mercury
    m.insert("Hg196", 0.0015);
    m.insert("Hg198", 0.1004);
    m.insert("Hg199", 0.1694);
    m.insert("Hg200", 0.2314);
    m.insert("Hg201", 0.1317);
    m.insert("Hg202", 0.2974);
    m.insert("Hg204", 0.0682);

    // Thallium
    m.insert("Tl203", 0.29524);
    m.insert("Tl205", 0.70476);

    // Lead
    m.insert("Pb204", 0.014);
    m.insert("Pb206", 0.241);
    m.insert("Pb207", 0.221);
    m.insert("Pb208", 0.524);

    // Bismuth
    m.insert("Bi209", 1.0);

    // Thorium
    m.insert("Th230", 0.0002);
    m.insert("Th232", 0.9998);

    // Protactinium
    m.insert("Pa231", 1.0);

    // Uranium
    m.insert("U234", 0.000054);
    m.insert("U235", 0.007204);
    m.insert("U238", 0.992742);
    m
});

/// Mapping from element symbol to its lowercase English name.
///
/// Provided for convenience when presenting user-facing descriptions and for
/// validating element inputs (case sensitive symbol keys matching the raw
/// nuclear data tables).
pub static ELEMENT_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut names = HashMap::new();
    names.insert("H", "hydrogen");
    names.insert("He", "helium");
    names.insert("Li", "lithium");
    names.insert("Be", "beryllium");
    names.insert("B", "boron");
    names.insert("C", "carbon");
    names.insert("N", "nitrogen");
    names.insert("O", "oxygen");
    names.insert("F", "fluorine");
    names.insert("Ne", "neon");
    names.insert("Na", "sodium");
    names.insert("Mg", "magnesium");
    names.insert("Al", "aluminum");
    names.insert("Si", "silicon");
    names.insert("P", "phosphorus");
    names.insert("S", "sulfur");
    names.insert("Cl", "chlorine");
    names.insert("Ar", "argon");
    names.insert("K", "potassium");
    names.insert("Ca", "calcium");
    names.insert("Sc", "scandium");
    names.insert("Ti", "titanium");
    names.insert("V", "vanadium");
    names.insert("Cr", "chromium");
    names.insert("Mn", "manganese");
    names.insert("Fe", "iron");
    names.insert("Co", "cobalt");
    names.insert("Ni", "nickel");
    names.insert("Cu", "copper");
    names.insert("Zn", "zinc");
    names.insert("Ga", "gallium");
    names.insert("Ge", "germanium");
    names.insert("As", "arsenic");
    names.insert("Se", "selenium");
    names.insert("Br", "bromine");
    names.insert("Kr", "krypton");
    names.insert("Rb", "rubidium");
    names.insert("Sr", "strontium");
    names.insert("Y", "yttrium");
    names.insert("Zr", "zirconium");
    names.insert("Nb", "niobium");
    names.insert("Mo", "molybdenum");
    names.insert("Tc", "technetium");
    names.insert("Ru", "ruthenium");
    names.insert("Rh", "rhodium");
    names.insert("Pd", "palladium");
    names.insert("Ag", "silver");
    names.insert("Cd", "cadmium");
    names.insert("In", "indium");
    names.insert("Sn", "tin");
    names.insert("Sb", "antimony");
    names.insert("Te", "tellurium");
    names.insert("I", "iodine");
    names.insert("Xe", "xenon");
    names.insert("Cs", "cesium");
    names.insert("Ba", "barium");
    names.insert("La", "lanthanum");
    names.insert("Ce", "cerium");
    names.insert("Pr", "praseodymium");
    names.insert("Nd", "neodymium");
    names.insert("Pm", "promethium");
    names.insert("Sm", "samarium");
    names.insert("Eu", "europium");
    names.insert("Gd", "gadolinium");
    names.insert("Tb", "terbium");
    names.insert("Dy", "dysprosium");
    names.insert("Ho", "holmium");
    names.insert("Er", "erbium");
    names.insert("Tm", "thulium");
    names.insert("Yb", "ytterbium");
    names.insert("Lu", "lutetium");
    names.insert("Hf", "hafnium");
    names.insert("Ta", "tantalum");
    names.insert("W", "tungsten");
    names.insert("Re", "rhenium");
    names.insert("Os", "osmium");
    names.insert("Ir", "iridium");
    names.insert("Pt", "platinum");
    names.insert("Au", "gold");
    names.insert("Hg", "mercury");
    names.insert("Tl", "thallium");
    names.insert("Pb", "lead");
    names.insert("Bi", "bismuth");
    names.insert("Po", "polonium");
    names.insert("At", "astatine");
    names.insert("Rn", "radon");
    names.insert("Fr", "francium");
    names.insert("Ra", "radium");
    names.insert("Ac", "actinium");
    names.insert("Th", "thorium");
    names.insert("Pa", "protactinium");
    names.insert("U", "uranium");
    names.insert("Np", "neptunium");
    names.insert("Pu", "plutonium");
    names.insert("Am", "americium");
    names.insert("Cm", "curium");
    names.insert("Bk", "berkelium");
    names.insert("Cf", "californium");
    names.insert("Es", "einsteinium");
    names.insert("Fm", "fermium");
    names.insert("Md", "mendelevium");
    names.insert("No", "nobelium");
    names.insert("Lr", "lawrencium");
    names
});

/// Isotopic atomic masses in atomic mass units (u).
///
/// Covers every nuclide in [`NATURAL_ABUNDANCE`] plus the common actinides
/// used in fuel compositions. Values follow the Atomic Mass Evaluation.
pub static ATOMIC_MASSES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("H1", 1.00782503223),
        ("H2", 2.01410177812),
        ("He3", 3.0160293201),
        ("He4", 4.00260325413),
        ("Li6", 6.0151228874),
        ("Li7", 7.0160034366),
        ("Be9", 9.012183065),
        ("B10", 10.01293695),
        ("B11", 11.00930536),
        ("C12", 12.0),
        ("C13", 13.00335483507),
        ("N14", 14.00307400443),
        ("N15", 15.00010889888),
        ("O16", 15.99491461957),
        ("O17", 16.9991317565),
        ("O18", 17.99915961286),
        ("F19", 18.99840316273),
        ("Ne20", 19.9924401762),
        ("Ne21", 20.993846685),
        ("Ne22", 21.991385114),
        ("Na23", 22.989769282),
        ("Mg24", 23.985041697),
        ("Mg25", 24.985836976),
        ("Mg26", 25.982592968),
        ("Al27", 26.98153853),
        ("Si28", 27.97692653465),
        ("Si29", 28.9764946649),
        ("Si30", 29.973770136),
        ("P31", 30.97376199842),
        ("S32", 31.9720711744),
        ("S33", 32.9714589098),
        ("S34", 33.967867004),
        ("S36", 35.96708071),
        ("Cl35", 34.968852682),
        ("Cl37", 36.965902602),
        ("Ar36", 35.967545105),
        ("Ar38", 37.96273211),
        ("Ar40", 39.9623831237),
        ("K39", 38.9637064864),
        ("K40", 39.963998166),
        ("K41", 40.9618252579),
        ("Ca40", 39.962590863),
        ("Ca42", 41.95861783),
        ("Ca43", 42.95876644),
        ("Ca44", 43.95548156),
        ("Ca46", 45.953689),
        ("Ca48", 47.95252276),
        ("Sc45", 44.95590828),
        ("Ti46", 45.95262772),
        ("Ti47", 46.95175879),
        ("Ti48", 47.94794198),
        ("Ti49", 48.94786568),
        ("Ti50", 49.94478689),
        ("V50", 49.94715601),
        ("V51", 50.94395704),
        ("Cr50", 49.94604183),
        ("Cr52", 51.94050623),
        ("Cr53", 52.94064815),
        ("Cr54", 53.93887916),
        ("Mn55", 54.93804391),
        ("Fe54", 53.93960899),
        ("Fe56", 55.93493633),
        ("Fe57", 56.93539284),
        ("Fe58", 57.93327443),
        ("Co59", 58.93319429),
        ("Ni58", 57.93534241),
        ("Ni60", 59.93078588),
        ("Ni61", 60.93105557),
        ("Ni62", 61.92834537),
        ("Ni64", 63.92796682),
        ("Cu63", 62.92959772),
        ("Cu65", 64.9277897),
        ("Zn64", 63.92914201),
        ("Zn66", 65.92603381),
        ("Zn67", 66.92712775),
        ("Zn68", 67.92484455),
        ("Zn70", 69.9253192),
        ("Ga69", 68.9255735),
        ("Ga71", 70.92470258),
        ("Ge70", 69.92424875),
        ("Ge72", 71.922075826),
        ("Ge73", 72.923458956),
        ("Ge74", 73.921177761),
        ("Ge76", 75.921402726),
        ("As75", 74.92159457),
        ("Se74", 73.922475934),
        ("Se76", 75.919213704),
        ("Se77", 76.919914154),
        ("Se78", 77.91730928),
        ("Se80", 79.9165218),
        ("Se82", 81.9166995),
        ("Br79", 78.9183376),
        ("Br81", 80.9162897),
        ("Kr78", 77.92036494),
        ("Kr80", 79.91637808),
        ("Kr82", 81.91348273),
        ("Kr83", 82.91412716),
        ("Kr84", 83.9114977282),
        ("Kr86", 85.9106106269),
        ("Rb85", 84.9117897379),
        ("Rb87", 86.909180531),
        ("Sr84", 83.9134191),
        ("Sr86", 85.9092606),
        ("Sr87", 86.9088775),
        ("Sr88", 87.9056125),
        ("Y89", 88.9058403),
        ("Zr90", 89.9046977),
        ("Zr91", 90.9056396),
        ("Zr92", 91.9050347),
        ("Zr94", 93.9063108),
        ("Zr96", 95.9082714),
        ("Nb93", 92.906373),
        ("Mo92", 91.90680796),
        ("Mo94", 93.9050849),
        ("Mo95", 94.90583877),
        ("Mo96", 95.90467612),
        ("Mo97", 96.90601812),
        ("Mo98", 97.90540482),
        ("Mo100", 99.9074718),
        ("Ru96", 95.90759025),
        ("Ru98", 97.9052868),
        ("Ru99", 98.9059341),
        ("Ru100", 99.9042143),
        ("Ru101", 100.9055769),
        ("Ru102", 101.9043441),
        ("Ru104", 103.9054275),
        ("Rh103", 102.905498),
        ("Pd102", 101.9056022),
        ("Pd104", 103.9040305),
        ("Pd105", 104.9050796),
        ("Pd106", 105.9034804),
        ("Pd108", 107.9038916),
        ("Pd110", 109.9051722),
        ("Ag107", 106.9050916),
        ("Ag109", 108.9047553),
        ("Cd106", 105.9064599),
        ("Cd108", 107.9041834),
        ("Cd110", 109.90300661),
        ("Cd111", 110.90418287),
        ("Cd112", 111.90276287),
        ("Cd113", 112.90440813),
        ("Cd114", 113.90336509),
        ("Cd116", 115.90476315),
        ("In113", 112.90406184),
        ("In115", 114.903878776),
        ("Sn112", 111.90482387),
        ("Sn114", 113.9027827),
        ("Sn115", 114.903344699),
        ("Sn116", 115.9017428),
        ("Sn117", 116.90295398),
        ("Sn118", 117.90160657),
        ("Sn119", 118.90331117),
        ("Sn120", 119.90220163),
        ("Sn122", 121.9034438),
        ("Sn124", 123.9052766),
        ("Sb121", 120.903812),
        ("Sb123", 122.9042132),
        ("Te120", 119.9040593),
        ("Te122", 121.9030435),
        ("Te123", 122.9042698),
        ("Te124", 123.9028171),
        ("Te125", 124.9044299),
        ("Te126", 125.9033109),
        ("Te128", 127.90446128),
        ("Te130", 129.906222748),
        ("I127", 126.9044719),
        ("Xe124", 123.905892),
        ("Xe126", 125.9042983),
        ("Xe128", 127.903531),
        ("Xe129", 128.9047808611),
        ("Xe130", 129.903509349),
        ("Xe131", 130.90508406),
        ("Xe132", 131.9041550856),
        ("Xe134", 133.90539466),
        ("Xe136", 135.907214484),
        ("Cs133", 132.905451961),
        ("Ba130", 129.9063207),
        ("Ba132", 131.9050611),
        ("Ba134", 133.90450818),
        ("Ba135", 134.90568838),
        ("Ba136", 135.90457573),
        ("Ba137", 136.90582714),
        ("Ba138", 137.905247),
        ("La138", 137.9071149),
        ("La139", 138.9063563),
        ("Ce136", 135.90712921),
        ("Ce138", 137.905991),
        ("Ce140", 139.9054431),
        ("Ce142", 141.9092504),
        ("Pr141", 140.9076576),
        ("Nd142", 141.907729),
        ("Nd143", 142.90982),
        ("Nd144", 143.910093),
        ("Nd145", 144.9125793),
        ("Nd146", 145.9131226),
        ("Nd148", 147.9168993),
        ("Nd150", 149.9209022),
        ("Sm144", 143.9120065),
        ("Sm147", 146.9149044),
        ("Sm148", 147.9148292),
        ("Sm149", 148.9171921),
        ("Sm150", 149.9172829),
        ("Sm152", 151.9197397),
        ("Sm154", 153.9222169),
        ("Eu151", 150.9198578),
        ("Eu153", 152.921238),
        ("Gd152", 151.9197995),
        ("Gd154", 153.9208741),
        ("Gd155", 154.9226305),
        ("Gd156", 155.9221312),
        ("Gd157", 156.9239686),
        ("Gd158", 157.9241123),
        ("Gd160", 159.9270624),
        ("Tb159", 158.9253547),
        ("Dy156", 155.9242847),
        ("Dy158", 157.9244159),
        ("Dy160", 159.9252046),
        ("Dy161", 160.9269405),
        ("Dy162", 161.9268056),
        ("Dy163", 162.9287383),
        ("Dy164", 163.9291819),
        ("Ho165", 164.9303288),
        ("Er162", 161.9287884),
        ("Er164", 163.9292088),
        ("Er166", 165.9302995),
        ("Er167", 166.9320546),
        ("Er168", 167.9323767),
        ("Er170", 169.9354702),
        ("Tm169", 168.9342179),
        ("Yb168", 167.9338896),
        ("Yb170", 169.9347664),
        ("Yb171", 170.9363302),
        ("Yb172", 171.9363859),
        ("Yb173", 172.9382151),
        ("Yb174", 173.9388664),
        ("Yb176", 175.9425764),
        ("Lu175", 174.9407752),
        ("Lu176", 175.9426897),
        ("Hf174", 173.9400461),
        ("Hf176", 175.9414076),
        ("Hf177", 176.9432277),
        ("Hf178", 177.9437058),
        ("Hf179", 178.9458232),
        ("Hf180", 179.946557),
        ("Ta180", 179.9474648),
        ("Ta181", 180.9479958),
        ("W180", 179.9467108),
        ("W182", 181.94820394),
        ("W183", 182.95022275),
        ("W184", 183.95093092),
        ("W186", 185.9543628),
        ("Re185", 184.9529545),
        ("Re187", 186.9557501),
        ("Os184", 183.9524885),
        ("Os186", 185.953835),
        ("Os187", 186.9557474),
        ("Os188", 187.9558352),
        ("Os189", 188.9581442),
        ("Os190", 189.9584437),
        ("Os192", 191.961477),
        ("Ir191", 190.9605893),
        ("Ir193", 192.9629216),
        ("Pt190", 189.9599297),
        ("Pt192", 191.9610387),
        ("Pt194", 193.9626809),
        ("Pt195", 194.9647917),
        ("Pt196", 195.96495209),
        ("Pt198", 197.9678949),
        ("Au197", 196.96656879),
        ("Hg196", 195.9658326),
        ("Hg198", 197.9667686),
        ("Hg199", 198.96828064),
        ("Hg200", 199.96832659),
        ("Hg201", 200.97030284),
        ("Hg202", 201.9706434),
        ("Hg204", 203.97349398),
        ("Tl203", 202.9723446),
        ("Tl205", 204.9744278),
        ("Pb204", 203.973044),
        ("Pb206", 205.9744657),
        ("Pb207", 206.9758973),
        ("Pb208", 207.9766525),
        ("Bi209", 208.9803991),
        ("Th230", 230.0331341),
        ("Th232", 232.0380558),
        ("Pa231", 231.0358842),
        ("U233", 233.0396355),
        ("U234", 234.0409523),
        ("U235", 235.0439301),
        ("U236", 236.0455682),
        ("U238", 238.0507884),
        ("Np237", 237.0481736),
        ("Pu238", 238.0495601),
        ("Pu239", 239.0521636),
        ("Pu240", 240.0538138),
        ("Pu241", 241.0568517),
        ("Pu242", 242.0587428),
        ("Am241", 241.0568293),
    ]
    .iter()
    .cloned()
    .collect()
});

/// Canonical thermal scattering table names paired with the legacy aliases
/// (lowercase, without temperature suffix) that resolve to them.
pub static THERMAL_NAMES: &[(&str, &[&str])] = &[
    ("c_Al27", &["al", "al27", "al-27"]),
    ("c_Be", &["be", "be-metal", "be-met"]),
    ("c_BeO", &["beo"]),
    ("c_Be_in_BeO", &["bebeo", "be-beo", "be-o", "be/o"]),
    ("c_C6H6", &["benz", "c6h6"]),
    ("c_C_in_SiC", &["csic"]),
    ("c_Ca_in_CaH2", &["cah"]),
    ("c_D_in_D2O", &["dd2o", "hwtr", "hw"]),
    ("c_Fe56", &["fe", "fe56", "fe-56"]),
    ("c_Graphite", &["graph", "grph", "gr"]),
    ("c_Graphite_10p", &["grph10"]),
    ("c_Graphite_30p", &["grph30"]),
    ("c_H_in_CaH2", &["hcah2"]),
    ("c_H_in_CH2", &["hch2", "poly", "pol", "h-poly"]),
    ("c_H_in_CH4_liquid", &["lch4", "lmeth"]),
    ("c_H_in_CH4_solid", &["sch4", "smeth"]),
    ("c_H_in_H2O", &["hh2o", "lwtr", "lw", "h-h2o"]),
    ("c_H_in_H2O_solid", &["hice", "h-ice"]),
    ("c_H_in_C5O2H8", &["lucite", "c5o2h8", "h-luci"]),
    ("c_H_in_YH2", &["hyh2", "h-yh2"]),
    ("c_H_in_ZrH", &["hzrh", "h-zrh", "h-zr", "h/zr", "hzr"]),
    ("c_Mg24", &["mg", "mg24"]),
    ("c_O_in_BeO", &["obeo", "o-beo", "o-be", "o/be"]),
    ("c_O_in_D2O", &["od2o", "o-d2o"]),
    ("c_O_in_H2O_ice", &["oice", "o-ice"]),
    ("c_O_in_UO2", &["ouo2", "o-uo2", "o2-u", "o2/u"]),
    ("c_ortho_D", &["orthod", "dortho"]),
    ("c_ortho_H", &["orthoh", "hortho"]),
    ("c_Si_in_SiC", &["sisic"]),
    ("c_SiO2_alpha", &["sio2", "sio2a"]),
    ("c_SiO2_beta", &["sio2b"]),
    ("c_para_D", &["parad", "dpara"]),
    ("c_para_H", &["parah", "hpara"]),
    ("c_U_in_UO2", &["uuo2", "u-uo2", "u-o2", "u/o2"]),
    ("c_Y_in_YH2", &["yyh2", "y-yh2"]),
    ("c_Zr_in_ZrH", &["zrzrh", "zr-zrh", "zr-h", "zr/h"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lithium_natural_abundance() {
        let li6 = NATURAL_ABUNDANCE.get("Li6").copied().unwrap_or(0.0);
        let li7 = NATURAL_ABUNDANCE.get("Li7").copied().unwrap_or(0.0);
        let sum = li6 + li7;
        assert!(
            (li6 - 0.0759).abs() < 1e-4,
            "Li6 abundance incorrect: {}",
            li6
        );
        assert!(
            (sum - 1.0).abs() < 1e-3,
            "Li6 + Li7 should sum to 1, got {}",
            sum
        );
    }

    #[test]
    fn test_element_nuclides_sorted_by_mass_number() {
        let li_nuclides = ELEMENT_NUCLIDES.get("Li").unwrap();
        assert_eq!(li_nuclides, &vec!["Li6", "Li7"]);
        let mo_nuclides = ELEMENT_NUCLIDES.get("Mo").unwrap();
        assert_eq!(mo_nuclides.first(), Some(&"Mo92"));
        assert_eq!(mo_nuclides.last(), Some(&"Mo100"));
        let u_nuclides = ELEMENT_NUCLIDES.get("U").unwrap();
        assert_eq!(u_nuclides, &vec!["U234", "U235", "U238"]);
    }

    #[test]
    fn test_abundances_sum_to_one_per_element() {
        for (element, nuclides) in ELEMENT_NUCLIDES.iter() {
            let sum: f64 = nuclides.iter().map(|n| NATURAL_ABUNDANCE[n]).sum();
            assert!(
                (sum - 1.0).abs() < 2e-3,
                "abundances for {} sum to {}",
                element,
                sum
            );
        }
    }

    #[test]
    fn test_every_natural_nuclide_has_a_mass() {
        for nuclide in NATURAL_ABUNDANCE.keys() {
            assert!(
                ATOMIC_MASSES.contains_key(nuclide),
                "no atomic mass for {}",
                nuclide
            );
        }
    }

    #[test]
    fn test_split_nuclide_name() {
        assert_eq!(split_nuclide_name("Fe56"), ("Fe", Some(56)));
        assert_eq!(split_nuclide_name("Am242_m1"), ("Am", Some(242)));
        assert_eq!(split_nuclide_name("C"), ("C", None));
    }

    #[test]
    fn test_thermal_names_are_prefixed() {
        for (name, aliases) in THERMAL_NAMES {
            assert!(name.starts_with("c_"));
            assert!(!aliases.is_empty());
        }
    }
}
