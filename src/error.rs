use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MaterialError>;

/// Every fail-fast validation error raised while building materials or
/// writing them out.
#[derive(Error, Debug)]
pub enum MaterialError {
    #[error("Unable to add {entry} to Material ID=\"{id}\" as a macroscopic data-set has already been added")]
    MacroscopicPresent { id: u32, entry: &'static str },

    #[error("Unable to add a Macroscopic data set to Material ID=\"{id}\" with a macroscopic value \"{name}\" as an incompatible data member (i.e., nuclide, element, or S(a,b) table) has already been added")]
    IncompatibleWithMacroscopic { id: u32, name: String },

    #[error("Unable to add a Macroscopic to Material ID=\"{id}\". Only one Macroscopic allowed per Material.")]
    MacroscopicAlreadySet { id: u32 },

    #[error("Unable to remove a Macroscopic from Material ID=\"{id}\" since none has been added")]
    MacroscopicNotSet { id: u32 },

    #[error("Unable to remove Macroscopic \"{name}\" from Material ID=\"{id}\" which holds \"{current}\"")]
    MacroscopicMismatch {
        id: u32,
        name: String,
        current: String,
    },

    #[error("Invalid density units \"{0}\"; expected one of g/cm3, g/cc, kg/m3, atom/b-cm, atom/cm3, atom/cc, sum, macro")]
    InvalidDensityUnits(String),

    #[error("Unable to set the density for Material ID=\"{id}\" because a density value must be given when not using \"sum\" unit")]
    MissingDensityValue { id: u32 },

    #[error("Unable to set the density for Material ID=\"{id}\" to the non-finite value {value}")]
    InvalidDensity { id: u32, value: f64 },

    #[error("Density has not been set for material {id}!")]
    DensityNotSet { id: u32 },

    #[error("Unable to add {entry} to Material ID=\"{id}\" with a percent type \"{percent_type}\"")]
    InvalidPercentType {
        id: u32,
        entry: &'static str,
        percent_type: String,
    },

    #[error("Unable to add {entry} to Material ID=\"{id}\" with a negative or non-finite percent \"{value}\"")]
    InvalidPercent {
        id: u32,
        entry: &'static str,
        value: f64,
    },

    #[error("Unable to use enrichment for element {element} which is not uranium for Material ID=\"{id}\"")]
    EnrichmentNotUranium { id: u32, element: String },

    #[error("Enrichment {value} for Material ID=\"{id}\" must lie strictly between 0 and 100/1.008")]
    EnrichmentOutOfRange { id: u32, value: f64 },

    #[error("All nuclides and elements in a distributed material must have the same type, either ao or wo (Material ID=\"{id}\")")]
    MixedDistributedPercentTypes { id: u32 },

    #[error("Material ID=\"{id}\" is set to a distributed composition but holds no nuclides or elements")]
    EmptyDistributedComposition { id: u32 },

    #[error("Composition has a zero total amount; densities and molar mass are undefined")]
    ZeroComposition,

    #[error("Summary for Material ID=\"{id}\" lists {nuclides} nuclides but {densities} densities")]
    SummaryLengthMismatch {
        id: u32,
        nuclides: usize,
        densities: usize,
    },

    #[error("Element \"{0}\" is not a recognized element symbol")]
    UnknownElement(String),

    #[error("Atomic mass for nuclide \"{0}\" not found in the database")]
    UnknownNuclide(String),

    #[error("Temperature for Material ID=\"{id}\" must be positive, got {value}")]
    InvalidTemperature { id: u32, value: f64 },

    #[error("Volume for Material ID=\"{id}\" must be positive, got {value}")]
    InvalidVolume { id: u32, value: f64 },

    #[error("Material instance paths have not been determined for Material ID=\"{id}\". Run the geometry path traversal first.")]
    PathsNotDetermined { id: u32 },

    #[error("Number of material instances have not been determined for Material ID=\"{id}\". Run the geometry path traversal first.")]
    InstancesNotDetermined { id: u32 },

    #[error("No volume information found for Material ID=\"{id}\"")]
    NoVolumeInformation { id: u32 },

    #[error("ID {0} is already in use")]
    DuplicateId(u32),

    #[error("ID must be a positive integer")]
    InvalidId,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML writer error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
