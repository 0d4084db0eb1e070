//! Error types for pavecarbon

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Errors raised by the footprint engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FootprintError {
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Material has no density: {0}")]
    MissingDensity(String),

    #[error("Footprint per area is undefined for a zero surface area")]
    DivisionByZero,

    #[error("Footprint is out of range (not a finite number)")]
    NonFinite,

    #[error("Composition '{name}' could not be computed: {source}")]
    Composition {
        name: String,
        #[source]
        source: Box<FootprintError>,
    },
}

/// Rejected user input at the session boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Composition not found: {0}")]
    CompositionNotFound(String),

    #[error("Layer index {index} out of range (composition has {len} layers)")]
    LayerIndexOutOfRange { index: usize, len: usize },

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Invalid thickness: {0} cm (must be a finite value >= 0)")]
    InvalidThickness(f64),

    #[error("Invalid surface area: {0} m² (must be a finite value >= 0)")]
    InvalidSurfaceArea(f64),

    #[error("Invalid {field}: {value}% (allowed {min}..={max})")]
    InvalidPercentage {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid impact: {0} kg CO₂e/m³ (must be a finite value >= 0)")]
    InvalidImpact(f64),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Footprint error: {0}")]
    Footprint(#[from] FootprintError),

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Project file error: {0}")]
    ProjectFile(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ProjectFile(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
