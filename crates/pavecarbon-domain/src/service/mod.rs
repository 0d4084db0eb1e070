//! Domain services

pub mod comparison;
pub mod composition_footprint;
pub mod emission_factor;
pub mod layer_footprint;

pub use comparison::{
    compare, BreakdownSegment, ComparisonReport, ComparisonRow, CompositionBreakdown,
    LegendEntry, TOTAL_ROW_NAME,
};
pub use composition_footprint::{
    compute_composition, excavation_depth_m, footprint_per_area, total_footprint,
    CompositionFootprint, LayerFootprint,
};
pub use emission_factor::{resolve_factor, resolve_factor_with, resolve_layer_factor, EmissionFactor};
pub use layer_footprint::{footprint_from_factor, layer_footprint, layer_footprint_per_area};
