//! Footprint of a single layer

use pavecarbon_types::FootprintError;

use crate::model::Layer;
use crate::repository::MaterialRepository;
use crate::service::emission_factor::{resolve_layer_factor, EmissionFactor};

/// Footprint from an already resolved factor (kg CO₂e)
///
/// Per-volume factors scale with thickness and area, per-area factors with
/// area only.
pub fn footprint_from_factor(factor: EmissionFactor, thickness_cm: f64, surface_area: f64) -> f64 {
    match factor {
        EmissionFactor::PerVolume(f) => f * thickness_cm / 100.0 * surface_area,
        EmissionFactor::PerArea(f) => f * surface_area,
    }
}

/// Footprint of a layer over `surface_area` m²
pub fn layer_footprint<R: MaterialRepository + ?Sized>(
    layer: &Layer,
    surface_area: f64,
    catalog: &R,
) -> Result<f64, FootprintError> {
    let factor = resolve_layer_factor(layer, catalog)?;
    Ok(footprint_from_factor(factor, layer.thickness_cm, surface_area))
}

/// Footprint of a layer over one m²
pub fn layer_footprint_per_area<R: MaterialRepository + ?Sized>(
    layer: &Layer,
    catalog: &R,
) -> Result<f64, FootprintError> {
    layer_footprint(layer, 1.0, catalog)
}
