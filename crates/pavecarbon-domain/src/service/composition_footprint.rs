//! Footprint of a whole composition
//!
//! total = sum of layer footprints + excavation term, where the excavation
//! term is depth (non-textile layers, m) x [`EXCAVATION_IMPACT`] x area.

use serde::{Deserialize, Serialize};

use pavecarbon_types::FootprintError;

use crate::model::factors::EXCAVATION_IMPACT;
use crate::model::{Composition, Layer};
use crate::repository::MaterialRepository;
use crate::service::emission_factor::{resolve_layer_factor, EmissionFactor};
use crate::service::layer_footprint::footprint_from_factor;

/// Computed contribution of one layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerFootprint {
    pub material: String,
    pub thickness_cm: f64,
    pub factor: EmissionFactor,
    /// kg CO₂e per m²
    pub per_area: f64,
    /// kg CO₂e over the composition's surface
    pub total: f64,
}

/// Computed footprint of one composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionFootprint {
    pub composition_id: String,
    pub name: String,
    pub surface_area: f64,
    pub layers: Vec<LayerFootprint>,
    /// Excavated depth in m (textile layers excluded)
    pub depth_m: f64,
    /// Excavation term in kg CO₂e
    pub excavation: f64,
    /// Total in kg CO₂e
    pub total: f64,
    /// kg CO₂e per m², `None` when the surface area is zero
    pub per_area: Option<f64>,
}

/// Sum of non-textile layer thicknesses, in metres
pub fn excavation_depth_m<R: MaterialRepository + ?Sized>(
    layers: &[Layer],
    catalog: &R,
) -> Result<f64, FootprintError> {
    let mut depth_cm = 0.0;
    for layer in layers {
        if !catalog.lookup(&layer.material)?.kind.is_textile() {
            depth_cm += layer.thickness_cm;
        }
    }
    Ok(depth_cm / 100.0)
}

/// Divide a total by its surface, refusing a zero area
pub fn per_area(total: f64, surface_area: f64) -> Result<f64, FootprintError> {
    if surface_area == 0.0 {
        return Err(FootprintError::DivisionByZero);
    }
    Ok(total / surface_area)
}

/// Total footprint of a composition (kg CO₂e)
pub fn total_footprint<R: MaterialRepository + ?Sized>(
    composition: &Composition,
    catalog: &R,
) -> Result<f64, FootprintError> {
    compute_composition(composition, catalog).map(|fp| fp.total)
}

/// Total footprint divided by surface area (kg CO₂e/m²)
pub fn footprint_per_area<R: MaterialRepository + ?Sized>(
    composition: &Composition,
    catalog: &R,
) -> Result<f64, FootprintError> {
    let total = total_footprint(composition, catalog)?;
    per_area(total, composition.surface_area)
}

/// Full breakdown of a composition's footprint
///
/// Any layer that cannot be resolved fails the whole composition.
pub fn compute_composition<R: MaterialRepository + ?Sized>(
    composition: &Composition,
    catalog: &R,
) -> Result<CompositionFootprint, FootprintError> {
    let area = composition.surface_area;

    let layers = composition
        .layers
        .iter()
        .map(|layer| {
            let factor = resolve_layer_factor(layer, catalog)?;
            Ok(LayerFootprint {
                material: layer.material.clone(),
                thickness_cm: layer.thickness_cm,
                factor,
                per_area: footprint_from_factor(factor, layer.thickness_cm, 1.0),
                total: footprint_from_factor(factor, layer.thickness_cm, area),
            })
        })
        .collect::<Result<Vec<_>, FootprintError>>()?;

    let depth_m = excavation_depth_m(&composition.layers, catalog)?;
    let excavation = depth_m * EXCAVATION_IMPACT * area;
    let total = layers.iter().map(|l| l.total).sum::<f64>() + excavation;
    if !total.is_finite() {
        return Err(FootprintError::NonFinite);
    }

    Ok(CompositionFootprint {
        composition_id: composition.id.clone(),
        name: composition.name.clone(),
        surface_area: area,
        layers,
        depth_m,
        excavation,
        total,
        per_area: per_area(total, area).ok(),
    })
}
