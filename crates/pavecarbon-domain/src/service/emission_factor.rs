//! Effective emission factor of a layer
//!
//! Dispatches on [`MaterialKind`]. Each kind has one pure rule; unset layer
//! fields fall back to [`OverrideDefaults`].

use serde::{Deserialize, Serialize};

use pavecarbon_types::FootprintError;

use crate::model::factors::{
    ASPHALT_AGGREGATE_IMPACT, ASPHALT_BINDER_IMPACT, ASPHALT_TRANSPORT_IMPACT, JOINT_SHARE,
};
use crate::model::{JointedFamily, Layer, Material, MaterialKind, OverrideDefaults};
use crate::repository::MaterialRepository;

/// Resolved factor of a layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum EmissionFactor {
    /// kg CO₂e per m³, scaled by thickness and area
    PerVolume(f64),
    /// kg CO₂e per m², scaled by area only
    PerArea(f64),
}

impl EmissionFactor {
    pub fn value(&self) -> f64 {
        match self {
            EmissionFactor::PerVolume(v) | EmissionFactor::PerArea(v) => *v,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            EmissionFactor::PerVolume(_) => "kg CO₂e/m³",
            EmissionFactor::PerArea(_) => "kg CO₂e/m²",
        }
    }
}

type Rule = fn(&Layer, &Material, &OverrideDefaults) -> Result<EmissionFactor, FootprintError>;

fn rule_for(kind: MaterialKind) -> Rule {
    match kind {
        MaterialKind::Bulk => bulk,
        MaterialKind::Textile => textile,
        MaterialKind::Jointed(_) => jointed,
        MaterialKind::Bituminous => bituminous,
        MaterialKind::StructuralConcrete => structural_concrete,
        MaterialKind::VoidConcrete => void_concrete,
        MaterialKind::FreeForm => free_form,
    }
}

/// Resolve a layer's factor using the standard default table
pub fn resolve_factor(layer: &Layer, material: &Material) -> Result<EmissionFactor, FootprintError> {
    resolve_factor_with(layer, material, &OverrideDefaults::STANDARD)
}

/// Resolve a layer's factor with an explicit default table
pub fn resolve_factor_with(
    layer: &Layer,
    material: &Material,
    defaults: &OverrideDefaults,
) -> Result<EmissionFactor, FootprintError> {
    rule_for(material.kind)(layer, material, defaults)
}

/// Look the layer's material up in the catalog, then resolve
pub fn resolve_layer_factor<R: MaterialRepository + ?Sized>(
    layer: &Layer,
    catalog: &R,
) -> Result<EmissionFactor, FootprintError> {
    let material = catalog.lookup(&layer.material)?;
    resolve_factor(layer, material)
}

fn density(material: &Material) -> Result<f64, FootprintError> {
    material
        .density
        .ok_or_else(|| FootprintError::MissingDensity(material.name.clone()))
}

fn bulk_per_m3(material: &Material) -> Result<f64, FootprintError> {
    Ok(material.base_impact * density(material)?)
}

fn bulk(_: &Layer, material: &Material, _: &OverrideDefaults) -> Result<EmissionFactor, FootprintError> {
    Ok(EmissionFactor::PerVolume(bulk_per_m3(material)?))
}

fn textile(_: &Layer, material: &Material, _: &OverrideDefaults) -> Result<EmissionFactor, FootprintError> {
    Ok(EmissionFactor::PerArea(material.base_impact))
}

fn jointed(
    layer: &Layer,
    material: &Material,
    defaults: &OverrideDefaults,
) -> Result<EmissionFactor, FootprintError> {
    let origin_adjustment = match material.kind {
        MaterialKind::Jointed(JointedFamily::NaturalStone) => layer
            .origin
            .unwrap_or(defaults.origin)
            .transport_adjustment(),
        _ => 0.0,
    };
    let joint = layer.joint_type.unwrap_or(defaults.joint_type);
    let body = (material.base_impact + origin_adjustment) * density(material)?;
    Ok(EmissionFactor::PerVolume(
        body + joint.emission_factor() * JOINT_SHARE,
    ))
}

fn bituminous(
    layer: &Layer,
    material: &Material,
    defaults: &OverrideDefaults,
) -> Result<EmissionFactor, FootprintError> {
    let binder = layer.binder_rate_pct.unwrap_or(defaults.binder_rate_pct) / 100.0;
    let recycled = layer.recycled_rate_pct.unwrap_or(defaults.recycled_rate_pct) / 100.0;
    let mix = binder * ASPHALT_BINDER_IMPACT + (1.0 - binder) * ASPHALT_AGGREGATE_IMPACT;
    let per_kg = mix * (1.0 - recycled) + ASPHALT_TRANSPORT_IMPACT;
    Ok(EmissionFactor::PerVolume(per_kg * density(material)?))
}

fn structural_concrete(
    layer: &Layer,
    _: &Material,
    defaults: &OverrideDefaults,
) -> Result<EmissionFactor, FootprintError> {
    let family = layer.cement_family.unwrap_or(defaults.cement_family);
    Ok(EmissionFactor::PerVolume(family.impact_per_m3()))
}

fn void_concrete(
    layer: &Layer,
    material: &Material,
    defaults: &OverrideDefaults,
) -> Result<EmissionFactor, FootprintError> {
    let void_ratio = layer.void_ratio_pct.unwrap_or(defaults.void_ratio_pct) / 100.0;
    Ok(EmissionFactor::PerVolume(
        bulk_per_m3(material)? * (1.0 - void_ratio),
    ))
}

fn free_form(
    layer: &Layer,
    _: &Material,
    defaults: &OverrideDefaults,
) -> Result<EmissionFactor, FootprintError> {
    Ok(EmissionFactor::PerVolume(
        layer.user_impact.unwrap_or(defaults.user_impact),
    ))
}
