//! Composition session
//!
//! Owns the compositions being edited and exposes the value-in/value-out
//! operations a presentation layer drives: create from a template, duplicate,
//! delete, rename, resize, edit layers, and compute the comparison. All input
//! is validated here, before it reaches the footprint engine.

use pavecarbon_domain::service::{compare, compute_composition, ComparisonReport, CompositionFootprint};
use pavecarbon_domain::{
    CementFamily, Composition, JointType, Layer, MaterialRepository, StoneOrigin,
};
use pavecarbon_types::{FootprintError, InputError};

use crate::catalog::MaterialCatalog;
use crate::constants::{standard_templates, Template, UNDEFINED_MATERIAL};

/// Defaults applied to new compositions and layers
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub default_surface_area: f64,
    pub default_layer_material: String,
    pub default_layer_thickness_cm: f64,
    pub duplicate_suffix: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            default_surface_area: 1.0,
            default_layer_material: UNDEFINED_MATERIAL.to_string(),
            default_layer_thickness_cm: 5.0,
            duplicate_suffix: " (copie)".to_string(),
        }
    }
}

/// Partial edit of a layer; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerUpdate {
    pub material: Option<String>,
    pub thickness_cm: Option<f64>,
    pub joint_type: Option<JointType>,
    pub origin: Option<StoneOrigin>,
    pub recycled_rate_pct: Option<f64>,
    pub binder_rate_pct: Option<f64>,
    pub cement_family: Option<CementFamily>,
    pub void_ratio_pct: Option<f64>,
    pub user_impact: Option<f64>,
}

impl LayerUpdate {
    pub fn material(material: &str) -> Self {
        Self {
            material: Some(material.to_string()),
            ..Self::default()
        }
    }

    pub fn thickness(thickness_cm: f64) -> Self {
        Self {
            thickness_cm: Some(thickness_cm),
            ..Self::default()
        }
    }
}

/// In-memory set of compositions, kept in insertion order
#[derive(Debug, Clone)]
pub struct CompositionSession {
    catalog: MaterialCatalog,
    templates: Vec<Template>,
    settings: SessionSettings,
    compositions: Vec<Composition>,
}

impl Default for CompositionSession {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}

impl CompositionSession {
    /// Session on the canonical catalog and templates
    pub fn new(settings: SessionSettings) -> Self {
        Self::with_reference_data(MaterialCatalog::standard(), standard_templates(), settings)
    }

    pub fn with_reference_data(
        catalog: MaterialCatalog,
        templates: Vec<Template>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            catalog,
            templates,
            settings,
            compositions: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Material names for selection widgets
    pub fn list_materials(&self) -> Vec<&str> {
        self.catalog.material_names()
    }

    /// Templates in display order
    pub fn list_templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn template(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    pub fn compositions(&self) -> &[Composition] {
        &self.compositions
    }

    pub fn get_composition(&self, id: &str) -> Option<&Composition> {
        self.compositions.iter().find(|c| c.id == id)
    }

    fn composition_mut(&mut self, id: &str) -> Result<&mut Composition, InputError> {
        self.compositions
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| InputError::CompositionNotFound(id.to_string()))
    }

    fn push(&mut self, composition: Composition) -> &Composition {
        self.compositions.push(composition);
        let last = self.compositions.len() - 1;
        &self.compositions[last]
    }

    /// New composition named after the template, with a deep copy of its layers
    pub fn create_composition(&mut self, template_name: &str) -> Result<&Composition, InputError> {
        validate_surface_area(self.settings.default_surface_area)?;
        let template = self
            .template(template_name)
            .ok_or_else(|| InputError::UnknownTemplate(template_name.to_string()))?;
        let composition = Composition::new(
            template.name.clone(),
            self.settings.default_surface_area,
            template.layers.clone(),
        );
        Ok(self.push(composition))
    }

    /// Add a fully specified composition, validating every field
    pub fn insert_composition(
        &mut self,
        name: &str,
        surface_area: f64,
        layers: Vec<Layer>,
    ) -> Result<&Composition, InputError> {
        validate_surface_area(surface_area)?;
        let layers = layers
            .into_iter()
            .map(|layer| self.validated_layer(layer))
            .collect::<Result<Vec<_>, InputError>>()?;
        Ok(self.push(Composition::new(name.to_string(), surface_area, layers)))
    }

    /// Deep copy with a fresh id, appended after the existing compositions
    pub fn duplicate_composition(&mut self, id: &str) -> Result<&Composition, InputError> {
        let copy = self
            .get_composition(id)
            .ok_or_else(|| InputError::CompositionNotFound(id.to_string()))?
            .duplicate(&self.settings.duplicate_suffix);
        Ok(self.push(copy))
    }

    pub fn delete_composition(&mut self, id: &str) -> Result<Composition, InputError> {
        let index = self
            .compositions
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| InputError::CompositionNotFound(id.to_string()))?;
        Ok(self.compositions.remove(index))
    }

    pub fn rename_composition(&mut self, id: &str, name: &str) -> Result<(), InputError> {
        self.composition_mut(id)?.name = name.to_string();
        Ok(())
    }

    pub fn set_surface_area(&mut self, id: &str, surface_area: f64) -> Result<(), InputError> {
        validate_surface_area(surface_area)?;
        self.composition_mut(id)?.surface_area = surface_area;
        Ok(())
    }

    /// Insert a default layer at `at_index` (equal to the length appends)
    pub fn add_layer(&mut self, id: &str, at_index: usize) -> Result<(), InputError> {
        let layer = Layer::new(
            &self.settings.default_layer_material,
            self.settings.default_layer_thickness_cm,
        );
        self.insert_layer(id, at_index, layer)
    }

    pub fn insert_layer(&mut self, id: &str, at_index: usize, layer: Layer) -> Result<(), InputError> {
        let layer = self.validated_layer(layer)?;
        let composition = self.composition_mut(id)?;
        let len = composition.layers.len();
        if at_index > len {
            return Err(InputError::LayerIndexOutOfRange { index: at_index, len });
        }
        composition.layers.insert(at_index, layer);
        Ok(())
    }

    pub fn remove_layer(&mut self, id: &str, index: usize) -> Result<Layer, InputError> {
        let composition = self.composition_mut(id)?;
        let len = composition.layers.len();
        if index >= len {
            return Err(InputError::LayerIndexOutOfRange { index, len });
        }
        Ok(composition.layers.remove(index))
    }

    /// Apply a partial edit; nothing changes if any field is rejected
    pub fn update_layer(&mut self, id: &str, index: usize, update: LayerUpdate) -> Result<(), InputError> {
        let current = {
            let composition = self
                .get_composition(id)
                .ok_or_else(|| InputError::CompositionNotFound(id.to_string()))?;
            composition
                .layers
                .get(index)
                .cloned()
                .ok_or(InputError::LayerIndexOutOfRange {
                    index,
                    len: composition.layers.len(),
                })?
        };

        let updated = self.validated_layer(apply_update(current, update))?;
        self.composition_mut(id)?.layers[index] = updated;
        Ok(())
    }

    /// Return a layer to the standard defaults, keeping material and thickness
    pub fn reset_layer_overrides(&mut self, id: &str, index: usize) -> Result<(), InputError> {
        let composition = self.composition_mut(id)?;
        let len = composition.layers.len();
        let layer = composition
            .layers
            .get_mut(index)
            .ok_or(InputError::LayerIndexOutOfRange { index, len })?;
        layer.clear_overrides();
        Ok(())
    }

    /// Footprint of a single composition
    pub fn compute_composition(&self, id: &str) -> Result<CompositionFootprint, pavecarbon_types::Error> {
        let composition = self
            .get_composition(id)
            .ok_or_else(|| InputError::CompositionNotFound(id.to_string()))?;
        Ok(compute_composition(composition, &self.catalog)?)
    }

    /// Comparison table and stacked breakdown over all compositions
    pub fn compute_comparison(&self) -> Result<ComparisonReport, FootprintError> {
        compare(&self.compositions, &self.catalog)
    }

    /// Check a layer against the catalog and the field ranges. Textile layers
    /// have their thickness forced to zero.
    fn validated_layer(&self, mut layer: Layer) -> Result<Layer, InputError> {
        let material = self
            .catalog
            .lookup(&layer.material)
            .map_err(|_| InputError::UnknownMaterial(layer.material.clone()))?;

        validate_thickness(layer.thickness_cm)?;
        if material.kind.is_textile() {
            layer.thickness_cm = 0.0;
        }

        if let Some(pct) = layer.recycled_rate_pct {
            validate_percentage("recycled rate", pct, 0.0, 100.0)?;
        }
        if let Some(pct) = layer.binder_rate_pct {
            validate_percentage("binder rate", pct, 1.0, 100.0)?;
        }
        if let Some(pct) = layer.void_ratio_pct {
            validate_percentage("void ratio", pct, 0.0, 100.0)?;
        }
        if let Some(impact) = layer.user_impact {
            if !impact.is_finite() || impact < 0.0 {
                return Err(InputError::InvalidImpact(impact));
            }
        }
        Ok(layer)
    }
}

fn apply_update(mut layer: Layer, update: LayerUpdate) -> Layer {
    if let Some(material) = update.material {
        layer.material = material;
    }
    if let Some(thickness) = update.thickness_cm {
        layer.thickness_cm = thickness;
    }
    layer.joint_type = update.joint_type.or(layer.joint_type);
    layer.origin = update.origin.or(layer.origin);
    layer.recycled_rate_pct = update.recycled_rate_pct.or(layer.recycled_rate_pct);
    layer.binder_rate_pct = update.binder_rate_pct.or(layer.binder_rate_pct);
    layer.cement_family = update.cement_family.or(layer.cement_family);
    layer.void_ratio_pct = update.void_ratio_pct.or(layer.void_ratio_pct);
    layer.user_impact = update.user_impact.or(layer.user_impact);
    layer
}

pub fn validate_thickness(thickness_cm: f64) -> Result<(), InputError> {
    if !thickness_cm.is_finite() || thickness_cm < 0.0 {
        return Err(InputError::InvalidThickness(thickness_cm));
    }
    Ok(())
}

pub fn validate_surface_area(surface_area: f64) -> Result<(), InputError> {
    if !surface_area.is_finite() || surface_area < 0.0 {
        return Err(InputError::InvalidSurfaceArea(surface_area));
    }
    Ok(())
}

fn validate_percentage(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), InputError> {
    if !value.is_finite() || value < min || value > max {
        return Err(InputError::InvalidPercentage { field, value, min, max });
    }
    Ok(())
}
