//! Material catalog

use pavecarbon_domain::{Material, MaterialRepository};
use pavecarbon_types::FootprintError;

use crate::constants::standard_materials;

/// Closed, read-only set of materials in display order
#[derive(Debug, Clone)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    /// Catalog with the canonical material table
    pub fn standard() -> Self {
        Self::new(standard_materials())
    }

    /// Build from an explicit material list. Later duplicates of a name are
    /// dropped so that lookup stays unambiguous.
    pub fn new(materials: Vec<Material>) -> Self {
        let mut unique: Vec<Material> = Vec::with_capacity(materials.len());
        for material in materials {
            if !unique.iter().any(|m| m.name == material.name) {
                unique.push(material);
            }
        }
        Self { materials: unique }
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl MaterialRepository for MaterialCatalog {
    fn lookup(&self, name: &str) -> Result<&Material, FootprintError> {
        self.materials
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| FootprintError::UnknownMaterial(name.to_string()))
    }

    fn material_names(&self) -> Vec<&str> {
        self.materials.iter().map(|m| m.name.as_str()).collect()
    }
}
