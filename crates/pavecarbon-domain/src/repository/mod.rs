//! Repository trait definitions for reference data

use pavecarbon_types::FootprintError;

use crate::model::Material;

/// Read-only access to the material catalog
pub trait MaterialRepository {
    /// Find a material by name, failing with `UnknownMaterial` if absent
    fn lookup(&self, name: &str) -> Result<&Material, FootprintError>;

    /// All material names in catalog order
    fn material_names(&self) -> Vec<&str>;

    /// Check whether a material name exists
    fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_ok()
    }
}
