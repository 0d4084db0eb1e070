//! Small catalog shared by the unit tests

use pavecarbon_types::FootprintError;

use crate::model::{JointedFamily, Material, MaterialKind};
use crate::repository::MaterialRepository;

pub(crate) struct TestCatalog {
    materials: Vec<Material>,
}

impl TestCatalog {
    pub(crate) fn new() -> Self {
        Self {
            materials: vec![
                Material::new("Gravier", Some(1500.0), 0.01761, MaterialKind::Bulk),
                Material::new("Grave", Some(1500.0), 0.01761, MaterialKind::Bulk),
                Material::new("Géotextile", Some(1.0), 1.3, MaterialKind::Textile),
                Material::new(
                    "Pavé béton préfabriquée",
                    Some(2300.0),
                    0.2087,
                    MaterialKind::Jointed(JointedFamily::Precast),
                ),
                Material::new("Enrobé bitumineux", Some(2400.0), 0.1154, MaterialKind::Bituminous),
                Material::new("Indéfini", None, 0.0, MaterialKind::FreeForm),
            ],
        }
    }
}

impl MaterialRepository for TestCatalog {
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
