//! Material table
//!
//! Base impacts are kg CO₂e/kg except for the geotextile (kg CO₂e/m²) and the
//! free-form material, whose impact is entered per layer.

use pavecarbon_domain::{JointedFamily, Material, MaterialKind};

/// Free-form material used for new layers
pub const UNDEFINED_MATERIAL: &str = "Indéfini";

/// Materials in display order
pub fn standard_materials() -> Vec<Material> {
    use JointedFamily::{NaturalStone, Precast};
    use MaterialKind::*;

    vec![
        Material::new("Gravier", Some(1500.0), 0.01761, Bulk),
        Material::new("Béton", Some(2350.0), 0.1088, StructuralConcrete),
        Material::new("Enrobé bitumineux", Some(2400.0), 0.1154, Bituminous),
        Material::new("Pavé béton préfabriquée", Some(2300.0), 0.2087, Jointed(Precast)),
        Material::new("Grille béton préfabriquée", Some(2300.0), 0.2087, VoidConcrete),
        // Includes the imported-stone transport share; a domestic origin removes it
        Material::new("Pavé en pierre", Some(2500.0), 0.0957 + 0.0848, Jointed(NaturalStone)),
        Material::new("Dalle en pierre", Some(2750.0), 0.407, Jointed(NaturalStone)),
        Material::new("Dalle en pierre polie", Some(2750.0), 0.475, Jointed(NaturalStone)),
        Material::new("Géotextile", Some(1.0), 1.3, Textile),
        Material::new("Béton maigre", Some(2150.0), 0.0628, Bulk),
        Material::new("Granulés de béton", Some(1550.0), 0.01392, Bulk),
        Material::new("Grave", Some(1500.0), 0.01761, Bulk),
        Material::new(UNDEFINED_MATERIAL, None, 0.0, FreeForm),
    ]
}
