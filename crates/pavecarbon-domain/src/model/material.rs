//! Material-related type definitions

use serde::{Deserialize, Serialize};

/// Family of a jointed material, decides whether the stone origin applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointedFamily {
    /// Precast concrete pavers
    Precast,
    /// Natural stone pavers and slabs (origin adjustment applies)
    NaturalStone,
}

/// How the emission factor of a material is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    /// Unbound aggregate, gravel, lean concrete
    Bulk,
    /// Geotextile: fixed impact per m², no thickness
    Textile,
    /// Pavers and slabs laid with a sand or cement joint
    Jointed(JointedFamily),
    /// Asphalt mix with binder and recycled content
    Bituminous,
    /// Cast concrete, impact depends on the cement family
    StructuralConcrete,
    /// Precast grid with open voids
    VoidConcrete,
    /// User-defined impact per m³
    FreeForm,
}

impl MaterialKind {
    /// Textile-like kinds are excluded from excavation depth
    pub fn is_textile(&self) -> bool {
        matches!(self, MaterialKind::Textile)
    }

    /// Short label for listings
    pub fn label(&self) -> &'static str {
        match self {
            MaterialKind::Bulk => "bulk",
            MaterialKind::Textile => "textile",
            MaterialKind::Jointed(JointedFamily::Precast) => "jointed (precast)",
            MaterialKind::Jointed(JointedFamily::NaturalStone) => "jointed (stone)",
            MaterialKind::Bituminous => "bituminous",
            MaterialKind::StructuralConcrete => "structural concrete",
            MaterialKind::VoidConcrete => "void concrete",
            MaterialKind::FreeForm => "free-form",
        }
    }
}

/// Catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Unique name, used as the lookup key
    pub name: String,
    /// Density in kg/m³ (absent for the free-form material)
    pub density: Option<f64>,
    /// Base impact: kg CO₂e/kg for most kinds, kg CO₂e/m² for textiles
    pub base_impact: f64,
    pub kind: MaterialKind,
}

impl Material {
    pub fn new(name: &str, density: Option<f64>, base_impact: f64, kind: MaterialKind) -> Self {
        Self {
            name: name.to_string(),
            density,
            base_impact,
            kind,
        }
    }
}
