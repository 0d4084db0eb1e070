//! Fixed process constants and the per-option factor tables
//!
//! Impacts are kg CO₂e per kg unless stated otherwise. Densities are kg/m³.

use serde::{Deserialize, Serialize};

/// Earthworks impact per m³ of excavated depth (kg CO₂e/m³)
pub const EXCAVATION_IMPACT: f64 = 0.43;

/// Share of a jointed layer's volume taken by the joint/bedding
pub const JOINT_SHARE: f64 = 0.05;

/// Sand joint: density × impact (kg CO₂e/m³)
pub const SAND_JOINT_FACTOR: f64 = 1500.0 * 0.01565;

/// Cement joint: density × impact (kg CO₂e/m³)
pub const CEMENT_JOINT_FACTOR: f64 = 1550.0 * 0.26;

/// Bitumen binder impact
pub const ASPHALT_BINDER_IMPACT: f64 = 0.8375;

/// Virgin aggregate impact in an asphalt mix
pub const ASPHALT_AGGREGATE_IMPACT: f64 = 0.003012;

/// Plant-to-site transport of an asphalt mix
pub const ASPHALT_TRANSPORT_IMPACT: f64 = 0.046 + 0.019;

/// Density shared by every entry of the cement-family table
pub const STRUCTURAL_CONCRETE_DENSITY: f64 = 2350.0;

/// Joint or bedding binder of a jointed layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JointType {
    #[default]
    Sand,
    Cement,
}

impl JointType {
    /// Volumetric emission factor of the joint material (kg CO₂e/m³)
    pub fn emission_factor(&self) -> f64 {
        match self {
            JointType::Sand => SAND_JOINT_FACTOR,
            JointType::Cement => CEMENT_JOINT_FACTOR,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JointType::Sand => "Sable",
            JointType::Cement => "Ciment",
        }
    }
}

/// Provenance of natural stone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoneOrigin {
    /// Unknown or mixed supply
    #[default]
    Mix,
    /// Domestic quarry (Switzerland)
    Domestic,
    Europe,
    Overseas,
}

impl StoneOrigin {
    pub const ALL: [StoneOrigin; 4] = [
        StoneOrigin::Mix,
        StoneOrigin::Domestic,
        StoneOrigin::Europe,
        StoneOrigin::Overseas,
    ];

    /// Signed transport adjustment added to the base impact (kg CO₂e/kg)
    pub fn transport_adjustment(&self) -> f64 {
        match self {
            StoneOrigin::Mix => 0.0,
            StoneOrigin::Domestic => -0.0848,
            StoneOrigin::Europe => -0.0048,
            StoneOrigin::Overseas => 0.0267,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StoneOrigin::Mix => "Mix",
            StoneOrigin::Domestic => "Suisse",
            StoneOrigin::Europe => "Europe",
            StoneOrigin::Overseas => "Outre-mer",
        }
    }
}

/// Cement used in a structural concrete layer
///
/// Serialized in lowercase like the other option enums; the printed labels
/// ("CEM II/B", ...) are accepted as aliases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CementFamily {
    #[default]
    #[serde(alias = "Standard")]
    Standard,
    #[serde(alias = "Portland")]
    Portland,
    #[serde(rename = "cem-ii-b", alias = "CEM II/B")]
    CemIIB,
    #[serde(rename = "cem-ii-a", alias = "CEM II/A")]
    CemIIA,
    #[serde(rename = "cem-zn-d", alias = "CEM ZN/D")]
    CemZnD,
    #[serde(rename = "cem-iii-a", alias = "CEM III/A")]
    CemIIIA,
}

impl CementFamily {
    pub const ALL: [CementFamily; 6] = [
        CementFamily::Standard,
        CementFamily::Portland,
        CementFamily::CemIIB,
        CementFamily::CemIIA,
        CementFamily::CemZnD,
        CementFamily::CemIIIA,
    ];

    /// Concrete impact per kg for this cement
    pub fn impact(&self) -> f64 {
        match self {
            CementFamily::Standard => 0.1088,
            CementFamily::Portland => 0.118,
            CementFamily::CemIIB => 0.101,
            CementFamily::CemIIA => 0.105,
            CementFamily::CemZnD => 0.089,
            CementFamily::CemIIIA => 0.080,
        }
    }

    /// Concrete impact per m³ for this cement
    pub fn impact_per_m3(&self) -> f64 {
        self.impact() * STRUCTURAL_CONCRETE_DENSITY
    }

    pub fn label(&self) -> &'static str {
        match self {
            CementFamily::Standard => "Standard",
            CementFamily::Portland => "Portland",
            CementFamily::CemIIB => "CEM II/B",
            CementFamily::CemIIA => "CEM II/A",
            CementFamily::CemZnD => "CEM ZN/D",
            CementFamily::CemIIIA => "CEM III/A",
        }
    }
}

/// Values used when a layer leaves a kind-specific field unset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverrideDefaults {
    pub joint_type: JointType,
    pub origin: StoneOrigin,
    pub recycled_rate_pct: f64,
    pub binder_rate_pct: f64,
    pub cement_family: CementFamily,
    pub void_ratio_pct: f64,
    /// kg CO₂e/m³
    pub user_impact: f64,
}

impl OverrideDefaults {
    pub const STANDARD: OverrideDefaults = OverrideDefaults {
        joint_type: JointType::Sand,
        origin: StoneOrigin::Mix,
        recycled_rate_pct: 0.0,
        binder_rate_pct: 5.6,
        cement_family: CementFamily::Standard,
        void_ratio_pct: 40.0,
        user_impact: 100.0,
    };
}

impl Default for OverrideDefaults {
    fn default() -> Self {
        Self::STANDARD
    }
}
