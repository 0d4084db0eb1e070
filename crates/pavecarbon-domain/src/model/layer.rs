//! Layer (one course of a composition)

use serde::{Deserialize, Serialize};

use super::factors::{CementFamily, JointType, StoneOrigin};

/// One material course. Only the optional fields relevant to the material's
/// kind are read; the rest are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layer {
    /// Catalog material name
    pub material: String,
    /// Thickness in cm
    pub thickness_cm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joint_type: Option<JointType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<StoneOrigin>,
    /// Recycled aggregate content of an asphalt mix (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recycled_rate_pct: Option<f64>,
    /// Bitumen binder content of an asphalt mix (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binder_rate_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cement_family: Option<CementFamily>,
    /// Open area of a precast grid (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub void_ratio_pct: Option<f64>,
    /// User impact for the free-form material (kg CO₂e/m³)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_impact: Option<f64>,
}

impl Layer {
    pub fn new(material: &str, thickness_cm: f64) -> Self {
        Self {
            material: material.to_string(),
            thickness_cm,
            joint_type: None,
            origin: None,
            recycled_rate_pct: None,
            binder_rate_pct: None,
            cement_family: None,
            void_ratio_pct: None,
            user_impact: None,
        }
    }

    pub fn with_joint(mut self, joint_type: JointType) -> Self {
        self.joint_type = Some(joint_type);
        self
    }

    pub fn with_origin(mut self, origin: StoneOrigin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_recycled_rate(mut self, pct: f64) -> Self {
        self.recycled_rate_pct = Some(pct);
        self
    }

    pub fn with_binder_rate(mut self, pct: f64) -> Self {
        self.binder_rate_pct = Some(pct);
        self
    }

    pub fn with_cement_family(mut self, family: CementFamily) -> Self {
        self.cement_family = Some(family);
        self
    }

    pub fn with_void_ratio(mut self, pct: f64) -> Self {
        self.void_ratio_pct = Some(pct);
        self
    }

    pub fn with_user_impact(mut self, impact: f64) -> Self {
        self.user_impact = Some(impact);
        self
    }

    /// Drop every per-kind override so the standard defaults apply again
    pub fn clear_overrides(&mut self) {
        self.joint_type = None;
        self.origin = None;
        self.recycled_rate_pct = None;
        self.binder_rate_pct = None;
        self.cement_family = None;
        self.void_ratio_pct = None;
        self.user_impact = None;
    }

    /// Thickness in metres
    pub fn thickness_m(&self) -> f64 {
        self.thickness_cm / 100.0
    }
}
