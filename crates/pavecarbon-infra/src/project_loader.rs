//! Project file loader (TOML)
//!
//! A project file lists compositions, each seeded from a template and/or
//! given explicit layers:
//!
//! ```toml
//! [[compositions]]
//! name = "Parking"
//! surface_area = 120.0
//! template = "Revêtement bitumineux"
//!
//! [[compositions.layers]]
//! material = "Enrobé bitumineux"
//! thickness_cm = 7
//! recycled_rate_pct = 20
//! ```

use pavecarbon_domain::Layer;
use pavecarbon_types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One composition entry of a project file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectComposition {
    /// Display name; defaults to the template name
    #[serde(default)]
    pub name: Option<String>,
    /// m²; defaults to the configured area
    #[serde(default)]
    pub surface_area: Option<f64>,
    /// Template to seed layers from
    #[serde(default)]
    pub template: Option<String>,
    /// Explicit layers, replacing the template's layers when present
    #[serde(default)]
    pub layers: Option<Vec<Layer>>,
}

/// Container for parsing a project file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    #[serde(default)]
    pub compositions: Vec<ProjectComposition>,
}

impl ProjectFile {
    /// Load a project from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    /// Load a project from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let project: ProjectFile = toml::from_str(toml_content)?;

        for (index, entry) in project.compositions.iter().enumerate() {
            if entry.template.is_none() && entry.layers.is_none() {
                return Err(Error::ProjectFile(format!(
                    "composition #{} ({}) needs a template or layers",
                    index + 1,
                    entry.name.as_deref().unwrap_or("unnamed")
                )));
            }
        }

        Ok(project)
    }

    /// Get the total number of compositions
    pub fn count(&self) -> usize {
        self.compositions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pavecarbon_domain::{CementFamily, JointType};

    const TEST_TOML: &str = r#"
[[compositions]]
name = "Parking"
surface_area = 120.0
template = "Revêtement bitumineux"

[[compositions]]
name = "Terrasse"
surface_area = 35.5

[[compositions.layers]]
material = "Dalle en pierre"
thickness_cm = 4
joint_type = "cement"
origin = "domestic"

[[compositions.layers]]
material = "Béton"
thickness_cm = 12
cement_family = "cem-iii-a"

[[compositions]]
template = "Revêtement gravier"
"#;

    #[test]
    fn test_load_from_str() {
        let project = ProjectFile::load_from_str(TEST_TOML).unwrap();
        assert_eq!(project.count(), 3);
        assert_eq!(project.compositions[0].name.as_deref(), Some("Parking"));
        assert!(project.compositions[0].layers.is_none());
        assert!(project.compositions[2].name.is_none());
        assert!(project.compositions[2].surface_area.is_none());
    }

    #[test]
    fn test_layer_options() {
        let project = ProjectFile::load_from_str(TEST_TOML).unwrap();
        let layers = project.compositions[1].layers.as_ref().unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].thickness_cm, 4.0);
        assert_eq!(layers[0].joint_type, Some(JointType::Cement));
        assert_eq!(layers[1].cement_family, Some(CementFamily::CemIIIA));
        assert!(layers[1].void_ratio_pct.is_none());
    }

    #[test]
    fn test_entry_without_layers_or_template() {
        let err = ProjectFile::load_from_str("[[compositions]]\nname = \"Vide\"\n").unwrap_err();
        assert!(matches!(err, Error::ProjectFile(msg) if msg.contains("Vide")));
    }

    #[test]
    fn test_invalid_toml() {
        let err = ProjectFile::load_from_str("compositions = 3").unwrap_err();
        assert!(matches!(err, Error::ProjectFile(_)));
    }

    #[test]
    fn test_misspelled_layer_key_is_rejected() {
        let toml = r#"
[[compositions]]
name = "Parking"

[[compositions.layers]]
material = "Enrobé bitumineux"
thickness_cm = 7
recycle_rate_pct = 20
"#;
        let err = ProjectFile::load_from_str(toml).unwrap_err();
        assert!(matches!(err, Error::ProjectFile(msg) if msg.contains("recycle_rate_pct")));
    }

    #[test]
    fn test_misspelled_composition_key_is_rejected() {
        let toml = "[[compositions]]\ntemplate = \"Revêtement gravier\"\nsurface = 12.0\n";
        let err = ProjectFile::load_from_str(toml).unwrap_err();
        assert!(matches!(err, Error::ProjectFile(_)));
    }

    #[test]
    fn test_empty_project() {
        let project = ProjectFile::load_from_str("").unwrap();
        assert_eq!(project.count(), 0);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProjectFile::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.toml");
        std::fs::write(&path, TEST_TOML).unwrap();
        let project = ProjectFile::load_from_file(&path).unwrap();
        assert_eq!(project.count(), 3);
    }
}
