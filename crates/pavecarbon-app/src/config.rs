//! Configuration management for pavecarbon
//!
//! Config stored at: ~/.config/pavecarbon/config.json

use pavecarbon_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::UNDEFINED_MATERIAL;
use crate::session::{validate_surface_area, validate_thickness, SessionSettings};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Surface area given to a new composition (m²)
    #[serde(default = "default_surface_area")]
    pub default_surface_area: f64,

    /// Material of a newly added layer
    #[serde(default = "default_layer_material")]
    pub default_layer_material: String,

    /// Thickness of a newly added layer (cm)
    #[serde(default = "default_layer_thickness_cm")]
    pub default_layer_thickness_cm: f64,

    /// Appended to the name of a duplicated composition
    #[serde(default = "default_duplicate_suffix")]
    pub duplicate_suffix: String,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_surface_area() -> f64 {
    1.0
}

fn default_layer_material() -> String {
    UNDEFINED_MATERIAL.to_string()
}

fn default_layer_thickness_cm() -> f64 {
    5.0
}

fn default_duplicate_suffix() -> String {
    " (copie)".to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_surface_area: default_surface_area(),
            default_layer_material: default_layer_material(),
            default_layer_thickness_cm: default_layer_thickness_cm(),
            duplicate_suffix: default_duplicate_suffix(),
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("pavecarbon");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path, or create default if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Check the numeric defaults against the same rules as session input
    pub fn validate(&self) -> Result<()> {
        validate_surface_area(self.default_surface_area)?;
        validate_thickness(self.default_layer_thickness_cm)?;
        Ok(())
    }

    /// Defaults applied by a composition session
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            default_surface_area: self.default_surface_area,
            default_layer_material: self.default_layer_material.clone(),
            default_layer_thickness_cm: self.default_layer_thickness_cm,
            duplicate_suffix: self.duplicate_suffix.clone(),
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Pavecarbon Configuration")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(f, "Default area:      {} m²", self.default_surface_area)?;
        writeln!(f, "Default material:  {}", self.default_layer_material)?;
        writeln!(f, "Default thickness: {} cm", self.default_layer_thickness_cm)?;
        writeln!(f, "Duplicate suffix:  \"{}\"", self.duplicate_suffix)?;
        writeln!(f, "Output format:     {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:       {}", path.display())?;
        }

        Ok(())
    }
}
