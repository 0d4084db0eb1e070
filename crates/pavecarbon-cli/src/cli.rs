//! CLI definition using clap

use clap::{Parser, Subcommand};
use pavecarbon_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pavecarbon")]
#[command(version)]
#[command(about = "Embodied-carbon footprint of paved outdoor surfaces")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List catalog materials
    Materials,

    /// List base compositions, or show one
    Templates {
        /// Template name to show in detail
        name: Option<String>,
    },

    /// Compute and compare the compositions of a project file (TOML)
    Compute {
        /// Path to project file
        project: PathBuf,

        /// Write the report to a file (.xlsx or .json)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Compare base compositions directly
    Quick {
        /// Template names (repeatable)
        #[arg(long = "template", short = 't', required = true)]
        templates: Vec<String>,

        /// Surface area in m² applied to every composition
        #[arg(long, short = 'a')]
        area: Option<f64>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default surface area (m²)
        #[arg(long)]
        set_area: Option<f64>,

        /// Set material of new layers
        #[arg(long)]
        set_material: Option<String>,

        /// Set thickness of new layers (cm)
        #[arg(long)]
        set_thickness: Option<f64>,

        /// Set suffix of duplicated compositions
        #[arg(long)]
        set_suffix: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
