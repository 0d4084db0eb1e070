//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_comparison, output_materials, output_templates};
use pavecarbon_app::config::Config;
use pavecarbon_app::export::export_to_excel;
use pavecarbon_app::project::load_project;
use pavecarbon_app::CompositionSession;
use pavecarbon_domain::service::ComparisonReport;
use pavecarbon_domain::MaterialRepository;
use pavecarbon_infra::write_report_json;
use pavecarbon_types::{Error, InputError, OutputFormat, Result};
use std::path::{Path, PathBuf};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    if cli.verbose {
        if let Ok(path) = Config::config_path() {
            eprintln!("Config: {}", path.display());
        }
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Materials => cmd_materials(&config, output_format),

        Commands::Templates { name } => cmd_templates(&config, name.as_deref(), output_format),

        Commands::Compute { project, output } => {
            cmd_compute(&cli, &config, project.clone(), output.clone(), output_format)
        }

        Commands::Quick { templates, area } => {
            cmd_quick(&cli, &config, templates, *area, output_format)
        }

        Commands::Config {
            show,
            set_area,
            set_material,
            set_thickness,
            set_suffix,
            set_output,
            reset,
        } => cmd_config(
            *show,
            *set_area,
            set_material.clone(),
            *set_thickness,
            set_suffix.clone(),
            *set_output,
            *reset,
        ),
    }
}

fn cmd_materials(config: &Config, output_format: OutputFormat) -> Result<()> {
    let session = CompositionSession::new(config.session_settings());
    output_materials(output_format, session.catalog().materials())
}

fn cmd_templates(config: &Config, name: Option<&str>, output_format: OutputFormat) -> Result<()> {
    let session = CompositionSession::new(config.session_settings());
    match name {
        Some(name) => {
            let template = session
                .template(name)
                .ok_or_else(|| InputError::UnknownTemplate(name.to_string()))?;
            output_templates(output_format, std::slice::from_ref(template))
        }
        None => output_templates(output_format, session.list_templates()),
    }
}

fn cmd_compute(
    cli: &Cli,
    config: &Config,
    project: PathBuf,
    output: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    if !project.exists() {
        return Err(Error::FileNotFound(project.display().to_string()));
    }

    if cli.verbose {
        eprintln!("Loading project: {}", project.display());
    }

    let session = load_project(&project, config)?;

    if cli.verbose {
        eprintln!("Compositions: {}", session.compositions().len());
        for composition in session.compositions() {
            eprintln!(
                "  {} ({} m², {} layers)",
                composition.name,
                composition.surface_area,
                composition.layers.len()
            );
        }
    }

    let report = session.compute_comparison()?;
    output_comparison(output_format, &report)?;

    if let Some(path) = output {
        write_output(&report, &path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn write_output(report: &ComparisonReport, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("xlsx") => export_to_excel(report, path),
        Some("json") => write_report_json(report, path),
        _ => Err(Error::UnsupportedFormat(format!(
            "{} (use .xlsx or .json)",
            path.display()
        ))),
    }
}

fn cmd_quick(
    cli: &Cli,
    config: &Config,
    templates: &[String],
    area: Option<f64>,
    output_format: OutputFormat,
) -> Result<()> {
    let mut session = CompositionSession::new(config.session_settings());

    for name in templates {
        let id = session.create_composition(name)?.id.clone();
        if let Some(area) = area {
            session.set_surface_area(&id, area)?;
        }
        if cli.verbose {
            eprintln!("Added composition from template: {}", name);
        }
    }

    let report = session.compute_comparison()?;
    output_comparison(output_format, &report)
}

fn cmd_config(
    show: bool,
    set_area: Option<f64>,
    set_material: Option<String>,
    set_thickness: Option<f64>,
    set_suffix: Option<String>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(area) = set_area {
        pavecarbon_app::session::validate_surface_area(area)?;
        config.default_surface_area = area;
        modified = true;
    }

    if let Some(material) = set_material {
        let session = CompositionSession::default();
        if !session.catalog().contains(&material) {
            return Err(InputError::UnknownMaterial(material).into());
        }
        config.default_layer_material = material;
        modified = true;
    }

    if let Some(thickness) = set_thickness {
        pavecarbon_app::session::validate_thickness(thickness)?;
        config.default_layer_thickness_cm = thickness;
        modified = true;
    }

    if let Some(suffix) = set_suffix {
        config.duplicate_suffix = suffix;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("\n{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ComparisonReport {
        let mut session = CompositionSession::default();
        session.create_composition("Revêtement gravier").unwrap();
        session.compute_comparison().unwrap()
    }

    #[test]
    fn test_write_output_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let report = sample_report();

        let json = dir.path().join("report.json");
        write_output(&report, &json).unwrap();
        let content = std::fs::read_to_string(&json).unwrap();
        assert!(content.contains("generated_at"));

        let xlsx = dir.path().join("report.XLSX");
        write_output(&report, &xlsx).unwrap();
        assert!(xlsx.exists());
    }

    #[test]
    fn test_write_output_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        assert!(write_output(&sample_report(), &path).is_err());
        assert!(!path.exists());
    }
}
