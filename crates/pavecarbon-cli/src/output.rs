//! Output formatting module

use pavecarbon_app::constants::Template;
use pavecarbon_domain::service::{ComparisonReport, ComparisonRow};
use pavecarbon_domain::Material;
use pavecarbon_infra::ReportDocument;
use pavecarbon_types::{OutputFormat, Result};

const UNDEFINED: &str = "n/a";

fn format_per_area(row: &ComparisonRow) -> String {
    row.footprint_per_area
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| UNDEFINED.to_string())
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

pub fn render_comparison(report: &ComparisonReport) -> String {
    let mut out = String::new();
    out.push_str("\nComparison\n");
    out.push_str("==========\n");
    out.push_str(&format!(
        "{:<44} {:>12} {:>16} {:>12}\n",
        "Composition", "Surface m²", "Total kg CO₂e", "Per m²"
    ));
    out.push_str(&"-".repeat(87));
    out.push('\n');
    for (idx, row) in report.table_rows().enumerate() {
        if idx == report.rows.len() {
            out.push_str(&"-".repeat(87));
            out.push('\n');
        }
        out.push_str(&format!(
            "{:<44} {:>12.2} {:>16.2} {:>12}\n",
            truncate_str(&row.name, 43),
            row.surface_area,
            row.total_footprint,
            format_per_area(row)
        ));
    }

    if !report.breakdowns.is_empty() {
        out.push_str("\nBreakdown per m² (bottom layer first)\n");
        out.push_str("-------------------------------------\n");
        for breakdown in &report.breakdowns {
            out.push_str(&format!("{}\n", breakdown.name));
            for segment in &breakdown.segments {
                let color = report.color_of(&segment.material).unwrap_or("");
                out.push_str(&format!(
                    "  {:<30} {:>10.2} kg CO₂e/m²  {}\n",
                    truncate_str(&segment.material, 29),
                    segment.per_area,
                    color
                ));
            }
            out.push_str(&format!(
                "  {:<30} {:>10.2} kg CO₂e/m²\n",
                "(stacked)",
                breakdown.stacked_per_area()
            ));
        }
    }
    out
}

pub fn output_comparison(output_format: OutputFormat, report: &ComparisonReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        let document = ReportDocument::new(report.clone());
        println!("{}", document.to_json()?);
    } else {
        print!("{}", render_comparison(report));
    }
    Ok(())
}

pub fn output_materials(output_format: OutputFormat, materials: &[Material]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(materials)?);
        return Ok(());
    }

    println!("\nMaterials");
    println!("=========");
    println!("{:<28} {:<22} {:>10} {:>12}", "Name", "Kind", "kg/m³", "Base impact");
    for material in materials {
        let density = material
            .density
            .map(|d| format!("{:.0}", d))
            .unwrap_or_else(|| UNDEFINED.to_string());
        println!(
            "{:<28} {:<22} {:>10} {:>12.5}",
            material.name,
            material.kind.label(),
            density,
            material.base_impact
        );
    }
    Ok(())
}

pub fn output_templates(output_format: OutputFormat, templates: &[Template]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(templates)?);
        return Ok(());
    }

    for template in templates {
        println!("\n{}", template.name);
        for layer in &template.layers {
            println!("  {:<28} {:>6.1} cm", layer.material, layer.thickness_cm);
        }
    }
    Ok(())
}
