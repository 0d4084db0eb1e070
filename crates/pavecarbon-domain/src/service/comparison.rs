//! Side-by-side comparison of several compositions

use serde::{Deserialize, Serialize};

use pavecarbon_types::FootprintError;

use crate::model::Composition;
use crate::repository::MaterialRepository;
use crate::service::composition_footprint::{compute_composition, per_area, CompositionFootprint};

/// Name of the synthetic aggregate row
pub const TOTAL_ROW_NAME: &str = "Total";

/// Legend colours, assigned in first-seen order and cycled
pub const PALETTE: [&str; 20] = [
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
    "#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
    "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

/// One line of the comparison table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub name: String,
    /// m²
    pub surface_area: f64,
    /// kg CO₂e
    pub total_footprint: f64,
    /// kg CO₂e/m², `None` when the area is zero
    pub footprint_per_area: Option<f64>,
}

/// One stacked segment of a composition's bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownSegment {
    pub material: String,
    /// kg CO₂e/m²
    pub per_area: f64,
}

/// Stacked per-material breakdown, bottom layer first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionBreakdown {
    pub composition_id: String,
    pub name: String,
    pub segments: Vec<BreakdownSegment>,
}

impl CompositionBreakdown {
    /// Height of the stacked bar (kg CO₂e/m², excavation excluded)
    pub fn stacked_per_area(&self) -> f64 {
        self.segments.iter().map(|s| s.per_area).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub material: String,
    pub color: String,
}

/// Everything a presentation layer needs to draw the table and the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// One row per composition, in insertion order
    pub rows: Vec<ComparisonRow>,
    /// Aggregate row over all compositions
    pub total: ComparisonRow,
    pub breakdowns: Vec<CompositionBreakdown>,
    pub legend: Vec<LegendEntry>,
    /// Detailed per-layer results
    pub compositions: Vec<CompositionFootprint>,
}

impl ComparisonReport {
    /// Composition rows followed by the total row
    pub fn table_rows(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.rows.iter().chain(std::iter::once(&self.total))
    }

    /// Colour assigned to a material, if it appears in any composition
    pub fn color_of(&self, material: &str) -> Option<&str> {
        self.legend
            .iter()
            .find(|entry| entry.material == material)
            .map(|entry| entry.color.as_str())
    }
}

/// Compare compositions in the given order
///
/// A composition that fails to compute fails the comparison, with the error
/// naming that composition.
pub fn compare<R: MaterialRepository + ?Sized>(
    compositions: &[Composition],
    catalog: &R,
) -> Result<ComparisonReport, FootprintError> {
    let footprints = compositions
        .iter()
        .map(|c| {
            compute_composition(c, catalog).map_err(|e| FootprintError::Composition {
                name: c.name.clone(),
                source: Box::new(e),
            })
        })
        .collect::<Result<Vec<_>, FootprintError>>()?;

    let rows: Vec<ComparisonRow> = footprints
        .iter()
        .map(|fp| ComparisonRow {
            name: fp.name.clone(),
            surface_area: fp.surface_area,
            total_footprint: fp.total,
            footprint_per_area: fp.per_area,
        })
        .collect();

    let area_sum: f64 = rows.iter().map(|r| r.surface_area).sum();
    let total_sum: f64 = rows.iter().map(|r| r.total_footprint).sum();
    if !total_sum.is_finite() || !area_sum.is_finite() {
        return Err(FootprintError::NonFinite);
    }
    let total = ComparisonRow {
        name: TOTAL_ROW_NAME.to_string(),
        surface_area: area_sum,
        total_footprint: total_sum,
        footprint_per_area: per_area(total_sum, area_sum).ok(),
    };

    let breakdowns: Vec<CompositionBreakdown> = footprints
        .iter()
        .map(|fp| CompositionBreakdown {
            composition_id: fp.composition_id.clone(),
            name: fp.name.clone(),
            segments: fp
                .layers
                .iter()
                .rev()
                .map(|l| BreakdownSegment {
                    material: l.material.clone(),
                    per_area: l.per_area,
                })
                .collect(),
        })
        .collect();

    let legend = build_legend(&breakdowns);

    Ok(ComparisonReport {
        rows,
        total,
        breakdowns,
        legend,
        compositions: footprints,
    })
}

fn build_legend(breakdowns: &[CompositionBreakdown]) -> Vec<LegendEntry> {
    let mut legend: Vec<LegendEntry> = Vec::new();
    for segment in breakdowns.iter().flat_map(|b| b.segments.iter()) {
        if legend.iter().any(|e| e.material == segment.material) {
            continue;
        }
        let color = PALETTE[legend.len() % PALETTE.len()];
        legend.push(LegendEntry {
            material: segment.material.clone(),
            color: color.to_string(),
        });
    }
    legend
}
