//! Excel export functionality

use pavecarbon_domain::service::ComparisonReport;
use pavecarbon_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Export a comparison report to an Excel file
pub fn export_to_excel(report: &ComparisonReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let comparison_sheet = workbook.add_worksheet();
    write_comparison_sheet(comparison_sheet, report)?;

    let breakdown_sheet = workbook.add_worksheet();
    write_breakdown_sheet(breakdown_sheet, report)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn xlsx<T>(result: std::result::Result<T, rust_xlsxwriter::XlsxError>) -> Result<T> {
    result.map_err(|e| Error::Excel(e.to_string()))
}

fn write_comparison_sheet(sheet: &mut Worksheet, report: &ComparisonReport) -> Result<()> {
    xlsx(sheet.set_name("Comparison"))?;

    let header_format = Format::new().set_bold();
    let number_format = Format::new().set_num_format("#,##0.00");

    let headers = [
        "Composition",
        "Surface (m²)",
        "Total (kg CO₂e)",
        "Per m² (kg CO₂e/m²)",
    ];
    for (col, header) in headers.iter().enumerate() {
        xlsx(sheet.write_string_with_format(0, col as u16, *header, &header_format))?;
    }

    for (row_idx, row) in report.table_rows().enumerate() {
        let line = (row_idx + 1) as u32;
        let is_total = row_idx == report.rows.len();
        if is_total {
            xlsx(sheet.write_string_with_format(line, 0, &row.name, &header_format))?;
        } else {
            xlsx(sheet.write_string(line, 0, &row.name))?;
        }
        xlsx(sheet.write_number_with_format(line, 1, row.surface_area, &number_format))?;
        xlsx(sheet.write_number_with_format(line, 2, row.total_footprint, &number_format))?;
        match row.footprint_per_area {
            Some(value) => {
                xlsx(sheet.write_number_with_format(line, 3, value, &number_format))?;
            }
            None => {
                xlsx(sheet.write_string(line, 3, "n/a"))?;
            }
        }
    }

    xlsx(sheet.set_column_width(0, 40))?;
    xlsx(sheet.set_column_width(1, 14))?;
    xlsx(sheet.set_column_width(2, 18))?;
    xlsx(sheet.set_column_width(3, 20))?;

    Ok(())
}

fn write_breakdown_sheet(sheet: &mut Worksheet, report: &ComparisonReport) -> Result<()> {
    xlsx(sheet.set_name("Breakdown"))?;

    let header_format = Format::new().set_bold();

    let headers = ["Composition", "Material", "kg CO₂e/m²", "Colour"];
    for (col, header) in headers.iter().enumerate() {
        xlsx(sheet.write_string_with_format(0, col as u16, *header, &header_format))?;
    }

    // Bottom layer first, as stacked in the chart
    let mut line = 1u32;
    for breakdown in &report.breakdowns {
        for segment in &breakdown.segments {
            xlsx(sheet.write_string(line, 0, &breakdown.name))?;
            xlsx(sheet.write_string(line, 1, &segment.material))?;
            xlsx(sheet.write_number(line, 2, segment.per_area))?;
            if let Some(color) = report.color_of(&segment.material) {
                xlsx(sheet.write_string(line, 3, color))?;
            }
            line += 1;
        }
    }

    xlsx(sheet.set_column_width(0, 40))?;
    xlsx(sheet.set_column_width(1, 28))?;
    xlsx(sheet.set_column_width(2, 14))?;

    Ok(())
}
