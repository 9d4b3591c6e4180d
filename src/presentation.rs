// src/presentation.rs
use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};
use ffmc_engine::stats::RunResult;
use serde_json::json;

use crate::options::OutputFormat;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub format: OutputFormat,
    pub summary: bool,
    pub quiet: bool,
}

pub fn print_report(result: &RunResult, province: &str, opts: ReportOptions) {
    if opts.quiet {
        return;
    }
    match opts.format {
        OutputFormat::Table => println!("{}", render_table(result, province, opts.summary)),
        OutputFormat::Json => println!("{}", render_json(result, province)),
    }
}

pub fn render_table(result: &RunResult, province: &str, summary: bool) -> String {
    let mut out = format!(
        "Processing complete. Results for '{province}' saved to '{}'",
        result.output_path.display()
    );
    if !summary {
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Kategori", "Kecamatan"]);
    for (category, count) in result.category_counts() {
        table.add_row(vec![
            Cell::new(category.label()),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total"),
        Cell::new(result.rows.len()).set_alignment(CellAlignment::Right),
    ]);

    let s = &result.stats;
    out.push('\n');
    out.push_str(&table.to_string());
    out.push_str(&format!(
        "\n{} points read, {} inside province bounds, {} joined to {} of {} kecamatan polygons",
        s.points_read, s.points_in_bounds, s.points_joined, result.rows.len(), s.boundaries_selected
    ));
    out
}

pub fn render_json(result: &RunResult, province: &str) -> String {
    let categories: serde_json::Map<String, serde_json::Value> = result
        .category_counts()
        .into_iter()
        .map(|(category, count)| (category.label().to_string(), count.into()))
        .collect();

    let report = json!({
        "province": province,
        "output": result.output_path.display().to_string(),
        "rows": result.rows.len(),
        "points_read": result.stats.points_read,
        "points_in_bounds": result.stats.points_in_bounds,
        "points_joined": result.stats.points_joined,
        "categories": categories,
    });
    serde_json::to_string_pretty(&report).unwrap_or_default()
}
