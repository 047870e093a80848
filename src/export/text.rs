use crate::error::Result;
use ingredient_check_common::export::text_core::render_text;
use ingredient_check_common::{paginate, Report, ReportLayout};
use std::path::Path;

/// レポートをテキストに整形
pub fn render_report(report: &Report, layout: &ReportLayout) -> String {
    render_text(&paginate(report, layout))
}

pub fn generate_text(report: &Report, output_path: &Path, layout: &ReportLayout) -> Result<()> {
    std::fs::write(output_path, render_report(report, layout))?;
    Ok(())
}
