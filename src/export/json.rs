use crate::error::Result;
use ingredient_check_common::Report;
use std::path::Path;

/// レポートを整形済みJSONで出力
pub fn generate_json(report: &Report, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(output_path, json)?;
    Ok(())
}
