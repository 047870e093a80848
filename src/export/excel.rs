//! Excel生成（CLI版）
//!
//! common の excel_core で生成したバッファをファイルに書き出す。

use crate::error::{IngredientCheckError, Result};
use ingredient_check_common::export::excel_core::generate_excel_buffer;
use ingredient_check_common::Report;
use std::path::Path;

pub fn generate_excel(report: &Report, output_path: &Path, columns: usize) -> Result<()> {
    let buffer = generate_excel_buffer(report, columns)
        .map_err(|e| IngredientCheckError::ExcelGeneration(e.to_string()))?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}
