//! calamine による表計算ファイル読み込み

use crate::error::{IngredientCheckError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use ingredient_check_common::Cell;
use std::path::Path;

/// 指定シート（省略時は先頭）をグリッドとして読み込む
pub fn read_sheet(path: &Path, sheet: Option<&str>) -> Result<Vec<Vec<Cell>>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| IngredientCheckError::SpreadsheetRead(format!("{}: {}", path.display(), e)))?;

    let range = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(IngredientCheckError::SheetNotFound(name.to_string()));
            }
            workbook
                .worksheet_range(name)
                .map_err(|e| IngredientCheckError::SpreadsheetRead(e.to_string()))?
        }
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| IngredientCheckError::SpreadsheetRead("シートがありません".into()))?
            .map_err(|e| IngredientCheckError::SpreadsheetRead(e.to_string()))?,
    };

    // range は使用範囲の左端から始まるため、先頭の空列を補う（空行は read_grid で除く）
    let (_, start_col) = range.start().unwrap_or((0, 0));
    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(range.height());
    for row in range.rows() {
        let mut cells: Vec<Cell> = vec![None; start_col as usize];
        cells.extend(row.iter().map(cell_to_string));
        rows.push(cells);
    }

    Ok(rows)
}

pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    let workbook = open_workbook_auto(path)
        .map_err(|e| IngredientCheckError::SpreadsheetRead(format!("{}: {}", path.display(), e)))?;
    Ok(workbook.sheet_names())
}

/// セル値を文字列に変換（空セルは None）
fn cell_to_string(cell: &Data) -> Cell {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Empty), None);
        assert_eq!(cell_to_string(&Data::String(String::new())), None);
        assert_eq!(cell_to_string(&Data::String("Yes".into())), Some("Yes".to_string()));
        assert_eq!(cell_to_string(&Data::Int(3)), Some("3".to_string()));
        assert_eq!(cell_to_string(&Data::Bool(true)), Some("true".to_string()));
    }
}
