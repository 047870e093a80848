//! 成分表ファイル読み込みモジュール
//!
//! 拡張子で形式を判定し、セルのグリッド（Vec<Vec<Cell>>）に変換する。

mod spreadsheet;

use crate::error::{IngredientCheckError, Result};
use ingredient_check_common::csv::{drop_blank_rows, parse_csv};
use ingredient_check_common::{Cell, Session};
use std::path::Path;

/// 対応する表計算ファイルの拡張子
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods"];

/// 入力ファイルの形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Csv,
    Spreadsheet,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if ext == "csv" {
            Ok(SourceKind::Csv)
        } else if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
            Ok(SourceKind::Spreadsheet)
        } else {
            Err(IngredientCheckError::UnsupportedFormat(path.display().to_string()))
        }
    }
}

/// ファイルを読み込んでグリッドを返す
///
/// `sheet` は表計算ファイルのみ有効（省略時は先頭シート）。
/// 形式によらず、全セルが空の行は取り除く。
pub fn read_grid(path: &Path, sheet: Option<&str>) -> Result<Vec<Vec<Cell>>> {
    if !path.exists() {
        return Err(IngredientCheckError::FileNotFound(path.display().to_string()));
    }

    let kind = SourceKind::from_path(path)?;
    log::debug!("読み込み: {} ({:?})", path.display(), kind);

    let rows = match kind {
        SourceKind::Csv => {
            if sheet.is_some() {
                log::warn!("CSVではシート指定は無視されます");
            }
            let content = read_utf8(path)?;
            parse_csv(&content)?
        }
        SourceKind::Spreadsheet => spreadsheet::read_sheet(path, sheet)?,
    };
    let rows = drop_blank_rows(rows);

    log::debug!("{}行を読み込み", rows.len());
    Ok(rows)
}

/// UTF-8テキストとして読み込む（Shift_JIS等は文字コードエラー）
fn read_utf8(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| {
        IngredientCheckError::SpreadsheetRead(format!(
            "{}: UTF-8ではありません（Shift_JIS等の場合はUTF-8で保存し直してください）",
            path.display()
        ))
    })
}

/// ファイルを読み込んだセッションを作成
pub fn load_session(path: &Path, sheet: Option<&str>) -> Result<Session> {
    let rows = read_grid(path, sheet)?;
    let mut session = Session::new();
    session.load(&rows)?;
    Ok(session)
}

/// シート名の一覧（CSVは空）
pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(IngredientCheckError::FileNotFound(path.display().to_string()));
    }
    match SourceKind::from_path(path)? {
        SourceKind::Csv => Ok(Vec::new()),
        SourceKind::Spreadsheet => spreadsheet::sheet_names(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_from_path() {
        assert_eq!(SourceKind::from_path(Path::new("a.csv")).unwrap(), SourceKind::Csv);
        assert_eq!(SourceKind::from_path(Path::new("a.XLSX")).unwrap(), SourceKind::Spreadsheet);
        assert_eq!(SourceKind::from_path(Path::new("a.ods")).unwrap(), SourceKind::Spreadsheet);
        assert!(matches!(
            SourceKind::from_path(Path::new("a.txt")),
            Err(IngredientCheckError::UnsupportedFormat(_))
        ));
        assert!(SourceKind::from_path(Path::new("noext")).is_err());
    }
}
