//! CSV読み込み
//!
//! csv クレートでレコードを読み、空フィールドを None に変換する。
//! 行の長さはそろえない（短い行は成分表ローダー側で補う）。

use crate::error::Result;
use crate::types::Cell;

/// CSV文字列をセルのグリッドに変換
///
/// 空行の扱いは呼び出し側（読み込み経路共通の規則）に任せる。
pub fn parse_csv(content: &str) -> Result<Vec<Vec<Cell>>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<Cell> = record
            .iter()
            .map(|field| if field.is_empty() { None } else { Some(field.to_string()) })
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

/// 全セルが空の行を取り除く
pub fn drop_blank_rows(rows: Vec<Vec<Cell>>) -> Vec<Vec<Cell>> {
    rows.into_iter()
        .filter(|row| row.iter().any(|cell| cell.is_some()))
        .collect()
}
