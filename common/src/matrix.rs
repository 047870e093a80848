//! 成分表ローダー
//!
//! セルのグリッドを Matrix に変換する。
//!
//! - 1行目: 2列目以降が製品名（1列目は無視）
//! - 2行目以降: 1列目が成分名、2列目以降が製品ごとのマーカー

use crate::error::{Error, Result};
use crate::types::{Cell, Ingredient, Matrix};
use std::collections::HashMap;

/// グリッドから成分表を構築
///
/// 製品数より短い行は不足分を None（未承認扱い）で埋める。
/// 成分名の重複はそのまま別の行として保持する。
pub fn load(rows: &[Vec<Cell>]) -> Result<Matrix> {
    let Some((header, body)) = rows.split_first() else {
        return Err(Error::EmptySource);
    };

    let products: Vec<String> = header
        .iter()
        .skip(1)
        .map(|cell| cell.clone().unwrap_or_default())
        .collect();

    let ingredients: Vec<Ingredient> = body
        .iter()
        .map(|row| {
            let name = row.first().cloned().flatten().unwrap_or_default();
            let mut markers = HashMap::with_capacity(products.len());
            for (i, product) in products.iter().enumerate() {
                let marker = row.get(i + 1).cloned().flatten();
                markers.insert(product.clone(), marker);
            }
            Ingredient { name, markers }
        })
        .collect();

    log::debug!(
        "成分表を読み込み: 製品{}件, 成分{}件",
        products.len(),
        ingredients.len()
    );

    Ok(Matrix { products, ingredients })
}

/// 文字列のグリッドから読み込み（空文字は None）
pub fn load_strings<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Matrix> {
    let cells: Vec<Vec<Cell>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|s| {
                    let s = s.as_ref();
                    if s.is_empty() { None } else { Some(s.to_string()) }
                })
                .collect()
        })
        .collect();
    load(&cells)
}
