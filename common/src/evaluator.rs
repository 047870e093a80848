//! 共通成分判定
//!
//! 選択した全製品でマーカーが "yes" の成分を共通成分（included）、
//! それ以外を除外成分（excluded）に分類する。

use crate::types::{EvaluationResult, Ingredient, Matrix, Selection};

const APPROVED: &str = "yes";
const REJECTED: &str = "no";

fn normalize(marker: &str) -> String {
    marker.trim().to_lowercase()
}

/// マーカーが承認（前後空白除去・小文字化して "yes"）か
pub fn is_approved(marker: Option<&str>) -> bool {
    marker.is_some_and(|m| normalize(m) == APPROVED)
}

/// マーカーが明示的な非承認（前後空白除去・小文字化して "no"）か
pub fn is_rejected(marker: Option<&str>) -> bool {
    marker.is_some_and(|m| normalize(m) == REJECTED)
}

/// 成分が選択中の全製品で承認されているか
///
/// 選択が空の場合は全称命題が自明に真となり true を返す。
pub fn is_included(ingredient: &Ingredient, selection: &Selection) -> bool {
    selection
        .iter()
        .all(|product| is_approved(ingredient.marker(product)))
}

/// 成分表を共通成分/除外成分に分類
///
/// 結果は成分表の行順を保ち、各行は独立に分類される（重複名も別扱い）。
pub fn evaluate(matrix: &Matrix, selection: &Selection) -> EvaluationResult {
    let mut result = EvaluationResult::default();

    for ingredient in &matrix.ingredients {
        if is_included(ingredient, selection) {
            result.included.push(ingredient.name.clone());
        } else {
            result.excluded.push(ingredient.name.clone());
        }
    }

    log::debug!(
        "判定完了: 選択{}件, 共通{}件, 除外{}件",
        selection.len(),
        result.included.len(),
        result.excluded.len()
    );

    result
}

/// 除外理由となった製品（マーカーが "no" のもの）を選択順で返す
///
/// "yes" でも "no" でもない値（空欄など）の製品は含めない。
pub fn failing_products(ingredient: &Ingredient, selection: &Selection) -> Vec<String> {
    selection
        .iter()
        .filter(|product| is_rejected(ingredient.marker(product)))
        .map(|product| product.to_string())
        .collect()
}

/// リストを指定列数に分割
///
/// 1列あたり ceil(len / column_count) 件ずつ先頭から詰め、
/// 常に column_count 個の列を返す（末尾の列は短いか空）。
pub fn split_into_columns<T: Clone>(list: &[T], column_count: usize) -> Vec<Vec<T>> {
    if column_count == 0 {
        return Vec::new();
    }

    let per_column = list.len().div_ceil(column_count);

    (0..column_count)
        .map(|col| {
            let start = (col * per_column).min(list.len());
            let end = (start + per_column).min(list.len());
            list[start..end].to_vec()
        })
        .collect()
}
