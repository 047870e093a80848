//! 成分表の型定義
//!
//! - Cell: 表の1セル（空セルは None）
//! - Ingredient: 成分名と製品ごとのマーカー
//! - Matrix: 製品一覧と成分一覧
//! - Selection: 選択中の製品（選択順を保持）
//! - EvaluationResult: 共通成分/除外成分の分類結果

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 表の1セル
pub type Cell = Option<String>;

/// 成分（表の1行）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,

    /// 製品名 → マーカー（"yes" / "no" など自由記述）
    #[serde(default)]
    pub markers: HashMap<String, Cell>,
}

impl Ingredient {
    /// 製品に対するマーカーを取得（未設定は None）
    pub fn marker(&self, product: &str) -> Option<&str> {
        self.markers.get(product).and_then(|m| m.as_deref())
    }
}

/// 成分表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matrix {
    /// 製品名（表の列順）
    pub products: Vec<String>,
    /// 成分（表の行順、重複名もそのまま保持）
    pub ingredients: Vec<Ingredient>,
}

impl Matrix {
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    pub fn contains_product(&self, product: &str) -> bool {
        self.products.iter().any(|p| p == product)
    }

    /// 表示用の製品一覧（名前順）
    pub fn sorted_products(&self) -> Vec<&str> {
        let mut products: Vec<&str> = self.products.iter().map(|s| s.as_str()).collect();
        products.sort();
        products
    }

    /// 成分名の一覧（行順）
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.iter().map(|i| i.name.as_str()).collect()
    }
}

/// 製品の選択状態
///
/// 判定には順序は関係しないが、表示時の連結は選択順で行う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    products: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, product: &str) -> bool {
        self.products.iter().any(|p| p == product)
    }

    /// 追加（既に選択済みなら false）
    pub fn insert(&mut self, product: impl Into<String>) -> bool {
        let product = product.into();
        if self.contains(&product) {
            return false;
        }
        self.products.push(product);
        true
    }

    /// 解除（未選択なら false）
    pub fn remove(&mut self, product: &str) -> bool {
        match self.products.iter().position(|p| p == product) {
            Some(idx) => {
                self.products.remove(idx);
                true
            }
            None => false,
        }
    }

    /// 選択/解除を切り替え、切り替え後に選択状態なら true
    pub fn toggle(&mut self, product: &str) -> bool {
        if self.remove(product) {
            false
        } else {
            self.products.push(product.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.products.clear();
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|s| s.as_str())
    }

    /// 表示用の連結文字列（選択順）
    pub fn join(&self, separator: &str) -> String {
        self.products.join(separator)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for product in iter {
            selection.insert(product);
        }
        selection
    }
}

/// 判定結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// 選択した全製品で "yes" の成分
    pub included: Vec<String>,
    /// 1つ以上の製品で "yes" でない成分
    pub excluded: Vec<String>,
}

impl EvaluationResult {
    pub fn len(&self) -> usize {
        self.included.len() + self.excluded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_keeps_insertion_order() {
        let mut selection = Selection::new();
        selection.insert("B");
        selection.insert("A");
        selection.insert("B");
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.join(", "), "B, A");
    }

    #[test]
    fn test_selection_toggle() {
        let mut selection = Selection::new();
        assert!(selection.toggle("P1"));
        assert!(selection.contains("P1"));
        assert!(!selection.toggle("P1"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_from_iter_dedups() {
        let selection: Selection = ["P2", "P1", "P2"].into_iter().collect();
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["P2", "P1"]);
    }

    #[test]
    fn test_sorted_products_is_case_sensitive() {
        let matrix = Matrix {
            products: vec!["beta".into(), "Alpha".into(), "alpha".into()],
            ingredients: vec![],
        };
        assert_eq!(matrix.sorted_products(), vec!["Alpha", "alpha", "beta"]);
        // 元の列順は変えない
        assert_eq!(matrix.products[0], "beta");
    }

    #[test]
    fn test_ingredient_marker_missing() {
        let ingredient = Ingredient {
            name: "水".into(),
            markers: HashMap::from([("P1".to_string(), None)]),
        };
        assert_eq!(ingredient.marker("P1"), None);
        assert_eq!(ingredient.marker("P2"), None);
    }

    #[test]
    fn test_selection_serializes_as_list() {
        let selection: Selection = ["P1", "P2"].into_iter().collect();
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, r#"["P1","P2"]"#);
    }
}
