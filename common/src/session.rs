//! セッション状態
//!
//! 読み込んだ成分表・製品選択・判定結果を1つにまとめる。
//! 成分表または選択が変わると判定結果は破棄される。

use crate::error::{Error, Result};
use crate::evaluator::evaluate;
use crate::matrix;
use crate::types::{Cell, EvaluationResult, Matrix, Selection};

#[derive(Debug, Clone, Default)]
pub struct Session {
    matrix: Option<Matrix>,
    selection: Selection,
    result: Option<EvaluationResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// グリッドを読み込み、既存の成分表・選択・結果を置き換える
    ///
    /// 読み込みに失敗した場合は現在の状態を変更しない。
    pub fn load(&mut self, rows: &[Vec<Cell>]) -> Result<&Matrix> {
        let matrix = matrix::load(rows)?;
        self.selection.clear();
        self.result = None;
        Ok(&*self.matrix.insert(matrix))
    }

    /// 製品の選択を切り替え（切り替え後に選択状態なら true）
    pub fn toggle(&mut self, product: &str) -> Result<bool> {
        let matrix = self.matrix.as_ref().ok_or(Error::NoMatrix)?;
        if !matrix.contains_product(product) {
            return Err(Error::UnknownProduct(product.to_string()));
        }
        self.result = None;
        Ok(self.selection.toggle(product))
    }

    /// 製品を選択（選択済みなら何もしない）
    pub fn select(&mut self, product: &str) -> Result<()> {
        if !self.selection.contains(product) {
            self.toggle(product)?;
        }
        Ok(())
    }

    /// 全製品を表示順で選択
    pub fn select_all(&mut self) -> Result<()> {
        let matrix = self.matrix.as_ref().ok_or(Error::NoMatrix)?;
        let products: Vec<String> = matrix
            .sorted_products()
            .into_iter()
            .map(String::from)
            .collect();
        for product in products {
            self.selection.insert(product);
        }
        self.result = None;
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.result = None;
    }

    /// 判定を実行
    ///
    /// 製品が1つも選択されていない場合は EmptySelection を返す。
    pub fn evaluate(&mut self) -> Result<&EvaluationResult> {
        let matrix = self.matrix.as_ref().ok_or(Error::NoMatrix)?;
        if self.selection.is_empty() {
            return Err(Error::EmptySelection);
        }
        let result = evaluate(matrix, &self.selection);
        Ok(&*self.result.insert(result))
    }

    pub fn matrix(&self) -> Option<&Matrix> {
        self.matrix.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// 直近の判定結果（無効化されていれば None）
    pub fn result(&self) -> Option<&EvaluationResult> {
        self.result.as_ref()
    }
}
