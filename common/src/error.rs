//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("読み込んだ表が空です")]
    EmptySource,

    #[error("製品が選択されていません")]
    EmptySelection,

    #[error("成分表が読み込まれていません")]
    NoMatrix,

    #[error("不明な製品: {0}")]
    UnknownProduct(String),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Excel error: {0}")]
    Excel(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
