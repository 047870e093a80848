use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngredientCheckError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("未対応のファイル形式です: {0}（csv / xlsx / xlsm / xls / xlsb / ods）")]
    UnsupportedFormat(String),

    #[error("表計算ファイル読み込みエラー: {0}")]
    SpreadsheetRead(String),

    #[error("シートが見つかりません: {0}")]
    SheetNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF生成エラー: {0}")]
    PdfGeneration(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("製品選択エラー: {0}")]
    Selection(String),

    #[error(transparent)]
    Common(#[from] ingredient_check_common::Error),
}

pub type Result<T> = std::result::Result<T, IngredientCheckError>;
