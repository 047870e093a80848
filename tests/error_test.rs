//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use ingredient_check::error::IngredientCheckError;
use ingredient_check::source;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_read_nonexistent_file() {
    let result = source::read_grid(Path::new("/nonexistent/path/12345.csv"), None);
    assert!(matches!(result, Err(IngredientCheckError::FileNotFound(_))));
}

/// 未対応の拡張子
#[test]
fn test_read_unsupported_format() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("menu.txt");
    std::fs::write(&path, "a,b").unwrap();

    let result = source::read_grid(&path, None);
    assert!(matches!(result, Err(IngredientCheckError::UnsupportedFormat(_))));
}

/// 空のCSVは EmptySource
#[test]
fn test_load_empty_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "\n\n").unwrap();

    let err = source::load_session(&path, None).unwrap_err();
    assert!(matches!(
        err,
        IngredientCheckError::Common(ingredient_check_common::Error::EmptySource)
    ));
}

/// UTF-8でないCSV（Shift_JIS）は文字コードを示すエラー
#[test]
fn test_read_shift_jis_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("sjis.csv");
    // "あ" を Shift_JIS で書いたヘッダ
    std::fs::write(&path, [b',', 0x82, 0xA0, b'\n', b'A', b',', b'y', b'e', b's']).unwrap();

    match source::read_grid(&path, None) {
        Err(IngredientCheckError::SpreadsheetRead(message)) => {
            assert!(message.contains("UTF-8"));
            assert!(message.contains("sjis.csv"));
        }
        other => panic!("expected SpreadsheetRead, got {:?}", other),
    }
}

/// 壊れた表計算ファイル
#[test]
fn test_read_corrupt_spreadsheet() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, "not a zip").unwrap();

    let result = source::read_grid(&path, None);
    assert!(matches!(result, Err(IngredientCheckError::SpreadsheetRead(_))));
}

/// IngredientCheckErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        IngredientCheckError::Config("テスト設定エラー".to_string()),
        IngredientCheckError::FileNotFound("menu.xlsx".to_string()),
        IngredientCheckError::UnsupportedFormat("menu.txt".to_string()),
        IngredientCheckError::SpreadsheetRead("読み込み失敗".to_string()),
        IngredientCheckError::SheetNotFound("Sheet9".to_string()),
        IngredientCheckError::PdfGeneration("PDF生成エラー".to_string()),
        IngredientCheckError::ExcelGeneration("Excel生成エラー".to_string()),
        IngredientCheckError::Selection("未選択".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: IngredientCheckError = io_err.into();

    assert!(matches!(err, IngredientCheckError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: IngredientCheckError = json_err.into();

    assert!(matches!(err, IngredientCheckError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_transparent() {
    let common_err = ingredient_check_common::Error::UnknownProduct("Cake".to_string());
    let err: IngredientCheckError = common_err.into();

    assert!(matches!(err, IngredientCheckError::Common(_)));
    assert_eq!(format!("{}", err), "不明な製品: Cake");
}
