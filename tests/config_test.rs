//! 設定ファイルの読み書きテスト
//!
//! INGREDIENT_CHECK_CONFIG で設定ファイルの場所を差し替えて検証する。

use ingredient_check::cli::ExportFormat;
use ingredient_check::config::Config;
use ingredient_check::error::IngredientCheckError;
use tempfile::tempdir;

#[test]
fn test_config_defaults_save_and_reload() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");
    std::env::set_var("INGREDIENT_CHECK_CONFIG", &path);

    // ファイルがなければ既定値
    let mut config = Config::load().expect("設定読み込み失敗");
    assert_eq!(config.columns, 2);
    assert_eq!(config.format, ExportFormat::Pdf);
    assert!(config.font_path.is_none());

    config.set_title("Weekly Menu".to_string()).expect("保存失敗");
    config.set_columns(3).expect("保存失敗");
    config.set_format(ExportFormat::Excel).expect("保存失敗");
    assert!(path.exists());

    let reloaded = Config::load().expect("再読み込み失敗");
    assert_eq!(reloaded.title, "Weekly Menu");
    assert_eq!(reloaded.columns, 3);
    assert_eq!(reloaded.format, ExportFormat::Excel);

    // 不正な値は拒否
    let mut config = reloaded;
    assert!(matches!(config.set_columns(0), Err(IngredientCheckError::Config(_))));
    let missing_font = dir.path().join("missing.ttf");
    assert!(matches!(
        config.set_font_path(missing_font),
        Err(IngredientCheckError::FileNotFound(_))
    ));

    // 欠けたキーは既定値で補う
    std::fs::write(&path, r#"{ "title": "Partial" }"#).unwrap();
    let partial = Config::load().expect("部分設定の読み込み失敗");
    assert_eq!(partial.title, "Partial");
    assert_eq!(partial.columns, 2);
}
