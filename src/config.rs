use crate::cli::ExportFormat;
use crate::error::{IngredientCheckError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// レポートの既定タイトル
    pub title: String,
    /// レポートの列数
    pub columns: usize,
    /// 既定の出力形式
    pub format: ExportFormat,
    /// PDFに埋め込むTTF/OTFフォント（未設定ならHelvetica）
    pub font_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            log::debug!("設定を読み込み: {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        // 環境変数を優先
        if let Ok(path) = std::env::var("INGREDIENT_CHECK_CONFIG") {
            return Ok(PathBuf::from(path));
        }

        let home = dirs::home_dir()
            .ok_or_else(|| IngredientCheckError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("ingredient-check").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            title: "Ingredient Check".into(),
            columns: ingredient_check_common::layout::DEFAULT_COLUMNS,
            format: ExportFormat::Pdf,
            font_path: None,
        }
    }

    pub fn set_title(&mut self, title: String) -> Result<()> {
        self.title = title;
        self.save()
    }

    pub fn set_columns(&mut self, columns: usize) -> Result<()> {
        if columns == 0 {
            return Err(IngredientCheckError::Config("列数は1以上を指定してください".into()));
        }
        self.columns = columns;
        self.save()
    }

    pub fn set_format(&mut self, format: ExportFormat) -> Result<()> {
        self.format = format;
        self.save()
    }

    pub fn set_font_path(&mut self, path: PathBuf) -> Result<()> {
        if !path.exists() {
            return Err(IngredientCheckError::FileNotFound(path.display().to_string()));
        }
        self.font_path = Some(path);
        self.save()
    }
}
