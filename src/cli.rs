use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ingredient-check")]
#[command(about = "製品の成分表から共通成分を判定し、レポートを出力するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// 成分表ファイルと製品選択の共通オプション
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// 成分表ファイル (csv/xlsx/xlsm/xls/xlsb/ods)
    #[arg(required = true)]
    pub file: PathBuf,

    /// シート名（省略時は先頭シート）
    #[arg(long)]
    pub sheet: Option<String>,

    /// 選択する製品（複数指定可）
    #[arg(short, long = "product")]
    pub products: Vec<String>,

    /// 全製品を選択
    #[arg(long, conflicts_with = "products")]
    pub all: bool,

    /// 対話式で製品を選択
    #[arg(short, long, conflicts_with = "all")]
    pub interactive: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 成分表の製品一覧を表示
    Products {
        /// 成分表ファイル
        #[arg(required = true)]
        file: PathBuf,

        /// シート名（省略時は先頭シート）
        #[arg(long)]
        sheet: Option<String>,
    },

    /// 選択した製品の共通成分を判定して表示
    Check {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// 判定結果をPDF/Excel/JSON/テキストで出力
    Export {
        #[command(flatten)]
        selection: SelectionArgs,

        /// 出力形式 (pdf/excel/json/text/all)（省略時は設定値）
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// レポートタイトル（省略時は設定値）
        #[arg(short, long)]
        title: Option<String>,

        /// レポートの列数（省略時は設定値）
        #[arg(long)]
        columns: Option<usize>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のレポートタイトルを設定
        #[arg(long)]
        set_title: Option<String>,

        /// 既定の列数を設定
        #[arg(long)]
        set_columns: Option<usize>,

        /// 既定の出力形式を設定
        #[arg(long)]
        set_format: Option<ExportFormat>,

        /// PDF用フォントファイルを設定
        #[arg(long)]
        set_font: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Excel,
    Json,
    Text,
    All,
}

impl ExportFormat {
    /// 出力ファイルの拡張子（Allは個別形式に展開して使う）
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "xlsx",
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
            ExportFormat::All => "",
        }
    }

    /// 実際に出力する形式の一覧
    pub fn expand(&self) -> Vec<ExportFormat> {
        match self {
            ExportFormat::All => vec![
                ExportFormat::Pdf,
                ExportFormat::Excel,
                ExportFormat::Json,
                ExportFormat::Text,
            ],
            other => vec![*other],
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "json" => Ok(ExportFormat::Json),
            "text" | "txt" => Ok(ExportFormat::Text),
            "all" => Ok(ExportFormat::All),
            _ => Err(format!("Unknown format: {}. Use pdf, excel, json, text, or all", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Pdf => write!(f, "pdf"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::All => write!(f, "all"),
        }
    }
}
