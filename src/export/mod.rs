pub mod excel;
pub mod json;
pub mod pdf;
pub mod text;

use crate::cli::ExportFormat;
use crate::error::Result;
use ingredient_check_common::{Report, ReportLayout};
use std::path::{Path, PathBuf};

/// 出力オプション
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub layout: ReportLayout,
    pub font_path: Option<PathBuf>,
}

/// ファイル名に使えない文字を置換
fn file_stem_for_title(title: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect();
    if stem.is_empty() { "report".to_string() } else { stem }
}

/// 出力先パスを決定
///
/// - ディレクトリまたは拡張子なし → `<output>/<title>.<ext>`
/// - 単一形式でファイル指定 → そのまま
/// - 複数形式でファイル指定 → 同じ stem で拡張子のみ差し替え
pub fn output_path_for_format(
    output: &Path,
    title: &str,
    format: ExportFormat,
    multiple: bool,
) -> PathBuf {
    let extension = format.extension();
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", file_stem_for_title(title), extension))
    } else if multiple {
        output.with_extension(extension)
    } else {
        output.to_path_buf()
    }
}

/// レポートを指定形式で出力し、書き出したパスを返す
pub fn export_report(
    report: &Report,
    output: &Path,
    options: &ExportOptions,
) -> Result<Vec<PathBuf>> {
    let formats = options.format.expand();
    let multiple = formats.len() > 1;

    if output.extension().is_none() && !output.exists() {
        std::fs::create_dir_all(output)?;
    }

    let mut written = Vec::with_capacity(formats.len());
    for format in formats {
        let output_path = output_path_for_format(output, &report.header.title, format, multiple);

        match format {
            ExportFormat::Pdf => {
                println!("- PDFを生成中...");
                pdf::generate_pdf(
                    report,
                    &output_path,
                    &options.layout,
                    options.font_path.as_deref(),
                )?;
                println!("✔ PDF出力: {}", output_path.display());
            }
            ExportFormat::Excel => {
                println!("- Excelを生成中...");
                excel::generate_excel(report, &output_path, options.layout.columns)?;
                println!("✔ Excel出力: {}", output_path.display());
            }
            ExportFormat::Json => {
                json::generate_json(report, &output_path)?;
                println!("✔ JSON出力: {}", output_path.display());
            }
            ExportFormat::Text => {
                text::generate_text(report, &output_path, &options.layout)?;
                println!("✔ テキスト出力: {}", output_path.display());
            }
            ExportFormat::All => continue,
        }

        written.push(output_path);
    }

    Ok(written)
}
