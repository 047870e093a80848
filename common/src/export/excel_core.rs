//! Excel生成（共通ライブラリ）
//!
//! レポートを3シート（Summary / Included / Excluded）のExcelに変換する。

use crate::error::{Error, Result};
use crate::evaluator::split_into_columns;
use crate::report::Report;
use rust_xlsxwriter::*;

/// 成分名の列幅（Excel単位）
const NAME_COL_WIDTH: f64 = 32.0;
/// 理由製品の列幅（Excel単位）
const PRODUCTS_COL_WIDTH: f64 = 48.0;

fn excel_err(context: &str) -> impl Fn(XlsxError) -> Error + '_ {
    move |e| Error::Excel(format!("{}: {}", context, e))
}

/// Excelをバッファに生成
///
/// # Arguments
/// * `report` - 出力するレポート
/// * `columns` - Includedシートの列数
pub fn generate_excel_buffer(report: &Report, columns: usize) -> Result<Vec<u8>> {
    let columns = columns.max(1);
    let mut workbook = Workbook::new();

    // フォーマット定義
    let title_format = Format::new().set_bold().set_font_size(16.0);

    let label_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x555555))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_text_wrap()
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    // Summary
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Summary").map_err(excel_err("シート名設定エラー"))?;
        sheet
            .set_column_width(0, 18.0)
            .map_err(excel_err("列幅設定エラー"))?;
        sheet
            .set_column_width(1, PRODUCTS_COL_WIDTH)
            .map_err(excel_err("列幅設定エラー"))?;

        sheet
            .write_string_with_format(0, 0, &report.header.title, &title_format)
            .map_err(excel_err("タイトル書き込みエラー"))?;

        let rows = [
            ("Generated", report.header.timestamp.clone()),
            ("Products", report.header.products.join(", ")),
            ("Product count", report.header.product_count.to_string()),
            ("Included", report.included.len().to_string()),
            ("Excluded", report.excluded.len().to_string()),
        ];
        for (i, (label, value)) in rows.iter().enumerate() {
            let row = i as u32 + 2;
            sheet
                .write_string_with_format(row, 0, *label, &label_format)
                .map_err(excel_err("ラベル書き込みエラー"))?;
            sheet
                .write_string_with_format(row, 1, value, &value_format)
                .map_err(excel_err("値書き込みエラー"))?;
        }
    }

    // Included: 列分割して並べる
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Included").map_err(excel_err("シート名設定エラー"))?;
        for col in 0..columns {
            sheet
                .set_column_width(col as u16, NAME_COL_WIDTH)
                .map_err(excel_err("列幅設定エラー"))?;
        }
        sheet
            .write_string_with_format(0, 0, "Included ingredients", &label_format)
            .map_err(excel_err("見出し書き込みエラー"))?;

        for (col, column) in split_into_columns(&report.included, columns).iter().enumerate() {
            for (offset, name) in column.iter().enumerate() {
                sheet
                    .write_string_with_format(offset as u32 + 1, col as u16, name, &value_format)
                    .map_err(excel_err("値書き込みエラー"))?;
            }
        }
    }

    // Excluded: 成分名 | 理由製品
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Excluded").map_err(excel_err("シート名設定エラー"))?;
        sheet
            .set_column_width(0, NAME_COL_WIDTH)
            .map_err(excel_err("列幅設定エラー"))?;
        sheet
            .set_column_width(1, PRODUCTS_COL_WIDTH)
            .map_err(excel_err("列幅設定エラー"))?;
        sheet
            .write_string_with_format(0, 0, "Ingredient", &label_format)
            .map_err(excel_err("見出し書き込みエラー"))?;
        sheet
            .write_string_with_format(0, 1, "Rejected by", &label_format)
            .map_err(excel_err("見出し書き込みエラー"))?;

        for (i, entry) in report.excluded.iter().enumerate() {
            let row = i as u32 + 1;
            sheet
                .write_string_with_format(row, 0, &entry.name, &value_format)
                .map_err(excel_err("値書き込みエラー"))?;
            sheet
                .write_string_with_format(row, 1, entry.failing_products.join(", "), &value_format)
                .map_err(excel_err("値書き込みエラー"))?;
        }
    }

    // バッファに書き出し
    workbook
        .save_to_buffer()
        .map_err(excel_err("Excel保存エラー"))
}
