use crate::error::{IngredientCheckError, Result};
use ingredient_check_common::export::pdf_core::{layout_page, page_label};
use ingredient_check_common::layout::BODY_FONT_SIZE_PT;
use ingredient_check_common::{paginate, Report, ReportLayout};
use printpdf::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

fn pdf_err<E: std::fmt::Debug>(context: &'static str) -> impl Fn(E) -> IngredientCheckError {
    move |e| IngredientCheckError::PdfGeneration(format!("{}: {:?}", context, e))
}

/// 本文・見出し用フォント
struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn load_fonts(doc: &PdfDocumentReference, font_path: Option<&Path>) -> Result<Fonts> {
    match font_path {
        Some(path) => {
            // 外部フォントは太字なしで共用
            let file = File::open(path)
                .map_err(|_| IngredientCheckError::FileNotFound(path.display().to_string()))?;
            let font = doc
                .add_external_font(file)
                .map_err(pdf_err("フォント読み込みエラー"))?;
            Ok(Fonts {
                regular: font.clone(),
                bold: font,
            })
        }
        None => Ok(Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(pdf_err("フォント追加エラー"))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(pdf_err("フォント追加エラー"))?,
        }),
    }
}

/// レポートをPDFに出力
///
/// `font_path` 未指定時は組み込みHelvetica（ASCII以外は表示できない）。
pub fn generate_pdf(
    report: &Report,
    output_path: &Path,
    layout: &ReportLayout,
    font_path: Option<&Path>,
) -> Result<()> {
    let pages = paginate(report, layout);
    let total = pages.len();

    let (doc, first_page, first_layer) = PdfDocument::new(
        report.header.title.as_str(),
        Mm(layout.page_width_mm),
        Mm(layout.page_height_mm),
        "Layer 1",
    );
    let fonts = load_fonts(&doc, font_path)?;

    for (i, page) in pages.iter().enumerate() {
        let current_layer = if i == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_idx, layer_idx) = doc.add_page(
                Mm(layout.page_width_mm),
                Mm(layout.page_height_mm),
                "Layer 1",
            );
            doc.get_page(page_idx).get_layer(layer_idx)
        };

        for item in layout_page(page, layout) {
            let font = if item.bold { &fonts.bold } else { &fonts.regular };
            current_layer.use_text(
                item.text,
                item.font_size_pt,
                Mm(item.x_mm),
                Mm(item.y_mm),
                font,
            );
        }

        // フッター（ページ番号）
        current_layer.use_text(
            page_label(page, total),
            BODY_FONT_SIZE_PT - 2.0,
            Mm(layout.page_width_mm / 2.0 - 5.0),
            Mm(layout.margin_mm / 2.0),
            &fonts.regular,
        );
    }

    // 保存
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    doc.save(&mut writer).map_err(pdf_err("PDF保存エラー"))?;

    log::debug!("PDF: {}ページ → {}", total, output_path.display());
    Ok(())
}
