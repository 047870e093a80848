//! PDF export core utilities.
//!
//! ページを描画位置付きのテキストに変換する。描画ライブラリには依存しない。

use crate::layout::{
    truncate_chars, ReportLayout, BODY_FONT_SIZE_PT, SECTION_FONT_SIZE_PT, TITLE_FONT_SIZE_PT,
};
use crate::report::ReportPage;

/// 描画するテキスト1つ
#[derive(Debug, Clone, PartialEq)]
pub struct PdfTextItem {
    pub text: String,
    /// X座標（mm、左から）
    pub x_mm: f32,
    /// ベースラインY座標（mm、下から）
    pub y_mm: f32,
    pub font_size_pt: f32,
    pub bold: bool,
}

/// ページ内のテキスト配置を計算
pub fn layout_page(page: &ReportPage, layout: &ReportLayout) -> Vec<PdfTextItem> {
    let mut items = Vec::new();
    let mut row = 0;
    let full_width_chars = layout.max_chars_per_column() * layout.columns.max(1);

    for (i, line) in page.header.iter().enumerate() {
        let (font_size_pt, bold) = if i == 0 {
            (TITLE_FONT_SIZE_PT, true)
        } else {
            (BODY_FONT_SIZE_PT, false)
        };
        items.push(PdfTextItem {
            text: truncate_chars(line, full_width_chars),
            x_mm: layout.margin_mm,
            y_mm: layout.row_y_mm(row),
            font_size_pt,
            bold,
        });
        row += 1;
    }
    if !page.header.is_empty() {
        // ヘッダー後の空行
        row += 1;
    }

    let max_chars = layout.max_chars_per_column();
    for block in &page.blocks {
        items.push(PdfTextItem {
            text: truncate_chars(&block.title, full_width_chars),
            x_mm: layout.margin_mm,
            y_mm: layout.row_y_mm(row),
            font_size_pt: SECTION_FONT_SIZE_PT,
            bold: true,
        });
        row += 1;

        for (col, column) in block.columns.iter().enumerate() {
            for (offset, line) in column.iter().enumerate() {
                items.push(PdfTextItem {
                    text: truncate_chars(line, max_chars),
                    x_mm: layout.column_x_mm(col),
                    y_mm: layout.row_y_mm(row + offset),
                    font_size_pt: layout.font_size_pt,
                    bold: false,
                });
            }
        }
        row += block.body_rows() + 1;
    }

    items
}

/// ページ番号表記（フッター用）
pub fn page_label(page: &ReportPage, total: usize) -> String {
    format!("{} / {}", page.number, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{paginate, ExcludedEntry, Report, ReportHeader};

    fn report() -> Report {
        Report {
            header: ReportHeader {
                title: "Check".into(),
                timestamp: "2026/01/01 10:00".into(),
                products: vec!["P1".into()],
                product_count: 1,
            },
            included: vec!["Salt".into(), "Sugar".into(), "Water".into()],
            excluded: vec![ExcludedEntry {
                name: "Milk".into(),
                failing_products: vec!["P1".into()],
            }],
        }
    }

    #[test]
    fn test_layout_first_page() {
        let layout = ReportLayout::a4();
        let pages = paginate(&report(), &layout);
        let items = layout_page(&pages[0], &layout);

        // ヘッダー3 + 見出し2 + 本文4
        assert_eq!(items.len(), 9);
        assert_eq!(items[0].text, "Check");
        assert!(items[0].bold);
        assert!((items[0].font_size_pt - TITLE_FONT_SIZE_PT).abs() < f32::EPSILON);

        let included_title = &items[3];
        assert_eq!(included_title.text, "Included ingredients (3)");
        assert!((included_title.y_mm - layout.row_y_mm(4)).abs() < 0.001);

        // 2列目の先頭は1列目の先頭と同じ行
        let salt = items.iter().find(|i| i.text == "Salt").unwrap();
        let water = items.iter().find(|i| i.text == "Water").unwrap();
        assert!((salt.y_mm - water.y_mm).abs() < 0.001);
        assert!(water.x_mm > salt.x_mm);

        assert!(items.iter().any(|i| i.text == "Milk (P1)"));
    }

    #[test]
    fn test_items_stay_on_page() {
        let layout = ReportLayout::a4();
        let big = Report {
            included: (0..500).map(|i| format!("Ingredient {}", i)).collect(),
            ..report()
        };
        for page in paginate(&big, &layout) {
            for item in layout_page(&page, &layout) {
                assert!(item.y_mm >= layout.margin_mm, "{:?}", item);
                assert!(item.x_mm < layout.page_width_mm - layout.margin_mm);
            }
        }
    }

    #[test]
    fn test_page_label() {
        let layout = ReportLayout::a4();
        let pages = paginate(&report(), &layout);
        assert_eq!(page_label(&pages[0], pages.len()), "1 / 1");
    }
}
