//! プレーンテキスト出力
//!
//! PDFと同じ改ページ・列分割でテキストを組み立てる。

use crate::layout::truncate_chars;
use crate::report::ReportPage;

/// テキスト出力での1列の幅（文字数）
pub const TEXT_COLUMN_WIDTH: usize = 40;

/// ページ列をテキストに変換
pub fn render_text(pages: &[ReportPage]) -> String {
    let mut out = String::new();
    let total = pages.len();

    for page in pages {
        if page.number > 1 {
            out.push_str(&format!("--- {} / {} ---\n", page.number, total));
        }

        for line in &page.header {
            out.push_str(line);
            out.push('\n');
        }
        if !page.header.is_empty() {
            out.push('\n');
        }

        for block in &page.blocks {
            out.push_str(&block.title);
            out.push('\n');
            for row in 0..block.body_rows() {
                out.push_str(&render_row(&block.columns, row));
                out.push('\n');
            }
            out.push('\n');
        }
    }

    out
}

fn render_row(columns: &[Vec<String>], row: usize) -> String {
    let cells: Vec<String> = columns
        .iter()
        .map(|column| column.get(row).map(String::as_str).unwrap_or(""))
        .map(|cell| truncate_chars(cell, TEXT_COLUMN_WIDTH - 2))
        .collect();

    // 右端の空セルは出力しない
    let last = cells.iter().rposition(|c| !c.is_empty()).map_or(0, |i| i + 1);
    let mut line = String::new();
    for (i, cell) in cells[..last].iter().enumerate() {
        line.push_str(cell);
        if i + 1 < last {
            let pad = TEXT_COLUMN_WIDTH.saturating_sub(cell.chars().count());
            line.push_str(&" ".repeat(pad));
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ReportLayout;
    use crate::report::{paginate, Report, ReportHeader};

    #[test]
    fn test_render_text_two_columns() {
        let report = Report {
            header: ReportHeader {
                title: "Check".into(),
                timestamp: "2026/01/01 10:00".into(),
                products: vec!["P1".into(), "P2".into()],
                product_count: 2,
            },
            included: vec!["Salt".into(), "Sugar".into(), "Water".into()],
            excluded: vec![],
        };
        let text = render_text(&paginate(&report, &ReportLayout::a4()));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Check");
        assert_eq!(lines[2], "Products (2): P1, P2");
        assert_eq!(lines[4], "Included ingredients (3)");
        assert_eq!(lines[5], format!("Salt{}Water", " ".repeat(36)));
        assert_eq!(lines[6], "Sugar");
        assert_eq!(lines[8], "Excluded ingredients (0)");
        assert_eq!(lines[9], "(none)");
    }

    #[test]
    fn test_render_text_page_separator() {
        let report = Report {
            included: (0..200).map(|i| format!("I{}", i)).collect(),
            ..Report::default()
        };
        let pages = paginate(&report, &ReportLayout::a4());
        let text = render_text(&pages);
        assert!(text.contains(&format!("--- 2 / {} ---", pages.len())));
    }
}
