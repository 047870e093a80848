//! レポートモデルと改ページ
//!
//! 判定結果からレポート（ヘッダー・共通成分・除外成分）を組み立て、
//! ReportLayout に従ってページ単位の列ブロックに分割する。
//!
//! 組み込みフォント（Helvetica）で描画できるよう、見出しは英語とする。

use crate::evaluator::{failing_products, is_included, split_into_columns};
use crate::layout::{ReportLayout, HEADER_ROWS};
use crate::types::{EvaluationResult, Matrix, Selection};
use serde::{Deserialize, Serialize};

pub const INCLUDED_TITLE: &str = "Included ingredients";
pub const EXCLUDED_TITLE: &str = "Excluded ingredients";
pub const EMPTY_PLACEHOLDER: &str = "(none)";
pub const CONTINUED_SUFFIX: &str = " (continued)";

/// レポートヘッダー
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportHeader {
    /// 表示名（レポートタイトル）
    pub title: String,
    /// 作成日時（整形済み）
    pub timestamp: String,
    /// 選択製品（選択順）
    pub products: Vec<String>,
    pub product_count: usize,
}

impl ReportHeader {
    /// ヘッダーの表示行
    pub fn lines(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            format!("Generated: {}", self.timestamp),
            format!(
                "Products ({}): {}",
                self.product_count,
                self.products.join(", ")
            ),
        ]
    }
}

/// 除外成分と、その理由になった製品
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludedEntry {
    pub name: String,
    pub failing_products: Vec<String>,
}

impl ExcludedEntry {
    /// "成分名 (P1, P2)" 形式（理由製品がなければ成分名のみ）
    pub fn label(&self) -> String {
        if self.failing_products.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.failing_products.join(", "))
        }
    }
}

/// レポート全体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub header: ReportHeader,
    pub included: Vec<String>,
    pub excluded: Vec<ExcludedEntry>,
}

impl Report {
    /// 判定結果からレポートを構築
    ///
    /// 除外成分の注記は、成分表の行順で result.excluded と対応付ける。
    pub fn build(
        matrix: &Matrix,
        selection: &Selection,
        result: &EvaluationResult,
        title: &str,
        timestamp: &str,
    ) -> Self {
        let header = ReportHeader {
            title: title.to_string(),
            timestamp: timestamp.to_string(),
            products: selection.iter().map(String::from).collect(),
            product_count: selection.len(),
        };

        // 成分表の行順に沿って除外成分を対応付ける（重複名も行ごとに扱う）
        let mut remaining = result.excluded.iter().peekable();
        let mut excluded = Vec::with_capacity(result.excluded.len());
        for ingredient in &matrix.ingredients {
            let Some(name) = remaining.peek() else { break };
            if **name != ingredient.name || is_included(ingredient, selection) {
                continue;
            }
            excluded.push(ExcludedEntry {
                name: ingredient.name.clone(),
                failing_products: failing_products(ingredient, selection),
            });
            remaining.next();
        }
        // 成分表と対応しない残りは注記なしで追加
        excluded.extend(remaining.map(|name| ExcludedEntry {
            name: name.clone(),
            failing_products: Vec::new(),
        }));

        Self {
            header,
            included: result.included.clone(),
            excluded,
        }
    }

    pub fn included_lines(&self) -> Vec<String> {
        self.included.clone()
    }

    pub fn excluded_lines(&self) -> Vec<String> {
        self.excluded.iter().map(ExcludedEntry::label).collect()
    }

    /// セクション（見出し + 行）の一覧
    pub fn sections(&self) -> Vec<(String, Vec<String>)> {
        vec![
            (
                format!("{} ({})", INCLUDED_TITLE, self.included.len()),
                self.included_lines(),
            ),
            (
                format!("{} ({})", EXCLUDED_TITLE, self.excluded.len()),
                self.excluded_lines(),
            ),
        ]
    }
}

/// ページ内の1ブロック（見出し + 列）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBlock {
    pub title: String,
    pub columns: Vec<Vec<String>>,
}

impl PageBlock {
    /// 本文の行数（最長の列）
    pub fn body_rows(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// 1ページ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPage {
    /// 1始まりのページ番号
    pub number: usize,
    /// ヘッダー行（1ページ目のみ）
    pub header: Vec<String>,
    pub blocks: Vec<PageBlock>,
}

/// レポートをページに分割
///
/// - 1ページ目の先頭にヘッダーを置く
/// - 各セクションは見出し1行 + 本文行 + 空行1行を使う
/// - 見出しと本文1行が入らない場合は改ページする
/// - ページをまたぐ場合は見出しに " (continued)" を付ける
/// - 各ページの本文は split_into_columns で列に分ける
pub fn paginate(report: &Report, layout: &ReportLayout) -> Vec<ReportPage> {
    let rows_per_page = layout.rows_per_page();
    let columns = layout.columns.max(1);

    let mut pages = vec![ReportPage {
        number: 1,
        header: report.header.lines(),
        blocks: Vec::new(),
    }];
    let mut used = HEADER_ROWS.min(rows_per_page);

    for (title, lines) in report.sections() {
        let lines = if lines.is_empty() {
            vec![EMPTY_PLACEHOLDER.to_string()]
        } else {
            lines
        };

        let mut offset = 0;
        let mut continued = false;
        while offset < lines.len() {
            // 見出し + 本文1行が入らなければ改ページ
            if used + 2 > rows_per_page {
                let number = pages.len() + 1;
                pages.push(ReportPage {
                    number,
                    header: Vec::new(),
                    blocks: Vec::new(),
                });
                used = 0;
            }

            let available_rows = (rows_per_page - used - 1).max(1);
            let remaining = lines.len() - offset;
            let rows = remaining.div_ceil(columns).min(available_rows);
            let take = (rows * columns).min(remaining);
            let chunk = &lines[offset..offset + take];

            let block_title = if continued {
                format!("{}{}", title, CONTINUED_SUFFIX)
            } else {
                title.clone()
            };
            let block = PageBlock {
                title: block_title,
                columns: split_into_columns(chunk, columns),
            };
            used += 1 + block.body_rows() + 1;

            if let Some(page) = pages.last_mut() {
                page.blocks.push(block);
            }

            offset += take;
            continued = true;
        }
    }

    log::debug!("レポートを{}ページに分割", pages.len());
    pages
}
