//! レイアウト設定モジュール
//!
//! mm基準のレポートレイアウト定義（Source of Truth）。
//! PDF・テキスト出力の改ページ計算はすべてここから導出する。

// ============================================
// mm基準レイアウト（Source of Truth）
// ============================================

/// A4サイズ（mm）
pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

/// 余白設定（mm）
pub const MARGIN_MM: f32 = 15.0;
pub const COLUMN_GAP_MM: f32 = 10.0;

/// 1行の高さ（mm）
pub const LINE_HEIGHT_MM: f32 = 6.0;

/// フォントサイズ（pt）
pub const TITLE_FONT_SIZE_PT: f32 = 16.0;
pub const SECTION_FONT_SIZE_PT: f32 = 12.0;
pub const BODY_FONT_SIZE_PT: f32 = 10.0;

/// 1ページ目のヘッダー行数（タイトル・作成日時・選択製品・空行）
pub const HEADER_ROWS: usize = 4;

/// 既定の列数
pub const DEFAULT_COLUMNS: usize = 2;

/// Helveticaの平均文字幅（フォントサイズ比）
const AVG_CHAR_WIDTH_RATIO: f32 = 0.5;

// ============================================
// 変換係数
// ============================================

/// mm → pt変換 (1mm = 72/25.4 pt ≈ 2.835pt)
pub const MM_TO_PT: f32 = 72.0 / 25.4;

/// mm → pt 変換
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * MM_TO_PT
}

/// pt → mm 変換
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / MM_TO_PT
}

// ============================================
// レイアウト設定構造体
// ============================================

/// レポートレイアウト設定
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    /// ページ幅（mm）
    pub page_width_mm: f32,
    /// ページ高さ（mm）
    pub page_height_mm: f32,
    /// マージン（mm）
    pub margin_mm: f32,
    /// 列間ギャップ（mm）
    pub column_gap_mm: f32,
    /// 行高さ（mm）
    pub line_height_mm: f32,
    /// 本文フォントサイズ（pt）
    pub font_size_pt: f32,
    /// 列数
    pub columns: usize,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self::a4()
    }
}

impl ReportLayout {
    /// A4縦・2列
    pub fn a4() -> Self {
        Self {
            page_width_mm: A4_WIDTH_MM,
            page_height_mm: A4_HEIGHT_MM,
            margin_mm: MARGIN_MM,
            column_gap_mm: COLUMN_GAP_MM,
            line_height_mm: LINE_HEIGHT_MM,
            font_size_pt: BODY_FONT_SIZE_PT,
            columns: DEFAULT_COLUMNS,
        }
    }

    /// 列数を指定（0は1列として扱う）
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// 利用可能幅（mm）
    pub fn usable_width_mm(&self) -> f32 {
        self.page_width_mm - self.margin_mm * 2.0
    }

    /// 利用可能高さ（mm）
    pub fn usable_height_mm(&self) -> f32 {
        self.page_height_mm - self.margin_mm * 2.0
    }

    /// 1列の幅（mm）
    pub fn column_width_mm(&self) -> f32 {
        let gaps = self.column_gap_mm * (self.columns.saturating_sub(1)) as f32;
        (self.usable_width_mm() - gaps) / self.columns.max(1) as f32
    }

    /// 1ページの行数
    pub fn rows_per_page(&self) -> usize {
        (self.usable_height_mm() / self.line_height_mm).floor().max(1.0) as usize
    }

    /// 1列に収まる最大文字数（Helvetica平均幅での概算）
    pub fn max_chars_per_column(&self) -> usize {
        let char_width_mm = pt_to_mm(self.font_size_pt * AVG_CHAR_WIDTH_RATIO);
        (self.column_width_mm() / char_width_mm).floor().max(1.0) as usize
    }

    /// 列のX座標（mm、左から）
    pub fn column_x_mm(&self, column: usize) -> f32 {
        self.margin_mm + (self.column_width_mm() + self.column_gap_mm) * column as f32
    }

    /// 行のベースラインY座標（mm、下から）
    pub fn row_y_mm(&self, row: usize) -> f32 {
        self.page_height_mm - self.margin_mm - self.line_height_mm * (row + 1) as f32
    }
}

/// 文字数で切り詰め（超過時は末尾を "..." に置換）
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let mut truncated: String = text.chars().take(max_chars - 3).collect();
    truncated.push_str("...");
    truncated
}
