pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod selector;
pub mod source;

/// レポートに記載する作成日時
pub fn report_timestamp() -> String {
    chrono::Local::now().format("%Y/%m/%d %H:%M").to_string()
}
