//! ログ初期化
//!
//! 進捗表示は println!、診断ログは log マクロ（env_logger）で出力する。

use env_logger::Env;

/// `--verbose` なら debug、それ以外は `RUST_LOG`（未設定時は warn）
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).try_init().ok();
}
