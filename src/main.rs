use anyhow::Context;
use clap::Parser;
use ingredient_check::{cli, config, export, logging, report_timestamp, selector, source};
use ingredient_check_common::{evaluator, Report, ReportLayout, Session};
use cli::{Cli, Commands, SelectionArgs};
use config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load().context("設定の読み込みに失敗しました")?;

    match cli.command {
        Commands::Products { file, sheet } => {
            let session = source::load_session(&file, sheet.as_deref())?;
            let Some(matrix) = session.matrix() else {
                return Ok(());
            };

            println!(
                "📋 製品一覧: {} ({}件, 成分{}件)\n",
                file.display(),
                matrix.product_count(),
                matrix.ingredient_count()
            );
            for product in matrix.sorted_products() {
                let approved = matrix
                    .ingredients
                    .iter()
                    .filter(|i| evaluator::is_approved(i.marker(product)))
                    .count();
                println!("  {} (承認成分 {}/{})", product, approved, matrix.ingredient_count());
            }

            let sheets = source::sheet_names(&file)?;
            if sheets.len() > 1 {
                println!("\nシート: {}", sheets.join(", "));
            }
        }

        Commands::Check { selection } => {
            let (session, report) = evaluate_selection(&selection, &config.title)?;
            let layout = ReportLayout::a4().with_columns(config.columns);

            println!("{}", export::text::render_report(&report, &layout));
            log::debug!("判定製品数: {}", session.selection().len());
        }

        Commands::Export { selection, format, output, title, columns } => {
            println!("📄 ingredient-check - エクスポート\n");

            let title = title.unwrap_or_else(|| config.title.clone());
            println!("[1/2] 判定中...");
            let (_session, report) = evaluate_selection(&selection, &title)?;
            println!("✔ 共通{}件 / 除外{}件\n", report.included.len(), report.excluded.len());

            let options = export::ExportOptions {
                format: format.unwrap_or(config.format),
                layout: ReportLayout::a4().with_columns(columns.unwrap_or(config.columns)),
                font_path: config.font_path.clone(),
            };
            let output_dir = output.unwrap_or_else(|| std::path::PathBuf::from("."));

            println!("[2/2] 出力中... (形式: {})", options.format);
            export::export_report(&report, &output_dir, &options)?;

            println!("\n✅ エクスポート完了");
        }

        Commands::Config { set_title, set_columns, set_format, set_font, show } => {
            let mut config = config;

            if let Some(title) = set_title {
                config.set_title(title)?;
                println!("✔ タイトルを設定しました");
            }

            if let Some(columns) = set_columns {
                config.set_columns(columns)?;
                println!("✔ 列数を設定しました");
            }

            if let Some(format) = set_format {
                config.set_format(format)?;
                println!("✔ 出力形式を設定しました");
            }

            if let Some(font) = set_font {
                config.set_font_path(font)?;
                println!("✔ フォントを設定しました");
            }

            if show {
                println!("設定: {}", Config::config_path()?.display());
                println!("  タイトル: {}", config.title);
                println!("  列数: {}", config.columns);
                println!("  出力形式: {}", config.format);
                println!(
                    "  フォント: {}",
                    config
                        .font_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "Helvetica（組み込み）".into())
                );
            }
        }
    }

    Ok(())
}

/// 読み込み → 製品選択 → 判定 → レポート構築
fn evaluate_selection(
    args: &SelectionArgs,
    title: &str,
) -> ingredient_check::error::Result<(Session, Report)> {
    let mut session = source::load_session(&args.file, args.sheet.as_deref())?;
    selector::apply_selection(&mut session, args)?;
    session.evaluate()?;

    let report = match (session.matrix(), session.result()) {
        (Some(matrix), Some(result)) => {
            Report::build(matrix, session.selection(), result, title, &report_timestamp())
        }
        _ => return Err(ingredient_check_common::Error::NoMatrix.into()),
    };

    Ok((session, report))
}
