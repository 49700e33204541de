use anyhow::Context;
use clap::Parser;
use line_review::{cli, client, config, render};
use line_review_common::{
    summarize, AnnotationStore, DisplayState, OverlayStyle, ResultSet, ScalePolicy,
};
use cli::{Cli, Commands};
use config::Config;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::time::Duration;

const NO_RECORDS_MESSAGE: &str = "No line items found in the document.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let config = Config::load()?;

    match cli.command {
        Commands::Extract { file, output, endpoint } => {
            println!("📄 line-review - 明細抽出\n");

            let endpoint = match endpoint {
                Some(url) => url,
                None => config.get_endpoint()?,
            };

            println!("[1/2] アップロード中... ({})", endpoint);
            let result = client::upload_document(
                &endpoint,
                &file,
                Duration::from_secs(config.timeout_seconds),
            )
            .await
            .map_err(|e| match e {
                line_review::error::LineReviewError::Common(err) => {
                    anyhow::anyhow!(err.user_message())
                }
                other => other.into(),
            })?;

            match DisplayState::for_len(result.len()) {
                DisplayState::Records(n) => println!("✔ {}件の明細を抽出\n", n),
                DisplayState::NoRecords => println!("{}\n", NO_RECORDS_MESSAGE),
            }

            println!("[2/2] 結果を保存中...");
            let json = serde_json::to_string_pretty(&result.to_json())?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("write {}", path.display()))?;
                    println!("✔ 結果を保存: {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Annotations { input } => {
            let result = load_result(&input)?;
            if result.is_empty() {
                println!("{}", NO_RECORDS_MESSAGE);
                return Ok(());
            }

            let store = AnnotationStore::build(&result);
            for summary in summarize(&result) {
                println!("{} [{}]", summary.title(), summary.line_type.label());
                for cell in &summary.fields {
                    println!("  {:<34} {}", cell.label, cell.display_value());
                }
                let annotations = store.get(summary.index).unwrap_or_default();
                println!("  位置情報: {}件", annotations.len());
                for annotation in annotations {
                    let marker = if annotation.bbox.is_sentinel() { " (位置なし)" } else { "" };
                    let coords: [f64; 4] = annotation.bbox.into();
                    println!("    - {} {:?}{}", annotation.display, coords, marker);
                }
                println!();
            }
        }

        Commands::Overlay { page, input, select, all, fit_width, stroke_width, output } => {
            println!("🖍 line-review - オーバーレイ描画\n");

            let result = load_result(&input)?;
            if result.is_empty() {
                println!("{}", NO_RECORDS_MESSAGE);
            }

            let page_image = image::open(&page)
                .with_context(|| format!("open {}", page.display()))?
                .to_rgba8();
            let selection = if all {
                render::Selection::All
            } else {
                render::Selection::Indices(select)
            };
            let policy = match fit_width {
                Some(width) => ScalePolicy::FitWidth(width as f64),
                None => ScalePolicy::Native,
            };
            let style = OverlayStyle::with_stroke_width(stroke_width.unwrap_or(config.stroke_width));

            let (annotated, drawn) =
                render::render_overlay(page_image, &result, &selection, policy, &style)?;
            annotated
                .save(&output)
                .with_context(|| format!("write {}", output.display()))?;

            println!("✔ {}個の枠を描画: {}", drawn, output.display());
        }

        Commands::Config { set_endpoint, show } => {
            let mut config = config;

            if let Some(url) = set_endpoint {
                config.set_endpoint(url)?;
                println!("✔ アップロード先を設定しました");
            }

            if show {
                println!("設定:");
                println!("  アップロード先: {}", config.get_endpoint().unwrap_or_else(|_| "未設定".into()));
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  線幅: {}px", config.stroke_width);
            }
        }
    }

    Ok(())
}

fn load_result(path: &std::path::Path) -> anyhow::Result<ResultSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    let data: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("parse {}", path.display()))?;
    Ok(ResultSet::from_json(&data))
}
