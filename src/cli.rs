use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "line-review")]
#[command(about = "明細抽出結果のレビュー・位置オーバーレイ生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// PDFを抽出サーバーへアップロードして結果JSONを保存
    Extract {
        /// PDFファイルのパス
        #[arg(required = true)]
        file: PathBuf,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// アップロード先URL（設定ファイルより優先）
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// 結果JSONの明細と位置情報を一覧表示
    Annotations {
        /// 結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// ページ画像に選択した明細の位置枠を描画
    Overlay {
        /// ページ画像（PNG/JPEG、1ページ目を原寸でラスタライズしたもの）
        #[arg(required = true)]
        page: PathBuf,

        /// 結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 表示する明細番号（0始まり、カンマ区切り）
        #[arg(short, long, value_delimiter = ',')]
        select: Vec<usize>,

        /// すべての明細を表示
        #[arg(long, conflicts_with = "select")]
        all: bool,

        /// 指定幅に収まるよう縮小
        #[arg(long)]
        fit_width: Option<u32>,

        /// 線幅（省略時は設定値）
        #[arg(long)]
        stroke_width: Option<f64>,

        /// 出力PNGファイル
        #[arg(short, long, default_value = "overlay.png")]
        output: PathBuf,
    },

    /// 設定管理
    Config {
        /// アップロード先URLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
