//! エラー型定義
//!
//! 画面に一時表示されるエラー種別（ファイル種別不正・通信失敗・プレビュー描画失敗）と、
//! JSON/設定まわりの内部エラーをまとめる。
//! 「明細なし」はエラーではなく表示状態なので `DisplayState::NoRecords` 側で扱う。

use thiserror::Error;

/// 通信エラー時、サーバーがメッセージを返さなかった場合の既定文言
pub const DEFAULT_TRANSPORT_MESSAGE: &str = "An error occurred while processing the file.";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// ファイル種別・サイズ不正
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// アップロード失敗・非2xxレスポンス
    #[error("Transport error: {0}")]
    Transport(String),

    /// プレビュー描画失敗
    #[error("Rasterization error: {0}")]
    Rasterization(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// バナーに表示する文言
    ///
    /// 種別ごとの接頭辞は付けず、ユーザーが読める本文だけを返す。
    pub fn user_message(&self) -> String {
        match self {
            Error::InvalidInput(msg) | Error::Transport(msg) | Error::Config(msg) => msg.clone(),
            Error::Rasterization(_) => "Failed to load PDF for preview.".to_string(),
            Error::Json(_) => "Failed to process the PDF file. Please try again.".to_string(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
