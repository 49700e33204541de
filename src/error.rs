use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineReviewError {
    #[error(transparent)]
    Common(#[from] line_review_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("アップロード先が設定されていません。`line-review config --set-endpoint URL` で設定してください")]
    MissingEndpoint,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("明細番号が不正: {0}")]
    InvalidSelection(String),

    #[error("画像処理エラー: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for LineReviewError {
    fn from(err: reqwest::Error) -> Self {
        LineReviewError::Common(line_review_common::Error::Transport(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, LineReviewError>;
