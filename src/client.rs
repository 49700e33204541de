//! 抽出サーバーへのアップロード

use crate::error::{LineReviewError, Result};
use line_review_common::intake::{mime_for_path, ACCEPTED_MIME};
use line_review_common::{parse_upload_response, validate_document, ResultSet};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;

/// multipartのフィールド名
const FILE_FIELD: &str = "file";

/// PDFをアップロードして抽出結果を受け取る
///
/// 非2xxはサーバーの `error` メッセージ付きの通信エラー。
/// 明細が無い場合は空の結果セット（エラーではない）。
pub async fn upload_document(endpoint: &str, path: &Path, timeout: Duration) -> Result<ResultSet> {
    if !path.is_file() {
        return Err(LineReviewError::FileNotFound(path.display().to_string()));
    }

    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("document.pdf")
        .to_string();
    let bytes = tokio::fs::read(path).await?;
    validate_document(&file_name, mime_for_path(&file_name), bytes.len() as u64)?;

    log::info!("uploading {} ({} bytes) to {}", file_name, bytes.len(), endpoint);

    let part = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(ACCEPTED_MIME)?;
    let form = Form::new().part(FILE_FIELD, part);

    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let response = client.post(endpoint).multipart(form).send().await?;

    let status = response.status().as_u16();
    let body = response.text().await?;
    log::debug!("upload response: status={} body_len={}", status, body.len());

    Ok(parse_upload_response(status, &body)?)
}
