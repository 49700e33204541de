//! アップロードレスポンスパーサー
//!
//! 抽出サーバーの応答（ステータス + 本文）を結果セットかエラーに変換する。

use serde_json::Value;

use crate::error::{Error, Result, DEFAULT_TRANSPORT_MESSAGE};
use crate::types::ResultSet;

/// エラー応答の本文からメッセージを取り出す
///
/// `{"error": "..."}` 形式でなければ既定文言。
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| DEFAULT_TRANSPORT_MESSAGE.to_string())
}

/// アップロード応答をパース
///
/// # Arguments
/// * `status` - HTTPステータスコード
/// * `body` - レスポンス本文
///
/// # Returns
/// * `Ok(ResultSet)` - 2xx。明細配列が無い・空の場合は空の結果セット
/// * `Err(Error::Transport)` - 非2xx（本文の `error` を表示用メッセージにする）
/// * `Err(Error::Json)` - 2xxだが本文がJSONでない
///
/// # Examples
/// ```
/// use line_review_common::parse_upload_response;
///
/// let result = parse_upload_response(200, r#"{"line_details1": [{}]}"#).unwrap();
/// assert_eq!(result.len(), 1);
///
/// let err = parse_upload_response(400, r#"{"error": "No selected file"}"#).unwrap_err();
/// assert_eq!(err.user_message(), "No selected file");
/// ```
pub fn parse_upload_response(status: u16, body: &str) -> Result<ResultSet> {
    if !(200..300).contains(&status) {
        return Err(Error::Transport(error_message(body)));
    }

    let data: Value = serde_json::from_str(body)?;
    Ok(ResultSet::from_json(&data))
}
