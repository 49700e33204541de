//! 入力文書のチェック

use crate::error::{Error, Result};

/// 受け付けるMIMEタイプ
pub const ACCEPTED_MIME: &str = "application/pdf";

/// アップロード上限（16MB）
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

pub const INVALID_FILE_MESSAGE: &str = "Please upload a valid PDF file.";

/// 文書がアップロード可能か確認する
///
/// MIMEタイプが空の場合（ドラッグ元によっては付かない）は拡張子で判定する。
pub fn validate_document(name: &str, mime_type: &str, size: u64) -> Result<()> {
    let is_pdf = if mime_type.is_empty() {
        name.to_ascii_lowercase().ends_with(".pdf")
    } else {
        mime_type == ACCEPTED_MIME
    };
    if !is_pdf {
        return Err(Error::InvalidInput(INVALID_FILE_MESSAGE.to_string()));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(Error::InvalidInput(format!(
            "File is too large ({}). Maximum size is {}.",
            format_file_size(size),
            format_file_size(MAX_UPLOAD_BYTES)
        )));
    }
    Ok(())
}

/// 拡張子からMIMEタイプを推定する（CLI用）
pub fn mime_for_path(name: &str) -> &'static str {
    if name.to_ascii_lowercase().ends_with(".pdf") {
        ACCEPTED_MIME
    } else {
        ""
    }
}

/// ファイルサイズの表示（小数2桁まで）
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}
