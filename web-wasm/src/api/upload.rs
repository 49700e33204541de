//! 抽出サーバーへのアップロード（fetch）

use line_review_common::intake::ACCEPTED_MIME;
use line_review_common::{parse_upload_response, Error, Result, ResultSet};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, Response};

use crate::app::DocumentFile;

/// 同一オリジンのアップロード先
const UPLOAD_URL: &str = "/upload";

fn transport(e: JsValue) -> Error {
    Error::Transport(
        e.as_string()
            .unwrap_or_else(|| "Failed to process the PDF file. Please try again.".to_string()),
    )
}

fn pdf_blob(bytes: &[u8]) -> Result<Blob> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let options = BlobPropertyBag::new();
    options.set_type(ACCEPTED_MIME);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(transport)
}

/// PDFを `file` フィールドでPOSTし、結果セットを受け取る
pub async fn upload_document(document: &DocumentFile) -> Result<ResultSet> {
    let form = FormData::new().map_err(transport)?;
    let blob = pdf_blob(&document.bytes)?;
    form.append_with_blob_and_filename("file", &blob, &document.name)
        .map_err(transport)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(UPLOAD_URL, &opts).map_err(transport)?;
    let window = web_sys::window().ok_or_else(|| Error::Transport("no window".into()))?;

    log::info!("uploading {} ({} bytes)", document.name, document.bytes.len());
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    let status = resp.status();
    let body = JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?
        .as_string()
        .unwrap_or_default();

    parse_upload_response(status, &body)
}
