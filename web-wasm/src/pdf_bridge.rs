//! pdf.js 経由のページ描画

use line_review_common::{Error, Result};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen(module = "/js/pdf-bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = "loadPdf", catch)]
    async fn load_pdf_js(bytes: js_sys::Uint8Array) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "pageSize", catch)]
    async fn page_size_js(doc: &JsValue, page_number: u32) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "renderPage", catch)]
    async fn render_page_js(
        doc: &JsValue,
        page_number: u32,
        canvas: &HtmlCanvasElement,
        scale: f64,
    ) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "destroyPdf")]
    fn destroy_pdf_js(doc: &JsValue);
}

fn rasterization(e: JsValue) -> Error {
    Error::Rasterization(format!("{:?}", e))
}

/// 読み込み済みのPDF（pdf.js の PDFDocumentProxy）
#[derive(Clone)]
pub struct PdfDocument {
    handle: JsValue,
}

impl PdfDocument {
    pub async fn load(bytes: &[u8]) -> Result<Self> {
        // pdf.js はバッファをワーカーへ移すので毎回コピーを渡す
        let data = js_sys::Uint8Array::from(bytes);
        let handle = load_pdf_js(data).await.map_err(rasterization)?;
        Ok(Self { handle })
    }

    /// 原寸（scale 1.0）でのページ寸法
    pub async fn page_size(&self, page_number: u32) -> Result<(f64, f64)> {
        let value = page_size_js(&self.handle, page_number)
            .await
            .map_err(rasterization)?;
        let size: Vec<f64> = serde_wasm_bindgen::from_value(value)
            .map_err(|e| Error::Rasterization(e.to_string()))?;
        match size.as_slice() {
            [width, height] => Ok((*width, *height)),
            _ => Err(Error::Rasterization("unexpected page size".into())),
        }
    }

    /// ページを canvas に描く
    ///
    /// 同じ canvas で後から描画が始まると取り消され、`Ok(false)` を返す。
    pub async fn render_page(
        &self,
        page_number: u32,
        canvas: &HtmlCanvasElement,
        scale: f64,
    ) -> Result<bool> {
        render_page_js(&self.handle, page_number, canvas, scale)
            .await
            .map(|completed| completed.as_bool().unwrap_or(true))
            .map_err(rasterization)
    }

    pub fn destroy(self) {
        destroy_pdf_js(&self.handle);
    }
}
