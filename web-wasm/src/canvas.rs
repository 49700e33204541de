//! canvas 2D コンテキストを描画面として使う

use line_review_common::{Color, PixelRect, RasterSurface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    /// ページと同じ寸法に合わせる（内容は消える）
    pub fn resize(&self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        let style = self.canvas.style();
        for (name, value) in [("width", width), ("height", height)] {
            if let Err(e) = style.set_property(name, &format!("{}px", value)) {
                log::debug!("failed to set canvas {}: {:?}", name, e);
            }
        }
    }

    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }
}

impl RasterSurface for CanvasSurface {
    fn stroke_rect(&mut self, rect: PixelRect, color: Color, line_width: f64) {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(line_width);
        self.ctx.stroke_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }
}
