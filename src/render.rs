//! ページ画像へのオーバーレイ描画
//!
//! 原寸でラスタライズ済みのページ画像を描画面として扱う。
//! 縮小表示時は画像をリサイズしてから（＝再ラスタライズ相当）枠線を描く。

use image::{imageops, Rgba, RgbaImage};
use line_review_common::{
    Color, OverlayStyle, PixelRect, RasterSurface, ResultSet, ScalePolicy, ViewerSession,
    ViewportState,
};

use crate::error::{LineReviewError, Result};

/// RGBA画像を描画面にするラッパー
pub struct ImageSurface<'a> {
    image: &'a mut RgbaImage,
}

impl<'a> ImageSurface<'a> {
    pub fn new(image: &'a mut RgbaImage) -> Self {
        Self { image }
    }

    /// 画像外をクリップして塗りつぶす
    fn fill(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba<u8>) {
        let (w, h) = (self.image.width() as i64, self.image.height() as i64);
        for y in y0.max(0)..y1.min(h) {
            for x in x0.max(0)..x1.min(w) {
                self.image.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

impl RasterSurface for ImageSurface<'_> {
    /// canvasの strokeRect と同様、線は矩形の辺を中心に太る
    fn stroke_rect(&mut self, rect: PixelRect, color: Color, line_width: f64) {
        let thickness = (line_width.round() as i64).max(1);
        let inset = thickness / 2;
        let pixel = Rgba([color.r, color.g, color.b, 255]);

        // 座標は飽和演算（範囲外はクリップで落ちる）
        let left = rect.x.saturating_sub(inset);
        let top = rect.y.saturating_sub(inset);
        let right = rect.x.saturating_add(rect.width).saturating_sub(inset);
        let bottom = rect.y.saturating_add(rect.height).saturating_sub(inset);
        let right_end = right.saturating_add(thickness);
        let bottom_end = bottom.saturating_add(thickness);

        self.fill(left, top, right_end, top.saturating_add(thickness), pixel);
        self.fill(left, bottom, right_end, bottom_end, pixel);
        self.fill(left, top, left.saturating_add(thickness), bottom_end, pixel);
        self.fill(right, top, right_end, bottom_end, pixel);
    }
}

/// 表示する明細
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    All,
    Indices(Vec<usize>),
}

/// ページ画像に選択明細の枠線を描いて返す
///
/// # Returns
/// (描画後の画像, 描いた枠線の数)
pub fn render_overlay(
    page: RgbaImage,
    result: &ResultSet,
    selection: &Selection,
    policy: ScalePolicy,
    style: &OverlayStyle,
) -> Result<(RgbaImage, usize)> {
    let mut session = ViewerSession::new();
    session.apply_result(result);

    let indices: Vec<usize> = match selection {
        Selection::All => (0..result.len()).collect(),
        Selection::Indices(indices) => indices.clone(),
    };
    for index in indices {
        if index >= result.len() {
            return Err(LineReviewError::InvalidSelection(format!(
                "{} (明細は{}件)",
                index,
                result.len()
            )));
        }
        session.toggle(index, true);
    }

    let ticket = session.begin_render();
    let (mut page, viewport) = rasterize(page, policy);
    session.complete_render(ticket, viewport);

    let drawn = session.redraw(&mut ImageSurface::new(&mut page), style);
    Ok((page, drawn))
}

/// 倍率方針に従ってページ画像を拡縮する
pub fn rasterize(page: RgbaImage, policy: ScalePolicy) -> (RgbaImage, ViewportState) {
    let viewport = ViewportState::from_page(page.width() as f64, page.height() as f64, policy);
    if viewport.scale == 1.0 {
        return (page, viewport);
    }

    let width = (viewport.width.round() as u32).max(1);
    let height = (viewport.height.round() as u32).max(1);
    let resized = imageops::resize(&page, width, height, imageops::FilterType::Triangle);
    (resized, ViewportState { width: width as f64, height: height as f64, ..viewport })
}
