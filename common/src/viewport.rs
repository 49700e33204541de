//! 表示中ページの寸法と正規化座標 → ピクセル座標の変換

use crate::types::{BoundingBox, NORMALIZED_EXTENT};

/// 描画倍率の決め方
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScalePolicy {
    /// 原寸（100%）
    #[default]
    Native,
    /// 指定幅に収まるよう縮小（拡大はしない）
    FitWidth(f64),
}

impl ScalePolicy {
    /// ページ本来の幅に対する倍率
    pub fn scale_for(&self, page_width: f64) -> f64 {
        match *self {
            ScalePolicy::Native => 1.0,
            ScalePolicy::FitWidth(max_width) => {
                if max_width > 0.0 && page_width > max_width {
                    max_width / page_width
                } else {
                    1.0
                }
            }
        }
    }
}

/// 現在描画されているページの倍率とピクセル寸法
///
/// ページを（再）描画するたびに作り直す。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub scale: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewportState {
    pub fn new(width: f64, height: f64) -> Self {
        Self { scale: 1.0, width, height }
    }

    /// ページ本来の寸法と倍率方針から作る
    pub fn from_page(page_width: f64, page_height: f64, policy: ScalePolicy) -> Self {
        let scale = policy.scale_for(page_width);
        Self {
            scale,
            width: page_width * scale,
            height: page_height * scale,
        }
    }

    /// 正規化矩形を現在の解像度のピクセル矩形に変換する
    ///
    /// 各軸を独立に丸める（y は高さ、x は幅で換算）。幅・高さは丸めた端点の差。
    /// 極端な座標は ±`PIXEL_LIMIT` に丸めるので、端点の和・差は溢れない。
    pub fn to_pixel_rect(&self, bbox: &BoundingBox) -> PixelRect {
        let y_min = scale_axis(bbox.y_min, self.height);
        let x_min = scale_axis(bbox.x_min, self.width);
        let y_max = scale_axis(bbox.y_max, self.height);
        let x_max = scale_axis(bbox.x_max, self.width);

        PixelRect {
            x: x_min,
            y: y_min,
            width: x_max - x_min,
            height: y_max - y_min,
        }
    }
}

/// ピクセル座標の上限（絶対値）
pub const PIXEL_LIMIT: i64 = i32::MAX as i64;

fn scale_axis(normalized: f64, extent: f64) -> i64 {
    let limit = PIXEL_LIMIT as f64;
    // NaN は as で 0 になる
    (normalized / NORMALIZED_EXTENT * extent)
        .round()
        .clamp(-limit, limit) as i64
}

/// 描画面上の矩形（左上 + 寸法）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_scale() {
        let viewport = ViewportState::from_page(612.0, 792.0, ScalePolicy::Native);
        assert_eq!(viewport.scale, 1.0);
        assert_eq!(viewport.width, 612.0);
        assert_eq!(viewport.height, 792.0);
    }

    #[test]
    fn test_fit_width_shrinks() {
        let viewport = ViewportState::from_page(1000.0, 1000.0, ScalePolicy::FitWidth(500.0));
        assert_eq!(viewport.scale, 0.5);
        assert_eq!(viewport.width, 500.0);
        assert_eq!(viewport.height, 500.0);
    }

    #[test]
    fn test_fit_width_never_enlarges() {
        let viewport = ViewportState::from_page(400.0, 600.0, ScalePolicy::FitWidth(800.0));
        assert_eq!(viewport.scale, 1.0);
        assert_eq!(viewport.width, 400.0);

        let zero = ViewportState::from_page(400.0, 600.0, ScalePolicy::FitWidth(0.0));
        assert_eq!(zero.scale, 1.0);
    }

    #[test]
    fn test_to_pixel_rect_square() {
        let viewport = ViewportState::new(1000.0, 1000.0);
        let rect = viewport.to_pixel_rect(&BoundingBox::new(100.0, 100.0, 200.0, 400.0));
        assert_eq!(rect, PixelRect { x: 100, y: 100, width: 300, height: 100 });
    }

    #[test]
    fn test_to_pixel_rect_axes_independent() {
        // y は高さ、x は幅で換算
        let viewport = ViewportState::new(612.0, 792.0);
        let rect = viewport.to_pixel_rect(&BoundingBox::new(125.0, 333.0, 250.0, 667.0));

        let y_min = (125.0_f64 / 1000.0 * 792.0).round() as i64;
        let x_min = (333.0_f64 / 1000.0 * 612.0).round() as i64;
        let y_max = (250.0_f64 / 1000.0 * 792.0).round() as i64;
        let x_max = (667.0_f64 / 1000.0 * 612.0).round() as i64;
        assert_eq!(rect.x, x_min);
        assert_eq!(rect.y, y_min);
        assert_eq!(rect.width, x_max - x_min);
        assert_eq!(rect.height, y_max - y_min);
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (204, 99, 204, 99));
    }

    #[test]
    fn test_to_pixel_rect_halves_with_viewport() {
        let bbox = BoundingBox::new(100.0, 100.0, 200.0, 400.0);
        let full = ViewportState::new(1000.0, 1000.0).to_pixel_rect(&bbox);
        let half = ViewportState::from_page(1000.0, 1000.0, ScalePolicy::FitWidth(500.0))
            .to_pixel_rect(&bbox);

        assert_eq!(half.x * 2, full.x);
        assert_eq!(half.y * 2, full.y);
        assert_eq!(half.width * 2, full.width);
        assert_eq!(half.height * 2, full.height);
    }

    #[test]
    fn test_to_pixel_rect_extreme_coordinates_are_clamped() {
        let viewport = ViewportState::new(1000.0, 1000.0);
        let rect = viewport.to_pixel_rect(&BoundingBox::new(0.0, -1e300, 10.0, 1e300));

        assert_eq!(rect.x, -PIXEL_LIMIT);
        assert_eq!(rect.width, 2 * PIXEL_LIMIT);
        assert_eq!((rect.y, rect.height), (0, 10));
        assert!(rect.x.checked_add(rect.width).is_some());

        let inverted = viewport.to_pixel_rect(&BoundingBox::new(1e300, 1e300, -1e300, -1e300));
        assert_eq!(inverted.x, PIXEL_LIMIT);
        assert_eq!(inverted.width, -2 * PIXEL_LIMIT);
    }
}
