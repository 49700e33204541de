//! オーバーレイ描画
//!
//! 選択中の明細の位置情報を現在のビューポートに合わせて換算し、
//! 枠線（塗りなし）として描画面に描く。描画面のクリアは呼び出し側の責任。

use std::fmt;

use crate::annotation::AnnotationStore;
use crate::selection::SelectionSet;
use crate::types::FieldKind;
use crate::viewport::{PixelRect, ViewportState};

/// 既定の線幅（原寸時のピクセル）
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// RGB色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// `#rrggbb` 形式（canvasの strokeStyle にそのまま渡せる）
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// 明細ごとの枠線色
pub const PALETTE: [Color; 8] = [
    Color::rgb(0x00, 0xd4, 0xff),
    Color::rgb(0x5b, 0x9b, 0xd5),
    Color::rgb(0x7b, 0x68, 0xee),
    Color::rgb(0x9b, 0x8a, 0xff),
    Color::rgb(0xff, 0x6b, 0x6b),
    Color::rgb(0x4e, 0xcd, 0xc4),
    Color::rgb(0xff, 0xe6, 0x6d),
    Color::rgb(0xff, 0x6b, 0x9d),
];

/// 線幅とパレット
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub stroke_width: f64,
    pub palette: Vec<Color>,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            palette: PALETTE.to_vec(),
        }
    }
}

impl OverlayStyle {
    pub fn with_stroke_width(stroke_width: f64) -> Self {
        Self {
            stroke_width,
            ..Default::default()
        }
    }

    /// 明細インデックスだけで決まる色（選択順・走査順に依存しない）
    pub fn color_for(&self, index: usize) -> Color {
        if self.palette.is_empty() {
            return PALETTE[index % PALETTE.len()];
        }
        self.palette[index % self.palette.len()]
    }
}

/// 枠線を描ける描画面
pub trait RasterSurface {
    fn stroke_rect(&mut self, rect: PixelRect, color: Color, line_width: f64);
}

/// 描画予定の枠線1本
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRect {
    pub line_item: usize,
    pub field_key: String,
    pub kind: FieldKind,
    pub rect: PixelRect,
    pub color: Color,
}

/// 描画する枠線を計算する
///
/// 選択中の明細を昇順に走査し、番兵ボックスと存在しない明細は除外する。
pub fn plan_overlay(
    viewport: &ViewportState,
    store: &AnnotationStore,
    selection: &SelectionSet,
    style: &OverlayStyle,
) -> Vec<OverlayRect> {
    let mut rects = Vec::new();

    for index in selection.sorted() {
        let Some(annotations) = store.get(index) else {
            continue;
        };
        let color = style.color_for(index);

        for annotation in annotations.iter().filter(|a| !a.bbox.is_sentinel()) {
            rects.push(OverlayRect {
                line_item: index,
                field_key: annotation.field_key.clone(),
                kind: annotation.kind,
                rect: viewport.to_pixel_rect(&annotation.bbox),
                color,
            });
        }
    }

    rects
}

/// 選択中の明細の枠線を描画面に描く
///
/// 戻り値は描いた枠線の数。ストア・選択は変更しない。
pub fn draw_overlay<S: RasterSurface + ?Sized>(
    surface: &mut S,
    viewport: &ViewportState,
    store: &AnnotationStore,
    selection: &SelectionSet,
    style: &OverlayStyle,
) -> usize {
    let rects = plan_overlay(viewport, store, selection, style);
    for planned in &rects {
        surface.stroke_rect(planned.rect, planned.color, style.stroke_width);
    }
    rects.len()
}

/// 描かれた枠線を記録するだけの描画面
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub strokes: Vec<(PixelRect, Color, f64)>,
}

impl RasterSurface for RecordingSurface {
    fn stroke_rect(&mut self, rect: PixelRect, color: Color, line_width: f64) {
        self.strokes.push((rect, color, line_width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResultSet;
    use serde_json::json;

    fn store_with(records: Vec<serde_json::Value>) -> AnnotationStore {
        AnnotationStore::build(&ResultSet { records })
    }

    #[test]
    fn test_color_display() {
        assert_eq!(PALETTE[0].to_string(), "#00d4ff");
        assert_eq!(PALETTE[7].to_string(), "#ff6b9d");
    }

    #[test]
    fn test_color_for_wraps() {
        let style = OverlayStyle::default();
        assert_eq!(style.color_for(5), PALETTE[5]);
        assert_eq!(style.color_for(13), PALETTE[5]);
        assert_eq!(style.color_for(8), PALETTE[0]);
    }

    #[test]
    fn test_color_for_empty_palette_falls_back() {
        let style = OverlayStyle {
            stroke_width: 1.0,
            palette: Vec::new(),
        };
        assert_eq!(style.color_for(3), PALETTE[3]);
    }

    #[test]
    fn test_draw_selected_value_box() {
        let store = store_with(vec![json!({
            "itemCode": { "value": "A-100", "valueBbox": [100, 100, 200, 400] }
        })]);
        let selection: SelectionSet = [0].into_iter().collect();
        let viewport = ViewportState::new(1000.0, 1000.0);
        let mut surface = RecordingSurface::default();

        let drawn = draw_overlay(&mut surface, &viewport, &store, &selection, &OverlayStyle::default());

        assert_eq!(drawn, 1);
        assert_eq!(
            surface.strokes,
            vec![(PixelRect { x: 100, y: 100, width: 300, height: 100 }, PALETTE[0], 2.0)]
        );
    }

    #[test]
    fn test_draw_skips_sentinel() {
        let store = store_with(vec![json!({
            "itemCode": { "value": "A-100", "labelBbox": [0, 0, 0, 0], "valueBbox": [0, 0, 0, 0] }
        })]);
        let selection: SelectionSet = [0].into_iter().collect();
        let mut surface = RecordingSurface::default();

        let drawn = draw_overlay(
            &mut surface,
            &ViewportState::new(1000.0, 1000.0),
            &store,
            &selection,
            &OverlayStyle::default(),
        );

        assert_eq!(drawn, 0);
        assert!(surface.strokes.is_empty());
    }

    #[test]
    fn test_draw_ignores_unselected_and_missing() {
        let store = store_with(vec![
            json!({ "qty": { "valueBbox": [10, 10, 20, 20] } }),
            json!({ "qty": { "valueBbox": [30, 30, 40, 40] } }),
        ]);
        // 1は選択、0は未選択、99は存在しない
        let selection: SelectionSet = [1, 99].into_iter().collect();
        let rects = plan_overlay(
            &ViewportState::new(1000.0, 1000.0),
            &store,
            &selection,
            &OverlayStyle::default(),
        );

        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].line_item, 1);
        assert_eq!(rects[0].rect, PixelRect { x: 30, y: 30, width: 10, height: 10 });
    }

    #[test]
    fn test_color_stable_across_redraws() {
        let records: Vec<_> = (0..6)
            .map(|_| json!({ "price": { "valueBbox": [1, 1, 2, 2] } }))
            .collect();
        let store = store_with(records);
        let viewport = ViewportState::new(1000.0, 1000.0);
        let style = OverlayStyle::default();

        let mut selection = SelectionSet::new();
        selection.toggle(5, true);
        let first = plan_overlay(&viewport, &store, &selection, &style);

        // 他の明細を追加・削除しても色は変わらない
        selection.toggle(2, true);
        selection.toggle(0, true);
        selection.toggle(2, false);
        let second = plan_overlay(&viewport, &store, &selection, &style);

        let color_of_5 = |rects: &[OverlayRect]| {
            rects.iter().find(|r| r.line_item == 5).map(|r| r.color)
        };
        assert_eq!(color_of_5(&first), Some(PALETTE[5]));
        assert_eq!(color_of_5(&second), Some(PALETTE[5]));
    }

    #[test]
    fn test_draw_uses_style_stroke_width() {
        let store = store_with(vec![json!({ "qty": { "labelBbox": [10, 10, 20, 20] } })]);
        let selection: SelectionSet = [0].into_iter().collect();
        let mut surface = RecordingSurface::default();

        draw_overlay(
            &mut surface,
            &ViewportState::new(100.0, 100.0),
            &store,
            &selection,
            &OverlayStyle::with_stroke_width(3.0),
        );

        assert_eq!(surface.strokes[0].2, 3.0);
        assert_eq!(surface.strokes[0].0, PixelRect { x: 1, y: 1, width: 1, height: 1 });
    }

    #[test]
    fn test_empty_selection_draws_nothing() {
        let store = store_with(vec![json!({ "qty": { "valueBbox": [10, 10, 20, 20] } })]);
        let mut surface = RecordingSurface::default();
        let drawn = draw_overlay(
            &mut surface,
            &ViewportState::new(1000.0, 1000.0),
            &store,
            &SelectionSet::new(),
            &OverlayStyle::default(),
        );
        assert_eq!(drawn, 0);
    }
}
