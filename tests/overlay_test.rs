//! オーバーレイ描画テスト
//!
//! 結果JSON → ページ画像への枠線描画までを通しで検証

use image::{Rgba, RgbaImage};
use line_review::render::{render_overlay, Selection};
use line_review_common::{OverlayStyle, ResultSet, ScalePolicy, PALETTE};
use serde_json::json;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

fn palette_pixel(index: usize) -> Rgba<u8> {
    let c = PALETTE[index];
    Rgba([c.r, c.g, c.b, 255])
}

fn blank_page(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, WHITE)
}

fn item_code_result(value_bbox: serde_json::Value) -> ResultSet {
    ResultSet::from_json(&json!({
        "line_details1": [
            { "itemCode": { "value": "A-100", "labelBbox": [0, 0, 0, 0], "valueBbox": value_bbox } }
        ]
    }))
}

/// 1000x1000のページに [100,100,200,400] → (100,100) 300x100
#[test]
fn test_selected_record_draws_rect() {
    let result = item_code_result(json!([100, 100, 200, 400]));

    let (page, drawn) = render_overlay(
        blank_page(1000, 1000),
        &result,
        &Selection::Indices(vec![0]),
        ScalePolicy::Native,
        &OverlayStyle::default(),
    )
    .expect("描画失敗");

    assert_eq!(drawn, 1);
    // 左辺 x=99,100 / 右辺 x=399,400 / 上辺 y=99,100 / 下辺 y=199,200
    assert_eq!(*page.get_pixel(100, 150), palette_pixel(0));
    assert_eq!(*page.get_pixel(400, 150), palette_pixel(0));
    assert_eq!(*page.get_pixel(250, 100), palette_pixel(0));
    assert_eq!(*page.get_pixel(250, 200), palette_pixel(0));
    assert_eq!(*page.get_pixel(250, 150), WHITE);
    assert_eq!(*page.get_pixel(50, 50), WHITE);
}

/// 極端な座標でも落ちずに、画像内に入る辺だけ描く
#[test]
fn test_extreme_bbox_is_clipped() {
    let result = item_code_result(json!([10, -1e300, 20, 1e300]));

    let (page, drawn) = render_overlay(
        blank_page(100, 100),
        &result,
        &Selection::All,
        ScalePolicy::Native,
        &OverlayStyle::default(),
    )
    .expect("描画失敗");

    assert_eq!(drawn, 1);
    // 上辺 y=0,1 / 下辺 y=1,2 が横一杯に引かれる
    assert_eq!(*page.get_pixel(50, 1), palette_pixel(0));
    assert_eq!(*page.get_pixel(50, 50), WHITE);
}

/// 番兵ボックスは描かない
#[test]
fn test_sentinel_record_draws_nothing() {
    let result = item_code_result(json!([0, 0, 0, 0]));

    let (page, drawn) = render_overlay(
        blank_page(100, 100),
        &result,
        &Selection::All,
        ScalePolicy::Native,
        &OverlayStyle::default(),
    )
    .expect("描画失敗");

    assert_eq!(drawn, 0);
    assert!(page.pixels().all(|p| *p == WHITE));
}

/// 未選択なら描かない
#[test]
fn test_unselected_record_draws_nothing() {
    let result = item_code_result(json!([100, 100, 200, 400]));

    let (_, drawn) = render_overlay(
        blank_page(1000, 1000),
        &result,
        &Selection::Indices(vec![]),
        ScalePolicy::Native,
        &OverlayStyle::default(),
    )
    .expect("描画失敗");

    assert_eq!(drawn, 0);
}

/// 明細なしの結果セット
#[test]
fn test_empty_result_set() {
    let result = ResultSet::from_json(&json!({ "line_details1": [] }));

    let (_, drawn) = render_overlay(
        blank_page(10, 10),
        &result,
        &Selection::All,
        ScalePolicy::Native,
        &OverlayStyle::default(),
    )
    .expect("描画失敗");

    assert_eq!(drawn, 0);
}

/// 縮小表示では座標も半分になる
#[test]
fn test_fit_width_halves_coordinates() {
    let result = item_code_result(json!([100, 100, 200, 400]));

    let (page, drawn) = render_overlay(
        blank_page(1000, 1000),
        &result,
        &Selection::Indices(vec![0]),
        ScalePolicy::FitWidth(500.0),
        &OverlayStyle::default(),
    )
    .expect("描画失敗");

    assert_eq!(drawn, 1);
    assert_eq!(page.dimensions(), (500, 500));
    // (50,50) 150x50
    assert_eq!(*page.get_pixel(50, 75), palette_pixel(0));
    assert_eq!(*page.get_pixel(200, 75), palette_pixel(0));
    assert_eq!(*page.get_pixel(125, 50), palette_pixel(0));
    assert_eq!(*page.get_pixel(125, 100), palette_pixel(0));
    assert_ne!(*page.get_pixel(125, 75), palette_pixel(0));
}

/// 明細ごとに色が分かれる
#[test]
fn test_colors_per_line_item() {
    let records: Vec<_> = (0..6)
        .map(|i| {
            let top = 100 + i * 100;
            json!({ "qty": { "value": "1", "valueBbox": [top, 100, top + 50, 300] } })
        })
        .collect();
    let result = ResultSet::from_json(&json!({ "line_details1": records }));

    let (page, drawn) = render_overlay(
        blank_page(1000, 1000),
        &result,
        &Selection::Indices(vec![1, 5]),
        ScalePolicy::Native,
        &OverlayStyle::default(),
    )
    .expect("描画失敗");

    assert_eq!(drawn, 2);
    assert_eq!(*page.get_pixel(100, 220), palette_pixel(1));
    assert_eq!(*page.get_pixel(100, 620), palette_pixel(5));
}
