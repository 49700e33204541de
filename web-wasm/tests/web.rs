//! ブラウザ上のcanvas描画テスト（wasm-pack test --headless --firefox）

use line_review_common::{BoundingBox, Color, PixelRect, RasterSurface, ViewportState};
use line_review_wasm::canvas::CanvasSurface;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn make_canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap()
}

fn pixel(canvas: &HtmlCanvasElement, x: f64, y: f64) -> Vec<u8> {
    let ctx = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<CanvasRenderingContext2d>()
        .unwrap();
    ctx.get_image_data(x, y, 1.0, 1.0).unwrap().data().to_vec()
}

#[wasm_bindgen_test]
fn stroke_lands_on_mapped_edge() {
    let canvas = make_canvas();
    let mut surface = CanvasSurface::new(&canvas).unwrap();
    surface.resize(200.0, 100.0);

    let viewport = ViewportState::new(200.0, 100.0);
    let rect = viewport.to_pixel_rect(&BoundingBox::new(200.0, 100.0, 800.0, 900.0));
    assert_eq!(rect, PixelRect { x: 20, y: 20, width: 160, height: 60 });

    surface.stroke_rect(rect, Color::rgb(255, 0, 0), 2.0);

    let edge = pixel(&canvas, 20.0, 50.0);
    assert_eq!(edge[0], 255);
    assert!(edge[3] > 0);
    // 内側は塗らない
    assert_eq!(pixel(&canvas, 100.0, 50.0)[3], 0);
}

#[wasm_bindgen_test]
fn clear_erases_strokes() {
    let canvas = make_canvas();
    let mut surface = CanvasSurface::new(&canvas).unwrap();
    surface.resize(50.0, 50.0);
    surface.stroke_rect(PixelRect { x: 10, y: 10, width: 20, height: 20 }, Color::rgb(0, 0, 255), 2.0);
    assert!(pixel(&canvas, 10.0, 20.0)[3] > 0);

    surface.clear();
    assert_eq!(pixel(&canvas, 10.0, 20.0)[3], 0);
}

#[wasm_bindgen_test]
fn resize_sets_backing_store_and_css_size() {
    let canvas = make_canvas();
    let surface = CanvasSurface::new(&canvas).unwrap();
    surface.resize(320.0, 240.0);

    assert_eq!((canvas.width(), canvas.height()), (320, 240));
    let style = canvas.style();
    assert_eq!(style.get_property_value("width").unwrap(), "320px");
    assert_eq!(style.get_property_value("height").unwrap(), "240px");
}
