//! PDFプレビュー（ページ + オーバーレイの2枚重ね）

use leptos::prelude::*;

use crate::viewer::Viewer;

#[component]
pub fn PdfViewer<FC>(viewer: Viewer, is_open: ReadSignal<bool>, on_close: FC) -> impl IntoView
where
    FC: Fn() + 'static + Clone + Send + Sync,
{
    // canvas は常にDOMに置き、表示だけ切り替える（NodeRef を保持するため）
    view! {
        <div class="pdf-viewer" class:hidden=move || !is_open.get()>
            <div class="viewer-toolbar">
                <span>"Document Preview"</span>
                <button class="btn btn-small btn-secondary" on:click=move |_| on_close()>
                    "Close"
                </button>
            </div>
            <div class="canvas-stack" node_ref=viewer.wrapper>
                <canvas class="page-canvas" node_ref=viewer.page_canvas></canvas>
                <canvas class="overlay-canvas" node_ref=viewer.overlay_canvas></canvas>
            </div>
        </div>
    }
}
