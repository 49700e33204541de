//! メインアプリケーションコンポーネント

use std::collections::HashSet;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use line_review_common::{format_file_size, summarize, LineItemSummary};

use crate::api::upload::upload_document;
use crate::components::{
    error_banner::ErrorBanner, header::Header, pdf_viewer::PdfViewer,
    results_list::ResultsList, upload_area::UploadArea,
};
use crate::viewer::Viewer;

/// 選択中の文書
#[derive(Clone)]
pub struct DocumentFile {
    pub name: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

#[component]
pub fn App() -> impl IntoView {
    let (file_info, set_file_info) = signal(None::<(String, String)>);
    let (error, set_error) = signal(None::<String>);
    let (is_loading, set_is_loading) = signal(false);
    let (summaries, set_summaries) = signal(None::<Vec<LineItemSummary>>);
    let (visible, set_visible) = signal(HashSet::<usize>::new());
    let (viewer_open, set_viewer_open) = signal(false);

    let document = StoredValue::new(None::<DocumentFile>);
    let viewer = Viewer::new(set_viewer_open, set_error);

    // 文書の差し替え: 前の結果・選択は引き継がない
    let on_document = move |file: DocumentFile| {
        set_error.set(None);
        set_file_info.set(Some((file.name.clone(), format_file_size(file.size))));
        set_summaries.set(None);
        set_visible.set(HashSet::new());

        let bytes = file.bytes.clone();
        document.set_value(Some(file));
        viewer.open(bytes);
    };

    let on_upload_error = move |message: String| {
        set_error.set(Some(message));
    };

    let on_submit = move |_| {
        let Some(file) = document.get_value() else {
            set_error.set(Some("Please select a PDF file first.".to_string()));
            return;
        };
        set_error.set(None);
        set_is_loading.set(true);
        let token = viewer.document_token();

        spawn_local(async move {
            match upload_document(&file).await {
                Ok(result) => {
                    log::info!("received {} line items for {}", result.len(), file.name);
                    // 待っている間に文書が替わっていたら捨てる
                    if viewer.apply_result(token, &result) {
                        set_visible.set(HashSet::new());
                        set_summaries.set(Some(summarize(&result)));
                    }
                }
                Err(err) => {
                    log::warn!("upload failed: {}", err);
                    set_error.set(Some(err.user_message()));
                }
            }
            set_is_loading.set(false);
        });
    };

    let on_toggle = move |index: usize, show: bool| {
        set_visible.update(|set| {
            if show {
                set.insert(index);
            } else {
                set.remove(&index);
            }
        });
        viewer.toggle(index, show);
    };

    let on_close = move || {
        viewer.close();
        set_visible.set(HashSet::new());
        set_summaries.set(None);
    };

    let _resize = window_event_listener(ev::resize, move |_| viewer.schedule_resize());

    view! {
        <div class="container">
            <Header />

            <ErrorBanner error=error set_error=set_error />

            <UploadArea on_document=on_document on_error=on_upload_error />

            {move || file_info.get().map(|(name, size)| view! {
                <div class="file-info">
                    <span class="file-name">{name}</span>
                    <span class="file-size">{size}</span>
                </div>
            })}

            <button
                class="btn btn-primary"
                disabled=move || is_loading.get() || file_info.get().is_none()
                on:click=on_submit
            >
                {move || if is_loading.get() { "Processing..." } else { "Extract Line Items" }}
            </button>

            <div class="workspace">
                <ResultsList summaries=summaries visible=visible on_toggle=on_toggle />
                <PdfViewer viewer=viewer is_open=viewer_open on_close=on_close />
            </div>
        </div>
    }
}
