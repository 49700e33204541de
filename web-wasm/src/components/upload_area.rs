//! アップロードエリアコンポーネント

use leptos::html::Input;
use leptos::prelude::*;
use line_review_common::intake::ACCEPTED_MIME;
use line_review_common::validate_document;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileList, FileReader};

use crate::app::DocumentFile;

#[component]
pub fn UploadArea<F, E>(on_document: F, on_error: E) -> impl IntoView
where
    F: Fn(DocumentFile) + 'static + Clone + Send + Sync,
    E: Fn(String) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<Input>::new();

    // 1ファイルのみ。複数渡されたら先頭を使う
    let handle_files = move |files: FileList| {
        let Some(file) = files.get(0) else {
            return;
        };
        let size = file.size() as u64;
        if let Err(err) = validate_document(&file.name(), &file.type_(), size) {
            on_error(err.user_message());
            return;
        }
        read_file(file, size, on_document.clone(), on_error.clone());
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);
            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                handle_files(files);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        if let Some(files) = input.files() {
            handle_files(files);
        }
        // 同じファイルを選び直しても change が発火するように
        input.set_value("");
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <input
                node_ref=input_ref
                type="file"
                accept=ACCEPTED_MIME
                style="display: none"
                on:change=on_change
            />
            <div class="upload-icon">"📄"</div>
            <p>"Drag & drop a PDF here, or click to choose a file"</p>
            <p class="text-muted">"PDF only"</p>
        </div>
    }
}

fn read_file<F, E>(file: File, size: u64, on_document: F, on_error: E)
where
    F: Fn(DocumentFile) + 'static,
    E: Fn(String) + 'static,
{
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            log::error!("FileReader unavailable: {:?}", e);
            on_error("Could not read the selected file.".to_string());
            return;
        }
    };

    let name = file.name();
    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        match reader_clone.result() {
            Ok(result) => {
                let bytes = js_sys::Uint8Array::new(&result).to_vec();
                log::debug!("read {} ({} bytes)", name, bytes.len());
                on_document(DocumentFile {
                    name: name.clone(),
                    size,
                    bytes,
                });
            }
            Err(_) => on_error("Could not read the selected file.".to_string()),
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if reader.read_as_array_buffer(&file).is_err() {
        log::warn!("failed to start reading {}", file.name());
    }
}
