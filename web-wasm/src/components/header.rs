//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Line Item Review"</h1>
            <p class="text-muted">"Upload a PDF to extract line items and locate them on the page"</p>
        </header>
    }
}
