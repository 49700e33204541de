//! 一時的なエラー表示

use gloo::timers::callback::Timeout;
use leptos::prelude::*;

/// 自動で消えるまでの時間
const DISMISS_AFTER_MS: u32 = 8_000;

#[component]
pub fn ErrorBanner(
    error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let shown = error.get();
        // 新しいメッセージごとにタイマーを張り直す
        timer.set_value(shown.map(|message| {
            Timeout::new(DISMISS_AFTER_MS, move || {
                if error.get_untracked().as_deref() == Some(message.as_str()) {
                    set_error.set(None);
                }
            })
        }));
    });

    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-banner" role="alert">
                <span>{move || error.get().unwrap_or_default()}</span>
                <button class="btn btn-small" on:click=move |_| set_error.set(None)>"×"</button>
            </div>
        </Show>
    }
}
