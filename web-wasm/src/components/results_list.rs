//! 抽出結果（明細カード）一覧

use std::collections::HashSet;

use leptos::prelude::*;
use line_review_common::{LineItemSummary, OverlayStyle};

#[component]
pub fn ResultsList<FT>(
    summaries: ReadSignal<Option<Vec<LineItemSummary>>>,
    visible: ReadSignal<HashSet<usize>>,
    on_toggle: FT,
) -> impl IntoView
where
    FT: Fn(usize, bool) + 'static + Clone + Send + Sync,
{
    view! {
        {move || match summaries.get() {
            None => ().into_any(),
            Some(items) if items.is_empty() => view! {
                <div class="results empty">
                    <p class="text-muted">"No line items found in the document."</p>
                </div>
            }.into_any(),
            Some(items) => {
                let count = items.len();
                let on_toggle = on_toggle.clone();
                view! {
                    <div class="results">
                        <h2>{format!("Extracted Line Items ({})", count)}</h2>
                        <For
                            each=move || items.clone()
                            key=|item| item.index
                            children=move |item| {
                                view! {
                                    <LineItemCard
                                        item=item
                                        visible=visible
                                        on_toggle=on_toggle.clone()
                                    />
                                }
                            }
                        />
                    </div>
                }.into_any()
            }
        }}
    }
}

#[component]
fn LineItemCard<FT>(
    item: LineItemSummary,
    visible: ReadSignal<HashSet<usize>>,
    on_toggle: FT,
) -> impl IntoView
where
    FT: Fn(usize, bool) + 'static + Clone + Send + Sync,
{
    let title = item.title();
    let LineItemSummary { index, line_type, fields } = item;
    // オーバーレイと同じ色を凡例として出す
    let swatch = format!("background-color: {}", OverlayStyle::default().color_for(index));
    let is_visible = move || visible.get().contains(&index);

    view! {
        <div class="line-item-card" class:selected=is_visible>
            <div class="card-header">
                <span class="swatch" style=swatch></span>
                <h3>{title}</h3>
                <span class=format!("line-type-badge {}", line_type.as_str())>
                    {line_type.label()}
                </span>
                <label class="select-pill">
                    <input
                        type="checkbox"
                        prop:checked=is_visible
                        on:change=move |ev| on_toggle(index, event_target_checked(&ev))
                    />
                    "Show on PDF"
                </label>
            </div>
            <div class="tag-grid">
                {fields.into_iter().map(|field| {
                    let empty = field.value.is_none();
                    let value = field.display_value().to_string();
                    view! {
                        <div class="tag">
                            <span class="tag-label">{field.label}</span>
                            <span class="tag-value" class:not-available=empty>{value}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
