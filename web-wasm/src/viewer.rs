//! プレビュー表示の制御
//!
//! ページ描画（pdf.js、非同期）とオーバーレイ描画（共通ライブラリ）をつなぐ。
//! 状態は `ViewerSession` に集約し、ここでは描画の順序と破棄だけを扱う。

use std::time::Duration;

use gloo::timers::callback::Timeout;
use leptos::html::{Canvas, Div};
use leptos::prelude::*;
use leptos::task::spawn_local;
use line_review_common::{
    Debouncer, DocumentToken, OverlayStyle, RenderTicket, Result, ResultSet, ScalePolicy,
    ViewerSession, ViewportState,
};

use crate::canvas::CanvasSurface;
use crate::pdf_bridge::PdfDocument;

/// プレビューするページ
const PREVIEW_PAGE: u32 = 1;

fn now() -> Duration {
    Duration::from_secs_f64(js_sys::Date::now() / 1000.0)
}

#[derive(Clone, Copy)]
pub struct Viewer {
    session: StoredValue<ViewerSession>,
    pdf: StoredValue<Option<PdfDocument>, LocalStorage>,
    /// 文書の読み込み・閉じるたびに進む（読み込み中に閉じた場合の破棄用）
    load_seq: StoredValue<u64>,
    debouncer: StoredValue<Debouncer>,
    resize_timer: StoredValue<Option<Timeout>, LocalStorage>,
    pub wrapper: NodeRef<Div>,
    pub page_canvas: NodeRef<Canvas>,
    pub overlay_canvas: NodeRef<Canvas>,
    set_open: WriteSignal<bool>,
    set_error: WriteSignal<Option<String>>,
}

impl Viewer {
    pub fn new(set_open: WriteSignal<bool>, set_error: WriteSignal<Option<String>>) -> Self {
        Self {
            session: StoredValue::new(ViewerSession::new()),
            pdf: StoredValue::new_local(None),
            load_seq: StoredValue::new(0),
            debouncer: StoredValue::new(Debouncer::default()),
            resize_timer: StoredValue::new_local(None),
            wrapper: NodeRef::new(),
            page_canvas: NodeRef::new(),
            overlay_canvas: NodeRef::new(),
            set_open,
            set_error,
        }
    }

    fn has_document(&self) -> bool {
        self.pdf.with_value(Option::is_some)
    }

    /// 選択した文書をpdf.jsで読み込み、表示する
    pub fn open(self, bytes: Vec<u8>) {
        self.session.update_value(|s| s.load_document());
        let mut seq = 0;
        self.load_seq.update_value(|n| {
            *n += 1;
            seq = *n;
        });

        spawn_local(async move {
            match PdfDocument::load(&bytes).await {
                Ok(doc) => {
                    if self.load_seq.get_value() != seq {
                        log::debug!("discarding superseded document load");
                        doc.destroy();
                        return;
                    }
                    self.pdf.update_value(|current| {
                        if let Some(old) = current.replace(doc) {
                            old.destroy();
                        }
                    });
                    self.set_open.set(true);
                    // 表示後の幅で描画する
                    request_animation_frame(move || self.render());
                }
                Err(err) => {
                    log::warn!("failed to load PDF: {}", err);
                    self.set_error.set(Some(err.user_message()));
                }
            }
        });
    }

    /// アップロード開始時の文書
    pub fn document_token(self) -> DocumentToken {
        self.session.with_value(|s| s.document_token())
    }

    /// 新しい結果セットを反映する
    ///
    /// 送信後に文書が差し替わっていれば何もせず `false`。
    pub fn apply_result(self, token: DocumentToken, result: &ResultSet) -> bool {
        let mut applied = false;
        self.session
            .update_value(|s| applied = s.apply_result_for(token, result).is_some());
        if !applied {
            return false;
        }
        if self.has_document() {
            self.render();
        } else {
            self.clear_overlay();
        }
        true
    }

    /// 明細の表示切替。ページは描き直さずオーバーレイだけ更新する
    pub fn toggle(self, index: usize, visible: bool) {
        let mut changed = false;
        self.session.update_value(|s| changed = s.toggle(index, visible));
        if changed {
            self.redraw();
        }
    }

    /// ビューアを閉じ、文書・位置情報・選択を破棄する
    pub fn close(self) {
        self.session.update_value(|s| s.close());
        self.load_seq.update_value(|n| *n += 1);
        self.debouncer.update_value(|d| d.cancel());
        self.resize_timer.set_value(None);
        self.pdf.update_value(|current| {
            if let Some(doc) = current.take() {
                doc.destroy();
            }
        });

        for canvas in [self.page_canvas, self.overlay_canvas] {
            if let Some(surface) = canvas.get_untracked().as_ref().and_then(CanvasSurface::new) {
                surface.clear();
            }
        }
        self.set_open.set(false);
    }

    /// ページを描画し、完了後にオーバーレイを描く
    ///
    /// 描画が重なった場合は最後に開始したものだけがオーバーレイを描く。
    pub fn render(self) {
        let mut ticket = None;
        self.session.update_value(|s| ticket = Some(s.begin_render()));
        let Some(ticket) = ticket else {
            return;
        };
        spawn_local(async move {
            if let Err(err) = self.render_page(ticket).await {
                // 一覧表示には影響させない
                log::warn!("preview render failed: {}", err);
                self.set_error.set(Some(err.user_message()));
            }
        });
    }

    async fn render_page(self, ticket: RenderTicket) -> Result<()> {
        let Some(doc) = self.pdf.with_value(Clone::clone) else {
            return Ok(());
        };
        let Some(canvas) = self.page_canvas.get_untracked() else {
            return Ok(());
        };

        let (page_width, page_height) = doc.page_size(PREVIEW_PAGE).await?;
        let viewport = ViewportState::from_page(page_width, page_height, self.scale_policy());

        if !self.session.with_value(|s| s.is_current(ticket)) {
            log::debug!("skipping render for a closed or replaced session");
            return Ok(());
        }
        if !doc.render_page(PREVIEW_PAGE, &canvas, viewport.scale).await? {
            log::debug!("page render superseded by a newer one");
            return Ok(());
        }

        let mut accepted = false;
        self.session
            .update_value(|s| accepted = s.complete_render(ticket, viewport));
        if accepted {
            self.redraw();
        }
        Ok(())
    }

    /// 表示枠の幅に収める（枠が未表示なら原寸）
    fn scale_policy(&self) -> ScalePolicy {
        match self.wrapper.get_untracked() {
            Some(wrapper) if wrapper.client_width() > 0 => {
                ScalePolicy::FitWidth(wrapper.client_width() as f64)
            }
            _ => ScalePolicy::Native,
        }
    }

    /// 現在のビューポートでオーバーレイを描き直す
    pub fn redraw(self) {
        let Some(canvas) = self.overlay_canvas.get_untracked() else {
            return;
        };
        let Some(viewport) = self.session.with_value(|s| s.viewport().copied()) else {
            return;
        };
        let Some(mut surface) = CanvasSurface::new(&canvas) else {
            return;
        };

        surface.resize(viewport.width, viewport.height);
        surface.clear();
        let style = OverlayStyle::default();
        let drawn = self.session.with_value(|s| s.redraw(&mut surface, &style));
        log::debug!("overlay redrawn: {} rects", drawn);
    }

    fn clear_overlay(self) {
        if let Some(surface) = self
            .overlay_canvas
            .get_untracked()
            .as_ref()
            .and_then(CanvasSurface::new)
        {
            surface.clear();
        }
    }

    /// ウィンドウのリサイズ。静止時間が過ぎてから一度だけ再描画する
    pub fn schedule_resize(self) {
        self.debouncer.update_value(|d| d.trigger(now()));
        let delay = self.debouncer.with_value(|d| d.quiet());
        self.arm_resize_timer(delay);
    }

    fn arm_resize_timer(self, delay: Duration) {
        // 前のタイマーは drop で取り消される
        let timeout = Timeout::new(delay.as_millis() as u32, move || {
            let at = now();
            let mut fire = false;
            let mut remaining = None;
            self.debouncer.update_value(|d| {
                fire = d.poll(at);
                remaining = d.remaining(at);
            });

            if fire {
                if self.has_document() {
                    self.render();
                }
            } else if let Some(rest) = remaining {
                self.arm_resize_timer(rest.max(Duration::from_millis(1)));
            }
        });
        self.resize_timer.set_value(Some(timeout));
    }
}
