//! ビューアのセッション状態
//!
//! 位置情報ストア・選択・現在のビューポートをひとまとめに持つ。
//! 新しい結果セットの到着と閉じる操作で、ストアと選択を同時にリセットする。
//!
//! ページ描画は非同期で完了するため、開始時に `RenderTicket` を受け取り、
//! 完了時に世代を照合する。閉じた後や結果セットが差し替わった後に届いた描画結果は捨てる
//! （再描画は呼び出し側が改めて要求する）。同じ世代で描画が重なった場合は最後に
//! 開始したものだけを採用する。
//!
//! アップロードも非同期なので、送信時に `DocumentToken` を受け取り、
//! 結果の到着時に文書が差し替わっていないか確認する。

use crate::annotation::AnnotationStore;
use crate::overlay::{draw_overlay, OverlayStyle, RasterSurface};
use crate::selection::SelectionSet;
use crate::types::{DisplayState, ResultSet};
use crate::viewport::ViewportState;

/// 描画開始時点の世代
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTicket {
    generation: u64,
    sequence: u64,
}

/// アップロード開始時点の文書
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentToken {
    document: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ViewerSession {
    store: AnnotationStore,
    selection: SelectionSet,
    viewport: Option<ViewportState>,
    generation: u64,
    /// 最後に開始した描画の番号
    render_seq: u64,
    /// 文書の読み込み・閉じるたびに進む
    document: u64,
}

impl ViewerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しい結果セットを反映する（ストア再構築・選択クリア）
    pub fn apply_result(&mut self, result: &ResultSet) -> DisplayState {
        self.store = AnnotationStore::build(result);
        self.selection.clear();
        self.generation += 1;
        log::info!(
            "result set applied: {} line items (generation {})",
            self.store.len(),
            self.generation
        );
        DisplayState::for_len(self.store.len())
    }

    /// 結果を受け取る文書の目印（アップロード開始時に取る）
    pub fn document_token(&self) -> DocumentToken {
        DocumentToken {
            document: self.document,
        }
    }

    /// アップロード結果を反映する
    ///
    /// 送信後に文書が差し替わっていたら捨てて `None`。
    pub fn apply_result_for(
        &mut self,
        token: DocumentToken,
        result: &ResultSet,
    ) -> Option<DisplayState> {
        if token != self.document_token() {
            log::debug!(
                "dropping result for a replaced document (token {}, current {})",
                token.document,
                self.document
            );
            return None;
        }
        Some(self.apply_result(result))
    }

    /// 別の文書を読み込む。前の文書の位置情報・選択と描画中のページは破棄する
    pub fn load_document(&mut self) {
        self.store = AnnotationStore::default();
        self.selection.clear();
        self.viewport = None;
        self.generation += 1;
        self.document += 1;
        log::debug!("document loaded (generation {})", self.generation);
    }

    /// ビューアを閉じる。ストア・選択・ビューポートをすべて破棄する
    pub fn close(&mut self) {
        self.store = AnnotationStore::default();
        self.selection.clear();
        self.viewport = None;
        self.generation += 1;
        self.document += 1;
        log::info!("viewer closed (generation {})", self.generation);
    }

    /// 明細の表示を切り替える。状態が変わった場合 `true`
    pub fn toggle(&mut self, index: usize, visible: bool) -> bool {
        let changed = self.selection.toggle(index, visible);
        if changed {
            log::debug!("line item {} visible={}", index, visible);
        }
        changed
    }

    /// ページ描画を開始する。以前に開始した描画は古くなる
    pub fn begin_render(&mut self) -> RenderTicket {
        self.render_seq += 1;
        RenderTicket {
            generation: self.generation,
            sequence: self.render_seq,
        }
    }

    /// ページ描画の完了を反映する
    ///
    /// 開始後に世代が進んだか、より新しい描画が開始されていれば何もせず `false`。
    pub fn complete_render(&mut self, ticket: RenderTicket, viewport: ViewportState) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "dropping stale render (ticket {}/{}, current {}/{})",
                ticket.generation,
                ticket.sequence,
                self.generation,
                self.render_seq
            );
            return false;
        }
        self.viewport = Some(viewport);
        true
    }

    pub fn is_current(&self, ticket: RenderTicket) -> bool {
        ticket.generation == self.generation && ticket.sequence == self.render_seq
    }

    /// 現在のビューポートでオーバーレイを描く（未描画なら何もしない）
    pub fn redraw<S: RasterSurface + ?Sized>(&self, surface: &mut S, style: &OverlayStyle) -> usize {
        match &self.viewport {
            Some(viewport) => draw_overlay(surface, viewport, &self.store, &self.selection, style),
            None => 0,
        }
    }

    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn viewport(&self) -> Option<&ViewportState> {
        self.viewport.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
