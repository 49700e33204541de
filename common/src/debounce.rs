//! 連続イベントの間引き
//!
//! 保留中の呼び出しは常に1つ。再トリガーで取り消して待機をやり直す。
//! 時刻は呼び出し側が渡す（ブラウザでは `Date.now()`、ネイティブでは `Instant` 起点の経過時間）。

use std::time::Duration;

/// リサイズ後の再描画までの静止時間
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Duration>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self { quiet, deadline: None }
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// イベント発生。保留中の呼び出しを取り消して `now + quiet` に予約し直す
    pub fn trigger(&mut self, now: Duration) {
        self.deadline = Some(now + self.quiet);
    }

    /// 静止時間が経過していれば `true` を一度だけ返す
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// 発火までの残り時間（保留なしなら `None`）
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_sub(now))
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(RESIZE_DEBOUNCE)
    }
}
