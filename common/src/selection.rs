//! 表示対象の明細インデックス集合

use std::collections::HashSet;

/// オーバーレイ表示中の明細
///
/// インデックスは位置情報ストアと照合しない。存在しない明細は描画時に無視される。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indices: HashSet<usize>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// `visible` なら追加、そうでなければ削除
    ///
    /// 状態が変わった場合 `true`。同じ状態への切り替えは何もしない。
    pub fn toggle(&mut self, index: usize, visible: bool) -> bool {
        if visible {
            self.indices.insert(index)
        } else {
            self.indices.remove(&index)
        }
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// 昇順で返す
    pub fn sorted(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.indices.iter().copied().collect();
        indices.sort_unstable();
        indices
    }
}

impl FromIterator<usize> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_on_is_idempotent() {
        let mut once = SelectionSet::new();
        once.toggle(3, true);

        let mut twice = SelectionSet::new();
        assert!(twice.toggle(3, true));
        assert!(!twice.toggle(3, true));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_toggle_on_then_off_restores() {
        let original: SelectionSet = [1, 7].into_iter().collect();
        let mut selection = original.clone();

        selection.toggle(4, true);
        selection.toggle(4, false);

        assert_eq!(selection, original);
        assert!(!selection.contains(4));
    }

    #[test]
    fn test_toggle_off_absent_is_noop() {
        let mut selection = SelectionSet::new();
        assert!(!selection.toggle(9, false));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut selection: SelectionSet = [0, 1, 2].into_iter().collect();
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_sorted() {
        let selection: SelectionSet = [5, 0, 12, 3].into_iter().collect();
        assert_eq!(selection.sorted(), vec![0, 3, 5, 12]);
        assert_eq!(selection.len(), 4);
    }
}
