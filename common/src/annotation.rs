//! 明細行ごとの位置情報の収集
//!
//! 結果セットが届くたびに全体を作り直す。作成後は変更しない。

use serde_json::Value;

use crate::fields::FIELD_REGISTRY;
use crate::types::{field_text, BoundingBox, FieldAnnotation, FieldKind, ResultSet};

/// 1明細分の位置情報を収集する
///
/// 登録表の順に、オブジェクト形式のフィールドから `labelBbox` → `valueBbox` の順で拾う。
/// 配列長が4でない・数値でないものは黙って飛ばす（失敗しない）。
///
/// # Examples
/// ```
/// use line_review_common::extract_annotations;
///
/// let record = serde_json::json!({
///     "itemCode": { "value": "A-100", "labelBbox": [0, 0, 0, 0], "valueBbox": [100, 100, 200, 400] }
/// });
/// let annotations = extract_annotations(&record);
/// assert_eq!(annotations.len(), 2);
/// assert_eq!(annotations[1].display, "Item Code: A-100");
/// ```
pub fn extract_annotations(record: &Value) -> Vec<FieldAnnotation> {
    let mut annotations = Vec::new();

    for (key, label) in FIELD_REGISTRY {
        let Some(field) = record.get(*key).filter(|f| f.is_object()) else {
            continue;
        };

        if let Some(bbox) = field.get("labelBbox").and_then(BoundingBox::from_value) {
            annotations.push(FieldAnnotation {
                kind: FieldKind::Label,
                field_key: key.to_string(),
                display: format!("{} (Label)", label),
                bbox,
            });
        }

        if let Some(bbox) = field.get("valueBbox").and_then(BoundingBox::from_value) {
            let display = match field_text(field) {
                Some(value) => format!("{}: {}", label, value),
                None => label.to_string(),
            };
            annotations.push(FieldAnnotation {
                kind: FieldKind::Value,
                field_key: key.to_string(),
                display,
                bbox,
            });
        }
    }

    annotations
}

/// 明細インデックス → 位置情報リスト
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationStore {
    items: Vec<Vec<FieldAnnotation>>,
}

impl AnnotationStore {
    /// 結果セットから作成する
    pub fn build(result: &ResultSet) -> Self {
        Self {
            items: result.records.iter().map(extract_annotations).collect(),
        }
    }

    /// 指定明細の位置情報（範囲外は `None`）
    pub fn get(&self, index: usize) -> Option<&[FieldAnnotation]> {
        self.items.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[FieldAnnotation])> {
        self.items.iter().enumerate().map(|(i, a)| (i, a.as_slice()))
    }
}
