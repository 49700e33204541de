//! 抽出結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - BoundingBox: 0〜1000に正規化された矩形
//! - FieldAnnotation: フィールドのラベル/値の位置
//! - ResultSet: アップロード先が返す明細行の集合

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 正規化座標系の一辺（ページの実寸に関係なく0〜1000）
pub const NORMALIZED_EXTENT: f64 = 1000.0;

/// 結果JSON内の明細配列のキー
pub const LINE_DETAILS_KEY: &str = "line_details1";

/// 正規化バウンディングボックス `[y_min, x_min, y_max, x_max]`
///
/// 4成分すべてが0の場合は「位置なし」を表す番兵で、描画してはならない。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub y_min: f64,
    pub x_min: f64,
    pub y_max: f64,
    pub x_max: f64,
}

impl BoundingBox {
    pub const fn new(y_min: f64, x_min: f64, y_max: f64, x_max: f64) -> Self {
        Self { y_min, x_min, y_max, x_max }
    }

    /// JSON配列から読み込む
    ///
    /// 要素数がちょうど4で、すべて数値の場合のみ `Some`。
    pub fn from_value(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        if items.len() != 4 {
            return None;
        }
        let mut coords = [0.0; 4];
        for (slot, item) in coords.iter_mut().zip(items) {
            *slot = item.as_f64()?;
        }
        Some(coords.into())
    }

    /// 番兵（全成分0）かどうか
    pub fn is_sentinel(&self) -> bool {
        self.y_min == 0.0 && self.x_min == 0.0 && self.y_max == 0.0 && self.x_max == 0.0
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([y_min, x_min, y_max, x_max]: [f64; 4]) -> Self {
        Self::new(y_min, x_min, y_max, x_max)
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(bbox: BoundingBox) -> Self {
        [bbox.y_min, bbox.x_min, bbox.y_max, bbox.x_max]
    }
}

/// 位置の種類（ラベル or 値）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Label,
    Value,
}

/// 明細行の1フィールドに紐づく位置情報
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldAnnotation {
    pub kind: FieldKind,
    pub field_key: String,
    /// 凡例・一覧用の表示文字列（オーバーレイ上には描かない）
    pub display: String,
    pub bbox: BoundingBox,
}

/// 抽出結果（明細行の集合）
///
/// 各明細はフィールドキー → 値のJSONオブジェクト。値はスカラーか
/// `{value, labelBbox, valueBbox}` 形式のオブジェクト。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub records: Vec<Value>,
}

impl ResultSet {
    /// アップロード結果のJSONから明細配列を取り出す
    ///
    /// `line_details1` が無い・配列でない場合は空（明細なし）として扱う。
    pub fn from_json(data: &Value) -> Self {
        let records = data
            .get(LINE_DETAILS_KEY)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 元の形式（`{"line_details1": [...]}`）に戻す
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert(LINE_DETAILS_KEY.to_string(), Value::Array(self.records.clone()));
        Value::Object(map)
    }
}

/// 結果一覧の表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// 明細あり（件数）
    Records(usize),
    /// 明細なし（エラーではない）
    NoRecords,
}

impl DisplayState {
    pub fn for_len(len: usize) -> Self {
        if len == 0 {
            DisplayState::NoRecords
        } else {
            DisplayState::Records(len)
        }
    }
}

/// フィールド値を文字列として取り出す
///
/// オブジェクト形式なら `value` メンバ、スカラーならそのもの。
/// null・false・空文字・数値の0は `None`（値なしとして扱う）。
pub fn field_text(field: &Value) -> Option<String> {
    let inner = match field {
        Value::Object(map) => map.get("value")?,
        other => other,
    };
    let text = match inner {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.as_f64() == Some(0.0) => return None,
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "true".to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
