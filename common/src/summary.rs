//! 結果一覧（カード表示）用のデータ

use serde::Serialize;
use serde_json::Value;

use crate::fields::{FIELD_REGISTRY, LINE_TYPE_KEY};
use crate::types::{field_text, ResultSet};

/// 値が空のときの表示
pub const NOT_AVAILABLE: &str = "Not available";

/// 明細種別バッジ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineType {
    Item,
    SectionTotal,
    Unknown,
}

impl LineType {
    pub fn from_record(record: &Value) -> Self {
        match record.get(LINE_TYPE_KEY).and_then(field_text).as_deref() {
            Some("ITEM") => LineType::Item,
            Some("SECTION TOTAL") => LineType::SectionTotal,
            _ => LineType::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LineType::Item => "Item",
            LineType::SectionTotal => "Section Total",
            LineType::Unknown => "Unknown",
        }
    }

    /// CSSクラス
    pub fn as_str(&self) -> &'static str {
        match self {
            LineType::Item => "item",
            LineType::SectionTotal => "section-total",
            LineType::Unknown => "unknown",
        }
    }
}

/// 1項目（ラベル + 値）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldCell {
    pub key: &'static str,
    pub label: &'static str,
    /// 空欄なら `None`（"Not available" と表示）
    pub value: Option<String>,
}

impl FieldCell {
    pub fn display_value(&self) -> &str {
        self.value.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// 明細1行分のカード
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItemSummary {
    /// 0始まり（選択・色の決定に使う）
    pub index: usize,
    pub line_type: LineType,
    pub fields: Vec<FieldCell>,
}

impl LineItemSummary {
    pub fn from_record(index: usize, record: &Value) -> Self {
        let fields = FIELD_REGISTRY
            .iter()
            .filter_map(|&(key, label)| {
                let field = record.get(key)?;
                let value = field_text(field).filter(|v| !v.trim().is_empty());
                Some(FieldCell { key, label, value })
            })
            .collect();

        Self {
            index,
            line_type: LineType::from_record(record),
            fields,
        }
    }

    /// 1始まりの表示番号
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn title(&self) -> String {
        format!("Line Item #{}", self.number())
    }
}

pub fn summarize(result: &ResultSet) -> Vec<LineItemSummary> {
    result
        .records
        .iter()
        .enumerate()
        .map(|(i, record)| LineItemSummary::from_record(i, record))
        .collect()
}
