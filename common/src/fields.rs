//! 認識対象フィールドの登録表
//!
//! 並び順は一覧表示と位置情報の収集順を兼ねる。

/// (フィールドキー, 表示ラベル)
pub const FIELD_REGISTRY: &[(&str, &str)] = &[
    ("claimId", "Claim ID"),
    ("lineId", "Line ID"),
    ("serviceDateTime", "Service Date/Time"),
    ("itemCode", "Item Code"),
    ("dataSource", "Data Source"),
    ("lineTypeSectionTotalItem", "Line Type"),
    ("sectionHeaderLineSectionType", "Section Header/Type"),
    ("billsParticularsCostCenters", "Item Description"),
    ("qty", "Quantity"),
    ("price", "Price"),
    ("discount", "Discount"),
    ("discountPercent", "Discount Percent"),
    ("paidByPatientHospitalBill", "Paid by Patient/Hospital Bill"),
    ("philhealthHospBillPortionAmount", "PhilHealth Hospital Bill Portion"),
    ("billsParticularsCostCenterAmount", "Bill Particulars Amount"),
];

/// 明細種別を持つフィールド
pub const LINE_TYPE_KEY: &str = "lineTypeSectionTotalItem";

/// キーから表示ラベルを引く
pub fn label_for(key: &str) -> Option<&'static str> {
    FIELD_REGISTRY
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
}
