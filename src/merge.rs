//! Render-time merge signatures.
//!
//! The document renderer collapses a repeated cell across consecutive rows
//! (for example the same remark on rows 3-5). The signature computed here
//! lets it detect when regrouping is needed: equal signatures for two item
//! arrays guarantee identical merge grouping.

use crate::types::LineItem;

/// Joins per-row values in a signature. An ASCII unit separator cannot
/// survive cell trimming, so it never appears in user text.
pub const SIGNATURE_SEPARATOR: char = '\u{1f}';

/// Column a renderer may collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeColumn {
    PartName,
    Remarks,
}

fn column_value(item: &LineItem, column: MergeColumn) -> &str {
    match column {
        MergeColumn::PartName => &item.part_name,
        MergeColumn::Remarks => item.remarks.as_deref().unwrap_or(""),
    }
}

/// Ordered concatenation of the target column's values.
///
/// Pure function of the value sequence: sensitive to row order, blind to
/// everything outside the target column.
pub fn merge_key(items: &[LineItem], column: MergeColumn) -> String {
    let values: Vec<&str> = items.iter().map(|i| column_value(i, column)).collect();
    values.join(&SIGNATURE_SEPARATOR.to_string())
}

/// A maximal run of consecutive rows sharing one value in the target
/// column. Render-time only, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeGroup {
    pub start: usize,
    pub len: usize,
    pub value: String,
}

/// Group consecutive identical values into maximal runs.
pub fn merge_groups(items: &[LineItem], column: MergeColumn) -> Vec<MergeGroup> {
    let mut groups: Vec<MergeGroup> = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let value = column_value(item, column);
        match groups.last_mut() {
            Some(last) if last.value == value => last.len += 1,
            _ => groups.push(MergeGroup {
                start: i,
                len: 1,
                value: value.to_string(),
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::round2;

    fn item(name: &str, remarks: Option<&str>) -> LineItem {
        LineItem {
            part_name: name.to_string(),
            quantity: 1.0,
            unit: "pc".to_string(),
            unit_price: 2.0,
            amount: round2(2.0),
            remarks: remarks.map(str::to_string),
        }
    }

    #[test]
    fn test_signature_joins_in_order() {
        let items = vec![item("A", Some("x")), item("B", Some("y"))];
        assert_eq!(merge_key(&items, MergeColumn::Remarks), "x\u{1f}y");
        assert_eq!(merge_key(&items, MergeColumn::PartName), "A\u{1f}B");
    }

    #[test]
    fn test_absent_remarks_is_empty_string() {
        let items = vec![item("A", None), item("B", Some("y"))];
        assert_eq!(merge_key(&items, MergeColumn::Remarks), "\u{1f}y");
    }

    #[test]
    fn test_differs_when_one_remark_differs() {
        let a = vec![item("A", Some("x")), item("B", Some("x")), item("C", Some("x"))];
        let mut b = a.clone();
        b[2].remarks = Some("z".to_string());
        assert_ne!(
            merge_key(&a, MergeColumn::Remarks),
            merge_key(&b, MergeColumn::Remarks)
        );
    }

    #[test]
    fn test_order_sensitive() {
        let a = vec![item("A", Some("x")), item("B", Some("y"))];
        let b = vec![item("B", Some("y")), item("A", Some("x"))];
        assert_ne!(
            merge_key(&a, MergeColumn::Remarks),
            merge_key(&b, MergeColumn::Remarks)
        );
    }

    #[test]
    fn test_empty_items() {
        assert_eq!(merge_key(&[], MergeColumn::Remarks), "");
        assert!(merge_groups(&[], MergeColumn::Remarks).is_empty());
    }

    #[test]
    fn test_groups_maximal_runs() {
        let items = vec![
            item("A", Some("x")),
            item("B", Some("x")),
            item("C", Some("y")),
            item("D", Some("x")),
        ];
        let groups = merge_groups(&items, MergeColumn::Remarks);
        assert_eq!(
            groups,
            vec![
                MergeGroup { start: 0, len: 2, value: "x".to_string() },
                MergeGroup { start: 2, len: 1, value: "y".to_string() },
                MergeGroup { start: 3, len: 1, value: "x".to_string() },
            ]
        );
    }

    #[test]
    fn test_group_lengths_cover_all_rows() {
        let items = vec![item("A", None), item("B", None), item("C", Some("x"))];
        let groups = merge_groups(&items, MergeColumn::Remarks);
        assert_eq!(groups.iter().map(|g| g.len).sum::<usize>(), items.len());
    }
}
