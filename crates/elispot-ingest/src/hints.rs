use std::collections::{BTreeMap, BTreeSet};

use elispot_model::{ColumnHint, Frame};

/// Compute per-column statistics over a frame.
///
/// A column is numeric when it has at least one non-missing value and every
/// non-missing value parses as f64. Ratios are relative to the frame height
/// (null ratio) and the non-missing count (unique ratio).
pub fn build_column_hints(frame: &Frame) -> BTreeMap<String, ColumnHint> {
    let mut hints = BTreeMap::new();
    let row_count = frame.height();
    for (col_idx, header) in frame.headers.iter().enumerate() {
        let mut non_missing = 0usize;
        let mut numeric = 0usize;
        let mut uniques = BTreeSet::new();
        for row in &frame.rows {
            let value = row[col_idx].trim();
            if value.is_empty() {
                continue;
            }
            non_missing += 1;
            uniques.insert(value.to_string());
            if value.parse::<f64>().is_ok() {
                numeric += 1;
            }
        }
        let null_ratio = if row_count == 0 {
            1.0
        } else {
            (row_count - non_missing) as f64 / row_count as f64
        };
        let unique_ratio = if non_missing == 0 {
            0.0
        } else {
            uniques.len() as f64 / non_missing as f64
        };
        hints.insert(
            header.clone(),
            ColumnHint {
                is_numeric: non_missing > 0 && numeric == non_missing,
                unique_ratio,
                null_ratio,
            },
        );
    }
    hints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_requires_all_non_missing_to_parse() {
        let frame = Frame::from_rows(
            ["NUM", "MIXED", "TEXT", "SPARSE"],
            [["1", "1", "a", ""], ["2.5", "b", "c", "3"]],
        );
        let hints = build_column_hints(&frame);
        assert!(hints["NUM"].is_numeric);
        assert!(!hints["MIXED"].is_numeric);
        assert!(!hints["TEXT"].is_numeric);
        // Missing cells do not break numericity.
        assert!(hints["SPARSE"].is_numeric);
        assert!((hints["SPARSE"].null_ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_column_is_not_numeric() {
        let frame = Frame::from_rows(["E"], [[""], [""]]);
        let hints = build_column_hints(&frame);
        assert!(!hints["E"].is_numeric);
        assert!((hints["E"].null_ratio - 1.0).abs() < f64::EPSILON);
    }
}
