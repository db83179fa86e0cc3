use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use elispot_ingest::AssayTable;
use elispot_model::{Frame, PipelineError, Result, columns};

fn key_of(row: &[String], key_indices: &[usize]) -> Vec<String> {
    key_indices.iter().map(|&idx| row[idx].clone()).collect()
}

fn check_unique_keys(frame: &Frame, key_indices: &[usize], side: &str) -> Result<()> {
    let mut seen = BTreeSet::new();
    for row in &frame.rows {
        let key = key_of(row, key_indices);
        if !seen.insert(key.clone()) {
            return Err(PipelineError::schema(format!(
                "duplicate join key {key:?} in {side} table"
            )));
        }
    }
    Ok(())
}

/// Structural left join of `left` against `right` on the given key columns.
///
/// Keys must be unique on both sides. Overlapping non-key column names are
/// disambiguated with the `_caller` (left) and `_other` (right) suffixes.
/// Unmatched left rows keep missing values for the right-hand columns.
pub fn join_frames(left: &Frame, right: &Frame, keys: &[&str]) -> Result<Frame> {
    let left_keys: Vec<usize> = keys
        .iter()
        .map(|key| left.require_column(key))
        .collect::<Result<_>>()?;
    let right_keys: Vec<usize> = keys
        .iter()
        .map(|key| right.require_column(key))
        .collect::<Result<_>>()?;
    check_unique_keys(left, &left_keys, "left")?;
    check_unique_keys(right, &right_keys, "right")?;

    let right_value_indices: Vec<usize> = (0..right.headers.len())
        .filter(|idx| !right_keys.contains(idx))
        .collect();

    let left_names: BTreeSet<&str> = left.headers.iter().map(String::as_str).collect();
    let right_value_names: BTreeSet<&str> = right_value_indices
        .iter()
        .map(|&idx| right.headers[idx].as_str())
        .collect();

    let mut headers: Vec<String> = Vec::with_capacity(left.width() + right_value_indices.len());
    for (idx, header) in left.headers.iter().enumerate() {
        if !left_keys.contains(&idx) && right_value_names.contains(header.as_str()) {
            headers.push(format!("{header}{}", columns::JOIN_SUFFIX_LEFT));
        } else {
            headers.push(header.clone());
        }
    }
    for &idx in &right_value_indices {
        let header = &right.headers[idx];
        if left_names.contains(header.as_str()) {
            headers.push(format!("{header}{}", columns::JOIN_SUFFIX_RIGHT));
        } else {
            headers.push(header.clone());
        }
    }

    let mut right_by_key: BTreeMap<Vec<String>, &Vec<String>> = BTreeMap::new();
    for row in &right.rows {
        right_by_key.insert(key_of(row, &right_keys), row);
    }

    let mut rows = Vec::with_capacity(left.height());
    let mut matched = 0usize;
    for row in &left.rows {
        let mut cells = row.clone();
        match right_by_key.get(&key_of(row, &left_keys)) {
            Some(right_row) => {
                matched += 1;
                cells.extend(right_value_indices.iter().map(|&idx| right_row[idx].clone()));
            }
            None => cells.extend(right_value_indices.iter().map(|_| String::new())),
        }
        rows.push(cells);
    }
    debug!(
        left_rows = left.height(),
        right_rows = right.height(),
        matched,
        "left join complete"
    );
    Ok(Frame { headers, rows })
}

/// Join the assay subset (driving side) with the filtered manifest on
/// (PATNUM, VISIT), then drop the columns the join makes redundant: the
/// discovered cell-type column plus the manifest administrative fields and
/// the intermediate collection timestamp.
pub fn join_assay(assay: &AssayTable, manifest: &Frame) -> Result<Frame> {
    let joined = join_frames(&assay.frame, manifest, &columns::JOIN_KEYS)?;
    let mut drops: Vec<&str> = vec![assay.cell_type_column.as_str()];
    drops.extend(columns::JOIN_DROP_COLUMNS);
    joined.without_columns(&drops)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_join_keeps_unmatched_left_rows() {
        let left = Frame::from_rows(
            ["PATNUM", "VISIT", "counts"],
            [["P1", "V1", "300"], ["P9", "V1", "40"]],
        );
        let right = Frame::from_rows(["PATNUM", "VISIT", "MNF06"], [["P1", "V1", "95"]]);
        let joined = join_frames(&left, &right, &["PATNUM", "VISIT"]).unwrap();
        assert_eq!(joined.headers, vec!["PATNUM", "VISIT", "counts", "MNF06"]);
        assert_eq!(joined.value(0, "MNF06"), Some("95"));
        assert_eq!(joined.value(1, "MNF06"), Some(""));
    }

    #[test]
    fn overlapping_columns_get_suffixes() {
        let left = Frame::from_rows(["PATNUM", "Date"], [["P1", "2020-01-05"]]);
        let right = Frame::from_rows(["PATNUM", "Date"], [["P1", "2020-01-01"]]);
        let joined = join_frames(&left, &right, &["PATNUM"]).unwrap();
        assert_eq!(joined.headers, vec!["PATNUM", "Date_caller", "Date_other"]);
        assert_eq!(joined.value(0, "Date_caller"), Some("2020-01-05"));
        assert_eq!(joined.value(0, "Date_other"), Some("2020-01-01"));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let left = Frame::from_rows(
            ["PATNUM", "VISIT", "counts"],
            [["P1", "V1", "300"], ["P1", "V1", "400"]],
        );
        let right = Frame::from_rows(["PATNUM", "VISIT", "MNF06"], [["P1", "V1", "95"]]);
        let error = join_frames(&left, &right, &["PATNUM", "VISIT"]).unwrap_err();
        assert!(error.to_string().contains("duplicate join key"));
    }
}
