use std::collections::BTreeSet;

use tracing::{debug, warn};

use elispot_ingest::build_column_hints;
use elispot_model::{Frame, Result, columns};

use crate::join::join_frames;

/// Keep the manifest rows whose biological matrix is PBMC.
pub fn filter_matrix(manifest: &Frame) -> Result<Frame> {
    let matrix_idx = manifest.require_column(columns::MNFBIOM)?;
    let filtered = manifest.filter_rows(|row| row[matrix_idx] == columns::MATRIX_PBMC);
    debug!(
        kept = filtered.height(),
        dropped = manifest.height() - filtered.height(),
        matrix = columns::MATRIX_PBMC,
        "biological matrix filter applied"
    );
    Ok(filtered)
}

/// Informational pre-join coverage report.
///
/// Logs how many assay patient IDs are present in the filtered manifest and
/// the per-column null rate of a trial left join. Never fails the run; a
/// trial join that cannot be performed is itself reported and skipped.
pub fn report_join_coverage(manifest: &Frame, assay: &Frame) {
    let manifest_patients: BTreeSet<&str> = manifest
        .column_values(columns::PATNUM)
        .unwrap_or_default()
        .into_iter()
        .collect();
    let assay_patients: Vec<&str> = assay
        .column_values(columns::PATNUM)
        .unwrap_or_default();
    let covered = assay_patients
        .iter()
        .filter(|patient| manifest_patients.contains(**patient))
        .count();
    debug!(
        assay_patient_ids = assay_patients.len(),
        covered_by_manifest = covered,
        "assay-to-manifest patient coverage"
    );

    match join_frames(assay, manifest, &columns::JOIN_KEYS) {
        Ok(trial) => {
            for (column, hint) in build_column_hints(&trial) {
                if hint.null_ratio > 0.0 {
                    debug!(
                        column = %column,
                        null_percent = format!("{:.1}", hint.null_ratio * 100.0),
                        "null rate after trial join"
                    );
                }
            }
        }
        Err(error) => warn!(%error, "trial join skipped"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_pbmc_rows() {
        let manifest = Frame::from_rows(
            ["PATNUM", "MNFBIOM"],
            [["P1", "PBMC"], ["P2", "Serum"], ["P3", "PBMC"]],
        );
        let filtered = filter_matrix(&manifest).unwrap();
        assert_eq!(filtered.height(), 2);
        assert!(
            filtered
                .column_values("MNFBIOM")
                .unwrap()
                .iter()
                .all(|value| *value == "PBMC")
        );
    }

    #[test]
    fn missing_matrix_column_is_schema_error() {
        let manifest = Frame::from_rows(["PATNUM"], [["P1"]]);
        assert!(filter_matrix(&manifest).is_err());
    }
}
