use tracing::debug;

use elispot_model::{Frame, PipelineError, Result, columns};

/// Open lower edge of the defined count domain.
const LOWER_EDGE: f64 = -1.0;
/// Counts at or below this bin as 1 (low/negative response band).
const SPLIT: f64 = 500.0;
/// Assay upper limit of detection; counts above it are out of domain.
const UPPER_EDGE: f64 = 1300.0;

fn bin_one(value: f64) -> Option<u8> {
    if value <= LOWER_EDGE || value > UPPER_EDGE {
        None
    } else if value <= SPLIT {
        Some(1)
    } else {
        Some(0)
    }
}

/// Bucket the spot counts into the binary `binned` label.
///
/// Counts in (−1, 500] label 1, (500, 1300] label 0. A missing,
/// unparseable, or out-of-domain count aborts the run; there is no null
/// label. The resulting label column is re-checked before returning.
pub fn bin_counts(frame: &Frame) -> Result<Frame> {
    let counts_idx = frame.require_column(columns::COUNTS)?;

    let mut labels = Vec::with_capacity(frame.height());
    for (row_idx, row) in frame.rows.iter().enumerate() {
        let raw = row[counts_idx].trim();
        let row_number = row_idx + 1;
        if raw.is_empty() {
            return Err(PipelineError::validation(format!(
                "missing spot count at row {row_number}"
            )));
        }
        let value: f64 = raw.parse().map_err(|_| {
            PipelineError::validation(format!(
                "spot count {raw:?} at row {row_number} is not numeric"
            ))
        })?;
        let label = bin_one(value).ok_or_else(|| {
            PipelineError::validation(format!(
                "spot count {value} at row {row_number} is outside the defined range \
                 ({LOWER_EDGE}, {UPPER_EDGE}]"
            ))
        })?;
        labels.push(label.to_string());
    }

    // Post-condition: every label is 0 or 1, none missing.
    for (row_idx, label) in labels.iter().enumerate() {
        if label != "0" && label != "1" {
            return Err(PipelineError::validation(format!(
                "label {label:?} at row {} is not binary",
                row_idx + 1
            )));
        }
    }

    let low = labels.iter().filter(|label| *label == "1").count();
    debug!(
        low_band = low,
        high_band = labels.len() - low,
        "binned class balance"
    );
    frame.clone().with_column(columns::BINNED, labels)
}
