use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;

use elispot_model::{Frame, PipelineError, Result, columns};

/// Marker values used to locate and filter the assay subset.
#[derive(Debug, Clone)]
pub struct AssayOptions {
    /// Stimulus marker; the column holding it is discovered by value scan.
    pub stimulus: String,
    /// Cell type kept from the assay file.
    pub cell_type: String,
}

impl Default for AssayOptions {
    fn default() -> Self {
        Self {
            stimulus: columns::DEFAULT_STIMULUS.to_string(),
            cell_type: columns::DEFAULT_CELL_TYPE.to_string(),
        }
    }
}

/// Assay subset plus the discovered column names the join stage needs.
#[derive(Debug, Clone)]
pub struct AssayTable {
    pub frame: Frame,
    pub stimulus_column: String,
    pub cell_type_column: String,
}

/// Find the single column whose value set contains the stimulus marker.
///
/// Zero or more than one qualifying column means the file does not match
/// the expected assay layout and is rejected.
pub fn find_stimulus_column(frame: &Frame, marker: &str) -> Result<String> {
    let matches: Vec<&String> = frame
        .headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| frame.rows.iter().any(|row| row[*idx] == marker))
        .map(|(_, header)| header)
        .collect();
    match matches.as_slice() {
        [single] => Ok((*single).clone()),
        [] => Err(PipelineError::schema(format!(
            "no column contains the stimulus marker {marker:?}"
        ))),
        many => Err(PipelineError::schema(format!(
            "stimulus marker {marker:?} appears in {} columns: {}",
            many.len(),
            many.iter()
                .map(|name| name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}

/// Find the single header containing both a "cell" and a "type" token,
/// case-insensitively (e.g. `Type.of.Cells`).
pub fn find_cell_type_column(frame: &Frame) -> Result<String> {
    let matches: Vec<&String> = frame
        .headers
        .iter()
        .filter(|header| {
            let lower = header.to_lowercase();
            lower.contains("cell") && lower.contains("type")
        })
        .collect();
    match matches.as_slice() {
        [single] => Ok((*single).clone()),
        [] => Err(PipelineError::schema(
            "no header identifies the cell-type column (expected a name containing \"cell\" and \"type\")",
        )),
        many => Err(PipelineError::schema(format!(
            "{} headers qualify as the cell-type column: {}",
            many.len(),
            many.iter()
                .map(|name| name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}

/// Load the IGS1 assay file and reduce it to the relevant subset.
///
/// Steps: rename the fixed source headers (`Patient.ID`, `Visit`,
/// `Mean.Spot.Count`), discover the stimulus and cell-type columns, keep
/// rows matching both markers, then project to the assay keeper columns.
pub fn read_assay(path: &Path, options: &AssayOptions) -> Result<AssayTable> {
    let mut frame = crate::csv_table::read_frame(path)?;

    for (from, to) in columns::ASSAY_RENAMES {
        if frame.has_column(from) {
            frame.rename_column(from, to)?;
        }
    }

    let stimulus_column = find_stimulus_column(&frame, &options.stimulus)?;
    let cell_type_column = find_cell_type_column(&frame)?;

    let stimulus_idx = frame.require_column(&stimulus_column)?;
    let cell_type_idx = frame.require_column(&cell_type_column)?;
    let filtered = frame.filter_rows(|row| {
        row[stimulus_idx] == options.stimulus && row[cell_type_idx] == options.cell_type
    });

    let keepers = [
        columns::PATNUM,
        columns::VISIT,
        columns::SAMPLE_ID,
        columns::SAMPLE_DATE,
        cell_type_column.as_str(),
        stimulus_column.as_str(),
        columns::COUNTS,
    ];
    let frame = filtered.select(&keepers)?;

    let unique_patients: BTreeSet<&str> = frame
        .column_values(columns::PATNUM)?
        .into_iter()
        .collect();
    debug!(
        path = %path.display(),
        stimulus_column = %stimulus_column,
        cell_type_column = %cell_type_column,
        rows = frame.height(),
        unique_patients = unique_patients.len(),
        "assay subset loaded"
    );

    Ok(AssayTable {
        frame,
        stimulus_column,
        cell_type_column,
    })
}
