use std::path::Path;

use tracing::debug;

use elispot_model::{Frame, Result, columns};

use crate::csv_table::read_frame;
use crate::datetime::{normalize_date, normalize_datetime, normalize_time};

/// Load a sample manifest.
///
/// The three timestamp-bearing columns (`MNFD`, `MNFTM`, `MNF01`) must be
/// present and every non-empty value must parse; they are rewritten in
/// canonical ISO form. A header-only manifest (zero data rows) is valid.
pub fn read_manifest(path: &Path) -> Result<Frame> {
    let mut frame = read_frame(path)?;

    let date_idx = frame.require_column(columns::MNFD)?;
    let time_idx = frame.require_column(columns::MNFTM)?;
    let processed_idx = frame.require_column(columns::MNF01)?;

    for (row_idx, row) in frame.rows.iter_mut().enumerate() {
        let row_number = row_idx + 1;
        row[date_idx] = normalize_date(columns::MNFD, row_number, &row[date_idx])?;
        row[time_idx] = normalize_time(columns::MNFTM, row_number, &row[time_idx])?;
        row[processed_idx] = normalize_datetime(columns::MNF01, row_number, &row[processed_idx])?;
    }

    debug!(
        path = %path.display(),
        rows = frame.height(),
        columns = frame.width(),
        "manifest loaded"
    );
    Ok(frame)
}
