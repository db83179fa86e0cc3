use std::path::Path;

use csv::ReaderBuilder;

use elispot_model::{Frame, PipelineError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a headed CSV file into a [`Frame`].
///
/// Cells and headers are trimmed and BOM-stripped; fully blank rows are
/// skipped; short records are padded to the header width. A file with no
/// non-blank rows yields an empty frame.
pub fn read_frame(path: &Path) -> Result<Frame> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| PipelineError::Csv(format!("{}: {error}", path.display())))?;

    let mut frame: Option<Frame> = None;
    for record in reader.records() {
        let record =
            record.map_err(|error| PipelineError::Csv(format!("{}: {error}", path.display())))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        match frame {
            None => {
                let headers = record.iter().map(normalize_header).collect();
                frame = Some(Frame::new(headers));
            }
            Some(ref mut table) => {
                table.push_row(record.iter().map(normalize_cell).collect());
            }
        }
    }
    Ok(frame.unwrap_or_default())
}
