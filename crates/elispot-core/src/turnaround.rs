use elispot_ingest::datetime::{ISO_DATETIME, parse_date, parse_datetime, parse_time};
use elispot_model::{Frame, Result, columns};

/// Format a float the way the output CSV wants it. Rust's shortest-form
/// float display already avoids trailing zeros; this only folds negative
/// zero into "0".
pub(crate) fn format_numeric(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

/// Derive the collection timestamp and turn-around time.
///
/// `Collection = MNFD + MNFTM`; `TAT = MNF01 − Collection` in fractional
/// hours, negative values passed through. The raw `MNFD`/`MNFTM` columns are
/// replaced by `Collection`, and `TAT` is appended. Rows missing any of the
/// three inputs get missing `Collection`/`TAT`; loaders have already
/// rejected malformed values, so only presence matters here.
pub fn derive_turnaround(manifest: &Frame) -> Result<Frame> {
    let date_idx = manifest.require_column(columns::MNFD)?;
    let time_idx = manifest.require_column(columns::MNFTM)?;
    let processed_idx = manifest.require_column(columns::MNF01)?;

    let mut collection = Vec::with_capacity(manifest.height());
    let mut turnaround = Vec::with_capacity(manifest.height());
    for row in &manifest.rows {
        let collected = match (parse_date(&row[date_idx]), parse_time(&row[time_idx])) {
            (Some(date), Some(time)) => Some(date.and_time(time)),
            _ => None,
        };
        match collected {
            Some(collected) => {
                collection.push(collected.format(ISO_DATETIME).to_string());
                match parse_datetime(&row[processed_idx]) {
                    Some(processed) => {
                        let hours =
                            processed.signed_duration_since(collected).num_seconds() as f64
                                / 3600.0;
                        turnaround.push(format_numeric(hours));
                    }
                    None => turnaround.push(String::new()),
                }
            }
            None => {
                collection.push(String::new());
                turnaround.push(String::new());
            }
        }
    }

    let mut derived = manifest.clone();
    let time_position = derived.require_column(columns::MNFTM)?;
    derived = derived.without_columns(&[columns::MNFTM])?;
    // Collection takes the slot MNFTM occupied; MNFD is dropped afterwards.
    derived.headers.insert(time_position, columns::COLLECTION.to_string());
    for (row, value) in derived.rows.iter_mut().zip(&collection) {
        row.insert(time_position, value.clone());
    }
    derived = derived.without_columns(&[columns::MNFD])?;
    derived.with_column(columns::TAT, turnaround)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(rows: Vec<[&str; 4]>) -> Frame {
        Frame::from_rows(["PATNUM", "MNFD", "MNFTM", "MNF01"], rows)
    }

    #[test]
    fn tat_is_fractional_hours() {
        let frame = manifest(vec![["P1", "2020-01-01", "08:00:00", "2020-01-02T10:00:00"]]);
        let derived = derive_turnaround(&frame).unwrap();
        assert_eq!(derived.value(0, "Collection"), Some("2020-01-01T08:00:00"));
        assert_eq!(derived.value(0, "TAT"), Some("26"));
        assert!(!derived.has_column("MNFD"));
        assert!(!derived.has_column("MNFTM"));
    }

    #[test]
    fn negative_tat_passes_through() {
        let frame = manifest(vec![["P1", "2020-01-02", "12:00:00", "2020-01-02T10:30:00"]]);
        let derived = derive_turnaround(&frame).unwrap();
        assert_eq!(derived.value(0, "TAT"), Some("-1.5"));
    }

    #[test]
    fn missing_components_yield_missing_tat() {
        let frame = manifest(vec![["P1", "", "08:00:00", "2020-01-02T10:00:00"]]);
        let derived = derive_turnaround(&frame).unwrap();
        assert_eq!(derived.value(0, "Collection"), Some(""));
        assert_eq!(derived.value(0, "TAT"), Some(""));
    }

    #[test]
    fn format_numeric_shortest_form() {
        assert_eq!(format_numeric(26.0), "26");
        assert_eq!(format_numeric(260.0), "260");
        assert_eq!(format_numeric(1.5), "1.5");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(-1.5), "-1.5");
    }
}
