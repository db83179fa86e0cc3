//! CSV ingestion for the ELISPOT pipeline.
//!
//! Loads the two sample manifests and the IGS1 assay results file into the
//! shared [`Frame`](elispot_model::Frame) model, normalizing timestamps and
//! discovering the assay's stimulus and cell-type columns by scan.

mod assay;
mod csv_table;
pub mod datetime;
mod hints;
mod manifest;

pub use assay::{AssayOptions, AssayTable, find_cell_type_column, find_stimulus_column, read_assay};
pub use csv_table::read_frame;
pub use hints::build_column_hints;
pub use manifest::read_manifest;
