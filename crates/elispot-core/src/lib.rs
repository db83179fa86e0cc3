//! Stage functions and pipeline driver for the ELISPOT feature table.
//!
//! Each stage is a pure function consuming a frame and producing a new one;
//! [`pipeline::run`] owns the sequencing. See the module docs on
//! [`pipeline`] for the stage order.

pub mod binning;
pub mod join;
pub mod matrix_filter;
pub mod merge;
pub mod numeric;
pub mod pipeline;
pub mod prune;
pub mod reorganize;
pub mod turnaround;
pub mod writer;

pub use pipeline::{PipelineConfig, RunSummary, StageCount, run};
