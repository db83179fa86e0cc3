//! Shared data model for the ELISPOT feature-table pipeline: the string
//! frame every stage operates on, the fixed column vocabulary, and the
//! pipeline error taxonomy.

pub mod columns;
mod error;
mod frame;

pub use error::{PipelineError, Result};
pub use frame::{ColumnHint, Frame};
