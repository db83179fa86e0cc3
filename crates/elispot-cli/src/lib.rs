//! Library components of the ELISPOT feature-table CLI.

pub mod logging;
