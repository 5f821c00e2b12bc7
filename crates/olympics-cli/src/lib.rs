//! Library components of the `olympics` command-line analyzer.

pub mod analysis;
pub mod logging;
pub mod report;
