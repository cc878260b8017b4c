//! Interpreting and emitting the validation outcome.
//!
//! - [`report`] - Maps the terminal poll response to a typed report
//! - [`file`] - Writes the timestamped output artifact
//! - [`terminal`] - Colored success/failure banners

mod file;
mod report;
mod terminal;

pub use file::write_report;
pub use report::{interpret, OutcomeKind, ValidationReport};
pub use terminal::render;
