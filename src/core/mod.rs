//! Core module: course records, parsing, queries and reconciliation

pub mod config;
pub mod error;
pub mod labels;
pub mod models;
pub mod parser;
pub mod reconcile;
pub mod report;
pub mod store;

pub use error::{LoadError, ParseError};
pub use models::Course;
pub use store::{CourseStore, SortOrder};

/// Returns the current version of the `CurriculumMonitor` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
