//! Fixed-width human-readable report

use crate::core::models::Course;
use crate::core::report::ReportGenerator;
use std::fmt::Write;

/// Column headings of every course listing
pub const COLUMNS: [&str; 4] = ["COURSE NO.", "COURSE DESCRIPTION", "UNITS", "GRADE"];

/// Header line of the text report file
#[must_use]
pub fn report_header() -> String {
    format!(
        "{:<16} {:<120} {:<10} {:<7}",
        COLUMNS[0], COLUMNS[1], COLUMNS[2], COLUMNS[3]
    )
}

/// Text report writer
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, courses: &[Course]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", report_header());
        for course in courses {
            let _ = writeln!(out, "{course}");
        }
        out
    }
}
