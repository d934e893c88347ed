//! Delimited copy of the course list
//!
//! The layout matches the input file so the copy can be loaded back: a header
//! line, then `year,term,code,title,units,grade` with an empty grade column
//! for ungraded courses.

use crate::core::models::{format_number, Course};
use crate::core::parser::csv_parser::HEADER;
use crate::core::report::ReportGenerator;
use std::fmt::Write;

/// CSV copy writer
pub struct CsvReporter;

impl CsvReporter {
    /// Create a new CSV reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_row(out: &mut String, course: &Course) {
        let grade = course.grade_value().map(format_number).unwrap_or_default();
        let _ = writeln!(
            out,
            "{},{},{},{},{},{grade}",
            course.year,
            course.term,
            course.code,
            course.title,
            format_number(course.units),
        );
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn render(&self, courses: &[Course]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", HEADER.join(","));
        for course in courses {
            Self::write_row(&mut out, course);
        }
        out
    }
}
