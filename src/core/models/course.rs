//! Course model

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Grade value reserved for "no grade recorded yet"
pub const UNGRADED: f64 = 0.0;

/// Lowest grade that still counts as passed
pub const PASSING_GRADE: f64 = 75.0;

/// Marker shown in the grade column when a course has no grade
pub const NOT_AVAILABLE: &str = "N/A";

/// Represents one course entry of a student's curriculum
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course code (e.g., "CS 122"), matched case-insensitively
    pub code: String,

    /// Descriptive title (e.g., "Computer Programming 1")
    pub title: String,

    /// Term of the school year (1-3)
    pub term: u8,

    /// Year level (1-5)
    pub year: u8,

    /// Credit units (can be fractional)
    pub units: f64,

    /// Grade on a 0-100 scale; [`UNGRADED`] when no grade is recorded
    pub grade: f64,

    /// Whether the course was tagged as an elective
    #[serde(default)]
    pub is_elective: bool,
}

impl Course {
    /// Create a new course without a grade
    ///
    /// # Arguments
    /// * `code` - Course code
    /// * `title` - Descriptive title
    /// * `year` - Year level
    /// * `term` - Term within the year
    /// * `units` - Credit units
    #[must_use]
    pub const fn new(code: String, title: String, year: u8, term: u8, units: f64) -> Self {
        Self {
            code,
            title,
            term,
            year,
            units,
            grade: UNGRADED,
            is_elective: false,
        }
    }

    /// Builder-style grade assignment
    #[must_use]
    pub fn with_grade(mut self, grade: f64) -> Self {
        self.grade = grade;
        self
    }

    /// Whether a grade has been recorded
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_graded(&self) -> bool {
        self.grade != UNGRADED
    }

    /// Whether the course has a grade below [`PASSING_GRADE`]
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.is_graded() && self.grade < PASSING_GRADE
    }

    /// Whether the course has a grade of at least [`PASSING_GRADE`]
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.is_graded() && self.grade >= PASSING_GRADE
    }

    /// The grade, or `None` for the ungraded sentinel
    #[must_use]
    pub fn grade_value(&self) -> Option<f64> {
        self.is_graded().then_some(self.grade)
    }

    /// Case-insensitive comparison of the course code
    #[must_use]
    pub fn code_matches(&self, code: &str) -> bool {
        eq_ignore_case(&self.code, code)
    }

    /// Case-insensitive comparison of the descriptive title
    #[must_use]
    pub fn title_matches(&self, title: &str) -> bool {
        eq_ignore_case(&self.title, title)
    }

    /// Order two courses by grade only
    #[must_use]
    pub fn cmp_grade(&self, other: &Self) -> Ordering {
        self.grade.total_cmp(&other.grade)
    }
}

/// Compare two strings under Unicode lowercase folding
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Format a number so whole values keep one decimal (`90.0`) and others
/// print as-is (`72.5`)
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Fixed-width row used by every course listing and the text report:
/// code (15), title (110), units (8, one decimal), grade (6).
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grade = self
            .grade_value()
            .map_or_else(|| NOT_AVAILABLE.to_string(), format_number);
        write!(
            f,
            "{:<15} {:<110} {:<8.1} {:<6}",
            self.code, self.title, self.units, grade
        )
    }
}
