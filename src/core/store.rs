//! In-memory course store and its queries
//!
//! Insertion order is the canonical display order. Sorting never reorders
//! the store itself; it returns a sorted view.

use crate::core::labels::TERMS_PER_YEAR;
use crate::core::models::Course;
use crate::core::reconcile::{self, ShiftOutcome};
use crate::debug;
use std::fmt;
use std::str::FromStr;

/// Direction for grade sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Lowest grade first
    Ascending,
    /// Highest grade first (the reverse of ascending)
    Descending,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(format!("Unknown sort order: {s}")),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}

/// Ordered collection of a student's courses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseStore {
    courses: Vec<Course>,
}

impl CourseStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: Vec::new(),
        }
    }

    /// All courses in insertion order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the store holds no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Append a course
    pub fn push(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Consume the store, returning its courses
    #[must_use]
    pub fn into_courses(self) -> Vec<Course> {
        self.courses
    }

    /// Find a course by code (case-insensitive, first match wins)
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code_matches(code))
    }

    /// Mutable variant of [`lookup`](Self::lookup)
    pub fn lookup_mut(&mut self, code: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.code_matches(code))
    }

    /// Lookup returning an empty-code `Course` on a miss
    #[must_use]
    pub fn lookup_or_default(&self, code: &str) -> Course {
        self.lookup(code).cloned().unwrap_or_default()
    }

    /// Courses with a grade below the passing mark
    #[must_use]
    pub fn failed(&self) -> Vec<&Course> {
        self.filter(Course::is_failed)
    }

    /// Courses without a recorded grade
    #[must_use]
    pub fn ungraded(&self) -> Vec<&Course> {
        self.filter(|c| !c.is_graded())
    }

    /// Courses with a passing grade
    #[must_use]
    pub fn passed(&self) -> Vec<&Course> {
        self.filter(Course::is_passed)
    }

    /// Courses tagged as electives
    #[must_use]
    pub fn electives(&self) -> Vec<&Course> {
        self.filter(|c| c.is_elective)
    }

    /// Courses scheduled in a given year and term
    #[must_use]
    pub fn in_term(&self, year: u8, term: u8) -> Vec<&Course> {
        self.filter(|c| c.year == year && c.term == term)
    }

    /// Courses matching an arbitrary predicate, in store order
    pub fn filter<F>(&self, predicate: F) -> Vec<&Course>
    where
        F: Fn(&Course) -> bool,
    {
        self.courses.iter().filter(|c| predicate(c)).collect()
    }

    /// Graded courses sorted by grade
    ///
    /// Ascending is a stable sort. Descending is the ascending sequence
    /// reversed, so courses with equal grades appear in reverse store order.
    #[must_use]
    pub fn sort_by_grade(&self, order: SortOrder) -> Vec<&Course> {
        let mut sorted: Vec<&Course> = self.filter(Course::is_graded);
        sorted.sort_by(|a, b| a.cmp_grade(b));
        if order == SortOrder::Descending {
            sorted.reverse();
        }
        sorted
    }

    /// Mark every course matching `predicate` as an elective
    ///
    /// Returns the number of courses matched. Courses that do not match keep
    /// their current flag.
    pub fn tag_electives<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&Course) -> bool,
    {
        let mut tagged = 0;
        for course in self.courses.iter_mut().filter(|c| predicate(c)) {
            course.is_elective = true;
            tagged += 1;
        }
        debug!("Tagged {tagged} elective courses");
        tagged
    }

    /// Mark courses whose code equals `marker` (case-insensitive) as electives
    pub fn tag_electives_by_code(&mut self, marker: &str) -> usize {
        self.tag_electives(|c| c.code_matches(marker))
    }

    /// Highest year level across all courses, at least 1
    #[must_use]
    pub fn highest_year(&self) -> u8 {
        self.courses.iter().map(|c| c.year).fold(1, u8::max)
    }

    /// Every `(year, term)` slot from the first year up to [`highest_year`](Self::highest_year)
    pub fn terms(&self) -> impl Iterator<Item = (u8, u8)> {
        let last = self.highest_year();
        (1..=last).flat_map(|year| (1..=TERMS_PER_YEAR).map(move |term| (year, term)))
    }

    /// Record a grade for the course with the given code
    ///
    /// Returns the updated course, or `None` if no course has that code.
    pub fn set_grade(&mut self, code: &str, grade: f64) -> Option<&Course> {
        let course = self.lookup_mut(code)?;
        course.grade = grade;
        debug!("Grade of {} set to {grade}", course.code);
        Some(course)
    }

    /// Replace the code and title of the course with the given code
    ///
    /// Returns the updated course, or `None` if no course has that code.
    pub fn edit_course(&mut self, code: &str, new_code: &str, new_title: &str) -> Option<&Course> {
        let course = self.lookup_mut(code)?;
        new_code.clone_into(&mut course.code);
        new_title.clone_into(&mut course.title);
        Some(course)
    }

    /// Merge courses from another program into this store by title
    ///
    /// See [`reconcile::reconcile`].
    pub fn shift_from(&mut self, incoming: Vec<Course>) -> ShiftOutcome {
        reconcile::reconcile(&mut self.courses, incoming)
    }
}

impl From<Vec<Course>> for CourseStore {
    fn from(courses: Vec<Course>) -> Self {
        Self { courses }
    }
}

impl FromIterator<Course> for CourseStore {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        Self {
            courses: iter.into_iter().collect(),
        }
    }
}
