//! Data models for `CurriculumMonitor`

pub mod course;

pub use course::{format_number, Course, PASSING_GRADE, UNGRADED};
