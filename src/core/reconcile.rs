//! Course shift reconciliation
//!
//! When a student moves to another program, the courses already taken
//! (`incoming`) are carried into the new curriculum (`target`) by matching
//! descriptive titles. Matched target entries take over the incoming code and
//! grade. Incoming courses with no equivalent are appended as zero-unit
//! placeholders whose code is prefixed with [`UNCARRIED_MARKER`].

use crate::core::models::Course;
use crate::{debug, info};

/// Prefix added to the code of a course that has no equivalent
pub const UNCARRIED_MARKER: char = '*';

/// Result of a reconciliation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShiftOutcome {
    /// Number of incoming courses that found a title match
    pub matched: usize,
    /// Placeholders appended to the target, as appended
    pub uncarried: Vec<Course>,
}

/// Merge `incoming` into `target` by case-insensitive title
///
/// Each incoming course updates only the first target course with the same
/// title; the target's other fields are left as they are. Incoming courses
/// whose title appears nowhere in `target` get `units = 0`, a marked code,
/// and are appended in their original order.
pub fn reconcile(target: &mut Vec<Course>, incoming: Vec<Course>) -> ShiftOutcome {
    if incoming.is_empty() {
        return ShiftOutcome::default();
    }

    let mut matched = 0;
    for shifted in &incoming {
        if let Some(course) = target.iter_mut().find(|c| c.title_matches(&shifted.title)) {
            debug!("Carried {} onto '{}'", shifted.code, course.title);
            course.grade = shifted.grade;
            course.code.clone_from(&shifted.code);
            matched += 1;
        }
    }

    let uncarried: Vec<Course> = incoming
        .into_iter()
        .filter(|shifted| !target.iter().any(|c| c.title_matches(&shifted.title)))
        .map(mark_uncarried)
        .collect();

    target.extend(uncarried.iter().cloned());
    info!(
        "Shift reconciled: {matched} carried, {} uncarried",
        uncarried.len()
    );

    ShiftOutcome { matched, uncarried }
}

fn mark_uncarried(mut course: Course) -> Course {
    course.code.insert(0, UNCARRIED_MARKER);
    course.units = 0.0;
    course
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str, code: &str, grade: f64) -> Course {
        Course::new(code.to_string(), title.to_string(), 1, 1, 3.0).with_grade(grade)
    }

    #[test]
    fn test_title_match_transfers_code_and_grade() {
        let mut target = vec![titled("Calculus", "MATH1", 0.0)];
        let incoming = vec![titled("calculus", "MATH1S", 90.0)];

        let outcome = reconcile(&mut target, incoming);

        assert_eq!(target.len(), 1);
        assert_eq!(target[0].code, "MATH1S");
        assert!((target[0].grade - 90.0).abs() < f64::EPSILON);
        assert_eq!(target[0].title, "Calculus");
        assert_eq!(outcome.matched, 1);
        assert!(outcome.uncarried.is_empty());
    }

    #[test]
    fn test_accented_title_matches_across_case() {
        let mut target = vec![titled("Ética", "FIL 1", 0.0)];
        let incoming = vec![titled("éTICA", "PHIL 10", 84.0)];

        let outcome = reconcile(&mut target, incoming);

        assert_eq!(outcome.matched, 1);
        assert!(outcome.uncarried.is_empty());
        assert_eq!(target.len(), 1);
        assert_eq!(target[0].code, "PHIL 10");
    }

    #[test]
    fn test_unmatched_becomes_placeholder() {
        let mut target = vec![titled("Physics", "PHYS1", 0.0)];
        let incoming = vec![titled("History", "H1", 80.0)];

        let outcome = reconcile(&mut target, incoming);

        assert_eq!(target.len(), 2);
        assert_eq!(target[1].code, "*H1");
        assert!(target[1].units.abs() < f64::EPSILON);
        assert!((target[1].grade - 80.0).abs() < f64::EPSILON);
        assert_eq!(outcome.matched, 0);
        assert_eq!(outcome.uncarried, vec![target[1].clone()]);
    }

    #[test]
    fn test_only_first_target_match_is_updated() {
        let mut target = vec![
            titled("Elective", "CSE", 0.0),
            titled("Elective", "CSE", 0.0),
        ];
        reconcile(&mut target, vec![titled("ELECTIVE", "IT 1", 85.0)]);

        assert_eq!(target[0].code, "IT 1");
        assert_eq!(target[1].code, "CSE");
        assert!(!target[1].is_graded());
    }

    #[test]
    fn test_target_fields_other_than_code_and_grade_untouched() {
        let mut target = vec![Course::new("A".to_string(), "Art".to_string(), 2, 3, 4.0)];
        let mut shifted = Course::new("B".to_string(), "art".to_string(), 1, 1, 1.0).with_grade(77.0);
        shifted.is_elective = true;

        reconcile(&mut target, vec![shifted]);

        assert_eq!(target[0].year, 2);
        assert_eq!(target[0].term, 3);
        assert!((target[0].units - 4.0).abs() < f64::EPSILON);
        assert!(!target[0].is_elective);
    }

    #[test]
    fn test_consecutive_uncarried_are_all_kept() {
        let mut target = vec![titled("Physics", "P", 0.0)];
        let incoming = vec![
            titled("Physics", "P2", 88.0),
            titled("History", "H1", 80.0),
            titled("Art", "A1", 81.0),
            titled("Music", "M1", 82.0),
        ];

        let outcome = reconcile(&mut target, incoming);

        let appended: Vec<_> = target[1..].iter().map(|c| c.code.as_str()).collect();
        assert_eq!(appended, vec!["*H1", "*A1", "*M1"]);
        assert_eq!(outcome.matched, 1);
    }

    #[test]
    fn test_empty_incoming_is_noop() {
        let mut target = vec![titled("Physics", "P", 70.0)];
        let before = target.clone();

        let outcome = reconcile(&mut target, Vec::new());

        assert_eq!(target, before);
        assert_eq!(outcome, ShiftOutcome::default());
    }

    #[test]
    fn test_empty_target_takes_everything_as_uncarried() {
        let mut target = Vec::new();
        let outcome = reconcile(&mut target, vec![titled("Art", "A1", 81.0)]);
        assert_eq!(target.len(), 1);
        assert_eq!(outcome.uncarried.len(), 1);
        assert_eq!(target[0].code, "*A1");
    }
}
