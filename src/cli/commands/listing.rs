//! Read-only course listings: term schedule, grade order and filters

use crate::display;
use curriculum_monitor::core::{Course, CourseStore, SortOrder};
use std::io::{self, Write};

/// Filtered listings offered as subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Graded below the passing mark
    Failed,
    /// No grade recorded
    Ungraded,
    /// Tagged electives
    Electives,
}

impl Filter {
    /// Section title printed above the table
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Failed => "FAILED COURSES",
            Self::Ungraded => "SHOWING COURSES WITHOUT GRADES",
            Self::Electives => "ELECTIVE COURSES",
        }
    }

    fn select(self, store: &CourseStore) -> Vec<&Course> {
        match self {
            Self::Failed => store.failed(),
            Self::Ungraded => store.ungraded(),
            Self::Electives => store.electives(),
        }
    }
}

/// Print one filtered table
pub fn run_filter<W: Write>(out: &mut W, store: &CourseStore, filter: Filter) -> io::Result<()> {
    display::course_table(out, filter.heading(), &filter.select(store))
}

/// Print every term block, then the sorted grade listings when `with_grades`
pub fn run_show<W: Write>(out: &mut W, store: &CourseStore, with_grades: bool) -> io::Result<()> {
    display::title(out, "COURSES")?;
    for (year, term) in store.terms() {
        display::term_block(out, year, term, &store.in_term(year, term), with_grades)?;
        writeln!(out)?;
    }

    if with_grades {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            sorted_listing(out, store, order)?;
        }
    }
    Ok(())
}

/// Print graded courses in the given grade order
pub fn sorted_listing<W: Write>(out: &mut W, store: &CourseStore, order: SortOrder) -> io::Result<()> {
    let heading = format!("{} ORDER", order.to_string().to_uppercase());
    display::course_table(out, &heading, &store.sort_by_grade(order))
}
