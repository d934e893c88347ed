//! Console rendering of course listings

use curriculum_monitor::core::labels::term_heading;
use curriculum_monitor::core::report::formats::text::COLUMNS;
use curriculum_monitor::core::Course;
use std::io::{self, Write};

/// Width of the horizontal rules between sections
pub const RULE_WIDTH: usize = 145;

/// Write a horizontal rule
pub fn rule<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

/// Write a centered section title
pub fn title<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{text:^width$}", width = RULE_WIDTH)
}

/// Write the column headings; the grade heading is left blank without grades
pub fn column_header<W: Write>(out: &mut W, with_grades: bool) -> io::Result<()> {
    let grade = if with_grades { COLUMNS[3] } else { "" };
    writeln!(
        out,
        "{:<15} {:<110} {:<8} {:<6}",
        COLUMNS[0], COLUMNS[1], COLUMNS[2], grade
    )
}

/// Write one course row, with or without its grade column
pub fn course_row<W: Write>(out: &mut W, course: &Course, with_grades: bool) -> io::Result<()> {
    if with_grades {
        writeln!(out, "{course}")
    } else {
        writeln!(
            out,
            "{:<15} {:<110} {:<8.1}",
            course.code, course.title, course.units
        )
    }
}

/// Write a titled table of courses with grades
pub fn course_table<W: Write>(out: &mut W, heading: &str, courses: &[&Course]) -> io::Result<()> {
    title(out, heading)?;
    rule(out)?;
    column_header(out, true)?;
    for course in courses {
        course_row(out, course, true)?;
    }
    writeln!(out)
}

/// Write the block for one year and term
pub fn term_block<W: Write>(
    out: &mut W,
    year: u8,
    term: u8,
    courses: &[&Course],
    with_grades: bool,
) -> io::Result<()> {
    rule(out)?;
    writeln!(out, "{}", term_heading(year, term))?;
    column_header(out, with_grades)?;
    rule(out)?;
    for course in courses {
        course_row(out, course, with_grades)?;
    }
    Ok(())
}
