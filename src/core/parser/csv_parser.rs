//! CSV parser for course record data
//!
//! Rows follow the layout `year,term,code,title,units,grade`. Quoting is not
//! supported: rows with fewer than six fields are padded on the right with
//! empty values, which is lossy when the missing field was an interior one.

use crate::core::error::{LoadError, ParseError};
use crate::core::models::{Course, UNGRADED};
use crate::{debug, error, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Number of columns in a course row
pub const FIELD_COUNT: usize = 6;

/// Column separator; text fields cannot contain it
pub const DELIMITER: char = ',';

/// Column names, in file order
pub const HEADER: [&str; FIELD_COUNT] = ["year", "term", "code", "title", "units", "grade"];

/// Parse course rows from delimited text
///
/// # Arguments
/// * `content` - Full text of the file
/// * `has_header` - Skip the first line when `true`
///
/// # Errors
/// Returns `ParseError::MalformedNumber` for the first row whose year, term,
/// units or grade column is not numeric; no partial result is produced.
pub fn parse_courses(content: &str, has_header: bool) -> Result<Vec<Course>, ParseError> {
    let skip = usize::from(has_header);
    let mut courses = Vec::new();

    for (idx, line) in content.lines().enumerate().skip(skip) {
        if line.trim().is_empty() {
            continue;
        }
        courses.push(parse_course_line(line, idx + 1)?);
    }

    debug!("Parsed {} course rows", courses.len());
    Ok(courses)
}

/// Read and parse a course file with a header line
///
/// # Errors
/// Returns `LoadError::FileNotFound` if the file is missing, `LoadError::Io`
/// if it cannot be read, and `LoadError::Parse` if any row is malformed.
pub fn read_courses<P: AsRef<Path>>(path: P) -> Result<Vec<Course>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            LoadError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io(e)
        }
    })?;

    Ok(parse_courses(&content, true)?)
}

/// Read a course file, reporting failures and falling back to an empty list
///
/// A missing, unreadable or malformed file is logged and yields no courses,
/// so the caller can continue with an empty data set.
#[must_use]
pub fn load_courses<P: AsRef<Path>>(path: P) -> Vec<Course> {
    let path = path.as_ref();
    match read_courses(path) {
        Ok(courses) => {
            info!("Loaded {} courses from {}", courses.len(), path.display());
            courses
        }
        Err(LoadError::FileNotFound { .. }) => {
            warn!("File not found: {}", path.display());
            Vec::new()
        }
        Err(e) => {
            error!("Failed to load {}: {e}", path.display());
            Vec::new()
        }
    }
}

/// Split a row into exactly [`FIELD_COUNT`] trimmed fields
///
/// Short rows are padded with empty strings; extra fields are dropped.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    if fields.len() < FIELD_COUNT {
        debug!("Padding short row ({} fields): {line}", fields.len());
        fields.resize(FIELD_COUNT, "");
    }
    fields.truncate(FIELD_COUNT);
    fields
}

/// Parse a single course row
fn parse_course_line(line: &str, line_no: usize) -> Result<Course, ParseError> {
    let fields = split_fields(line);

    let year = parse_number::<u8>(fields[0], "year", line_no)?;
    let term = parse_number::<u8>(fields[1], "term", line_no)?;
    let units = parse_optional_number(fields[4], "units", line_no)?;
    let grade = parse_optional_number(fields[5], "grade", line_no)?;

    let course = Course::new(
        fields[2].to_string(),
        fields[3].to_string(),
        year,
        term,
        units,
    );
    Ok(course.with_grade(grade))
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    field: &'static str,
    line: usize,
) -> Result<T, ParseError> {
    value.parse::<T>().map_err(|_| ParseError::MalformedNumber {
        line,
        field,
        value: value.to_string(),
    })
}

/// Empty values become [`UNGRADED`] (zero); `NaN` and infinities are rejected
fn parse_optional_number(value: &str, field: &'static str, line: usize) -> Result<f64, ParseError> {
    if value.is_empty() {
        return Ok(UNGRADED);
    }
    let number: f64 = parse_number(value, field, line)?;
    if number.is_finite() {
        Ok(number)
    } else {
        Err(ParseError::MalformedNumber {
            line,
            field,
            value: value.to_string(),
        })
    }
}
