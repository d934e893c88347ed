//! Display names for year levels and terms

/// Ordinal names indexed by year level minus one
const YEAR_LABELS: [&str; 5] = ["First", "Second", "Third", "Fourth", "Fifth"];

/// Ordinal names indexed by term minus one
const TERM_LABELS: [&str; 3] = ["First", "Second", "Third"];

/// Number of terms in one school year
pub const TERMS_PER_YEAR: u8 = 3;

/// Ordinal name of a year level, empty when out of range
#[must_use]
pub fn year_label(year: u8) -> &'static str {
    lookup(&YEAR_LABELS, year)
}

/// Ordinal name of a term, empty when out of range
#[must_use]
pub fn term_label(term: u8) -> &'static str {
    lookup(&TERM_LABELS, term)
}

/// Heading line for a term block, e.g. `Year = First Year    Term = Second Semester`
#[must_use]
pub fn term_heading(year: u8, term: u8) -> String {
    format!(
        "Year = {} Year\tTerm = {} Semester",
        year_label(year),
        term_label(term)
    )
}

fn lookup(table: &[&'static str], ordinal: u8) -> &'static str {
    usize::from(ordinal)
        .checked_sub(1)
        .and_then(|idx| table.get(idx))
        .copied()
        .unwrap_or("")
}
