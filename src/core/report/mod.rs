//! Persistence of the course list as files
//!
//! Two outputs mirror what the session offers on save: a delimited copy in
//! the input schema and a fixed-width human-readable report.

pub mod formats;

use crate::core::models::Course;
use crate::info;
use std::io;
use std::path::{Path, PathBuf};

pub use formats::{CsvReporter, ReportFormat, TextReporter};

/// Suffix appended to the data file stem for written copies
pub const COPY_SUFFIX: &str = "_Copy";

/// Trait for course list writers
pub trait ReportGenerator {
    /// Render the report content as a string
    fn render(&self, courses: &[Course]) -> String;

    /// Render the report and write it to a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    fn generate(&self, courses: &[Course], output_path: &Path) -> io::Result<()> {
        std::fs::write(output_path, self.render(courses))
    }
}

/// Build the generator for a format
#[must_use]
pub fn generator_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Csv => Box::new(CsvReporter::new()),
        ReportFormat::Text => Box::new(TextReporter::new()),
    }
}

/// Path of the copy written for `data_file` in `out_dir`
///
/// `CurriculumData.csv` becomes `<out_dir>/CurriculumData_Copy.<ext>`.
#[must_use]
pub fn copy_path(data_file: &Path, out_dir: &Path, format: ReportFormat) -> PathBuf {
    let stem = data_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("courses");
    out_dir.join(format!("{stem}{COPY_SUFFIX}.{}", format.extension()))
}

/// Write both the CSV copy and the text report next to each other
///
/// # Errors
/// Returns an error if the output directory cannot be created or a file
/// cannot be written. Files written before the failure are left in place.
pub fn write_copies(
    courses: &[Course],
    data_file: &Path,
    out_dir: &Path,
) -> io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)?;

    let mut written = Vec::new();
    for format in [ReportFormat::Csv, ReportFormat::Text] {
        let path = copy_path(data_file, out_dir, format);
        generator_for(format).generate(courses, &path)?;
        info!("Wrote {format} copy to {}", path.display());
        written.push(path);
    }
    Ok(written)
}
