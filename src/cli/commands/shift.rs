//! Shift command handler
//!
//! Carries the courses of a previous program into the current course list.

use crate::display;
use curriculum_monitor::config::Config;
use curriculum_monitor::core::parser::load_courses;
use curriculum_monitor::core::reconcile::ShiftOutcome;
use curriculum_monitor::core::report::write_copies;
use curriculum_monitor::core::{Course, CourseStore};
use curriculum_monitor::{error, info};
use std::io::{self, Write};
use std::path::Path;

/// Run the shift command: reconcile, print the result, optionally save.
pub fn run(store: &mut CourseStore, from: Option<&Path>, save: bool, config: &Config) {
    let shift_file = from.unwrap_or_else(|| Path::new(&config.paths.shift_file));
    let incoming = load_courses(shift_file);
    if incoming.is_empty() {
        eprintln!("✗ No courses to shift from {}", shift_file.display());
        return;
    }

    let mut out = io::stdout().lock();
    if let Err(e) = apply(&mut out, store, incoming) {
        error!("Failed to print shift result: {e}");
        return;
    }

    if save {
        let data_file = Path::new(&config.paths.data_file);
        match write_copies(store.courses(), data_file, Path::new(&config.paths.out_dir)) {
            Ok(paths) => {
                for path in paths {
                    println!("✓ Saved: {}", path.display());
                }
            }
            Err(e) => eprintln!("✗ Failed to save shifted courses: {e}"),
        }
    }
}

/// Reconcile `incoming` into `store`, printing the incoming list and the
/// uncarried placeholders
pub fn apply<W: Write>(
    out: &mut W,
    store: &mut CourseStore,
    incoming: Vec<Course>,
) -> io::Result<ShiftOutcome> {
    let incoming_refs: Vec<&Course> = incoming.iter().collect();
    display::course_table(out, "YOUR COURSES", &incoming_refs)?;

    let outcome = store.shift_from(incoming);
    info!(
        "Shift carried {} courses, {} uncarried",
        outcome.matched,
        outcome.uncarried.len()
    );

    let uncarried: Vec<&Course> = outcome.uncarried.iter().collect();
    display::course_table(out, "UNCARRIED COURSES", &uncarried)?;
    writeln!(out, "You have successfully shifted courses!")?;
    Ok(outcome)
}
