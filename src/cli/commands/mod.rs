//! CLI command handlers for `CurriculumMonitor`.
//!
//! Each command is implemented in its own submodule. They all work on a
//! `CourseStore` loaded from the configured data file.

pub mod config;
pub mod export;
pub mod listing;
pub mod session;
pub mod shift;

use curriculum_monitor::config::Config;
use curriculum_monitor::core::parser::load_courses;
use curriculum_monitor::core::CourseStore;
use curriculum_monitor::{info, verbose};
use std::path::Path;

/// Load the configured data file and tag electives
///
/// A missing or malformed file is reported by the loader and yields an
/// empty store.
pub fn load_store(config: &Config) -> CourseStore {
    let data_file = Path::new(&config.paths.data_file);
    let mut store = CourseStore::from(load_courses(data_file));

    if !config.electives.marker.is_empty() {
        let tagged = store.tag_electives_by_code(&config.electives.marker);
        info!(
            "Tagged {tagged} electives with marker '{}'",
            config.electives.marker
        );
    }
    verbose!(
        "✓ Loaded {} courses from {}",
        store.len(),
        data_file.display()
    );
    store
}
