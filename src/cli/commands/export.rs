//! Export command handler

use curriculum_monitor::config::Config;
use curriculum_monitor::core::report::{copy_path, generator_for, write_copies, ReportFormat};
use curriculum_monitor::core::CourseStore;
use curriculum_monitor::{error, info};
use std::path::{Path, PathBuf};

/// Write the course list in one format, or both when `format` is `None`
pub fn run(
    store: &CourseStore,
    format: Option<ReportFormat>,
    output: Option<&Path>,
    config: &Config,
) {
    let data_file = Path::new(&config.paths.data_file);
    let out_dir = Path::new(&config.paths.out_dir);

    let result = match format {
        None => write_copies(store.courses(), data_file, out_dir),
        Some(format) => {
            let path = output.map_or_else(|| copy_path(data_file, out_dir, format), PathBuf::from);
            export_single(store, format, &path).map(|()| vec![path])
        }
    };

    match result {
        Ok(paths) => {
            for path in paths {
                println!("✓ Exported: {}", path.display());
            }
        }
        Err(e) => {
            error!("Export failed: {e}");
            eprintln!("✗ Failed to export courses: {e}");
        }
    }
}

fn export_single(store: &CourseStore, format: ReportFormat, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    generator_for(format).generate(store.courses(), path)?;
    info!("Exported {} courses as {format}", store.len());
    Ok(())
}
