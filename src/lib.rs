//! Library for `CurriculumMonitor`
//! Contains the course record store and its operations, used by the CLI binary

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
