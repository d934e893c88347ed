//! Loading of course record files

pub mod csv_parser;

pub use csv_parser::{load_courses, parse_courses, read_courses};
