//! Secret-detection engine
//!
//! Turns (file content, pattern catalog, exclusion rules, verification
//! policy) into a structured list of detected and excluded findings with
//! exact line/column locations.

mod file;
mod location;
mod project;
mod types;

pub use file::scan_file_content;
pub use location::{locate, SourceSpan};
pub use project::{
    scan_project, FileEnumerator, FileReader, FsReader, GlobEnumerator, DEFAULT_GLOB_PATTERNS,
};
pub use types::{CompiledConfiguration, FileResult, ScanConfiguration, ScanResult, Secret};
