//! Project-level scan orchestration
//!
//! Resolves the file set through a [`FileEnumerator`], reads each file
//! through a [`FileReader`], and funnels every file through the file
//! scanner with one shared verification cache. Both collaborators are
//! traits so callers can swap in anything from a cloned repository to an
//! in-memory fixture; the default implementations walk the filesystem.

use crate::scan::file::scan_file_content;
use crate::scan::types::{CompiledConfiguration, ScanResult};
use crate::verify::{VerificationCache, VerifierRegistry};
use anyhow::{Context, Result};
use globset::{Glob, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Scanned when the configuration supplies no glob patterns
pub const DEFAULT_GLOB_PATTERNS: &[&str] = &["**/*"];

/// Supplies the set of file paths a scan run covers
pub trait FileEnumerator {
    fn list(&self, globs: &[String]) -> Result<Vec<String>>;
}

/// Supplies file content for a path produced by the enumerator
pub trait FileReader {
    fn read(&self, path: &str) -> Result<String>;
}

/// Scan every enumerated file and aggregate the classified findings.
///
/// Findings are appended in file-enumeration order; within a file they keep
/// the catalog-then-match order of the file scanner. A read failure aborts
/// the whole run.
pub async fn scan_project(
    enumerator: &dyn FileEnumerator,
    reader: &dyn FileReader,
    config: &CompiledConfiguration,
    registry: &VerifierRegistry,
    cache: &mut VerificationCache,
) -> Result<ScanResult> {
    let globs: Vec<String> = if config.glob.is_empty() {
        DEFAULT_GLOB_PATTERNS.iter().map(|s| s.to_string()).collect()
    } else {
        config.glob.clone()
    };

    let files = enumerator.list(&globs)?;
    tracing::debug!("Scanning {} files", files.len());

    let mut result = ScanResult {
        file_count: files.len(),
        ..Default::default()
    };

    for file in &files {
        let content = reader.read(file)?;
        let file_result = scan_file_content(file, &content, config, registry, cache).await?;
        result.detected.extend(file_result.detected);
        result.excluded.extend(file_result.excluded);
    }

    Ok(result)
}

/// Enumerates files under a project root by glob patterns.
///
/// Paths are matched and returned relative to the root. globset gives the
/// brace-alternation form (`**/*.{yml,yaml}`) the catalog configuration
/// relies on. Results are sorted for stable cross-file report order.
pub struct GlobEnumerator {
    root: PathBuf,
}

impl GlobEnumerator {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl FileEnumerator for GlobEnumerator {
    fn list(&self, globs: &[String]) -> Result<Vec<String>> {
        let mut builder = GlobSetBuilder::new();
        for pattern in globs {
            let glob = Glob::new(pattern)
                .with_context(|| format!("Invalid glob pattern: {}", pattern))?;
            builder.add(glob);
        }
        let matcher = builder.build().context("Failed to build glob set")?;

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            if matcher.is_match(relative) {
                files.push(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Reads file content from disk, relative to a project root
pub struct FsReader {
    root: PathBuf,
}

impl FsReader {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl FileReader for FsReader {
    fn read(&self, path: &str) -> Result<String> {
        let full = self.root.join(path);
        // Lossy decode: trees routinely contain binaries (images, build
        // artifacts) and a scan must not abort on them. Only a true read
        // error is fatal.
        let bytes = std::fs::read(&full)
            .with_context(|| format!("Failed to read file: {}", full.display()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
