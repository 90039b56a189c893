use crate::catalog::{self, CompiledDefinition, SecretDefinition};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One classified finding: a single occurrence of a secret-shaped value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    /// Description of the owning definition, or its raw pattern if none
    pub name: String,
    /// File path as supplied by the file enumerator
    pub path: String,
    /// The exact matched substring; may span multiple lines
    pub value: String,
    /// Human sentence: `"<first line of value> detected as <name>"`
    pub description: String,
    /// 1-based start line, inclusive
    pub start_line: usize,
    /// 1-based end line, inclusive
    pub end_line: usize,
    /// 1-based start column; absent when the match spans multiple lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_offset: Option<usize>,
    /// 1-based end column; absent when the match spans multiple lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<usize>,
}

/// Findings from a single file, split by classification.
///
/// Matches that fail live verification appear in neither list: they matched
/// a secret shape but are confirmed not to be live credentials, which is
/// distinct from the "known safe" exceptions reported as excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileResult {
    pub detected: Vec<Secret>,
    pub excluded: Vec<Secret>,
}

/// Aggregate result of one project scan
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Count of files examined, not the count with findings
    pub file_count: usize,
    pub detected: Vec<Secret>,
    pub excluded: Vec<Secret>,
}

/// Inputs for one scan run
#[derive(Debug, Clone, Default)]
pub struct ScanConfiguration {
    /// Ordered definitions; order determines report order within a file
    pub secret_definitions: Vec<SecretDefinition>,
    /// Descriptions of definitions skipped for this run
    pub disabled: Vec<String>,
    /// Exact matched values treated as pre-approved wherever found
    pub exceptions: Vec<String>,
    /// Glob patterns selecting files to scan; empty means everything
    pub glob: Vec<String>,
}

/// A scan configuration with regexes compiled and sets deduplicated,
/// ready to be applied to any number of files.
#[derive(Debug)]
pub struct CompiledConfiguration {
    pub definitions: Vec<CompiledDefinition>,
    pub disabled: HashSet<String>,
    pub exceptions: HashSet<String>,
    pub glob: Vec<String>,
}

impl ScanConfiguration {
    /// Compile the configuration for a run.
    ///
    /// Definitions are deduplicated by pattern and each regex is compiled
    /// exactly once; any invalid pattern aborts before a file is scanned.
    pub fn compile(self) -> Result<CompiledConfiguration> {
        Ok(CompiledConfiguration {
            definitions: catalog::compile_definitions(self.secret_definitions)?,
            disabled: self.disabled.into_iter().collect(),
            exceptions: self.exceptions.into_iter().collect(),
            glob: self.glob,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_dedups_exceptions_and_disabled() {
        let config = ScanConfiguration {
            secret_definitions: vec![SecretDefinition::from_pattern("a+")],
            disabled: vec!["x".into(), "x".into()],
            exceptions: vec!["v".into(), "v".into(), "w".into()],
            glob: vec![],
        };
        let compiled = config.compile().unwrap();
        assert_eq!(compiled.disabled.len(), 1);
        assert_eq!(compiled.exceptions.len(), 2);
    }

    #[test]
    fn test_compile_rejects_invalid_pattern() {
        let config = ScanConfiguration {
            secret_definitions: vec![SecretDefinition::from_pattern("(")],
            ..Default::default()
        };
        assert!(config.compile().is_err());
    }

    #[test]
    fn test_secret_serializes_without_absent_offsets() {
        let secret = Secret {
            name: "PEM Private Key".into(),
            path: "key.pem".into(),
            value: "a\nb".into(),
            description: "a detected as PEM Private Key".into(),
            start_line: 1,
            end_line: 2,
            start_offset: None,
            end_offset: None,
        };
        let json = serde_json::to_string(&secret).unwrap();
        assert!(!json.contains("start_offset"));
        assert!(!json.contains("end_offset"));
    }
}
