//! Pattern catalog loading and compilation
//!
//! The catalog is an immutable list of secret definitions, loaded from a
//! YAML document. The default catalog is embedded at compile time; callers
//! can replace it with an external file or append ad-hoc patterns.
//!
//! Definition order is preserved end to end: it determines the order in
//! which findings are reported within a file.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// The catalog shipped with the binary, embedded for zero runtime overhead.
const EMBEDDED_CATALOG: &str = include_str!("../../secrets.yaml");

/// Definition of one class of credential we can find in a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecretDefinition {
    /// Regex source for the secret, applied with find-all semantics
    pub pattern: String,
    /// Human label; doubles as the identifier used for disabling the
    /// pattern and for grouping findings. Ad-hoc CLI patterns have none.
    #[serde(default)]
    pub description: Option<String>,
    /// Bare file names (not paths) this pattern is skipped for
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Extra regex flags beyond find-all: `i`, `m`, `s`, `x`
    #[serde(default)]
    pub flags: Option<String>,
    /// Symbolic name of a verifier that can confirm a live credential
    #[serde(default)]
    pub verify: Option<String>,
}

impl SecretDefinition {
    /// Create a bare definition from a raw pattern string (CLI `--pattern`)
    pub fn from_pattern(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            description: None,
            ignore: Vec::new(),
            flags: None,
            verify: None,
        }
    }

    /// The name findings carry: the description, or the raw pattern if none
    pub fn name(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.pattern)
    }
}

/// One list element in the catalog document
#[derive(Debug, Serialize, Deserialize)]
struct CatalogEntry {
    secret: SecretDefinition,
}

/// On-disk catalog shape: `secrets: [{ secret: { pattern, ... } }]`
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    secrets: Vec<CatalogEntry>,
}

/// Load the built-in secret definitions
pub fn load_default() -> Result<Vec<SecretDefinition>> {
    parse_catalog(EMBEDDED_CATALOG).context("Failed to parse embedded secrets catalog")
}

/// Load secret definitions from an external catalog file
pub fn load_file(path: &Path) -> Result<Vec<SecretDefinition>> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    parse_catalog(&yaml).with_context(|| format!("Failed to parse catalog file: {}", path.display()))
}

fn parse_catalog(yaml: &str) -> Result<Vec<SecretDefinition>> {
    let file: CatalogFile = serde_yml::from_str(yaml)?;
    Ok(file.secrets.into_iter().map(|e| e.secret).collect())
}

/// A secret definition with its regex compiled once per run
#[derive(Debug, Clone)]
pub struct CompiledDefinition {
    pub definition: SecretDefinition,
    pub regex: Regex,
}

impl CompiledDefinition {
    /// Compile one definition, applying any extra flags.
    ///
    /// An invalid pattern or an unknown flag character is a fatal
    /// configuration error, not a per-match failure.
    pub fn compile(definition: SecretDefinition) -> Result<Self> {
        let mut builder = RegexBuilder::new(&definition.pattern);
        if let Some(flags) = &definition.flags {
            for flag in flags.chars() {
                match flag {
                    'i' => builder.case_insensitive(true),
                    'm' => builder.multi_line(true),
                    's' => builder.dot_matches_new_line(true),
                    'x' => builder.ignore_whitespace(true),
                    other => {
                        anyhow::bail!(
                            "Unknown regex flag '{}' on pattern '{}'",
                            other,
                            definition.name()
                        )
                    }
                };
            }
        }
        let regex = builder
            .build()
            .with_context(|| format!("Invalid regex pattern: {}", definition.pattern))?;
        Ok(Self { definition, regex })
    }
}

/// Deduplicate definitions by pattern (first occurrence wins) and compile
/// each regex once for the whole run.
pub fn compile_definitions(definitions: Vec<SecretDefinition>) -> Result<Vec<CompiledDefinition>> {
    let mut seen = HashSet::new();
    let mut compiled = Vec::new();
    for definition in definitions {
        if !seen.insert(definition.pattern.clone()) {
            tracing::debug!("Skipping duplicate pattern: {}", definition.pattern);
            continue;
        }
        compiled.push(CompiledDefinition::compile(definition)?);
    }
    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_catalog() {
        let definitions = load_default().unwrap();

        assert!(!definitions.is_empty());
        assert!(definitions.iter().any(|d| d.name() == "AWS access key ID"));
        assert!(definitions.iter().any(|d| d.name() == "PEM Private Key"));

        // GitHub tokens are verifiable against the live API
        let github = definitions
            .iter()
            .find(|d| d.name() == "GitHub personal access or OAuth2 token")
            .unwrap();
        assert_eq!(github.verify.as_deref(), Some("github_token"));
        assert!(github.ignore.contains(&"package-lock.json".to_string()));
    }

    #[test]
    fn test_default_catalog_compiles() {
        let compiled = compile_definitions(load_default().unwrap()).unwrap();
        assert!(compiled.len() >= 10);
    }

    #[test]
    fn test_parse_catalog_shape() {
        let yaml = r#"
secrets:
  - secret:
      pattern: "test-[a-z]{5}"
      description: Test token
      ignore:
        - ignored.txt
  - secret:
      pattern: "other-[0-9]+"
"#;
        let definitions = parse_catalog(yaml).unwrap();
        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions[0].name(), "Test token");
        assert_eq!(definitions[0].ignore, vec!["ignored.txt".to_string()]);
        // No description falls back to the raw pattern
        assert_eq!(definitions[1].name(), "other-[0-9]+");
    }

    #[test]
    fn test_invalid_pattern_is_fatal() {
        let definition = SecretDefinition::from_pattern("[unclosed");
        assert!(CompiledDefinition::compile(definition).is_err());
    }

    #[test]
    fn test_unknown_flag_is_fatal() {
        let mut definition = SecretDefinition::from_pattern("abc");
        definition.flags = Some("iq".to_string());
        assert!(CompiledDefinition::compile(definition).is_err());
    }

    #[test]
    fn test_flags_applied() {
        let mut definition = SecretDefinition::from_pattern("secret");
        definition.flags = Some("i".to_string());
        let compiled = CompiledDefinition::compile(definition).unwrap();
        assert!(compiled.regex.is_match("SECRET"));
    }

    #[test]
    fn test_dedup_by_pattern_first_wins() {
        let mut first = SecretDefinition::from_pattern("dup-[0-9]+");
        first.description = Some("kept".to_string());
        let mut second = SecretDefinition::from_pattern("dup-[0-9]+");
        second.description = Some("discarded".to_string());

        let compiled = compile_definitions(vec![first, second]).unwrap();
        assert_eq!(compiled.len(), 1);
        assert_eq!(compiled[0].definition.name(), "kept");
    }
}
