//! Scan command
//!
//! Runs the full project scan: catalog assembly, file enumeration, the
//! detection engine, and delivery of the findings as a JSON annotations
//! file. Exits non-zero when any secret is detected so the command can
//! gate a CI pipeline.

use crate::catalog::{self, SecretDefinition};
use crate::cli::{Output, ScanArgs};
use crate::scan::{scan_project, FsReader, GlobEnumerator, ScanConfiguration, Secret};
use crate::verify::{UnknownVerifierPolicy, VerificationCache, VerifierRegistry};
use anyhow::{Context, Result};
use serde::Serialize;
use std::process::ExitCode;

/// One check-annotation record, the shape result consumers ingest
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Annotation<'a> {
    annotation_level: &'static str,
    path: &'a str,
    start_line: usize,
    end_line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_column: Option<usize>,
    title: &'a str,
    message: &'a str,
}

impl<'a> From<&'a Secret> for Annotation<'a> {
    fn from(secret: &'a Secret) -> Self {
        Self {
            annotation_level: "failure",
            path: &secret.path,
            start_line: secret.start_line,
            end_line: secret.end_line,
            start_column: secret.start_offset,
            end_column: secret.end_offset,
            title: &secret.name,
            message: &secret.description,
        }
    }
}

/// Execute the scan command
pub async fn execute(args: ScanArgs, output: &Output) -> Result<ExitCode> {
    output.header("🔍 Secret Scanning");
    tracing::info!("Starting secret scanning on '{}'", args.directory.display());

    output.step("Loading pattern catalog");
    let mut definitions = match &args.patterns_file {
        Some(path) => catalog::load_file(path)?,
        None => catalog::load_default()?,
    };
    definitions.extend(args.pattern.iter().map(|p| SecretDefinition::from_pattern(p)));

    let config = ScanConfiguration {
        secret_definitions: definitions,
        disabled: args.disabled.clone(),
        exceptions: args.exception.clone(),
        glob: args.glob.clone(),
    }
    .compile()?;

    let policy = if args.fail_on_unknown_verifier {
        UnknownVerifierPolicy::Fail
    } else {
        UnknownVerifierPolicy::Detect
    };
    let registry = if args.skip_verification {
        // Empty registry: every verifiable pattern falls through to
        // default-detected classification.
        VerifierRegistry::new(UnknownVerifierPolicy::Detect)
    } else {
        VerifierRegistry::builtin(policy)
    };

    let mut cache = match &args.cache_file {
        Some(path) => VerificationCache::load(path)?,
        None => VerificationCache::new(),
    };
    if !cache.is_empty() {
        output.verbose(&format!("Loaded {} cached verification results", cache.len()));
    }

    let enumerator = GlobEnumerator::new(&args.directory);
    let reader = FsReader::new(&args.directory);
    let result = scan_project(&enumerator, &reader, &config, &registry, &mut cache).await?;

    if let Some(path) = &args.cache_file {
        cache.save(path)?;
    }

    let output_file = args
        .output
        .clone()
        .unwrap_or_else(|| args.directory.join("secrets.json"));
    let annotations: Vec<Annotation> = result.detected.iter().map(Annotation::from).collect();
    std::fs::write(&output_file, serde_json::to_string_pretty(&annotations)?)
        .with_context(|| format!("Failed to write findings to {}", output_file.display()))?;

    output.blank_line();
    if result.detected.is_empty() {
        output.success(&format!(
            "Scanned {} {}, no secrets found",
            result.file_count,
            plural(result.file_count, "file", "files"),
        ));
        if !result.excluded.is_empty() {
            output.info(&format!(
                "{} {} matched but excluded by exception",
                result.excluded.len(),
                plural(result.excluded.len(), "value", "values"),
            ));
        }
        Ok(ExitCode::SUCCESS)
    } else {
        output.error(&format!(
            "Found {} {} in {} scanned {}",
            result.detected.len(),
            plural(result.detected.len(), "secret", "secrets"),
            result.file_count,
            plural(result.file_count, "file", "files"),
        ));
        output.blank_line();
        for secret in &result.detected {
            output.file_location(&secret.path, secret.start_line);
            output.indent(&secret.description);
        }
        output.blank_line();
        output.separator();
        output.info(&format!("Findings written to {}", output_file.display()));
        Ok(ExitCode::FAILURE)
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_shape_for_single_line_finding() {
        let secret = Secret {
            name: "AWS access key ID".into(),
            path: "config.env".into(),
            value: "AKIA0123456789ABCDEF".into(),
            description: "AKIA0123456789ABCDEF detected as AWS access key ID".into(),
            start_line: 3,
            end_line: 3,
            start_offset: Some(25),
            end_offset: Some(45),
        };
        let json = serde_json::to_value(Annotation::from(&secret)).unwrap();
        assert_eq!(json["annotationLevel"], "failure");
        assert_eq!(json["startLine"], 3);
        assert_eq!(json["startColumn"], 25);
        assert_eq!(json["endColumn"], 45);
        assert_eq!(json["title"], "AWS access key ID");
    }

    #[test]
    fn test_annotation_omits_columns_for_multiline_finding() {
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
        let json = serde_json::to_value(Annotation::from(&secret)).unwrap();
        assert!(json.get("startColumn").is_none());
        assert!(json.get("endColumn").is_none());
    }
}
