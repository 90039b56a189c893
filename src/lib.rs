//! # Leakscan - Signature-Driven Secret Scanning
//!
//! Leakscan scans a source tree for occurrences of known-format credentials
//! (API keys, tokens, private keys, password-bearing URLs) and reports each
//! occurrence with exact line/column information. A matched value can
//! optionally be confirmed as a *live* credential through an external
//! verification call, with results memoized across the whole run.
//!
//! ## Quick Start
//!
//! ```bash
//! # Scan the current directory with the built-in catalog
//! leakscan scan
//!
//! # Scan only YAML files, pre-approving one known value
//! leakscan scan --glob '**/*.{yaml,yml}' --exception 'AKIAEXAMPLEEXAMPLE00'
//! ```

pub mod catalog;
pub mod cli;
pub mod scan;
pub mod verify;

pub use cli::{Cli, Output};

/// Result type alias for leakscan operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
