//! Live credential verification
//!
//! A regex decides whether a value is *shaped* like a secret; a verifier
//! decides whether it is *currently* a live credential. Verifiers are
//! external, attacker-influenced network calls, so the contract is strict:
//! never fail on malformed input (any error means "not verified") and keep
//! a bounded timeout. Results are memoized in a [`VerificationCache`] so a
//! distinct value is checked at most once per run, no matter how many files
//! or definitions it appears in.

mod cache;
mod github;

pub use cache::VerificationCache;
pub use github::{GitHubAppVerifier, GitHubTokenVerifier};

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Capability to confirm that a matched string denotes a live credential
#[async_trait]
pub trait Verifier: Send + Sync {
    /// Check the value against the authoritative source.
    ///
    /// Implementations must treat any failure (transport error, timeout,
    /// rejected input) as `false` rather than raising.
    async fn verify(&self, value: &str) -> bool;
}

/// What to do when a definition names a verifier the registry doesn't know
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownVerifierPolicy {
    /// Treat the definition as unverifiable: matches are detected by default
    #[default]
    Detect,
    /// Abort the run with a configuration error
    Fail,
}

/// Late-bound mapping from symbolic verifier names to verifier instances
pub struct VerifierRegistry {
    verifiers: HashMap<String, Arc<dyn Verifier>>,
    policy: UnknownVerifierPolicy,
}

impl VerifierRegistry {
    /// Create an empty registry with the given unknown-name policy
    pub fn new(policy: UnknownVerifierPolicy) -> Self {
        Self {
            verifiers: HashMap::new(),
            policy,
        }
    }

    /// Registry with the built-in verifiers wired up
    pub fn builtin(policy: UnknownVerifierPolicy) -> Self {
        let mut registry = Self::new(policy);
        registry.register("github_token", Arc::new(GitHubTokenVerifier::new()));
        registry.register("github_app", Arc::new(GitHubAppVerifier::new()));
        registry
    }

    /// Register a verifier under a symbolic name
    pub fn register(&mut self, name: &str, verifier: Arc<dyn Verifier>) {
        self.verifiers.insert(name.to_string(), verifier);
    }

    /// Resolve a verifier by the name found in a secret definition.
    ///
    /// Returns `Ok(None)` for an unknown name under the `Detect` policy,
    /// so the caller falls through to default-detected classification.
    pub fn resolve(&self, name: &str) -> Result<Option<&Arc<dyn Verifier>>> {
        match self.verifiers.get(name) {
            Some(verifier) => Ok(Some(verifier)),
            None => match self.policy {
                UnknownVerifierPolicy::Detect => {
                    tracing::debug!("No verifier registered for '{}', treating matches as detected", name);
                    Ok(None)
                }
                UnknownVerifierPolicy::Fail => {
                    anyhow::bail!("Unknown verifier: {}", name)
                }
            },
        }
    }
}
