use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Memo of verification outcomes, keyed by the raw matched value.
///
/// Absence of a key means "not yet checked". The cache is created fresh per
/// run by default; a caller can persist it across runs to avoid re-verifying
/// previously seen values. Entries are written once per distinct value and
/// never removed here; eviction is the caller's responsibility.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationCache {
    entries: HashMap<String, bool>,
}

impl VerificationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached outcome for a value, if it was ever checked
    pub fn get(&self, value: &str) -> Option<bool> {
        self.entries.get(value).copied()
    }

    /// Record the outcome for a value
    pub fn insert(&mut self, value: &str, live: bool) {
        self.entries.insert(value.to_string(), live);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a persisted cache; a missing file yields an empty cache
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read verification cache: {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse verification cache: {}", path.display()))
    }

    /// Persist the cache for future runs
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write verification cache: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_absent_key_means_unchecked() {
        let cache = VerificationCache::new();
        assert_eq!(cache.get("ghp_deadbeef"), None);
    }

    #[test]
    fn test_insert_and_get() {
        let mut cache = VerificationCache::new();
        cache.insert("token-a", true);
        cache.insert("token-b", false);
        assert_eq!(cache.get("token-a"), Some(true));
        assert_eq!(cache.get("token-b"), Some(false));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cache.json");

        let mut cache = VerificationCache::new();
        cache.insert("value", true);
        cache.save(&path).unwrap();

        let loaded = VerificationCache::load(&path).unwrap();
        assert_eq!(loaded.get("value"), Some(true));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let cache = VerificationCache::load(&temp_dir.path().join("absent.json")).unwrap();
        assert!(cache.is_empty());
    }
}
