//! GitHub credential verifiers
//!
//! Both verifiers present the matched value as a token to the GitHub API
//! and treat any non-success response (or transport failure) as "not a
//! live credential". The HTTP client carries the bounded timeout required
//! of verifiers.

use super::Verifier;
use async_trait::async_trait;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.github.com";
const VERIFY_TIMEOUT: Duration = Duration::from_secs(10);

fn api_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(VERIFY_TIMEOUT)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default()
}

/// Confirms a GitHub personal access or OAuth2 token by authenticating as
/// the token's user.
pub struct GitHubTokenVerifier {
    client: reqwest::Client,
    api_url: String,
}

impl GitHubTokenVerifier {
    pub fn new() -> Self {
        Self::with_api_url(DEFAULT_API_URL)
    }

    pub fn with_api_url(api_url: &str) -> Self {
        Self {
            client: api_client(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for GitHubTokenVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Verifier for GitHubTokenVerifier {
    async fn verify(&self, value: &str) -> bool {
        let response = self
            .client
            .get(format!("{}/user", self.api_url))
            .header("Authorization", format!("token {}", value))
            .send()
            .await;
        match response {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("GitHub token verification failed: {}", e);
                false
            }
        }
    }
}

/// Confirms a GitHub App installation token by authenticating as the app.
pub struct GitHubAppVerifier {
    client: reqwest::Client,
    api_url: String,
}

impl GitHubAppVerifier {
    pub fn new() -> Self {
        Self::with_api_url(DEFAULT_API_URL)
    }

    pub fn with_api_url(api_url: &str) -> Self {
        Self {
            client: api_client(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for GitHubAppVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Verifier for GitHubAppVerifier {
    async fn verify(&self, value: &str) -> bool {
        let response = self
            .client
            .get(format!("{}/app", self.api_url))
            .header("Authorization", format!("Bearer {}", value))
            .send()
            .await;
        match response {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("GitHub App verification failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Verifiers must swallow malformed input instead of raising; a value
    // with control characters makes reqwest reject the header, which has
    // to come back as "not verified".
    #[tokio::test]
    async fn test_malformed_input_is_not_live() {
        let verifier = GitHubTokenVerifier::with_api_url("http://127.0.0.1:0");
        assert!(!verifier.verify("bad\ntoken").await);
    }

    #[tokio::test]
    async fn test_unreachable_api_is_not_live() {
        let verifier = GitHubAppVerifier::with_api_url("http://127.0.0.1:0");
        assert!(!verifier.verify("v1.0123456789abcdef").await);
    }
}
