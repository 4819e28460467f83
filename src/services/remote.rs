// Remote Humanizer Client
// Thin HTTP client for the external humanization service, with a TTL-cached
// health probe and automatic local fallback when the service is unreachable.

use crate::models::{HealthStatus, HumanizeApiRequest, HumanizeApiResponse, HumanizeSource, HumanizedResult};
use crate::services::config_store::{AppConfig, ConfigStore};
use crate::services::humanizer::humanize_fallback;
use reqwest::Client;
use std::env;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum HumanizerError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },
    #[error("Missing content in response")]
    MissingContent,
}

pub struct HumanizerClient {
    client: Client,
    base_url: String,
    fallback_enabled: bool,
    health_cache_ttl: Duration,
    health_cache: Mutex<Option<(Instant, bool)>>,
}

/// Resolve the API base URL: env var first, then config file, then default.
pub fn resolve_base_url(config: &AppConfig) -> String {
    if let Ok(url) = env::var("HUMANYZE_API_URL") {
        let trimmed = url.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    if let Some(config_dir) = ConfigStore::default_config_dir() {
        let store = ConfigStore::new(config_dir);
        if let Ok(Some(url)) = store.api_base_url() {
            return url;
        }
    }

    config.api.base_url.clone()
}

impl Default for HumanizerClient {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl HumanizerClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: resolve_base_url(config),
            fallback_enabled: config.fallback_enabled,
            health_cache_ttl: Duration::from_secs(config.health_cache_secs),
            health_cache: Mutex::new(None),
        }
    }

    pub fn with_proxy(config: &AppConfig, proxy_url: &str) -> Result<Self, HumanizerError> {
        let proxy = reqwest::Proxy::all(proxy_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .proxy(proxy)
            .build()?;

        Ok(Self {
            client,
            base_url: resolve_base_url(config),
            fallback_enabled: config.fallback_enabled,
            health_cache_ttl: Duration::from_secs(config.health_cache_secs),
            health_cache: Mutex::new(None),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Override the resolved base URL (CLI flag, tests).
    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = url.trim_end_matches('/').to_string();
        if let Ok(mut cache) = self.health_cache.lock() {
            *cache = None;
        }
    }

    /// Humanize through the remote service; on any failure fall back to the
    /// local transform when fallback is enabled.
    pub async fn humanize(&self, text: &str) -> Result<HumanizedResult, HumanizerError> {
        match self.humanize_remote(text).await {
            Ok(humanized) => Ok(HumanizedResult {
                original_text: text.to_string(),
                humanized_text: humanized,
                source: HumanizeSource::Remote,
            }),
            Err(err) if self.fallback_enabled => {
                warn!(error = %err, "remote humanize failed, using local fallback");
                self.mark_unhealthy();
                Ok(HumanizedResult {
                    original_text: text.to_string(),
                    humanized_text: humanize_fallback(text),
                    source: HumanizeSource::LocalFallback,
                })
            }
            Err(err) => Err(err),
        }
    }

    async fn humanize_remote(&self, text: &str) -> Result<String, HumanizerError> {
        let request = HumanizeApiRequest {
            text: text.to_string(),
            request_id: uuid::Uuid::new_v4().to_string(),
        };

        let start = Instant::now();
        let url = format!("{}/api/humanize", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HumanizerError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let data: HumanizeApiResponse = response.json().await?;
        let humanized = data.humanized_text.ok_or(HumanizerError::MissingContent)?;

        info!(
            latency_ms = start.elapsed().as_millis() as i64,
            request_id = %request.request_id,
            "humanize.remote_ok"
        );
        Ok(humanized)
    }

    /// Probe the remote health endpoint. Results are cached for the
    /// configured TTL so repeated callers don't hammer the service.
    pub async fn check_health(&self) -> bool {
        if let Ok(cache) = self.health_cache.lock() {
            if let Some((checked_at, ok)) = *cache {
                if checked_at.elapsed() < self.health_cache_ttl {
                    debug!(ok, "health.cache_hit");
                    return ok;
                }
            }
        }

        let ok = self.probe_health().await;
        if let Ok(mut cache) = self.health_cache.lock() {
            *cache = Some((Instant::now(), ok));
        }
        ok
    }

    async fn probe_health(&self) -> bool {
        let url = format!("{}/api/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<HealthStatus>().await {
                    Ok(status) => status.ok,
                    // A 200 with an unexpected body still counts as reachable.
                    Err(_) => true,
                }
            }
            Ok(response) => {
                warn!(status = response.status().as_u16(), "health.bad_status");
                false
            }
            Err(err) => {
                warn!(error = %err, "health.unreachable");
                false
            }
        }
    }

    fn mark_unhealthy(&self) {
        if let Ok(mut cache) = self.health_cache.lock() {
            *cache = Some((Instant::now(), false));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_config() -> AppConfig {
        let mut config = AppConfig::default();
        // TEST-NET-1 address: guaranteed unroutable, fails fast with a 1s timeout.
        config.api.base_url = "http://192.0.2.1:9".to_string();
        config.api.timeout_secs = 1;
        config
    }

    #[tokio::test]
    async fn test_unreachable_service_falls_back_locally() {
        std::env::remove_var("HUMANYZE_API_URL");
        let mut client = HumanizerClient::new(&offline_config());
        client.set_base_url("http://192.0.2.1:9");

        let result = client.humanize("It is fine. This is sufficient.").await.unwrap();
        assert_eq!(result.source, HumanizeSource::LocalFallback);
        assert_eq!(result.original_text, "It is fine. This is sufficient.");
        assert!(!result.humanized_text.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_service_without_fallback_errors() {
        std::env::remove_var("HUMANYZE_API_URL");
        let mut config = offline_config();
        config.fallback_enabled = false;
        let mut client = HumanizerClient::new(&config);
        client.set_base_url("http://192.0.2.1:9");

        assert!(client.humanize("Some text here.").await.is_err());
    }

    #[tokio::test]
    async fn test_health_cache_serves_repeat_calls() {
        std::env::remove_var("HUMANYZE_API_URL");
        let mut client = HumanizerClient::new(&offline_config());
        client.set_base_url("http://192.0.2.1:9");

        let first = Instant::now();
        assert!(!client.check_health().await);
        let probe_cost = first.elapsed();

        let cached = Instant::now();
        assert!(!client.check_health().await);
        // Second call must come from the cache, not another probe.
        assert!(cached.elapsed() < probe_cost.max(Duration::from_millis(100)));
    }

    #[test]
    fn test_set_base_url_trims_trailing_slash() {
        let mut client = HumanizerClient::new(&AppConfig::default());
        client.set_base_url("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
