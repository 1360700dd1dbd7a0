//! Low-level HTTP client — `CoinLensHttp`.
//!
//! One method per API endpoint. Returns wire types; conversion to derived
//! values happens at the domain boundary. The API is read-only, so every
//! endpoint is a GET.

use crate::domain::market_share::wire::GlobalResponse;
use crate::domain::price_history::wire::MarketChartResponse;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::{CoinId, VsCurrency};

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for a CoinGecko-style REST API.
#[derive(Clone)]
pub struct CoinLensHttp {
    base_url: String,
    client: Client,
    retry: RetryPolicy,
}

impl CoinLensHttp {
    pub fn new(base_url: &str) -> Self {
        Self::with_retry(base_url, RetryPolicy::None)
    }

    pub fn with_retry(base_url: &str, retry: RetryPolicy) -> Self {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(4);
        }

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            retry,
        }
    }

    // ── Price history ────────────────────────────────────────────────────

    pub async fn get_market_chart(
        &self,
        coin: &CoinId,
        vs_currency: VsCurrency,
        days: u32,
    ) -> Result<MarketChartResponse, HttpError> {
        let url = self.market_chart_url(coin, vs_currency, days);
        self.get(&url).await
    }

    fn market_chart_url(&self, coin: &CoinId, vs_currency: VsCurrency, days: u32) -> String {
        format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}",
            self.base_url,
            urlencoding::encode(coin.as_str()),
            vs_currency.as_str(),
            days
        )
    }

    // ── Global snapshot ──────────────────────────────────────────────────

    pub async fn get_global(&self) -> Result<GlobalResponse, HttpError> {
        let url = format!("{}/global", self.base_url);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let config = match &self.retry {
            RetryPolicy::None => {
                return self.do_get(url).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_get::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if should_retry(&config, &e) && attempt < config.max_retries {
                        let delay = retry_delay(&config, attempt, &e);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let retry_after = retry_after_ms(resp.headers());
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: retry_after,
            }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

/// Whether an error is worth another attempt under the given policy. Pure
/// predicate; sleeping is the caller's job.
fn should_retry(config: &RetryConfig, error: &HttpError) -> bool {
    match error {
        HttpError::ServerError { status, .. } => config.retryable_statuses.contains(status),
        HttpError::RateLimited { .. } => config.retryable_statuses.contains(&429),
        HttpError::Timeout => true,
        HttpError::Reqwest(re) => {
            #[cfg(not(target_arch = "wasm32"))]
            let retryable = re.is_connect() || re.is_timeout() || re.is_request();
            #[cfg(target_arch = "wasm32")]
            let retryable = re.is_timeout() || re.is_request();
            retryable
        }
        _ => false,
    }
}

/// Delay before the next attempt. A server-provided `Retry-After` hint takes
/// precedence over the backoff schedule.
fn retry_delay(config: &RetryConfig, attempt: u32, error: &HttpError) -> Duration {
    if let HttpError::RateLimited {
        retry_after_ms: Some(ms),
    } = error
    {
        return Duration::from_millis(*ms);
    }
    config.delay_for_attempt(attempt)
}

/// Parse a `Retry-After` header into milliseconds. Only the delta-seconds
/// form is handled; HTTP-date values read as absent.
fn retry_after_ms(headers: &reqwest::header::HeaderMap) -> Option<u64> {
    headers
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(|secs| secs.saturating_mul(1000))
}
