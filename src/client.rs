//! High-level client — `CoinLensClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder, the shared configuration, and the poller
//! constructors.

use crate::domain::market_share::MarketShareBreakdown;
use crate::domain::price_history::{PriceSummary, DEFAULT_LOOKBACK_DAYS};
use crate::error::SdkError;
use crate::http::retry::RetryPolicy;
use crate::http::CoinLensHttp;
use crate::poll::poller::Poller;
use crate::shared::{CoinId, VsCurrency};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::market_share::client::MarketShareClient;
pub use crate::domain::price_history::client::PriceHistoryClient;

/// Default refresh interval: 5 minutes.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(300_000);

/// The primary entry point for the coinlens SDK.
///
/// Provides nested sub-client accessors per domain (`client.price_history()`,
/// `client.market_share()`) and poller constructors for each pipeline.
#[derive(Clone)]
pub struct CoinLensClient {
    pub(crate) http: CoinLensHttp,
    pub(crate) coin_id: CoinId,
    pub(crate) vs_currency: VsCurrency,
    pub(crate) days: u32,
    pub(crate) refresh_interval: Duration,
}

impl CoinLensClient {
    pub fn builder() -> CoinLensClientBuilder {
        CoinLensClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn price_history(&self) -> PriceHistoryClient<'_> {
        PriceHistoryClient { client: self }
    }

    pub fn market_share(&self) -> MarketShareClient<'_> {
        MarketShareClient { client: self }
    }

    // ── Pollers ──────────────────────────────────────────────────────────

    /// Poller for the price-series pipeline.
    ///
    /// The two pipelines are independent: each poller owns its own state and
    /// fetch schedule.
    pub fn price_poller(&self) -> Poller<PriceSummary> {
        let client = self.clone();
        Poller::new(self.refresh_interval, move || {
            let client = client.clone();
            async move { client.price_history().summary().await }
        })
    }

    /// Poller for the market-share pipeline.
    pub fn market_share_poller(&self) -> Poller<MarketShareBreakdown> {
        let client = self.clone();
        Poller::new(self.refresh_interval, move || {
            let client = client.clone();
            async move { client.market_share().breakdown().await }
        })
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    pub fn coin(&self) -> &CoinId {
        &self.coin_id
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinLensClientBuilder {
    base_url: String,
    coin_id: CoinId,
    vs_currency: VsCurrency,
    days: u32,
    refresh_interval: Duration,
    retry: RetryPolicy,
}

impl Default for CoinLensClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            coin_id: CoinId::from("bitcoin"),
            vs_currency: VsCurrency::Usd,
            days: DEFAULT_LOOKBACK_DAYS,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            retry: RetryPolicy::None,
        }
    }
}

impl CoinLensClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn coin(mut self, coin: CoinId) -> Self {
        self.coin_id = coin;
        self
    }

    pub fn vs_currency(mut self, currency: VsCurrency) -> Self {
        self.vs_currency = currency;
        self
    }

    /// Lookback window in days for the price series.
    pub fn days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Retry policy for all requests. Defaults to a single attempt.
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> Result<CoinLensClient, SdkError> {
        Ok(CoinLensClient {
            http: CoinLensHttp::with_retry(&self.base_url, self.retry),
            coin_id: self.coin_id,
            vs_currency: self.vs_currency,
            days: self.days,
            refresh_interval: self.refresh_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = CoinLensClient::builder().build().unwrap();
        assert_eq!(client.coin().as_str(), "bitcoin");
        assert_eq!(client.vs_currency, VsCurrency::Usd);
        assert_eq!(client.days, 30);
        assert_eq!(client.refresh_interval(), Duration::from_millis(300_000));
    }

    #[test]
    fn test_builder_overrides() {
        let client = CoinLensClient::builder()
            .coin(CoinId::from("ethereum"))
            .vs_currency(VsCurrency::Eur)
            .days(7)
            .refresh_interval(Duration::from_secs(60))
            .build()
            .unwrap();
        assert_eq!(client.coin().as_str(), "ethereum");
        assert_eq!(client.days, 7);
        assert_eq!(client.refresh_interval(), Duration::from_secs(60));
    }

    #[test]
    fn test_pollers_inherit_refresh_interval() {
        let client = CoinLensClient::builder()
            .refresh_interval(Duration::from_secs(30))
            .build()
            .unwrap();
        assert_eq!(client.price_poller().interval(), Duration::from_secs(30));
        assert_eq!(
            client.market_share_poller().interval(),
            Duration::from_secs(30)
        );
    }
}
