//! Price history sub-client — chart queries and the derived summary.

use super::summary::PriceSummary;
use super::wire::MarketChartResponse;
use crate::client::CoinLensClient;
use crate::error::SdkError;
use crate::shared::CoinId;

/// Sub-client for price history operations.
pub struct PriceHistoryClient<'a> {
    pub(crate) client: &'a CoinLensClient,
}

impl<'a> PriceHistoryClient<'a> {
    /// Raw market chart for the client's configured coin and window.
    pub async fn chart(&self) -> Result<MarketChartResponse, SdkError> {
        self.chart_for(&self.client.coin_id).await
    }

    /// Raw market chart for an arbitrary coin.
    pub async fn chart_for(&self, coin: &CoinId) -> Result<MarketChartResponse, SdkError> {
        Ok(self
            .client
            .http
            .get_market_chart(coin, self.client.vs_currency, self.client.days)
            .await?)
    }

    /// Derived summary for the client's configured coin.
    pub async fn summary(&self) -> Result<PriceSummary, SdkError> {
        Ok(self.chart().await?.into())
    }

    /// Derived summary for an arbitrary coin.
    pub async fn summary_for(&self, coin: &CoinId) -> Result<PriceSummary, SdkError> {
        Ok(self.chart_for(coin).await?.into())
    }
}
