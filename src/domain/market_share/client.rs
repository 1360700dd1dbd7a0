//! Market share sub-client — global snapshot queries and the derived split.

use super::breakdown::MarketShareBreakdown;
use super::wire::GlobalResponse;
use crate::client::CoinLensClient;
use crate::error::SdkError;

/// Sub-client for market share operations.
pub struct MarketShareClient<'a> {
    pub(crate) client: &'a CoinLensClient,
}

impl<'a> MarketShareClient<'a> {
    /// Raw global snapshot.
    pub async fn global(&self) -> Result<GlobalResponse, SdkError> {
        Ok(self.client.http.get_global().await?)
    }

    /// Derived top-5 + others split.
    pub async fn breakdown(&self) -> Result<MarketShareBreakdown, SdkError> {
        Ok(self.global().await?.into())
    }
}
