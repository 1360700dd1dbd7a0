//! Wire types for the market chart endpoint (REST).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One `[timestamp_ms, value]` pair from a market chart array.
///
/// The backend sends plain JSON numbers; `Decimal` deserializes them
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPricePoint(pub i64, pub Decimal);

impl RawPricePoint {
    pub fn timestamp_ms(&self) -> i64 {
        self.0
    }

    pub fn value(&self) -> Decimal {
        self.1
    }
}

/// REST response for `/coins/{id}/market_chart`.
///
/// `prices` is required — a response without it is a parse failure. The
/// companion arrays are carried for callers that want them but default to
/// empty when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<RawPricePoint>,
    #[serde(default)]
    pub market_caps: Vec<RawPricePoint>,
    #[serde(default)]
    pub total_volumes: Vec<RawPricePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_chart_deserialize() {
        let json = r#"{
            "prices": [[1730808000000, 68123.45], [1730894400000, 69001.2]],
            "market_caps": [[1730808000000, 1340000000000.0]],
            "total_volumes": [[1730808000000, 35000000000.0]]
        }"#;
        let resp: MarketChartResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.prices.len(), 2);
        assert_eq!(resp.prices[0].timestamp_ms(), 1_730_808_000_000);
        assert_eq!(resp.prices[1].value(), "69001.2".parse::<Decimal>().unwrap());
        assert_eq!(resp.market_caps.len(), 1);
    }

    #[test]
    fn test_market_chart_missing_prices_fails() {
        let json = r#"{ "market_caps": [] }"#;
        assert!(serde_json::from_str::<MarketChartResponse>(json).is_err());
    }

    #[test]
    fn test_market_chart_companion_arrays_default() {
        let json = r#"{ "prices": [] }"#;
        let resp: MarketChartResponse = serde_json::from_str(json).unwrap();
        assert!(resp.market_caps.is_empty());
        assert!(resp.total_volumes.is_empty());
    }
}
