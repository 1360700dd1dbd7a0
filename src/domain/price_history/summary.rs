//! The price-series deriver — raw chart points to display-ready summary.

use super::wire::RawPricePoint;
use crate::shared::fmt;
use rust_decimal::Decimal;

/// One chart point with its axis label.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    /// Calendar label, e.g. `"Nov 5"`.
    pub label: String,
    pub price: Decimal,
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
}

/// Derived summary of one lookback window of prices.
///
/// Recomputed in full on every fetch; never patched incrementally. An empty
/// input degrades every field to zero instead of failing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceSummary {
    pub series: Vec<PricePoint>,
    pub current_price: Decimal,
    pub first_price: Decimal,
    pub period_high: Decimal,
    pub period_low: Decimal,
    pub change_absolute: Decimal,
    pub change_percent: Decimal,
}

impl PriceSummary {
    /// Derive the summary from raw points, oldest first.
    ///
    /// No outlier filtering: a corrupt upstream value flows straight into
    /// high/low/change.
    pub fn derive(raw: &[RawPricePoint]) -> Self {
        let series: Vec<PricePoint> = raw
            .iter()
            .map(|p| PricePoint {
                label: fmt::format_day_label(p.timestamp_ms()),
                price: p.value(),
                timestamp: p.timestamp_ms(),
            })
            .collect();

        let current_price = series.last().map(|p| p.price).unwrap_or_default();
        let first_price = series.first().map(|p| p.price).unwrap_or_default();
        let period_high = series.iter().map(|p| p.price).max().unwrap_or_default();
        let period_low = series.iter().map(|p| p.price).min().unwrap_or_default();
        let change_absolute = current_price - first_price;
        let change_percent = if first_price > Decimal::ZERO {
            change_absolute / first_price * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        Self {
            series,
            current_price,
            first_price,
            period_high,
            period_low,
            change_absolute,
            change_percent,
        }
    }
}

impl From<super::wire::MarketChartResponse> for PriceSummary {
    fn from(resp: super::wire::MarketChartResponse) -> Self {
        Self::derive(&resp.prices)
    }
}
