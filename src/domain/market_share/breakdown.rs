//! The market-share deriver — global percentages to a fixed top-5 + others split.

use rust_decimal::Decimal;
use std::collections::HashMap;

/// The five named assets as `(ticker, coin_id)`, in display order.
///
/// Order is significant: it drives color assignment and legend ordering in
/// the consuming display.
pub const NAMED_ASSETS: [(&str, &str); 5] = [
    ("btc", "bitcoin"),
    ("eth", "ethereum"),
    ("bnb", "binancecoin"),
    ("xrp", "ripple"),
    ("sol", "solana"),
];

/// Name of the synthetic residual entry.
pub const OTHERS: &str = "others";

/// One slice of the market-share split.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketShareEntry {
    /// Coin id (`"bitcoin"`) or [`OTHERS`].
    pub name: String,
    /// Share of total market cap, in percent.
    pub share_percent: Decimal,
}

impl MarketShareEntry {
    /// Short legend symbol: `"bitcoin"` → `"BTC"`, `"others"` → `"Others"`.
    pub fn symbol(&self) -> String {
        for (ticker, name) in NAMED_ASSETS {
            if name == self.name {
                return ticker.to_uppercase();
            }
        }
        if self.name == OTHERS {
            "Others".to_string()
        } else {
            self.name.to_uppercase()
        }
    }
}

/// Six entries: the five named assets followed by the clamped "others"
/// residual.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketShareBreakdown {
    pub entries: Vec<MarketShareEntry>,
}

impl MarketShareBreakdown {
    /// Derive the split from a ticker → percentage map.
    ///
    /// Missing tickers read as zero. The residual clamps at zero, so a
    /// snapshot whose named shares sum past 100 displays less than 100%
    /// in total rather than a negative sliver.
    pub fn derive(percentages: &HashMap<String, Decimal>) -> Self {
        let mut entries: Vec<MarketShareEntry> = NAMED_ASSETS
            .iter()
            .map(|(ticker, name)| MarketShareEntry {
                name: (*name).to_string(),
                share_percent: percentages.get(*ticker).copied().unwrap_or_default(),
            })
            .collect();

        let top_total: Decimal = entries.iter().map(|e| e.share_percent).sum();
        entries.push(MarketShareEntry {
            name: OTHERS.to_string(),
            share_percent: (Decimal::ONE_HUNDRED - top_total).max(Decimal::ZERO),
        });

        Self { entries }
    }

    /// The named entries, in fixed order — everything before the residual.
    pub fn named(&self) -> &[MarketShareEntry] {
        &self.entries[..self.entries.len().saturating_sub(1)]
    }

    /// The synthetic residual entry. `None` only for a hand-built empty
    /// value; derived breakdowns always carry it.
    pub fn others(&self) -> Option<&MarketShareEntry> {
        self.entries.last()
    }
}

impl From<super::wire::GlobalResponse> for MarketShareBreakdown {
    fn from(resp: super::wire::GlobalResponse) -> Self {
        Self::derive(&resp.data.market_cap_percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shares(pairs: &[(&str, i64)]) -> HashMap<String, Decimal> {
        pairs
            .iter()
            .map(|(t, v)| (t.to_string(), Decimal::from(*v)))
            .collect()
    }

    #[test]
    fn test_derive_with_residual() {
        let split = MarketShareBreakdown::derive(&shares(&[
            ("btc", 40),
            ("eth", 20),
            ("bnb", 5),
            ("xrp", 3),
            ("sol", 2),
        ]));
        assert_eq!(split.entries.len(), 6);
        let named_total: Decimal = split.named().iter().map(|e| e.share_percent).sum();
        assert_eq!(named_total, Decimal::from(70));
        assert_eq!(split.others().unwrap().share_percent, Decimal::from(30));
    }

    #[test]
    fn test_derive_clamps_negative_residual() {
        let split = MarketShareBreakdown::derive(&shares(&[("btc", 60), ("eth", 50)]));
        assert_eq!(split.others().unwrap().share_percent, Decimal::ZERO);
    }

    #[test]
    fn test_missing_tickers_read_as_zero() {
        let split = MarketShareBreakdown::derive(&shares(&[("btc", 50)]));
        assert_eq!(split.entries[1].name, "ethereum");
        assert_eq!(split.entries[1].share_percent, Decimal::ZERO);
        assert_eq!(split.others().unwrap().share_percent, Decimal::from(50));
    }

    #[test]
    fn test_order_is_fixed() {
        let split = MarketShareBreakdown::derive(&HashMap::new());
        let names: Vec<&str> = split.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            ["bitcoin", "ethereum", "binancecoin", "ripple", "solana", "others"]
        );
    }

    #[test]
    fn test_unrelated_tickers_ignored() {
        let split = MarketShareBreakdown::derive(&shares(&[("btc", 40), ("doge", 10)]));
        assert_eq!(split.others().unwrap().share_percent, Decimal::from(60));
    }

    #[test]
    fn test_accessors_tolerate_hand_built_empty_value() {
        let split = MarketShareBreakdown {
            entries: Vec::new(),
        };
        assert!(split.named().is_empty());
        assert!(split.others().is_none());
    }

    #[test]
    fn test_symbols() {
        let split = MarketShareBreakdown::derive(&HashMap::new());
        let symbols: Vec<String> = split.entries.iter().map(|e| e.symbol()).collect();
        assert_eq!(symbols, ["BTC", "ETH", "BNB", "XRP", "SOL", "Others"]);
    }
}
