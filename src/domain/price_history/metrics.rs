//! Metric cards — the four headline values derived from a price summary.

use super::summary::PriceSummary;
use crate::shared::fmt;
use rust_decimal::Decimal;

/// Direction hint for a card's accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// One display-ready metric row.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    pub subtitle: &'static str,
    pub trend: Trend,
}

impl PriceSummary {
    /// Current price, period high, period low, and percent change.
    pub fn metric_cards(&self) -> [MetricCard; 4] {
        let positive = self.change_percent >= Decimal::ZERO;
        [
            MetricCard {
                title: "Current Price",
                value: fmt::format_price(&self.current_price),
                subtitle: "Live Price",
                trend: Trend::Up,
            },
            MetricCard {
                title: "30-Day High",
                value: fmt::format_price(&self.period_high),
                subtitle: "Peak Performance",
                trend: Trend::Up,
            },
            MetricCard {
                title: "30-Day Low",
                value: fmt::format_price(&self.period_low),
                subtitle: "Lowest Point",
                trend: Trend::Down,
            },
            MetricCard {
                title: "30-Day Change",
                value: fmt::format_percent(&self.change_percent),
                subtitle: if positive { "Positive Growth" } else { "Decline" },
                trend: if positive { Trend::Up } else { Trend::Down },
            },
        ]
    }
}
