//! Price history domain — 30-day chart data and the derived summary.

#[cfg(feature = "http")]
pub mod client;
pub mod metrics;
pub mod summary;
pub mod wire;

pub use metrics::{MetricCard, Trend};
pub use summary::{PricePoint, PriceSummary};

/// Default lookback window, in days.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 30;
