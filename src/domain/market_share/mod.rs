//! Market share domain — global market-cap percentages and the top-5 + others split.

pub mod breakdown;
#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use breakdown::{MarketShareBreakdown, MarketShareEntry, NAMED_ASSETS, OTHERS};
