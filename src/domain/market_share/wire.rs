//! Wire types for the global snapshot endpoint (REST).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// REST response for `/global`.
///
/// `data` is required — a response without it is a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalResponse {
    pub data: GlobalData,
}

/// The global snapshot payload. Only the market-cap percentages are
/// consumed; unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalData {
    /// Ticker → share of total market cap, in percent.
    #[serde(default)]
    pub market_cap_percentage: HashMap<String, Decimal>,
}
