//! Network URL constants for the coinlens SDK.

/// Default REST API base URL (CoinGecko public API v3).
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";
