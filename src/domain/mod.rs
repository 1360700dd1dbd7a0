//! Domain modules — one vertical slice per upstream endpoint.

pub mod market_share;
pub mod price_history;
