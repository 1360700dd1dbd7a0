//! # coinlens
//!
//! A Rust SDK for CoinGecko-style market data: typed REST access plus the
//! derived values a dashboard actually displays.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, derivation logic (WASM-safe)
//! 2. **HTTP API** — `CoinLensHttp` with per-request retry policies
//! 3. **Polling** — Reducer-style poll state machine + `Poller` scheduler
//! 4. **High-Level Client** — `CoinLensClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinlens::prelude::*;
//!
//! let client = CoinLensClient::builder()
//!     .coin(CoinId::from("bitcoin"))
//!     .build()?;
//!
//! let summary = client.price_history().summary().await?;
//! let shares = client.market_share().breakdown().await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and display formatting used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, derivation.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: Polling ─────────────────────────────────────────────────────────

/// Poll state machine and the `Poller` scheduler.
pub mod poll;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `CoinLensClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + formatting
    pub use crate::shared::fmt;
    pub use crate::shared::{CoinId, VsCurrency};

    // Domain types — price history
    pub use crate::domain::price_history::{MetricCard, PricePoint, PriceSummary, Trend};

    // Domain types — market share
    pub use crate::domain::market_share::{
        MarketShareBreakdown, MarketShareEntry, NAMED_ASSETS, OTHERS,
    };

    // Errors
    pub use crate::error::SdkError;

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Poll state machine
    pub use crate::poll::{PollEvent, PollState, PollStatus};
    #[cfg(feature = "http")]
    pub use crate::poll::poller::Poller;
    #[cfg(feature = "native")]
    pub use crate::poll::poller::PollHandle;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        CoinLensClient, CoinLensClientBuilder, MarketShareClient, PriceHistoryClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
