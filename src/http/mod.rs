//! HTTP client with retry policies.

pub mod client;
pub mod retry;

pub use client::CoinLensHttp;
pub use retry::{RetryConfig, RetryPolicy};
