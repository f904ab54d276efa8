//! HTTP transport module
//!
//! Read-only JSON client used to pull record pages.
//!
//! # Features
//!
//! - **Optional Retries**: 429, 5xx, timeouts and connect errors, with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Backoff Strategies**: Constant, linear, and exponential backoff

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
