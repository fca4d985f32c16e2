//! Configuration models for rate limits.

pub mod limits;

pub use limits::RateLimitConfig;
