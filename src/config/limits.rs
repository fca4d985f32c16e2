//! Rate limit configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Quota capacities, window durations, and drain poll interval.
///
/// Defaults match the upstream API's development-key allowance: 20 requests
/// per second and 100 requests per two minutes, re-checked every 50 ms while
/// throttled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Short-window request cap.
    pub burst_limit: u32,
    /// Short window duration in milliseconds.
    pub burst_window_ms: u64,
    /// Long-window request cap.
    pub sustained_limit: u32,
    /// Long window duration in milliseconds.
    pub sustained_window_ms: u64,
    /// Sleep between quota re-checks while throttled, in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            burst_limit: 20,
            burst_window_ms: 1_000,
            sustained_limit: 100,
            sustained_window_ms: 120_000,
            poll_interval_ms: 50,
        }
    }
}

impl RateLimitConfig {
    /// Short window duration.
    #[must_use]
    pub const fn burst_window(&self) -> Duration {
        Duration::from_millis(self.burst_window_ms)
    }

    /// Long window duration.
    #[must_use]
    pub const fn sustained_window(&self) -> Duration {
        Duration::from_millis(self.sustained_window_ms)
    }

    /// Throttled re-check interval.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.burst_limit == 0 {
            return Err("burst_limit must be greater than 0".into());
        }
        if self.sustained_limit == 0 {
            return Err("sustained_limit must be greater than 0".into());
        }
        if self.burst_window_ms == 0 {
            return Err("burst_window_ms must be greater than 0".into());
        }
        if self.sustained_window_ms == 0 {
            return Err("sustained_window_ms must be greater than 0".into());
        }
        if self.poll_interval_ms == 0 {
            return Err("poll_interval_ms must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_development_key_limits() {
        let cfg = RateLimitConfig::default();
        assert_eq!(cfg.burst_limit, 20);
        assert_eq!(cfg.burst_window(), Duration::from_secs(1));
        assert_eq!(cfg.sustained_limit, 100);
        assert_eq!(cfg.sustained_window(), Duration::from_secs(120));
        assert_eq!(cfg.poll_interval(), Duration::from_millis(50));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_values_rejected() {
        let mut cfg = RateLimitConfig::default();
        cfg.burst_limit = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = RateLimitConfig::default();
        cfg.sustained_window_ms = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = RateLimitConfig::default();
        cfg.poll_interval_ms = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn parses_json() {
        let cfg = RateLimitConfig::from_json_str(
            r#"{
                "burst_limit": 5,
                "burst_window_ms": 1000,
                "sustained_limit": 50,
                "sustained_window_ms": 60000,
                "poll_interval_ms": 10
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.burst_limit, 5);
        assert_eq!(cfg.sustained_window(), Duration::from_secs(60));

        assert!(RateLimitConfig::from_json_str("not json").is_err());
    }
}
