//! Fixed-window quota counters for upstream admission control.
//!
//! Each window is a pair of `(count, window_start)`: when the elapsed time
//! since `window_start` reaches the window's duration, the counter resets and
//! the start advances to now. This deliberately permits bursts at window
//! boundaries; the upstream limits are documented as fixed allowances, and
//! two integers plus a timestamp need no per-request history.

use std::time::Duration;

use tokio::time::Instant;

/// One "at most N executions per duration D" counter.
#[derive(Debug, Clone)]
pub struct QuotaWindow {
    capacity: u32,
    duration: Duration,
    count: u32,
    window_start: Instant,
}

impl QuotaWindow {
    /// Create an empty window starting now.
    #[must_use]
    pub fn new(capacity: u32, duration: Duration) -> Self {
        Self {
            capacity,
            duration,
            count: 0,
            window_start: Instant::now(),
        }
    }

    /// Reset the counter and advance the start if the window has elapsed.
    pub fn roll(&mut self, now: Instant) {
        if now.duration_since(self.window_start) >= self.duration {
            self.count = 0;
            self.window_start = now;
        }
    }

    /// Whether another execution fits in the current window.
    #[must_use]
    pub const fn has_headroom(&self) -> bool {
        self.count < self.capacity
    }

    /// Charge one execution against the window.
    pub fn record(&mut self) {
        self.count += 1;
    }

    /// Executions still admissible in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.count)
    }
}

/// The two concurrent windows the upstream API imposes: a short burst
/// allowance and a longer sustained allowance. Both must have headroom
/// before a request is admitted, so the sustained limit dominates once it
/// starts filling.
#[derive(Debug, Clone)]
pub struct RateWindows {
    /// Short-window burst allowance.
    pub burst: QuotaWindow,
    /// Long-window sustained allowance.
    pub sustained: QuotaWindow,
}

impl RateWindows {
    /// Build both windows from capacities and durations.
    #[must_use]
    pub fn new(
        burst_limit: u32,
        burst_window: Duration,
        sustained_limit: u32,
        sustained_window: Duration,
    ) -> Self {
        Self {
            burst: QuotaWindow::new(burst_limit, burst_window),
            sustained: QuotaWindow::new(sustained_limit, sustained_window),
        }
    }

    /// Roll whichever windows have elapsed.
    pub fn roll(&mut self, now: Instant) {
        self.burst.roll(now);
        self.sustained.roll(now);
    }

    /// Whether both windows admit another execution.
    #[must_use]
    pub const fn has_headroom(&self) -> bool {
        self.burst.has_headroom() && self.sustained.has_headroom()
    }

    /// Charge one execution against both windows.
    pub fn record(&mut self) {
        self.burst.record();
        self.sustained.record();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn window_exhausts_then_rolls() {
        let mut w = QuotaWindow::new(3, Duration::from_secs(1));
        let start = Instant::now();

        for _ in 0..3 {
            assert!(w.has_headroom());
            w.record();
        }
        assert!(!w.has_headroom());
        assert_eq!(w.remaining(), 0);

        // Still inside the window: rolling changes nothing.
        w.roll(start + Duration::from_millis(999));
        assert!(!w.has_headroom());

        w.roll(start + Duration::from_secs(1));
        assert!(w.has_headroom());
        assert_eq!(w.remaining(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn both_windows_gate_admission() {
        let mut windows = RateWindows::new(2, Duration::from_secs(1), 3, Duration::from_secs(120));
        let start = Instant::now();

        windows.record();
        windows.record();
        assert!(!windows.has_headroom()); // burst exhausted

        windows.roll(start + Duration::from_secs(1));
        assert!(windows.has_headroom()); // burst rolled, sustained at 2/3
        windows.record();
        assert!(!windows.has_headroom()); // sustained exhausted

        // Burst keeps rolling but the sustained window still gates.
        windows.roll(start + Duration::from_secs(5));
        assert!(!windows.has_headroom());

        windows.roll(start + Duration::from_secs(120));
        assert!(windows.has_headroom());
    }
}
