//! Rate limit information.

/// Rate limit information for the core API.
#[derive(Debug, Clone)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,

    /// Unix timestamp when the rate limit resets.
    pub reset: u64,

    /// Total requests allowed per window.
    pub limit: u32,
}

impl RateLimitInfo {
    /// Fraction of the window already used, in `0.0..=1.0`.
    #[must_use]
    pub fn used_fraction(&self) -> f64 {
        if self.limit == 0 {
            return 1.0;
        }
        f64::from(self.limit.saturating_sub(self.remaining)) / f64::from(self.limit)
    }
}
