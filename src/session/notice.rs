//! Transient notices
//!
//! A notice is a short-lived message ("Not in word list") with an explicit
//! deadline. The engine never schedules time-based work; the UI loop checks
//! the deadline on its tick and drops the notice once it expires.

use std::time::{Duration, Instant};

/// Default time a notice stays on screen
pub const NOTICE_TTL: Duration = Duration::from_millis(1600);

/// A message with an expiry deadline
#[derive(Debug, Clone)]
pub struct Notice {
    text: String,
    expires_at: Instant,
}

impl Notice {
    /// Create a notice that expires `ttl` from now
    #[must_use]
    pub fn new(text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + ttl,
        }
    }

    /// Create a notice with the default lifetime
    #[must_use]
    pub fn transient(text: impl Into<String>) -> Self {
        Self::new(text, NOTICE_TTL)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True once the deadline has passed at `now`
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// True once the deadline has passed
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}
