//! Transient success and error messages.

use std::time::{Duration, Instant};

/// How long a banner stays visible unless dismissed earlier.
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

/// A message shown above the form.
///
/// Each banner carries its own display time, so replacing a banner restarts
/// its countdown instead of inheriting the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub shown_at: Instant,
}

impl Banner {
    pub fn error(message: impl Into<String>) -> Self {
        Self::at(BannerKind::Error, message, Instant::now())
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::at(BannerKind::Success, message, Instant::now())
    }

    pub fn at(kind: BannerKind, message: impl Into<String>, shown_at: Instant) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at,
        }
    }

    /// True once `BANNER_TIMEOUT` has elapsed at `now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= BANNER_TIMEOUT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_expires_after_timeout() {
        let start = Instant::now();
        let banner = Banner::at(BannerKind::Success, "Customer added successfully", start);

        assert!(!banner.is_expired(start));
        assert!(!banner.is_expired(start + Duration::from_millis(4_999)));
        assert!(banner.is_expired(start + BANNER_TIMEOUT));
    }

    #[test]
    fn test_earlier_instant_is_not_expired() {
        let start = Instant::now() + Duration::from_secs(1);
        let banner = Banner::at(BannerKind::Error, "boom", start);
        assert!(!banner.is_expired(Instant::now()));
    }
}
