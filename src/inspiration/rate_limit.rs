use std::fmt;
use std::num::NonZeroU32;

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};

/// Global limit on forwarded uploads.
///
/// Not keyed by client: the webhook is the scarce resource, not any one
/// visitor's share of it.
pub struct UploadRateLimiter {
    inner: Option<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    per_minute: u32,
}

impl UploadRateLimiter {
    /// `0` disables limiting.
    pub fn per_minute(per_minute: u32) -> Self {
        let inner = NonZeroU32::new(per_minute).map(|n| RateLimiter::direct(Quota::per_minute(n)));
        Self { inner, per_minute }
    }

    /// Take one permit. Returns `false` when the quota is exhausted.
    pub fn check(&self) -> bool {
        self.inner.as_ref().is_none_or(|limiter| limiter.check().is_ok())
    }
}

impl fmt::Debug for UploadRateLimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadRateLimiter")
            .field("per_minute", &self.per_minute)
            .finish()
    }
}
