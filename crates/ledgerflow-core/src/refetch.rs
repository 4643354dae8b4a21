//! Refetch Policy
//!
//! Decides when the page's remote data should be re-requested: once on
//! mount, on every offline-to-online transition, and when the
//! skip-initial-fetch flag is cleared. Each trigger is suppressed while the
//! skip flag is set. The trigger itself is fire-and-forget; deduplication of
//! in-flight fetches is the data source's concern.

/// Edge detector over `(online, skip_initial_fetch)`, polled once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefetchPolicy {
    last_online: Option<bool>,
    last_skip: Option<bool>,
}

impl RefetchPolicy {
    /// A policy that has not observed any frame yet; its first poll counts
    /// as the mount.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the current inputs; returns `true` when a fetch should be
    /// triggered now.
    pub fn poll(&mut self, online: bool, skip: bool) -> bool {
        let mounted = self.last_skip.is_none();
        let reconnected = self.last_online == Some(false) && online;
        let skip_cleared = self.last_skip == Some(true) && !skip;

        self.last_online = Some(online);
        self.last_skip = Some(skip);

        let fire = !skip && (mounted || reconnected || skip_cleared);
        if fire {
            tracing::debug!(mounted, reconnected, skip_cleared, "refetch triggered");
        }
        fire
    }
}
