//! Service Traits
//!
//! Contracts for the collaborators the view layer consumes. Implementations
//! live with the application; the components only ever hold `&dyn`
//! references for the duration of a frame.

use crate::page_state::PolicySubject;

/// Capability checks over a policy record.
pub trait PolicyAccess {
    /// Whether the current user administers `subject`.
    fn is_admin(&self, subject: &PolicySubject) -> bool;

    /// Whether `subject` is queued for deletion.
    fn is_pending_delete(&self, subject: &PolicySubject) -> bool;
}

/// Back-navigation target resolution.
pub trait Navigator {
    /// Navigate back to `route`.
    fn go_back(&self, route: &str);
}

/// Online/offline signal, sampled once per frame.
pub trait NetworkMonitor {
    /// Current connectivity.
    fn is_online(&self) -> bool;
}

/// Trigger for the page's remote data fetch. Assumed idempotent and safe to
/// invoke redundantly; completion is not awaited.
pub trait PageDataSource {
    /// Kick off (or re-kick) the fetch backing the page.
    fn request_page_data(&self);
}
