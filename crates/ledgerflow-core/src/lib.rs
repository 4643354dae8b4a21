//! LedgerFlow Core - View-State Domain Model
//!
//! This crate contains the state-sensitive pieces of the LedgerFlow
//! workspace UI, independent of any toolkit:
//! - Retargetable toggle transition (animated FAB progress)
//! - Page view-state derivation (forbidden / loading / ready)
//! - First-render guard
//! - Refetch policy (mount, reconnect, skip-flag edges)
//! - Service traits for the collaborators the UI layer consumes

#![warn(missing_docs)]

pub mod animation;
pub mod page_state;
pub mod refetch;
pub mod services;

pub use animation::{ToggleTransition, ACTIVE_ROTATION_DEGREES, TOGGLE_DURATION_SECS};
pub use page_state::{
    derive_page_state, BankAccountData, FirstRenderGuard, PageViewState, PolicySubject, UserData,
    ACH_STATE_OPEN,
};
pub use refetch::RefetchPolicy;
pub use services::{Navigator, NetworkMonitor, PageDataSource, PolicyAccess};
