//! Page View-State Derivation
//!
//! The sectioned workspace page shows one of three sections: a full-page
//! "not found" fallback, a loading indicator, or the caller's content. The
//! choice is recomputed from the inputs on every frame rather than tracked
//! as a stored machine; the one-shot first-render guard is the only stored
//! state.
//!
//! Precedence is fixed: Forbidden beats Loading beats Ready.

use serde::{Deserialize, Serialize};

use crate::services::PolicyAccess;

/// ACH state value of a fully opened bank account.
pub const ACH_STATE_OPEN: &str = "OPEN";

/// The workspace policy the page is about. Absence of the whole record
/// means the policy does not exist (or is not visible at all).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySubject {
    /// Identifier of the policy.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Remote bank-account record backing the page. May be partially populated
/// while a fetch is in flight, or absent before the first fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccountData {
    /// Whether the backing fetch is running. Absent reads as `true`:
    /// a record that never reported on loading is not trusted as loaded.
    pub is_loading: Option<bool>,
    /// ACH state string of the attached account, e.g. [`ACH_STATE_OPEN`].
    pub ach_state: Option<String>,
}

/// Remote user record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    /// Whether the user is on the company card program. Absent reads as
    /// `false`.
    pub uses_company_card: Option<bool>,
}

/// One-shot guard set after the first committed frame.
///
/// The external loading flag can transiently read "not loading" before the
/// initial fetch result is merged in; until one frame has committed, the
/// page is treated as loading regardless, preventing a flash of stale or
/// default content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstRenderGuard {
    has_rendered: bool,
}

impl FirstRenderGuard {
    /// A guard that has not yet seen a committed frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the first frame has committed.
    pub fn has_rendered(&self) -> bool {
        self.has_rendered
    }

    /// Record that the first frame committed. Idempotent.
    pub fn mark_rendered(&mut self) {
        self.has_rendered = true;
    }
}

/// What the sectioned page shows this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageViewState {
    /// The subject is absent, the caller is not an admin over it, or it is
    /// pending deletion. `subject_known` distinguishes "exists but you
    /// can't see it" (subtitle shown) from "doesn't exist" (no subtitle).
    Forbidden {
        /// Whether the policy record itself was present.
        subject_known: bool,
    },
    /// Data has not completed its first load, or no frame has committed.
    Loading,
    /// Content is renderable.
    Ready {
        /// The attached bank account is fully opened.
        has_active_bank_account: bool,
        /// The user is on the company card program.
        uses_company_card: bool,
    },
}

/// Derive the visible section from the current inputs.
///
/// `show_loading == false` suppresses the loading indicator and falls
/// through to content; the Forbidden branch is never suppressed.
pub fn derive_page_state(
    subject: Option<&PolicySubject>,
    access: &dyn PolicyAccess,
    bank_account: Option<&BankAccountData>,
    user: Option<&UserData>,
    guard: &FirstRenderGuard,
    show_loading: bool,
) -> PageViewState {
    let forbidden = match subject {
        None => true,
        Some(s) => !access.is_admin(s) || access.is_pending_delete(s),
    };
    if forbidden {
        return PageViewState::Forbidden {
            subject_known: subject.is_some(),
        };
    }

    let is_loading =
        bank_account.and_then(|b| b.is_loading).unwrap_or(true) || !guard.has_rendered();
    if is_loading && show_loading {
        return PageViewState::Loading;
    }

    PageViewState::Ready {
        has_active_bank_account: bank_account
            .and_then(|b| b.ach_state.as_deref())
            .is_some_and(|state| state == ACH_STATE_OPEN),
        uses_company_card: user.and_then(|u| u.uses_company_card).unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Access {
        admin: bool,
        pending_delete: bool,
    }

    impl PolicyAccess for Access {
        fn is_admin(&self, _subject: &PolicySubject) -> bool {
            self.admin
        }

        fn is_pending_delete(&self, _subject: &PolicySubject) -> bool {
            self.pending_delete
        }
    }

    const ADMIN: Access = Access {
        admin: true,
        pending_delete: false,
    };

    fn rendered_guard() -> FirstRenderGuard {
        let mut guard = FirstRenderGuard::new();
        guard.mark_rendered();
        guard
    }

    fn acme() -> PolicySubject {
        PolicySubject {
            id: "123".into(),
            name: "Acme".into(),
        }
    }

    #[test]
    fn absent_subject_is_forbidden_without_subtitle() {
        let state = derive_page_state(None, &ADMIN, None, None, &rendered_guard(), true);
        assert_eq!(
            state,
            PageViewState::Forbidden {
                subject_known: false
            }
        );
    }

    #[test]
    fn non_admin_is_forbidden_with_subtitle() {
        let access = Access {
            admin: false,
            pending_delete: false,
        };
        let state =
            derive_page_state(Some(&acme()), &access, None, None, &rendered_guard(), true);
        assert_eq!(state, PageViewState::Forbidden { subject_known: true });
    }

    #[test]
    fn pending_delete_is_forbidden() {
        let access = Access {
            admin: true,
            pending_delete: true,
        };
        let state =
            derive_page_state(Some(&acme()), &access, None, None, &rendered_guard(), true);
        assert_eq!(state, PageViewState::Forbidden { subject_known: true });
    }

    #[test]
    fn forbidden_beats_loading() {
        // Subject absent and data absent: both Forbidden and Loading apply,
        // Forbidden wins.
        let guard = FirstRenderGuard::new();
        let state = derive_page_state(None, &ADMIN, None, None, &guard, true);
        assert!(matches!(state, PageViewState::Forbidden { .. }));
    }

    #[test]
    fn loading_until_first_frame_committed() {
        // Even if the record claims "not loading", the guard forces the
        // loading section before the first committed frame.
        let data = BankAccountData {
            is_loading: Some(false),
            ach_state: Some(ACH_STATE_OPEN.into()),
        };
        let guard = FirstRenderGuard::new();
        let state = derive_page_state(Some(&acme()), &ADMIN, Some(&data), None, &guard, true);
        assert_eq!(state, PageViewState::Loading);
    }

    #[test]
    fn absent_data_defaults_to_loading() {
        let state =
            derive_page_state(Some(&acme()), &ADMIN, None, None, &rendered_guard(), true);
        assert_eq!(state, PageViewState::Loading);
    }

    #[test]
    fn show_loading_false_falls_through_to_content() {
        let state =
            derive_page_state(Some(&acme()), &ADMIN, None, None, &rendered_guard(), false);
        assert_eq!(
            state,
            PageViewState::Ready {
                has_active_bank_account: false,
                uses_company_card: false
            }
        );
    }

    #[test]
    fn ready_flags_derive_from_records() {
        let data = BankAccountData {
            is_loading: Some(false),
            ach_state: Some(ACH_STATE_OPEN.into()),
        };
        let user = UserData {
            uses_company_card: Some(true),
        };
        let state = derive_page_state(
            Some(&acme()),
            &ADMIN,
            Some(&data),
            Some(&user),
            &rendered_guard(),
            true,
        );
        assert_eq!(
            state,
            PageViewState::Ready {
                has_active_bank_account: true,
                uses_company_card: true
            }
        );
    }

    #[test]
    fn non_open_ach_state_means_no_active_account() {
        let data = BankAccountData {
            is_loading: Some(false),
            ach_state: Some("PENDING".into()),
        };
        let state = derive_page_state(
            Some(&acme()),
            &ADMIN,
            Some(&data),
            None,
            &rendered_guard(),
            true,
        );
        assert_eq!(
            state,
            PageViewState::Ready {
                has_active_bank_account: false,
                uses_company_card: false
            }
        );
    }

    #[test]
    fn guard_marks_exactly_once() {
        let mut guard = FirstRenderGuard::new();
        assert!(!guard.has_rendered());
        guard.mark_rendered();
        guard.mark_rendered();
        assert!(guard.has_rendered());
    }
}
