//! Sectioned Page Controller
//!
//! Mediates between the remote data lifecycle and what the workspace page
//! shows: the full-page not-found fallback, a loading indicator, or the
//! caller's content sections. Also owns the refetch policy (mount,
//! reconnect, skip-flag edges).
//!
//! The visible section is recomputed from the inputs every frame; the only
//! stored state is the first-render guard and the refetch edge detector.

use egui::Ui;
use ledgerflow_core::page_state::{
    derive_page_state, BankAccountData, FirstRenderGuard, PageViewState, PolicySubject, UserData,
};
use ledgerflow_core::refetch::RefetchPolicy;
use ledgerflow_core::services::{Navigator, NetworkMonitor, PageDataSource, PolicyAccess};

use crate::i18n::LocaleManager;
use crate::responsive::ResponsiveLayout;
use crate::theme::ThemeTokens;
use crate::widgets::blocking::full_page_not_found;
use crate::widgets::header::header_bar;

/// Rendering options, stable across the page's lifetime.
#[derive(Debug, Clone)]
pub struct SectionedPageOptions {
    /// Wrap the content in a vertical scroll container.
    pub use_scroll_view: bool,
    /// Suppress the fetch trigger while set; clearing it triggers a fetch.
    pub skip_initial_fetch: bool,
    /// Show the loading indicator while data loads (default true).
    pub show_loading: bool,
    /// Route used by the header back button and the not-found fallback.
    pub back_route: String,
}

impl Default for SectionedPageOptions {
    fn default() -> Self {
        Self {
            use_scroll_view: false,
            skip_initial_fetch: false,
            show_loading: true,
            back_route: String::new(),
        }
    }
}

/// Collaborators consumed for the duration of one frame.
pub struct PageDeps<'a> {
    /// Localized strings.
    pub locale: &'a LocaleManager,
    /// Theme tokens for the chrome.
    pub tokens: &'a ThemeTokens,
    /// Capability checks over the policy subject.
    pub access: &'a dyn PolicyAccess,
    /// Back-navigation sink.
    pub navigator: &'a dyn Navigator,
    /// Connectivity signal, sampled once per frame.
    pub network: &'a dyn NetworkMonitor,
    /// Fire-and-forget fetch trigger.
    pub data_source: &'a dyn PageDataSource,
}

/// Observed records and identifiers for this frame. All records are
/// optional; absence reads as the documented defaults, never as an error.
pub struct PageInputs<'a> {
    /// Title shown in the header bar.
    pub header_text: &'a str,
    /// Identifier of the policy being configured. Required; the controller
    /// does not validate it.
    pub policy_id: &'a str,
    /// The policy record, absent when it does not exist.
    pub subject: Option<&'a PolicySubject>,
    /// Remote bank-account record.
    pub bank_account: Option<&'a BankAccountData>,
    /// Remote user record.
    pub user: Option<&'a UserData>,
}

/// The sectioned workspace page. Create one per mounted page; drop it when
/// the page unmounts — all scheduled behavior dies with it.
#[derive(Debug, Default)]
pub struct SectionedPage {
    guard: FirstRenderGuard,
    refetch: RefetchPolicy,
}

impl SectionedPage {
    /// A freshly mounted page: no frame committed, fetch pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one frame. `content` receives
    /// `(ui, has_active_bank_account, policy_id, uses_company_card)` and is
    /// re-invoked every ready frame, never memoized here. Returns the
    /// section that was shown.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        deps: &PageDeps<'_>,
        inputs: &PageInputs<'_>,
        options: &SectionedPageOptions,
        content: impl FnOnce(&mut Ui, bool, &str, bool),
        footer: Option<&mut dyn FnMut(&mut Ui)>,
    ) -> PageViewState {
        if self
            .refetch
            .poll(deps.network.is_online(), options.skip_initial_fetch)
        {
            tracing::debug!(policy_id = inputs.policy_id, "requesting page data");
            deps.data_source.request_page_data();
        }

        let state = derive_page_state(
            inputs.subject,
            deps.access,
            inputs.bank_account,
            inputs.user,
            &self.guard,
            options.show_loading,
        );

        match state {
            PageViewState::Forbidden { subject_known } => {
                // The fallback replaces the whole page, generic header
                // included; it brings its own back affordance.
                let not_found =
                    full_page_not_found(ui, deps.locale, deps.tokens, subject_known);
                if not_found.back_clicked || not_found.link_clicked {
                    deps.navigator.go_back(&options.back_route);
                }
            }
            PageViewState::Loading => {
                self.header(ui, deps, inputs, options);
                ui.centered_and_justified(|ui| {
                    ui.add(egui::Spinner::new().size(32.0));
                });
            }
            PageViewState::Ready {
                has_active_bank_account,
                uses_company_card,
            } => {
                self.header(ui, deps, inputs, options);
                if options.use_scroll_view {
                    egui::ScrollArea::vertical()
                        .auto_shrink(false)
                        .show(ui, |ui| {
                            content(
                                ui,
                                has_active_bank_account,
                                inputs.policy_id,
                                uses_company_card,
                            );
                        });
                } else {
                    content(
                        ui,
                        has_active_bank_account,
                        inputs.policy_id,
                        uses_company_card,
                    );
                }
                if let Some(footer) = footer {
                    footer(ui);
                }
            }
        }

        if !self.guard.has_rendered() {
            self.guard.mark_rendered();
            tracing::trace!("first frame committed");
            // The post-guard section may differ; paint it promptly.
            ui.ctx().request_repaint();
        }

        state
    }

    fn header(
        &self,
        ui: &mut Ui,
        deps: &PageDeps<'_>,
        inputs: &PageInputs<'_>,
        options: &SectionedPageOptions,
    ) {
        let layout = ResponsiveLayout::new(ui.ctx());
        let header = header_bar(ui, inputs.header_text, layout.is_compact(), deps.locale);
        if header.back_clicked {
            deps.navigator.go_back(&options.back_route);
        }
    }
}
