//! Full-Page Not-Found View
//!
//! The designed surfacing path for authorization and existence failures:
//! a back-navigable empty state shown instead of the page body. The
//! subtitle is only rendered when the subject exists but the caller cannot
//! see it, distinguishing that from "doesn't exist at all".

use egui::{Ui, WidgetInfo, WidgetType};

use crate::i18n::LocaleManager;
use crate::theme::ThemeTokens;

/// Result of rendering the not-found view.
pub struct NotFoundResponse {
    /// The top back affordance was pressed.
    pub back_clicked: bool,
    /// The inline go-back link was pressed.
    pub link_clicked: bool,
}

/// Render the full-page fallback. `show_subtitle` adds the
/// "not authorized" line under the title.
pub fn full_page_not_found(
    ui: &mut Ui,
    locale: &LocaleManager,
    tokens: &ThemeTokens,
    show_subtitle: bool,
) -> NotFoundResponse {
    let mut back_clicked = false;
    let mut link_clicked = false;

    ui.horizontal(|ui| {
        let back = ui.button("←");
        let enabled = ui.is_enabled();
        let label = locale.t("header-back");
        back.widget_info(move || WidgetInfo::labeled(WidgetType::Button, enabled, label.clone()));
        back_clicked = back.clicked();
    });

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.heading(locale.t("page-not-found-title"));
        if show_subtitle {
            ui.label(
                egui::RichText::new(locale.t("page-not-authorized"))
                    .color(tokens.text_supporting),
            );
        }
        ui.add_space(8.0);
        if ui.link(locale.t("page-go-back")).clicked() {
            link_clicked = true;
        }
    });

    NotFoundResponse {
        back_clicked,
        link_clicked,
    }
}
