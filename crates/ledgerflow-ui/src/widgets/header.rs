//! Page Header Bar
//!
//! Title row rendered above every page body. The back button is only shown
//! on compact viewports; wide layouts navigate through other chrome.

use egui::{CornerRadius, Response, Sense, Ui, Vec2, WidgetInfo, WidgetType};

use crate::i18n::LocaleManager;

const HEADER_HEIGHT: f32 = 40.0;

/// Result of rendering the header bar.
pub struct HeaderResponse {
    /// Whether the back button was pressed this frame.
    pub back_clicked: bool,
}

/// Render the header bar. `show_back` controls the back affordance.
pub fn header_bar(
    ui: &mut Ui,
    title: &str,
    show_back: bool,
    locale: &LocaleManager,
) -> HeaderResponse {
    let desired_size = Vec2::new(ui.available_width(), HEADER_HEIGHT);
    let (rect, _response) = ui.allocate_at_least(desired_size, Sense::hover());

    ui.painter()
        .rect_filled(rect, CornerRadius::ZERO, ui.visuals().panel_fill);

    let mut back_clicked = false;
    let mut text_x = rect.min.x + 12.0;

    if show_back {
        let back_rect = egui::Rect::from_center_size(
            egui::Pos2::new(rect.min.x + 20.0, rect.center().y),
            Vec2::splat(24.0),
        );
        let back = back_button(ui, back_rect, locale);
        back_clicked = back.clicked();
        text_x = back_rect.max.x + 8.0;
    }

    ui.painter().text(
        egui::Pos2::new(text_x, rect.center().y),
        egui::Align2::LEFT_CENTER,
        title,
        egui::FontId::proportional(16.0),
        ui.visuals().text_color(),
    );

    HeaderResponse { back_clicked }
}

fn back_button(ui: &mut Ui, rect: egui::Rect, locale: &LocaleManager) -> Response {
    let response = ui.interact(rect, ui.id().with("header-back"), Sense::click());

    let enabled = ui.is_enabled();
    let label = locale.t("header-back");
    response.widget_info(move || WidgetInfo::labeled(WidgetType::Button, enabled, label.clone()));

    let color = if response.hovered() {
        ui.visuals().strong_text_color()
    } else {
        ui.visuals().text_color()
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "←",
        egui::FontId::proportional(18.0),
        color,
    );

    response
}
