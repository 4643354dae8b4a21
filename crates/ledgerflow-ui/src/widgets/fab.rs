//! Floating Action Button - Animated Toggle Control
//!
//! A two-state control that morphs between its inactive and active look:
//! the background blends between two theme colors and the plus glyph
//! rotates toward an X as progress runs 0 -> 1. The logical state is always
//! caller-owned; the widget only owns the transition.

use ecolor::Color32;
use egui::{
    CornerRadius, Rect, Response, Sense, Stroke, Ui, Vec2, WidgetInfo, WidgetType,
};
use ledgerflow_core::animation::{ToggleTransition, ACTIVE_ROTATION_DEGREES};

use crate::i18n::LocaleManager;
use crate::theme::{interpolate_color, ThemeTokens};

/// Edge length of the FAB.
pub const FAB_SIZE: f32 = 56.0;

const GLYPH_HALF_LEN: f32 = 9.0;
const GLYPH_STROKE_WIDTH: f32 = 3.0;

/// Style derived from animation progress, applied atomically per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FabStyle {
    /// Glyph rotation in degrees (`135 * progress`).
    pub rotation_degrees: f32,
    /// Background blend between the inactive and active endpoint colors.
    pub background: Color32,
    /// Static corner radius from the theme.
    pub corner_radius: u8,
}

/// Pure derivation from animation progress to visual style.
pub fn fab_style(tokens: &ThemeTokens, progress: f32) -> FabStyle {
    FabStyle {
        rotation_degrees: progress * ACTIVE_ROTATION_DEGREES,
        background: interpolate_color(tokens.success, tokens.button_default_bg, progress),
        corner_radius: tokens.fab_corner_radius,
    }
}

/// Handle to the FAB's interactive element. The public accessor and the
/// widget's own focus handling alias the same underlying id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FabHandle {
    id: egui::Id,
}

impl FabHandle {
    /// The id of the interactive element, for imperative addressing.
    pub fn id(&self) -> egui::Id {
        self.id
    }

    /// Programmatically focus the FAB.
    pub fn request_focus(&self, ctx: &egui::Context) {
        ctx.memory_mut(|m| m.request_focus(self.id));
    }

    /// Programmatically drop focus from the FAB.
    pub fn surrender_focus(&self, ctx: &egui::Context) {
        ctx.memory_mut(|m| m.surrender_focus(self.id));
    }
}

/// Per-frame inputs of the FAB.
pub struct FabProps<'a> {
    /// Caller-owned logical state.
    pub is_active: bool,
    /// Accessibility label announced for the button.
    pub accessibility_label: &'a str,
    /// Theme endpoint colors and corner radius.
    pub tokens: &'a ThemeTokens,
    /// Localized strings (tooltip).
    pub locale: &'a LocaleManager,
}

/// Result of showing the FAB for one frame.
pub struct FabResponse {
    /// The egui response of the interactive element.
    pub response: Response,
    /// Handle aliasing the same element.
    pub handle: FabHandle,
}

/// The floating action button. Owns only the animation transition; destroy
/// it together with the screen that hosts it.
#[derive(Debug, Clone)]
pub struct ToggleFab {
    transition: ToggleTransition,
}

impl ToggleFab {
    /// Create the FAB with its transition settled on `initial_active`.
    pub fn new(initial_active: bool) -> Self {
        Self {
            transition: ToggleTransition::new(initial_active),
        }
    }

    /// Current animation progress at `now`.
    pub fn progress(&self, now: f64) -> f32 {
        self.transition.progress(now)
    }

    /// Render the FAB and report a press to `on_press`.
    ///
    /// Focus is surrendered before `on_press` runs so no focus ring lingers
    /// on a pointer press; the press is reported regardless. A long press
    /// is accepted and intentionally does nothing.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        props: &FabProps<'_>,
        on_press: impl FnOnce(&Response),
    ) -> FabResponse {
        let now = ui.input(|i| i.time);
        self.transition.set_target(props.is_active, now);
        let style = fab_style(props.tokens, self.transition.progress(now));

        let (rect, response) = ui.allocate_at_least(Vec2::splat(FAB_SIZE), Sense::click());

        let enabled = ui.is_enabled();
        let label = props.accessibility_label.to_string();
        response.widget_info(move || WidgetInfo::labeled(WidgetType::Button, enabled, label.clone()));

        Self::paint(ui, rect, &style, &response);

        if response.long_touched() {
            // Reserved; must neither act nor bubble.
        }

        if response.clicked() {
            response.surrender_focus();
            on_press(&response);
        }

        if self.transition.is_animating(now) {
            ui.ctx().request_repaint();
        }

        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        let handle = FabHandle { id: response.id };
        let response = response.on_hover_text(props.locale.t("fab-new"));
        FabResponse { response, handle }
    }

    fn paint(ui: &Ui, rect: Rect, style: &FabStyle, response: &Response) {
        let painter = ui.painter();

        painter.rect_filled(
            rect,
            CornerRadius::same(style.corner_radius),
            style.background,
        );

        if response.has_focus() {
            painter.rect_stroke(
                rect.expand(2.0),
                CornerRadius::same(style.corner_radius),
                Stroke::new(1.0, ui.style().visuals.selection.stroke.color),
                egui::StrokeKind::Middle,
            );
        }

        // Plus glyph, rotated with the transition (ends up as an X at 135°).
        let center = rect.center();
        let angle = style.rotation_degrees.to_radians();
        let stroke = Stroke::new(GLYPH_STROKE_WIDTH, Color32::WHITE);
        for arm in [angle, angle + std::f32::consts::FRAC_PI_2] {
            let dir = Vec2::angled(arm) * GLYPH_HALF_LEN;
            painter.line_segment([center - dir, center + dir], stroke);
        }
    }
}
