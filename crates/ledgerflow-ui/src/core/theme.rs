//! Theme System
//!
//! Dark and light visuals for the workspace UI plus the token set the
//! widgets consume. Tokens are passed to widgets explicitly rather than
//! resolved through ambient context, so a widget's style derivation stays a
//! pure function of (tokens, progress).

use ecolor::Color32;
use egui::{Style, Visuals};
use serde::{Deserialize, Serialize};

/// Shared color constants for the LedgerFlow palette.
pub mod colors {
    use ecolor::Color32;

    pub const SUCCESS_GREEN: Color32 = Color32::from_rgb(3, 199, 90);
    pub const BUTTON_DEFAULT_BG: Color32 = Color32::from_rgb(230, 225, 218);
    pub const BUTTON_DEFAULT_BG_DARK: Color32 = Color32::from_rgb(26, 61, 50);
    pub const APP_BG_DARK: Color32 = Color32::from_rgb(7, 39, 31);
    pub const APP_BG_LIGHT: Color32 = Color32::from_rgb(252, 251, 249);
    pub const PANEL_BG_DARK: Color32 = Color32::from_rgb(10, 51, 41);
    pub const PANEL_BG_LIGHT: Color32 = Color32::from_rgb(247, 245, 240);
    pub const TEXT_DARK: Color32 = Color32::from_rgb(231, 236, 233);
    pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0, 45, 34);
    pub const TEXT_SUPPORTING: Color32 = Color32::from_rgb(175, 186, 178);
    pub const DANGER_RED: Color32 = Color32::from_rgb(240, 72, 66);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

/// Theme configuration, persisted as part of the user config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub theme: Theme,
    pub font_size: f32,
    pub spacing: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            font_size: 14.0,
            spacing: 4.0,
        }
    }
}

impl ThemeConfig {
    /// Apply theme to egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();
        style.visuals = match self.theme {
            Theme::Dark => Self::dark_visuals(),
            Theme::Light => Self::light_visuals(),
        };
        style.spacing.item_spacing = egui::vec2(self.spacing * 2.0, self.spacing);
        style.spacing.button_padding = egui::vec2(self.spacing * 2.0, self.spacing);

        ctx.set_style(style);
    }

    fn dark_visuals() -> Visuals {
        let mut visuals = Visuals::dark();
        visuals.override_text_color = Some(colors::TEXT_DARK);
        visuals.window_fill = colors::APP_BG_DARK;
        visuals.panel_fill = colors::PANEL_BG_DARK;
        visuals.faint_bg_color = colors::PANEL_BG_DARK;
        visuals.extreme_bg_color = colors::APP_BG_DARK;
        visuals.hyperlink_color = colors::SUCCESS_GREEN;
        visuals.selection.bg_fill = colors::SUCCESS_GREEN.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, colors::SUCCESS_GREEN);
        visuals.error_fg_color = colors::DANGER_RED;
        visuals
    }

    fn light_visuals() -> Visuals {
        let mut visuals = Visuals::light();
        visuals.override_text_color = Some(colors::TEXT_LIGHT);
        visuals.window_fill = colors::APP_BG_LIGHT;
        visuals.panel_fill = colors::PANEL_BG_LIGHT;
        visuals.hyperlink_color = colors::SUCCESS_GREEN;
        visuals.selection.bg_fill = colors::SUCCESS_GREEN.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, colors::SUCCESS_GREEN);
        visuals.error_fg_color = colors::DANGER_RED;
        visuals
    }
}

/// The token set widgets consume, resolved once per theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeTokens {
    /// Endpoint color of the toggle FAB in its inactive state.
    pub success: Color32,
    /// Endpoint color of the toggle FAB in its active state.
    pub button_default_bg: Color32,
    /// Static corner radius of the FAB.
    pub fab_corner_radius: u8,
    /// Supporting text color (subtitles, hints).
    pub text_supporting: Color32,
}

impl ThemeTokens {
    /// Resolve tokens for `theme`.
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                success: colors::SUCCESS_GREEN,
                button_default_bg: colors::BUTTON_DEFAULT_BG_DARK,
                fab_corner_radius: 28,
                text_supporting: colors::TEXT_SUPPORTING,
            },
            Theme::Light => Self {
                success: colors::SUCCESS_GREEN,
                button_default_bg: colors::BUTTON_DEFAULT_BG,
                fab_corner_radius: 28,
                text_supporting: colors::TEXT_SUPPORTING,
            },
        }
    }
}

/// Linear per-channel interpolation between two colors.
///
/// `t` is clamped to `[0, 1]`; endpoints are returned exactly.
pub fn interpolate_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| -> u8 {
        (x as f32 + (y as f32 - x as f32) * t).round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgba_premultiplied(
        channel(a.r(), b.r()),
        channel(a.g(), b.g()),
        channel(a.b(), b.b()),
        channel(a.a(), b.a()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_endpoints_are_exact() {
        let a = Color32::from_rgb(3, 199, 90);
        let b = Color32::from_rgb(26, 61, 50);
        assert_eq!(interpolate_color(a, b, 0.0), a);
        assert_eq!(interpolate_color(a, b, 1.0), b);
    }

    #[test]
    fn interpolation_midpoint_blends_channels() {
        let a = Color32::from_rgb(0, 100, 200);
        let b = Color32::from_rgb(100, 0, 200);
        let mid = interpolate_color(a, b, 0.5);
        assert_eq!(mid.r(), 50);
        assert_eq!(mid.g(), 50);
        assert_eq!(mid.b(), 200);
        assert_eq!(mid.a(), 255);
    }

    #[test]
    fn interpolation_clamps_t() {
        let a = Color32::from_rgb(10, 20, 30);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(interpolate_color(a, b, -1.0), a);
        assert_eq!(interpolate_color(a, b, 2.0), b);
    }

    #[test]
    fn theme_config_roundtrips_through_json() {
        let config = ThemeConfig {
            theme: Theme::Light,
            font_size: 16.0,
            spacing: 6.0,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ThemeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.theme, Theme::Light);
        assert_eq!(back.font_size, 16.0);
    }
}
