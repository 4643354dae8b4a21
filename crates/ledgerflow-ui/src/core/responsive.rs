//! Responsive Layout Helper
//!
//! Classifies the viewport so page chrome can adapt: compact viewports show
//! the generic header's back button, wide viewports suppress it.

use egui::Context;

/// Widths below this are treated as a compact (phone-like) viewport.
pub const BREAKPOINT_COMPACT: f32 = 800.0;

/// Viewport-derived layout decisions.
#[derive(Debug, Clone, Copy)]
pub struct ResponsiveLayout {
    /// Current viewport size.
    pub viewport_size: egui::Vec2,
}

impl ResponsiveLayout {
    /// Snapshot the current viewport from the egui context.
    pub fn new(ctx: &Context) -> Self {
        Self {
            viewport_size: ctx.screen_rect().size(),
        }
    }

    /// Whether the viewport is compact (narrow enough for a single column).
    pub fn is_compact(&self) -> bool {
        self.viewport_size.x < BREAKPOINT_COMPACT
    }

    /// Maximum comfortable content width for the current viewport.
    pub fn content_max_width(&self) -> f32 {
        if self.is_compact() {
            self.viewport_size.x
        } else {
            (self.viewport_size.x * 0.6).clamp(480.0, 960.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_below_breakpoint() {
        let narrow = ResponsiveLayout {
            viewport_size: egui::Vec2::new(390.0, 844.0),
        };
        assert!(narrow.is_compact());

        let wide = ResponsiveLayout {
            viewport_size: egui::Vec2::new(1440.0, 900.0),
        };
        assert!(!wide.is_compact());
    }

    #[test]
    fn content_width_clamps_on_wide_viewports() {
        let wide = ResponsiveLayout {
            viewport_size: egui::Vec2::new(2400.0, 1200.0),
        };
        assert_eq!(wide.content_max_width(), 960.0);

        let narrow = ResponsiveLayout {
            viewport_size: egui::Vec2::new(390.0, 844.0),
        };
        assert_eq!(narrow.content_max_width(), 390.0);
    }
}
