//! Theme and styling for the client UI
//!
//! Dark, phone-app styling: near-black background, blue action buttons,
//! translucent blue cards for the result sections.

use egui::{Color32, Rounding};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Action button color
    pub primary: Color32,
    /// Checkmark / accepted indicator color
    pub success: Color32,
    /// Inline error text color
    pub error: Color32,

    /// Main background
    pub bg_primary: Color32,
    /// Card background for result sections and picker buttons
    pub bg_card: Color32,
    /// Backdrop for the full-screen loading overlay
    pub overlay_backdrop: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_muted: Color32,

    /// Border radius for buttons
    pub button_rounding: Rounding,
    /// Border radius for cards
    pub card_rounding: Rounding,

    /// Standard spacing
    pub spacing: f32,
    /// Large spacing
    pub spacing_lg: f32,
    /// Small spacing
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create the dark theme
    pub fn dark() -> Self {
        Self {
            primary: Color32::from_rgb(0, 123, 255),  // Blue
            success: Color32::from_rgb(34, 197, 94),  // Green
            error: Color32::from_rgb(239, 68, 68),    // Red

            bg_primary: Color32::from_rgb(28, 28, 28), // Near-black
            bg_card: Color32::from_rgba_unmultiplied(27, 79, 113, 125), // Translucent blue
            overlay_backdrop: Color32::from_black_alpha(178),

            text_primary: Color32::from_rgb(249, 250, 251), // Almost white
            text_muted: Color32::from_rgb(156, 163, 175),   // Medium gray

            button_rounding: Rounding::same(8.0),
            card_rounding: Rounding::same(16.0),

            spacing: 16.0,
            spacing_lg: 28.0,
            spacing_sm: 8.0,
        }
    }

    /// Apply the theme to the egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = self.bg_primary;
        ctx.set_visuals(visuals);
    }
}
