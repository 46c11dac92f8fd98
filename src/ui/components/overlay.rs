//! Full-screen loading overlay shown while a submission is in flight

use crate::ui::theme::Theme;
use egui::{self, Id, Order, Pos2, Rect, Sense, Vec2};

/// Modal spinner overlay
pub struct LoadingOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> LoadingOverlay<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn show(self, ctx: &egui::Context) {
        let screen_rect = ctx.screen_rect();

        egui::Area::new(Id::new("loading_overlay"))
            .order(Order::Foreground)
            .fixed_pos(Pos2::ZERO)
            .show(ctx, |ui| {
                // Swallow pointer input so the view underneath stays inert
                ui.interact(
                    screen_rect,
                    Id::new("loading_overlay_input"),
                    Sense::click_and_drag(),
                );
                ui.painter()
                    .rect_filled(screen_rect, 0.0, self.theme.overlay_backdrop);

                let spinner_rect =
                    Rect::from_center_size(screen_rect.center(), Vec2::splat(50.0));
                ui.put(
                    spinner_rect,
                    egui::Spinner::new().size(50.0).color(self.theme.primary),
                );
            });
    }
}
