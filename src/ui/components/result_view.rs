//! Result view
//!
//! Pure projection of the stored analysis: three cards in fixed order,
//! or a placeholder when nothing has been uploaded yet. The back arrow
//! always routes to the uploader.

use crate::ui::state::{AppState, Route};
use crate::ui::theme::Theme;
use egui::{self, RichText};

/// Result view component
pub struct ResultView<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> ResultView<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let mut go_back = false;

        ui.horizontal(|ui| {
            let back = egui::Button::new(RichText::new("⬅").size(18.0)).frame(false);
            if ui.add(back).on_hover_text("Back").clicked() {
                go_back = true;
            }
            ui.label(
                RichText::new("Video Summary & Issues")
                    .size(20.0)
                    .strong()
                    .color(self.theme.text_primary),
            );
        });
        ui.add_space(self.theme.spacing);

        if go_back {
            self.state.navigate(Route::Uploader);
            return;
        }

        match self.state.analysis.clone() {
            None => {
                ui.add_space(self.theme.spacing_lg);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("No analysis available. Please upload a file first.")
                            .size(16.0)
                            .color(self.theme.text_muted),
                    );
                });
            }
            Some(result) => {
                egui::ScrollArea::vertical()
                    .id_salt("result_sections")
                    .show(ui, |ui| {
                        self.show_section(ui, "Issues", &result.issues);
                        self.show_section(ui, "Summary", &result.summary);
                        self.show_section(ui, "Sentiment", &result.sentiment);
                    });
            }
        }
    }

    fn show_section(&self, ui: &mut egui::Ui, title: &str, body: &str) {
        ui.label(
            RichText::new(title)
                .size(16.0)
                .strong()
                .color(self.theme.text_primary),
        );
        ui.add_space(self.theme.spacing_sm);
        egui::Frame::none()
            .fill(self.theme.bg_card)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(body).color(self.theme.text_primary));
            });
        ui.add_space(self.theme.spacing);
    }
}
