//! Landing view with the two upload tracks
//!
//! Each track shows a picker button bound to the native file dialog, an
//! accepted indicator, a submit button, and an inline error line.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use crate::upload::types::{SelectedFile, Track};
use egui::{self, RichText, Vec2};

/// Uploader view component
pub struct Uploader<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> Uploader<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(self.theme.spacing_lg);
            ui.label(
                RichText::new("Video Analyzer")
                    .size(28.0)
                    .strong()
                    .color(self.theme.text_primary),
            );
            ui.add_space(self.theme.spacing_lg);

            self.show_track(ui, Track::Video);
            ui.add_space(self.theme.spacing_lg);
            self.show_track(ui, Track::Audio);
        });
    }

    fn show_track(&mut self, ui: &mut egui::Ui, track: Track) {
        let (icon, submit_label) = match track {
            Track::Video => ("🎬", "Upload Video"),
            Track::Audio => ("🎵", "Upload Audio"),
        };

        ui.vertical_centered(|ui| {
            let picker = egui::Button::new(RichText::new(icon).size(48.0))
                .min_size(Vec2::splat(110.0))
                .rounding(self.theme.button_rounding)
                .fill(self.theme.bg_card);

            let response = ui
                .add(picker)
                .on_hover_text(format!("Pick a {} file", track.label()));
            if response.clicked() {
                if let Some(path) = rfd::FileDialog::new().pick_file() {
                    self.state.select_file(track, SelectedFile::from_path(path));
                }
            }

            if self.state.upload_ui.track(track).accepted {
                ui.add_space(self.theme.spacing_sm);
                ui.label(RichText::new("✔ File selected").color(self.theme.success));
            }

            ui.add_space(self.theme.spacing_sm);
            let submit = egui::Button::new(
                RichText::new(submit_label).color(self.theme.text_primary),
            )
            .min_size(Vec2::new(160.0, 36.0))
            .rounding(self.theme.button_rounding)
            .fill(self.theme.primary);

            if ui.add(submit).clicked() {
                self.state.submit(track);
            }

            if let Some(message) = self.state.upload_ui.track(track).error.clone() {
                ui.add_space(self.theme.spacing_sm);
                ui.label(RichText::new(message).size(13.0).color(self.theme.error));
            }
        });
    }
}
