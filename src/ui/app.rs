//! Main application struct and eframe integration
//!
//! The responsive shell: classifies the viewport every frame and either
//! renders the routed application or a static unsupported-device message.

use crate::ui::components::{LoadingOverlay, ResultView, Uploader};
use crate::ui::state::{AppState, Route, ViewportClass};
use crate::ui::theme::Theme;
use crate::upload::types::{UploadEvent, UploadRequest};
use crossbeam_channel::{Receiver, Sender};
use egui::{self, CentralPanel, RichText};

/// Main client application
pub struct ClipscopeApp {
    /// Application state
    state: AppState,
    /// Visual theme
    theme: Theme,
}

impl ClipscopeApp {
    /// Create the application and wire it to the upload worker
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        upload_tx: Sender<UploadRequest>,
        upload_rx: Receiver<UploadEvent>,
    ) -> Self {
        let theme = Theme::dark();
        theme.apply(&cc.egui_ctx);

        let mut state = AppState::new();
        state.attach_worker(upload_tx, upload_rx);

        Self { state, theme }
    }

    /// Static message shown when the window is wider than the mobile breakpoint
    fn show_unsupported(&self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing_lg),
            )
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new("This application is available only on mobile devices.")
                            .size(22.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                });
            });
    }

    /// Render the component for the current route
    fn show_route(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| match self.state.route {
                Route::Uploader => Uploader::new(&mut self.state, &self.theme).show(ui),
                Route::Result => ResultView::new(&mut self.state, &self.theme).show(ui),
            });
    }
}

impl eframe::App for ClipscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Reclassify the viewport; immediate mode picks up resizes for free
        self.state.update_viewport(ctx.screen_rect().width());

        if self.state.viewport != ViewportClass::Mobile {
            self.show_unsupported(ctx);
            return;
        }

        // Drain upload outcomes from the worker
        self.state.poll_events();

        self.show_route(ctx);

        if self.state.in_flight {
            LoadingOverlay::new(&self.theme).show(ctx);
            // Keep repainting so the worker's event is picked up promptly
            ctx.request_repaint();
        }
    }
}
