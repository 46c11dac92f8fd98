//! Application state management
//!
//! Central state for the client: the current route, the viewport class,
//! per-track upload flags, the pending file, and the stored analysis.
//! All mutation goes through the methods here; components receive the
//! state by reference each frame.

use crate::upload::types::{
    missing_file_message, AnalysisResult, SelectedFile, Track, UploadEvent, UploadRequest,
    INVALID_MP4_MESSAGE, UPLOAD_FAILED_MESSAGE, VIDEO_MP4,
};
use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, error, info, warn};

/// Width at or below which the viewport counts as mobile, in logical pixels
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Derived classification of the current window width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Width ≤ 768, the routed application is shown
    Mobile,
    /// Anything wider, a static unsupported-device message is shown
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: f32) -> Self {
        if width <= MOBILE_BREAKPOINT {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }
}

/// The two in-process routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Landing view with the two upload tracks
    Uploader,
    /// View showing the stored analysis
    Result,
}

/// Acceptance flag and inline error for one track
#[derive(Debug, Clone, Default)]
pub struct TrackUiState {
    /// Whether the last selection for this track was accepted
    pub accepted: bool,
    /// Inline error message, if any
    pub error: Option<String>,
}

/// Per-track UI flags for the uploader view
#[derive(Debug, Clone, Default)]
pub struct UploadUiState {
    pub video: TrackUiState,
    pub audio: TrackUiState,
}

impl UploadUiState {
    pub fn track(&self, track: Track) -> &TrackUiState {
        match track {
            Track::Video => &self.video,
            Track::Audio => &self.audio,
        }
    }

    pub fn track_mut(&mut self, track: Track) -> &mut TrackUiState {
        match track {
            Track::Video => &mut self.video,
            Track::Audio => &mut self.audio,
        }
    }

    /// Clear errors and acceptance flags for both tracks
    pub fn clear(&mut self) {
        self.video = TrackUiState::default();
        self.audio = TrackUiState::default();
    }

    pub fn set_error(&mut self, track: Track, message: impl Into<String>) {
        self.track_mut(track).error = Some(message.into());
    }

    pub fn set_accepted(&mut self, track: Track) {
        self.track_mut(track).accepted = true;
    }
}

/// Central application state
pub struct AppState {
    /// Currently rendered route
    pub route: Route,

    /// Viewport classification, recomputed every frame
    pub viewport: ViewportClass,

    /// The single pending submission candidate, shared by both tracks
    pub pending_file: Option<SelectedFile>,

    /// Per-track acceptance flags and errors
    pub upload_ui: UploadUiState,

    /// Whether a submission is in flight (gates the loading overlay)
    pub in_flight: bool,

    /// Analysis stored by the last successful upload
    pub analysis: Option<AnalysisResult>,

    /// Channel to send upload requests to the worker
    pub upload_tx: Option<Sender<UploadRequest>>,

    /// Channel to receive upload outcomes from the worker
    pub upload_rx: Option<Receiver<UploadEvent>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new application state with no worker attached
    pub fn new() -> Self {
        Self {
            route: Route::Uploader,
            viewport: ViewportClass::Mobile,
            pending_file: None,
            upload_ui: UploadUiState::default(),
            in_flight: false,
            analysis: None,
            upload_tx: None,
            upload_rx: None,
        }
    }

    /// Attach the upload worker's channel ends
    pub fn attach_worker(&mut self, tx: Sender<UploadRequest>, rx: Receiver<UploadEvent>) {
        self.upload_tx = Some(tx);
        self.upload_rx = Some(rx);
    }

    /// Reclassify the viewport from the current window width
    pub fn update_viewport(&mut self, width: f32) {
        self.viewport = ViewportClass::from_width(width);
    }

    /// Switch to another route
    pub fn navigate(&mut self, route: Route) {
        self.route = route;
    }

    /// Handle a file picked for `track`.
    ///
    /// Clears all prior flags and errors for both tracks. The video track
    /// only accepts `video/mp4`; a rejected selection leaves any earlier
    /// pending file in place. The audio track accepts anything.
    pub fn select_file(&mut self, track: Track, file: SelectedFile) {
        self.upload_ui.clear();

        if track == Track::Video && file.media_type != VIDEO_MP4 {
            debug!(media_type = %file.media_type, "rejected non-MP4 selection for video track");
            self.upload_ui.set_error(Track::Video, INVALID_MP4_MESSAGE);
            return;
        }

        debug!(track = track.label(), name = %file.name, "file accepted");
        self.upload_ui.set_accepted(track);
        self.pending_file = Some(file);
    }

    /// Submit the pending file on behalf of `track`.
    ///
    /// With no pending file this only sets a track-scoped error. Otherwise
    /// the file is handed to the worker and the in-flight flag goes up
    /// until the matching event comes back through `poll_events`.
    pub fn submit(&mut self, track: Track) {
        let Some(file) = self.pending_file.clone() else {
            self.upload_ui.set_error(track, missing_file_message(track));
            return;
        };

        let Some(tx) = self.upload_tx.clone() else {
            warn!("submit with no upload worker attached");
            return;
        };

        info!(track = track.label(), name = %file.name, "submitting file");
        self.in_flight = true;

        if tx.send(UploadRequest { track, file }).is_err() {
            error!("upload worker is gone, cannot submit");
            self.in_flight = false;
            self.upload_ui.set_error(track, UPLOAD_FAILED_MESSAGE);
        }
    }

    /// Drain upload outcomes from the worker. Called once per frame.
    pub fn poll_events(&mut self) {
        let events: Vec<UploadEvent> = match &self.upload_rx {
            Some(rx) => rx.try_iter().collect(),
            None => return,
        };

        for event in events {
            match event {
                UploadEvent::Completed(result) => {
                    info!("analysis received, showing result view");
                    self.in_flight = false;
                    self.analysis = Some(result);
                    self.pending_file = None;
                    self.upload_ui.clear();
                    self.navigate(Route::Result);
                }
                UploadEvent::Failed { track, message } => {
                    warn!(track = track.label(), %message, "upload failed");
                    self.in_flight = false;
                    self.upload_ui.set_error(track, message);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_class_breakpoint() {
        assert_eq!(ViewportClass::from_width(320.0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(768.5), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(1920.0), ViewportClass::Desktop);
    }

    #[test]
    fn test_update_viewport_toggles_without_reload() {
        let mut state = AppState::new();
        state.update_viewport(1024.0);
        assert_eq!(state.viewport, ViewportClass::Desktop);
        state.update_viewport(390.0);
        assert_eq!(state.viewport, ViewportClass::Mobile);
    }

    #[test]
    fn test_upload_ui_clear_resets_both_tracks() {
        let mut ui = UploadUiState::default();
        ui.set_accepted(Track::Video);
        ui.set_error(Track::Audio, "oops");
        ui.clear();
        assert!(!ui.track(Track::Video).accepted);
        assert!(ui.track(Track::Audio).error.is_none());
    }
}
