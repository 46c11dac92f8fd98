//! State machine tests for the select/submit/poll upload flow
//!
//! The worker is replaced by hand-made channels so the tests can observe
//! exactly what the UI state sends and inject outcomes deterministically.

use clipscope::ui::state::{AppState, Route};
use clipscope::upload::types::{
    AnalysisResult, SelectedFile, Track, UploadEvent, UploadRequest, INVALID_MP4_MESSAGE,
    UPLOAD_FAILED_MESSAGE,
};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::path::PathBuf;

fn picked(name: &str) -> SelectedFile {
    SelectedFile::from_path(PathBuf::from(name))
}

/// State wired to test-owned channel ends instead of a real worker
fn harness() -> (AppState, Receiver<UploadRequest>, Sender<UploadEvent>) {
    let (request_tx, request_rx) = bounded(4);
    let (event_tx, event_rx) = bounded(4);
    let mut state = AppState::new();
    state.attach_worker(request_tx, event_rx);
    (state, request_rx, event_tx)
}

fn sample_result() -> AnalysisResult {
    AnalysisResult {
        issues: "A".to_string(),
        summary: "B".to_string(),
        sentiment: "C".to_string(),
    }
}

#[test]
fn video_track_rejects_non_mp4() {
    let (mut state, _requests, _events) = harness();

    state.select_file(Track::Video, picked("talk.mp3"));

    assert!(!state.upload_ui.track(Track::Video).accepted);
    assert_eq!(
        state.upload_ui.track(Track::Video).error.as_deref(),
        Some(INVALID_MP4_MESSAGE)
    );
    assert!(state.pending_file.is_none());
}

#[test]
fn video_track_accepts_mp4_and_clears_prior_error() {
    let (mut state, _requests, _events) = harness();

    state.select_file(Track::Video, picked("bad.mov"));
    assert!(state.upload_ui.track(Track::Video).error.is_some());

    state.select_file(Track::Video, picked("clip.mp4"));

    assert!(state.upload_ui.track(Track::Video).accepted);
    assert!(state.upload_ui.track(Track::Video).error.is_none());
    assert_eq!(
        state.pending_file.as_ref().map(|f| f.name.as_str()),
        Some("clip.mp4")
    );
}

#[test]
fn audio_track_accepts_any_file_type() {
    let (mut state, _requests, _events) = harness();

    // The audio track performs no media type validation
    state.select_file(Track::Audio, picked("notes.txt"));

    assert!(state.upload_ui.track(Track::Audio).accepted);
    assert!(state.upload_ui.track(Track::Audio).error.is_none());
    assert!(state.pending_file.is_some());
}

#[test]
fn selecting_a_file_resets_flags_on_both_tracks() {
    let (mut state, _requests, _events) = harness();

    state.select_file(Track::Video, picked("clip.mp4"));
    assert!(state.upload_ui.track(Track::Video).accepted);

    state.select_file(Track::Audio, picked("voice.wav"));

    assert!(!state.upload_ui.track(Track::Video).accepted);
    assert!(state.upload_ui.track(Track::Audio).accepted);
    assert_eq!(
        state.pending_file.as_ref().map(|f| f.name.as_str()),
        Some("voice.wav")
    );
}

#[test]
fn submit_without_file_sets_error_and_sends_nothing() {
    let (mut state, requests, _events) = harness();

    state.submit(Track::Video);
    assert_eq!(
        state.upload_ui.track(Track::Video).error.as_deref(),
        Some("Please upload a video file.")
    );

    state.submit(Track::Audio);
    assert_eq!(
        state.upload_ui.track(Track::Audio).error.as_deref(),
        Some("Please upload a audio file.")
    );

    assert!(!state.in_flight);
    assert!(requests.try_recv().is_err());
}

#[test]
fn submit_sends_exactly_one_request_and_sets_in_flight() {
    let (mut state, requests, _events) = harness();

    state.select_file(Track::Video, picked("clip.mp4"));
    state.submit(Track::Video);

    assert!(state.in_flight);
    let request = requests.try_recv().expect("one request should be sent");
    assert_eq!(request.track, Track::Video);
    assert_eq!(request.file.media_type, "video/mp4");
    assert!(requests.try_recv().is_err());
}

#[test]
fn completed_event_stores_result_and_routes_to_result_view() {
    let (mut state, requests, events) = harness();

    state.select_file(Track::Video, picked("clip.mp4"));
    state.submit(Track::Video);
    requests.try_recv().unwrap();

    events.send(UploadEvent::Completed(sample_result())).unwrap();
    state.poll_events();

    assert!(!state.in_flight);
    assert_eq!(state.analysis, Some(sample_result()));
    assert_eq!(state.route, Route::Result);

    // The pending file is discarded on success
    assert!(state.pending_file.is_none());
    assert!(!state.upload_ui.track(Track::Video).accepted);
}

#[test]
fn failed_event_sets_error_and_keeps_route_and_result() {
    let (mut state, requests, events) = harness();

    state.select_file(Track::Audio, picked("voice.wav"));
    state.submit(Track::Audio);
    requests.try_recv().unwrap();
    assert!(state.in_flight);

    events
        .send(UploadEvent::Failed {
            track: Track::Audio,
            message: UPLOAD_FAILED_MESSAGE.to_string(),
        })
        .unwrap();
    state.poll_events();

    assert!(!state.in_flight);
    assert_eq!(state.route, Route::Uploader);
    assert!(state.analysis.is_none());
    assert_eq!(
        state.upload_ui.track(Track::Audio).error.as_deref(),
        Some(UPLOAD_FAILED_MESSAGE)
    );
}

#[test]
fn failed_submission_can_be_retried_manually() {
    let (mut state, requests, events) = harness();

    state.select_file(Track::Video, picked("clip.mp4"));
    state.submit(Track::Video);
    requests.try_recv().unwrap();
    events
        .send(UploadEvent::Failed {
            track: Track::Video,
            message: UPLOAD_FAILED_MESSAGE.to_string(),
        })
        .unwrap();
    state.poll_events();

    // The pending file survives a failure, so Submit works again as-is
    state.submit(Track::Video);
    assert!(state.in_flight);
    assert!(requests.try_recv().is_ok());
}

#[test]
fn back_navigation_returns_to_uploader() {
    let (mut state, _requests, _events) = harness();

    state.navigate(Route::Result);
    assert_eq!(state.route, Route::Result);

    // Reaching the result view without an upload shows the placeholder
    assert!(state.analysis.is_none());

    state.navigate(Route::Uploader);
    assert_eq!(state.route, Route::Uploader);
}
