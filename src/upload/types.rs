//! Shared types for the upload flow
//!
//! These cross the boundary between the UI state machine and the
//! background worker that talks to the backend.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Canonical media type required for the video track
pub const VIDEO_MP4: &str = "video/mp4";

/// Error shown when a non-MP4 file is picked for the video track
pub const INVALID_MP4_MESSAGE: &str = "Please upload a valid MP4 file.";

/// Error shown when a submission fails for any transport or IO reason
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload the file. Please try again.";

/// Error shown when Submit is pressed with no pending file
pub fn missing_file_message(track: Track) -> String {
    format!("Please upload a {} file.", track.label())
}

/// One of the two parallel upload slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Video,
    Audio,
}

impl Track {
    /// Lowercase label used in user-facing messages
    pub fn label(&self) -> &'static str {
        match self {
            Track::Video => "video",
            Track::Audio => "audio",
        }
    }
}

/// The file currently picked by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Location of the file on disk
    pub path: PathBuf,
    /// Original file name, sent to the backend
    pub name: String,
    /// Declared media type, derived from the file extension
    pub media_type: String,
}

impl SelectedFile {
    /// Build a SelectedFile from a picked path
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let media_type = media_type_for_path(&path).to_string();
        Self {
            path,
            name,
            media_type,
        }
    }
}

/// Map a file extension to the media type declared to the backend
pub fn media_type_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("mp4") => VIDEO_MP4,
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        _ => "application/octet-stream",
    }
}

/// The three-field analysis returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub issues: String,
    pub summary: String,
    pub sentiment: String,
}

/// A submission handed to the upload worker
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Track the submission was triggered from, used to scope errors
    pub track: Track,
    /// The pending file to post
    pub file: SelectedFile,
}

/// Outcome of one submission, reported back to the UI
#[derive(Debug, Clone)]
pub enum UploadEvent {
    /// The backend accepted the file and returned an analysis
    Completed(AnalysisResult),

    /// The submission failed; `message` is ready for inline display
    Failed { track: Track, message: String },
}
