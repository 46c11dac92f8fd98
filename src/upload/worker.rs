//! Background upload worker
//!
//! Runs the single network call off the UI thread. The UI sends an
//! `UploadRequest` and polls for the matching `UploadEvent` each frame;
//! the worker emits exactly one event per request, success or failure,
//! which is what keeps the in-flight flag from sticking.

use crate::upload::client::AnalysisClient;
use crate::upload::types::{UploadEvent, UploadRequest};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::thread;
use tracing::{debug, info, warn};

const CHANNEL_CAPACITY: usize = 4;

/// Handle to the worker thread's channels
pub struct UploadWorker {
    request_tx: Sender<UploadRequest>,
    event_rx: Receiver<UploadEvent>,
}

impl UploadWorker {
    /// Spawn the worker thread. It runs until every request sender is dropped.
    pub fn spawn(client: AnalysisClient) -> Self {
        let (request_tx, request_rx) = bounded::<UploadRequest>(CHANNEL_CAPACITY);
        let (event_tx, event_rx) = bounded::<UploadEvent>(CHANNEL_CAPACITY);

        thread::spawn(move || {
            info!("upload worker started");
            for request in request_rx.iter() {
                debug!(track = request.track.label(), name = %request.file.name, "handling upload request");
                let event = match client.upload(&request.file) {
                    Ok(result) => UploadEvent::Completed(result),
                    Err(e) => {
                        warn!(error = %e, "upload failed");
                        UploadEvent::Failed {
                            track: request.track,
                            message: e.user_message(),
                        }
                    }
                };
                if event_tx.send(event).is_err() {
                    debug!("event receiver dropped, stopping worker");
                    break;
                }
            }
            info!("upload worker stopped");
        });

        Self {
            request_tx,
            event_rx,
        }
    }

    /// Channel ends for the UI: request sender and event receiver
    pub fn channels(&self) -> (Sender<UploadRequest>, Receiver<UploadEvent>) {
        (self.request_tx.clone(), self.event_rx.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::upload::types::{SelectedFile, Track, UPLOAD_FAILED_MESSAGE};
    use std::io::Write;
    use std::net::TcpListener;
    use std::path::PathBuf;
    use std::time::Duration;

    /// Pick a local port with nothing listening on it
    fn refused_base_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{port}")
    }

    #[test]
    fn test_unreadable_file_yields_failed_event() {
        let config = AppConfig::default().with_base_url(refused_base_url());
        let worker = UploadWorker::spawn(AnalysisClient::new(&config));
        let (tx, rx) = worker.channels();

        let file = SelectedFile::from_path(PathBuf::from("/nonexistent/clip.mp4"));
        tx.send(UploadRequest {
            track: Track::Video,
            file,
        })
        .unwrap();

        match rx.recv_timeout(Duration::from_secs(10)).unwrap() {
            UploadEvent::Failed { track, message } => {
                assert_eq!(track, Track::Video);
                assert_eq!(message, UPLOAD_FAILED_MESSAGE);
            }
            other => panic!("expected Failed event, got {other:?}"),
        }
    }

    #[test]
    fn test_unreachable_backend_yields_failed_event() {
        let config = AppConfig::default().with_base_url(refused_base_url());
        let worker = UploadWorker::spawn(AnalysisClient::new(&config));
        let (tx, rx) = worker.channels();

        let mut tmp = tempfile::Builder::new().suffix(".mp4").tempfile().unwrap();
        tmp.write_all(b"not really mp4 bytes").unwrap();
        let file = SelectedFile::from_path(tmp.path().to_path_buf());
        assert_eq!(file.media_type, "video/mp4");

        tx.send(UploadRequest {
            track: Track::Audio,
            file,
        })
        .unwrap();

        match rx.recv_timeout(Duration::from_secs(30)).unwrap() {
            UploadEvent::Failed { track, message } => {
                assert_eq!(track, Track::Audio);
                assert_eq!(message, UPLOAD_FAILED_MESSAGE);
            }
            other => panic!("expected Failed event, got {other:?}"),
        }
    }
}
