pub mod client;
pub mod types;
pub mod worker;

pub use client::AnalysisClient;
pub use types::{AnalysisResult, SelectedFile, Track, UploadEvent, UploadRequest};
pub use worker::UploadWorker;
