use anyhow::Result;
use clipscope::config::AppConfig;
use clipscope::ui::ClipscopeApp;
use clipscope::upload::{AnalysisClient, UploadWorker};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clipscope=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    config.validate()?;
    info!(base_url = %config.base_url, "Starting Clipscope media analysis client");

    let client = AnalysisClient::new(&config);
    let worker = UploadWorker::spawn(client);
    let (upload_tx, upload_rx) = worker.channels();

    let options = eframe::NativeOptions {
        // Phone-sized window; the shell falls back to a static message when
        // the user resizes it past the mobile breakpoint.
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([390.0, 844.0])
            .with_title("Video Analyzer"),
        ..Default::default()
    };

    eframe::run_native(
        "Video Analyzer",
        options,
        Box::new(move |cc| Ok(Box::new(ClipscopeApp::new(cc, upload_tx, upload_rx)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))?;

    Ok(())
}
