pub mod overlay;
pub mod result_view;
pub mod uploader;

pub use overlay::LoadingOverlay;
pub use result_view::ResultView;
pub use uploader::Uploader;
