pub mod board;
pub mod config;
pub mod error;
pub mod imaging;
pub mod services;
pub mod state;

#[cfg(test)]
pub mod mocks;

pub use config::Settings;
pub use error::{ImagingError, PipelineError, UploadError};
pub use state::AppState;
