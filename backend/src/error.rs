use actix_web::http::StatusCode;
use qrcode::types::QrError;
use thiserror::Error;

/// Failures of the QR encoder, the compositor and the PNG writer.
#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("QR encoding error: {0}")]
    Qr(#[from] QrError),

    #[error("Composition error: {0}")]
    Compose(String),

    #[error("PNG encoding error: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Failures of a single upload attempt against the board file endpoint.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Unreadable response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("GraphQL errors: {0}")]
    Rejected(String),
}

/// Terminal outcome of a webhook delivery that did not succeed.
///
/// The `Display` text is what ends up in the `message` field of the response.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid JSON payload: {0}")]
    InvalidPayload(String),

    #[error("No item ID found in webhook payload")]
    MissingItemId,

    #[error("No URL found in column {0}")]
    UrlNotFound(&'static str),

    #[error("Failed to generate QR code")]
    QrGeneration(#[source] ImagingError),

    #[error("Failed to create composite image")]
    Composition(#[source] ImagingError),

    #[error("Failed to upload to Monday.com: {0}")]
    Upload(#[from] UploadError),

    #[error("Error processing webhook: {0}")]
    Internal(String),
}

impl PipelineError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PipelineError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
