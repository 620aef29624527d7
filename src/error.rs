use thiserror::Error;

use crate::providers::Provider;

/// Errors raised while resolving thumbnails.
///
/// URL detection and embed rendering never fail; an unmatched URL is a
/// `None`, not an error.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// A network-backed thumbnail was requested through the callback API
    /// without a completion callback.
    #[error("must pass a completion callback to look up {0} thumbnails")]
    MissingCallback(Provider),
    #[error("unexpected response from {provider}: {status}")]
    UnexpectedStatus {
        provider: Provider,
        status: reqwest::StatusCode,
    },
    #[error("no image found for {provider}/{id}")]
    MissingImage { provider: Provider, id: String },
    #[error("thumbnails are not available for {0}")]
    ThumbnailUnsupported(Provider),
    #[error("no tokio runtime available to deliver the completion callback")]
    NoRuntime,
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for thumbnail operations.
pub type Result<T> = std::result::Result<T, EmbedError>;
