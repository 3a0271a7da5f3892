use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaceError {
    #[error("invalid place URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("could not resolve short link \"{url}\": {reason}")]
    RedirectResolution { url: String, reason: String },

    #[error("unexpected HTTP status {status} from {url}")]
    Fetch { status: u16, url: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("no embedded state blob found in page from {url}")]
    NoEmbeddedData { url: String },

    #[error("no place record could be extracted from {url}")]
    NoRecord { url: String },
}

impl PlaceError {
    /// Stable machine-readable kind used in the caller-facing envelope.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            PlaceError::InvalidUrl { .. } => "invalid_url",
            PlaceError::RedirectResolution { .. } => "redirect_resolution",
            PlaceError::Fetch { .. } => "fetch_failed",
            PlaceError::Network(_) => "network",
            PlaceError::NoEmbeddedData { .. } => "no_embedded_data",
            PlaceError::NoRecord { .. } => "no_record",
        }
    }

    /// `true` when the failure is caused by the caller's input rather than
    /// the upstream site or this service.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PlaceError::InvalidUrl { .. } | PlaceError::RedirectResolution { .. }
        )
    }
}
