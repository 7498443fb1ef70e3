use thiserror::Error;

/// Errors raised while configuring the proxy or talking to SoundCloud.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The client-credentials exchange failed or returned a malformed body.
    #[error("SoundCloud authorization failed: {0}")]
    Authorization(#[source] reqwest::Error),

    /// The track search failed or returned a malformed body.
    #[error("SoundCloud search failed: {0}")]
    Search(#[source] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error originates from the upstream provider rather than
    /// from this process.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Error::Authorization(_) | Error::Search(_))
    }
}
