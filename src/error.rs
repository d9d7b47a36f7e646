use thiserror::Error;

/// Failures inside the media coordination layer.
///
/// None of these are fatal to the page. Callers log them and carry on with
/// whatever state they already had.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MediaError {
    #[error("playback was rejected: {0}")]
    PlaybackRejected(String),
    #[error("media handle `{0}` no longer has a backing element")]
    StaleHandle(String),
    #[error("element `{0}` is not available")]
    ElementUnavailable(String),
    #[error("malformed embed message: {0}")]
    MalformedMessage(String),
    #[error("message from unexpected origin `{0}`")]
    UnexpectedOrigin(String),
}

/// Problems found while loading `site.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("default track `{0}` is not defined")]
    MissingDefaultTrack(String),
    #[error("route `{route}` points at unknown track `{track}`")]
    UnknownTrack { route: String, track: String },
}
