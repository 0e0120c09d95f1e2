use thiserror::Error;

/// Library error type for carousel operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The widget was constructed with an empty image sequence.
    #[error("carousel requires at least one image")]
    EmptyImages,

    /// A jump target outside the slide range was requested.
    #[error("slide index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    /// The configured image directory is invalid or unreadable.
    #[error("invalid image directory: {0}")]
    BadDir(String),

    /// The widget's event loop has been torn down.
    #[error("carousel controller is no longer running")]
    ControllerClosed,
}
